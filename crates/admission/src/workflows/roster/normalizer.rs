pub(crate) fn clean_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a comma or semicolon separated preference list, dropping blanks.
pub(crate) fn split_preferences(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(clean_text)
        .filter(|preference| !preference.is_empty())
        .collect()
}
