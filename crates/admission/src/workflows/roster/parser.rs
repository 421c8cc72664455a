use super::normalizer::{clean_text, split_preferences};
use super::RosterError;
use crate::workflows::admission::ApplicantDraft;
use serde::{Deserialize, Deserializer};
use std::io::Read;

const DEFAULT_INCOME: i64 = 500_000;
const DEFAULT_RANK: i64 = 5_000;
const DEFAULT_PREFERENCE: &str = "Computer Science";
const DEFAULT_CONTACT: &str = "0000000000";
const DEFAULT_PERCENTAGE: i64 = 75;
const DEFAULT_AGE: i64 = 18;
const DEFAULT_GENDER: &str = "Male";
const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    income: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rank: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    preferences: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    contact: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    percentage: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
}

impl RosterRow {
    fn into_draft(self, line: u64, ordinal: usize) -> Result<ApplicantDraft, RosterError> {
        let preferences = self
            .preferences
            .as_deref()
            .map(split_preferences)
            .filter(|preferences| !preferences.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_PREFERENCE.to_string()]);

        Ok(ApplicantDraft {
            name: self
                .name
                .as_deref()
                .map(clean_text)
                .unwrap_or_else(|| format!("Student{ordinal}")),
            income: parse_number(line, "income", self.income.as_deref(), DEFAULT_INCOME)?,
            rank: parse_number(line, "rank", self.rank.as_deref(), DEFAULT_RANK)?,
            preferences,
            contact: self
                .contact
                .unwrap_or_else(|| DEFAULT_CONTACT.to_string()),
            percentage_12th: parse_number(
                line,
                "percentage",
                self.percentage.as_deref(),
                DEFAULT_PERCENTAGE,
            )?,
            age: parse_number(line, "age", self.age.as_deref(), DEFAULT_AGE)?,
            gender: self.gender.unwrap_or_else(|| DEFAULT_GENDER.to_string()),
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        })
    }
}

pub(crate) fn parse_drafts<R: Read>(reader: R) -> Result<Vec<ApplicantDraft>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut drafts = Vec::new();

    // Quoted cells may span lines, so the record position is the only
    // reliable source for the line number.
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(index as u64 + 2, |position| position.line());
        let row: RosterRow = record.deserialize(Some(&headers))?;
        drafts.push(row.into_draft(line, index + 1)?);
    }

    Ok(drafts)
}

fn parse_number(
    line: u64,
    column: &'static str,
    raw: Option<&str>,
    default: i64,
) -> Result<i64, RosterError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .replace('_', "")
            .parse::<i64>()
            .map_err(|_| RosterError::InvalidNumber {
                line,
                column,
                value: value.to_string(),
            }),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
