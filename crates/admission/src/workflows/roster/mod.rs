//! Applicant roster import and admission result export.

mod export;
mod normalizer;
mod parser;

use crate::workflows::admission::{Applicant, RollSequence};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use export::export_results;

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to access roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: column '{column}' must be a whole number, got '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Reads applicants from CSV, handing each one the next roll number.
pub fn import_applicants<R: Read>(
    reader: R,
    rolls: &mut RollSequence,
) -> Result<Vec<Applicant>, RosterError> {
    let drafts = parser::parse_drafts(reader)?;
    Ok(drafts
        .into_iter()
        .map(|draft| Applicant::new(draft, rolls))
        .collect())
}

pub fn import_applicants_from_path<P: AsRef<Path>>(
    path: P,
    rolls: &mut RollSequence,
) -> Result<Vec<Applicant>, RosterError> {
    let file = File::open(path)?;
    import_applicants(file, rolls)
}

pub fn export_results_to_path<P: AsRef<Path>>(
    path: P,
    applicants: &[Applicant],
) -> Result<usize, RosterError> {
    let file = File::create(path)?;
    export_results(file, applicants)
}
