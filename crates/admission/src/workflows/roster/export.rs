use super::RosterError;
use crate::workflows::admission::Applicant;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Roll")]
    roll: u32,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "JEE_Rank")]
    rank: u32,
    #[serde(rename = "12th_Percentage")]
    percentage_12th: u8,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Gender")]
    gender: &'static str,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Admitted")]
    admitted: &'static str,
    #[serde(rename = "Branch")]
    branch: &'a str,
    #[serde(rename = "Hostel")]
    hostel: &'static str,
    #[serde(rename = "Mess_Plan")]
    mess_plan: &'static str,
}

impl<'a> ExportRow<'a> {
    fn from_applicant(applicant: &'a Applicant) -> Self {
        Self {
            roll: applicant.roll().0,
            name: applicant.name(),
            rank: applicant.rank(),
            percentage_12th: applicant.percentage_12th(),
            age: applicant.age(),
            gender: applicant.gender().label(),
            category: applicant.category().label(),
            admitted: yes_no(applicant.is_admitted()),
            branch: applicant.assigned_branch().unwrap_or("NA"),
            hostel: yes_no(applicant.has_hostel()),
            mess_plan: applicant.mess_plan().map_or("No", |plan| plan.label()),
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Writes one row per applicant, in slice order, after a header row.
pub fn export_results<W: Write>(writer: W, applicants: &[Applicant]) -> Result<usize, RosterError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for applicant in applicants {
        csv_writer.serialize(ExportRow::from_applicant(applicant))?;
    }
    if applicants.is_empty() {
        csv_writer.write_record(HEADER)?;
    }
    csv_writer.flush()?;
    Ok(applicants.len())
}

const HEADER: [&str; 11] = [
    "Roll",
    "Name",
    "JEE_Rank",
    "12th_Percentage",
    "Age",
    "Gender",
    "Category",
    "Admitted",
    "Branch",
    "Hostel",
    "Mess_Plan",
];
