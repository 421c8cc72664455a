//! Rank-ordered admission engine.
//!
//! Applicants are placed greedily: the office sorts them by rank, checks
//! eligibility, then offers each one to institutions in registration order.
//! An institution walks the applicant's branch preferences and the first
//! branch ledger that grants a seat wins. Admitted applicants then cascade
//! into the gender-matched hostel pool and, once housed, into the mess.

mod applicant;
mod blueprint;
pub mod domain;
mod hostel;
mod institution;
mod ledger;
mod mess;
mod office;
pub mod report;

#[cfg(test)]
mod tests;

pub use applicant::{
    Applicant, ApplicantDraft, EligibilityCriteria, IneligibilityReason, RollSequence,
};
pub use blueprint::{BlueprintError, BranchBlueprint, CampusBlueprint, InstitutionBlueprint};
pub use domain::{Category, CategoryTable, Gender, MessPlan, RankWindow, RollNumber};
pub use hostel::HostelPool;
pub use institution::{AdmissionRefusal, Institution, Placement};
pub use ledger::{BranchLedger, SeatQuota, SeatRefusal};
pub use mess::{MessPlanPolicy, MessPool, MessRefusal};
pub use office::{AdmissionOffice, ApplicantOutcome, ProcessedApplicant, ProcessingSummary};
pub use report::AdmissionReport;

/// Raised while assembling institutions and the office, before any pass runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("branch '{branch}' already registered at {institution}")]
    DuplicateBranch { institution: String, branch: String },
    #[error("institution '{0}' already registered")]
    DuplicateInstitution(String),
    #[error("seat count of branch '{branch}' at {institution} does not fit in u32")]
    SeatOverflow { institution: String, branch: String },
}
