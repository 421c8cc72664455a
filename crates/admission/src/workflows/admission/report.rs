use super::applicant::{Applicant, EligibilityCriteria, IneligibilityReason};
use super::domain::{Category, Gender, MessPlan, RollNumber};
use super::hostel::HostelPool;
use super::institution::Institution;
use super::ledger::BranchLedger;
use super::mess::MessPool;
use super::office::AdmissionOffice;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AdmittedStudentView {
    pub roll: RollNumber,
    pub name: String,
    pub rank: u32,
    pub branch: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReservedSeatsEntry {
    pub category: Category,
    pub remaining: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchStatusView {
    pub name: String,
    pub general_remaining: u32,
    pub reserved_remaining: Vec<ReservedSeatsEntry>,
    pub opening_rank: u32,
    pub closing_rank: u32,
}

impl BranchStatusView {
    fn from_ledger(ledger: &BranchLedger) -> Self {
        let reserved_remaining = ledger
            .reserved_table()
            .iter()
            .filter(|(_, remaining)| **remaining > 0)
            .map(|(category, remaining)| ReservedSeatsEntry {
                category,
                remaining: *remaining,
            })
            .collect();

        Self {
            name: ledger.name().to_string(),
            general_remaining: ledger.general_remaining(),
            reserved_remaining,
            opening_rank: ledger.window().opening(),
            closing_rank: ledger.window().closing(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstitutionView {
    pub name: String,
    pub opening_rank: u32,
    pub closing_rank: u32,
    pub remaining_seats: u32,
    pub admitted: Vec<AdmittedStudentView>,
    pub branches: Vec<BranchStatusView>,
}

impl InstitutionView {
    fn build(institution: &Institution, applicants: &[Applicant]) -> Self {
        let admitted = institution
            .admitted_rolls()
            .iter()
            .filter_map(|roll| applicants.iter().find(|applicant| applicant.roll() == *roll))
            .map(|applicant| AdmittedStudentView {
                roll: applicant.roll(),
                name: applicant.name().to_string(),
                rank: applicant.rank(),
                branch: applicant.assigned_branch().unwrap_or("Unknown").to_string(),
            })
            .collect();

        Self {
            name: institution.name().to_string(),
            opening_rank: institution.window().opening(),
            closing_rank: institution.window().closing(),
            remaining_seats: institution.remaining_seats(),
            admitted,
            branches: institution
                .branches()
                .map(BranchStatusView::from_ledger)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PoolStatusView {
    pub name: String,
    pub capacity: u32,
    pub allocated: u32,
    pub available: u32,
}

impl PoolStatusView {
    fn from_hostel(pool: &HostelPool) -> Self {
        Self {
            name: pool.name().to_string(),
            capacity: pool.capacity(),
            allocated: pool.allocated(),
            available: pool.available(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanPriceEntry {
    pub plan: MessPlan,
    pub price: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessStatusView {
    #[serde(flatten)]
    pub pool: PoolStatusView,
    pub plan_prices: Vec<PlanPriceEntry>,
}

impl MessStatusView {
    fn from_pool(mess: &MessPool) -> Self {
        Self {
            pool: PoolStatusView {
                name: mess.name().to_string(),
                capacity: mess.capacity(),
                allocated: mess.allocated(),
                available: mess.available(),
            },
            plan_prices: mess
                .plan_prices()
                .map(|(plan, price)| PlanPriceEntry { plan, price })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    NotEligible,
    NotAdmitted,
    Admitted,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotEligible => "NOT ELIGIBLE",
            Self::NotAdmitted => "Not Admitted",
            Self::Admitted => "Admitted",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityEntry {
    pub roll: RollNumber,
    pub name: String,
    pub rank: u32,
    pub percentage_12th: u8,
    pub age: u32,
    pub gender: Gender,
    pub category: Category,
    pub status: EligibilityStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<IneligibilityReason>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentDetailView {
    pub roll: RollNumber,
    pub name: String,
    pub rank: u32,
    pub percentage_12th: u8,
    pub age: u32,
    pub gender: Gender,
    pub category: Category,
    pub contact: String,
    pub income: u64,
    pub eligible: bool,
    pub preferences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub hostel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mess_plan: Option<MessPlan>,
}

/// Eligibility rows in slice order. Usable before any processing pass, in
/// which case every eligible applicant reads as not admitted.
pub fn eligibility_entries(
    applicants: &[Applicant],
    criteria: &EligibilityCriteria,
) -> Vec<EligibilityEntry> {
    applicants
        .iter()
        .map(|applicant| {
            let reasons = applicant.ineligibility_reasons(criteria);
            let status = if !reasons.is_empty() {
                EligibilityStatus::NotEligible
            } else if applicant.is_admitted() {
                EligibilityStatus::Admitted
            } else {
                EligibilityStatus::NotAdmitted
            };
            EligibilityEntry {
                roll: applicant.roll(),
                name: applicant.name().to_string(),
                rank: applicant.rank(),
                percentage_12th: applicant.percentage_12th(),
                age: applicant.age(),
                gender: applicant.gender(),
                category: applicant.category(),
                status,
                reasons,
            }
        })
        .collect()
}

/// Read-only snapshot of an office and its applicants after a pass.
#[derive(Debug, Clone, Serialize)]
pub struct AdmissionReport {
    pub generated_at: DateTime<Utc>,
    pub total_admitted: usize,
    pub institutions: Vec<InstitutionView>,
    pub hostels: Vec<PoolStatusView>,
    pub mess: MessStatusView,
    pub eligibility: Vec<EligibilityEntry>,
    pub students: Vec<StudentDetailView>,
}

impl AdmissionReport {
    pub fn build(office: &AdmissionOffice, applicants: &[Applicant]) -> Self {
        let criteria = office.criteria();

        let students = applicants
            .iter()
            .map(|applicant| StudentDetailView {
                roll: applicant.roll(),
                name: applicant.name().to_string(),
                rank: applicant.rank(),
                percentage_12th: applicant.percentage_12th(),
                age: applicant.age(),
                gender: applicant.gender(),
                category: applicant.category(),
                contact: applicant.contact().to_string(),
                income: applicant.income(),
                eligible: applicant.is_eligible(criteria),
                preferences: applicant.preferences().to_vec(),
                branch: applicant.assigned_branch().map(str::to_string),
                hostel: applicant.has_hostel(),
                mess_plan: applicant.mess_plan(),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            total_admitted: office
                .institutions()
                .iter()
                .map(Institution::admitted_count)
                .sum(),
            institutions: office
                .institutions()
                .iter()
                .map(|institution| InstitutionView::build(institution, applicants))
                .collect(),
            hostels: office
                .hostels()
                .into_iter()
                .map(PoolStatusView::from_hostel)
                .collect(),
            mess: MessStatusView::from_pool(office.mess()),
            eligibility: eligibility_entries(applicants, criteria),
            students,
        }
    }
}
