use super::domain::{Category, Gender, MessPlan, RollNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hands out roll numbers starting at 1. Each applicant built through
/// [`Applicant::new`] consumes exactly one number.
#[derive(Debug, Clone)]
pub struct RollSequence {
    next: u32,
}

impl RollSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn peek(&self) -> RollNumber {
        RollNumber(self.next)
    }

    pub fn issue(&mut self) -> RollNumber {
        let roll = RollNumber(self.next);
        self.next = self.next.saturating_add(1);
        roll
    }
}

impl Default for RollSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw, unvalidated applicant fields as collected by an intake surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantDraft {
    pub name: String,
    pub income: i64,
    pub rank: i64,
    pub preferences: Vec<String>,
    pub contact: String,
    pub percentage_12th: i64,
    pub age: i64,
    pub gender: String,
    pub category: String,
}

/// Thresholds used by [`Applicant::is_eligible`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub min_percentage: u8,
    pub min_age: u32,
}

impl Default for EligibilityCriteria {
    fn default() -> Self {
        Self {
            min_percentage: 60,
            min_age: 17,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum IneligibilityReason {
    PercentageBelow { minimum: u8 },
    AgeBelow { minimum: u32 },
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PercentageBelow { minimum } => write!(f, "12th% < {minimum}"),
            Self::AgeBelow { minimum } => write!(f, "Age < {minimum}"),
        }
    }
}

/// Normalized applicant with the mutable admission result attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applicant {
    roll: RollNumber,
    name: String,
    contact: String,
    income: u64,
    rank: u32,
    percentage_12th: u8,
    age: u32,
    preferences: Vec<String>,
    gender: Gender,
    category: Category,
    assigned_branch: Option<String>,
    hostel_allocated: bool,
    mess_plan: Option<MessPlan>,
}

impl Applicant {
    pub fn new(draft: ApplicantDraft, rolls: &mut RollSequence) -> Self {
        let ApplicantDraft {
            name,
            income,
            rank,
            preferences,
            contact,
            percentage_12th,
            age,
            gender,
            category,
        } = draft;

        Self {
            roll: rolls.issue(),
            name,
            contact,
            income: u64::try_from(income).unwrap_or(0),
            rank: u32::try_from(rank.max(1)).unwrap_or(u32::MAX),
            percentage_12th: percentage_12th.clamp(0, 100) as u8,
            age: u32::try_from(age.max(0)).unwrap_or(u32::MAX),
            preferences,
            gender: Gender::normalize(&gender),
            category: Category::normalize(&category),
            assigned_branch: None,
            hostel_allocated: false,
            mess_plan: None,
        }
    }

    pub fn roll(&self) -> RollNumber {
        self.roll
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn income(&self) -> u64 {
        self.income
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn percentage_12th(&self) -> u8 {
        self.percentage_12th
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn preferences(&self) -> &[String] {
        &self.preferences
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_eligible(&self, criteria: &EligibilityCriteria) -> bool {
        self.percentage_12th >= criteria.min_percentage && self.age >= criteria.min_age
    }

    /// Every threshold the applicant misses, in a stable order.
    pub fn ineligibility_reasons(&self, criteria: &EligibilityCriteria) -> Vec<IneligibilityReason> {
        let mut reasons = Vec::new();
        if self.percentage_12th < criteria.min_percentage {
            reasons.push(IneligibilityReason::PercentageBelow {
                minimum: criteria.min_percentage,
            });
        }
        if self.age < criteria.min_age {
            reasons.push(IneligibilityReason::AgeBelow {
                minimum: criteria.min_age,
            });
        }
        reasons
    }

    pub fn scholarship_eligible(&self, income_threshold: u64, category: Category) -> bool {
        self.income <= income_threshold || self.category == category
    }

    pub fn is_admitted(&self) -> bool {
        self.assigned_branch.is_some()
    }

    pub fn assigned_branch(&self) -> Option<&str> {
        self.assigned_branch.as_deref()
    }

    pub fn has_hostel(&self) -> bool {
        self.hostel_allocated
    }

    pub fn has_mess(&self) -> bool {
        self.mess_plan.is_some()
    }

    pub fn mess_plan(&self) -> Option<MessPlan> {
        self.mess_plan
    }

    /// First assignment wins; later calls leave the branch untouched.
    pub(crate) fn mark_admitted(&mut self, branch: &str) {
        if self.assigned_branch.is_none() {
            self.assigned_branch = Some(branch.to_string());
        }
    }

    pub(crate) fn mark_hostel(&mut self) {
        self.hostel_allocated = true;
    }

    pub(crate) fn mark_mess(&mut self, plan: MessPlan) {
        self.mess_plan = Some(plan);
    }
}
