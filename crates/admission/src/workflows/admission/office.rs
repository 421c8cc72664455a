use super::applicant::{Applicant, EligibilityCriteria, IneligibilityReason};
use super::domain::{Gender, MessPlan, RollNumber};
use super::hostel::HostelPool;
use super::institution::Institution;
use super::ledger::SeatQuota;
use super::mess::{MessPlanPolicy, MessPool, MessRefusal};
use super::SetupError;
use serde::Serialize;
use tracing::info;

/// Result of a single applicant's pass through the office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ApplicantOutcome {
    Ineligible {
        reasons: Vec<IneligibilityReason>,
    },
    AlreadyAdmitted,
    NotAdmitted,
    Admitted {
        institution: String,
        branch: String,
        quota: SeatQuota,
        hostel: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        mess_plan: Option<MessPlan>,
        #[serde(skip_serializing_if = "Option::is_none")]
        mess_refusal: Option<String>,
    },
}

impl ApplicantOutcome {
    pub fn summary(&self) -> String {
        match self {
            Self::Ineligible { reasons } => {
                let reasons: Vec<String> = reasons.iter().map(ToString::to_string).collect();
                format!("not eligible ({})", reasons.join(", "))
            }
            Self::AlreadyAdmitted => "already admitted".to_string(),
            Self::NotAdmitted => "no suitable branch/university".to_string(),
            Self::Admitted {
                institution,
                branch,
                ..
            } => format!("admitted to {branch} at {institution}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedApplicant {
    pub roll: RollNumber,
    pub name: String,
    pub rank: u32,
    pub outcome: ApplicantOutcome,
}

/// Ordered trail of one processing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingSummary {
    pub processed: Vec<ProcessedApplicant>,
}

impl ProcessingSummary {
    pub fn admitted(&self) -> usize {
        self.count(|outcome| matches!(outcome, ApplicantOutcome::Admitted { .. }))
    }

    pub fn ineligible(&self) -> usize {
        self.count(|outcome| matches!(outcome, ApplicantOutcome::Ineligible { .. }))
    }

    pub fn not_admitted(&self) -> usize {
        self.count(|outcome| matches!(outcome, ApplicantOutcome::NotAdmitted))
    }

    pub fn outcome_for(&self, roll: RollNumber) -> Option<&ApplicantOutcome> {
        self.processed
            .iter()
            .find(|entry| entry.roll == roll)
            .map(|entry| &entry.outcome)
    }

    fn count(&self, predicate: impl Fn(&ApplicantOutcome) -> bool) -> usize {
        self.processed
            .iter()
            .filter(|entry| predicate(&entry.outcome))
            .count()
    }
}

/// Coordinates the rank-ordered admission pass across every registered
/// institution and cascades successful admissions into hostel and mess
/// allocation.
#[derive(Debug, Clone)]
pub struct AdmissionOffice {
    institutions: Vec<Institution>,
    boys_hostel: HostelPool,
    girls_hostel: HostelPool,
    mess: MessPool,
    criteria: EligibilityCriteria,
    mess_policy: MessPlanPolicy,
    total_admitted: usize,
}

impl AdmissionOffice {
    pub fn new(boys_hostel: HostelPool, girls_hostel: HostelPool, mess: MessPool) -> Self {
        Self {
            institutions: Vec::new(),
            boys_hostel,
            girls_hostel,
            mess,
            criteria: EligibilityCriteria::default(),
            mess_policy: MessPlanPolicy::default(),
            total_admitted: 0,
        }
    }

    pub fn with_criteria(mut self, criteria: EligibilityCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_mess_policy(mut self, policy: MessPlanPolicy) -> Self {
        self.mess_policy = policy;
        self
    }

    /// Registration order is the order institutions are tried in.
    pub fn add_institution(&mut self, institution: Institution) -> Result<(), SetupError> {
        if self.institution(institution.name()).is_some() {
            return Err(SetupError::DuplicateInstitution(
                institution.name().to_string(),
            ));
        }
        self.institutions.push(institution);
        Ok(())
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn institution(&self, name: &str) -> Option<&Institution> {
        self.institutions
            .iter()
            .find(|institution| institution.name() == name)
    }

    /// Resolves an institution's admitted roll numbers against the caller's applicants.
    pub fn admitted_students<'a>(
        &self,
        institution: &str,
        applicants: &'a [Applicant],
    ) -> Vec<&'a Applicant> {
        let Some(institution) = self.institution(institution) else {
            return Vec::new();
        };
        institution
            .admitted_rolls()
            .iter()
            .filter_map(|roll| applicants.iter().find(|applicant| applicant.roll() == *roll))
            .collect()
    }

    pub fn hostels(&self) -> [&HostelPool; 2] {
        [&self.boys_hostel, &self.girls_hostel]
    }

    pub fn hostel_for(&self, gender: Gender) -> &HostelPool {
        match gender {
            Gender::Male => &self.boys_hostel,
            Gender::Female => &self.girls_hostel,
        }
    }

    fn hostel_for_mut(&mut self, gender: Gender) -> &mut HostelPool {
        match gender {
            Gender::Male => &mut self.boys_hostel,
            Gender::Female => &mut self.girls_hostel,
        }
    }

    pub fn mess(&self) -> &MessPool {
        &self.mess
    }

    pub fn mess_mut(&mut self) -> &mut MessPool {
        &mut self.mess
    }

    pub fn criteria(&self) -> &EligibilityCriteria {
        &self.criteria
    }

    pub fn mess_policy(&self) -> &MessPlanPolicy {
        &self.mess_policy
    }

    /// Admissions granted by this office across every pass.
    pub fn total_admitted(&self) -> usize {
        self.total_admitted
    }

    /// Sorts `applicants` by rank (ties keep their incoming order) and
    /// processes each one exactly once. Applicants are mutated in place.
    pub fn process(&mut self, applicants: &mut [Applicant]) -> ProcessingSummary {
        applicants.sort_by_key(Applicant::rank);
        info!(applicants = applicants.len(), "processing applications");

        let mut summary = ProcessingSummary::default();
        for applicant in applicants.iter_mut() {
            let outcome = self.process_one(applicant);
            summary.processed.push(ProcessedApplicant {
                roll: applicant.roll(),
                name: applicant.name().to_string(),
                rank: applicant.rank(),
                outcome,
            });
        }

        info!(
            admitted = summary.admitted(),
            ineligible = summary.ineligible(),
            not_admitted = summary.not_admitted(),
            "application processing completed"
        );
        summary
    }

    fn process_one(&mut self, applicant: &mut Applicant) -> ApplicantOutcome {
        if !applicant.is_eligible(&self.criteria) {
            info!(applicant = applicant.name(), "skipping applicant: not eligible");
            return ApplicantOutcome::Ineligible {
                reasons: applicant.ineligibility_reasons(&self.criteria),
            };
        }
        if applicant.is_admitted() {
            return ApplicantOutcome::AlreadyAdmitted;
        }

        let criteria = self.criteria;
        let admission = self.institutions.iter_mut().find_map(|institution| {
            institution
                .admit(applicant, &criteria)
                .ok()
                .map(|placement| (institution.name().to_string(), placement))
        });

        let Some((institution, placement)) = admission else {
            info!(
                applicant = applicant.name(),
                "could not admit applicant: no suitable branch/university"
            );
            return ApplicantOutcome::NotAdmitted;
        };

        self.total_admitted += 1;
        info!(
            applicant = applicant.name(),
            institution = %institution,
            branch = %placement.branch,
            "applicant admitted"
        );

        self.hostel_for_mut(applicant.gender())
            .allocate_room(applicant);

        let mut mess_plan = None;
        let mut mess_refusal = None;
        if applicant.has_hostel() {
            let plan = self.mess_policy.plan_for(applicant);
            match self.mess.allocate(applicant, plan) {
                Ok(_) => mess_plan = Some(plan),
                Err(refusal) => mess_refusal = Some(refusal),
            }
        }

        ApplicantOutcome::Admitted {
            institution,
            branch: placement.branch,
            quota: placement.quota,
            hostel: applicant.has_hostel(),
            mess_plan,
            mess_refusal: mess_refusal.as_ref().map(MessRefusal::to_string),
        }
    }
}
