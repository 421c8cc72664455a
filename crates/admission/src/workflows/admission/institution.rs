use super::applicant::{Applicant, EligibilityCriteria};
use super::domain::{RankWindow, RollNumber};
use super::ledger::{BranchLedger, SeatQuota};
use super::SetupError;
use std::collections::BTreeMap;
use tracing::debug;

/// A granted branch seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub branch: String,
    pub quota: SeatQuota,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionRefusal {
    #[error("applicant already admitted")]
    AlreadyAdmitted,
    #[error("applicant does not meet eligibility criteria")]
    Ineligible,
    #[error("rank {rank} outside institution window {window}")]
    OutsideRankWindow { rank: u32, window: RankWindow },
    #[error("no seats remaining")]
    NoSeatsRemaining,
    #[error("no preferred branch could take the applicant")]
    NoBranchAvailable,
}

/// A university owning its branch ledgers.
#[derive(Debug, Clone)]
pub struct Institution {
    name: String,
    window: RankWindow,
    branches: BTreeMap<String, BranchLedger>,
    admitted: Vec<RollNumber>,
    remaining_seats: u32,
}

impl Institution {
    pub fn new(name: impl Into<String>, window: RankWindow) -> Self {
        Self {
            name: name.into(),
            window,
            branches: BTreeMap::new(),
            admitted: Vec::new(),
            remaining_seats: 0,
        }
    }

    pub fn add_branch(&mut self, branch: BranchLedger) -> Result<(), SetupError> {
        if self.branches.contains_key(branch.name()) {
            return Err(SetupError::DuplicateBranch {
                institution: self.name.clone(),
                branch: branch.name().to_string(),
            });
        }
        self.remaining_seats = branch
            .seats_total()
            .and_then(|seats| self.remaining_seats.checked_add(seats))
            .ok_or_else(|| SetupError::SeatOverflow {
                institution: self.name.clone(),
                branch: branch.name().to_string(),
            })?;
        self.branches.insert(branch.name().to_string(), branch);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn window(&self) -> RankWindow {
        self.window
    }

    pub fn branches(&self) -> impl Iterator<Item = &BranchLedger> + '_ {
        self.branches.values()
    }

    pub fn branch(&self, name: &str) -> Option<&BranchLedger> {
        self.branches.get(name)
    }

    pub fn remaining_seats(&self) -> u32 {
        self.remaining_seats
    }

    /// Roll numbers of admitted applicants in admission order.
    pub fn admitted_rolls(&self) -> &[RollNumber] {
        &self.admitted
    }

    pub fn admitted_count(&self) -> usize {
        self.admitted.len()
    }

    pub fn can_admit(&self, applicant: &Applicant) -> Result<(), AdmissionRefusal> {
        if !self.window.contains(applicant.rank()) {
            return Err(AdmissionRefusal::OutsideRankWindow {
                rank: applicant.rank(),
                window: self.window,
            });
        }
        if self.remaining_seats == 0 {
            return Err(AdmissionRefusal::NoSeatsRemaining);
        }
        Ok(())
    }

    /// Walks the applicant's preferences in order and takes the first branch
    /// that grants a seat. Unknown branch names are skipped.
    pub fn admit(
        &mut self,
        applicant: &mut Applicant,
        criteria: &EligibilityCriteria,
    ) -> Result<Placement, AdmissionRefusal> {
        if applicant.is_admitted() {
            return Err(AdmissionRefusal::AlreadyAdmitted);
        }
        if !applicant.is_eligible(criteria) {
            return Err(AdmissionRefusal::Ineligible);
        }
        self.can_admit(applicant)?;

        let mut granted = None;
        for preference in applicant.preferences() {
            let Some(ledger) = self.branches.get_mut(preference) else {
                continue;
            };

            match ledger.allocate_seat(applicant) {
                Ok(quota) => {
                    granted = Some(Placement {
                        branch: ledger.name().to_string(),
                        quota,
                    });
                    break;
                }
                Err(refusal) => {
                    debug!(
                        institution = %self.name,
                        branch = %preference,
                        applicant = applicant.name(),
                        %refusal,
                        "branch declined applicant"
                    );
                }
            }
        }

        let placement = granted.ok_or(AdmissionRefusal::NoBranchAvailable)?;
        applicant.mark_admitted(&placement.branch);
        self.admitted.push(applicant.roll());
        self.remaining_seats -= 1;
        Ok(placement)
    }
}
