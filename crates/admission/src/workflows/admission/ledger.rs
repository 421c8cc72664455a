use super::applicant::Applicant;
use super::domain::{Category, CategoryTable, RankWindow};
use serde::Serialize;
use tracing::info;

/// Which pool a granted seat was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "quota", content = "category")]
pub enum SeatQuota {
    Reserved(Category),
    General,
}

impl SeatQuota {
    pub fn label(self) -> &'static str {
        match self {
            Self::Reserved(category) => category.label(),
            Self::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SeatRefusal {
    #[error("rank {rank} outside branch window {window}")]
    OutsideRankWindow { rank: u32, window: RankWindow },
    #[error("no seats left")]
    Exhausted,
}

/// Seat inventory for a single branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchLedger {
    name: String,
    general_seats: u32,
    reserved_seats: CategoryTable<u32>,
    window: RankWindow,
}

impl BranchLedger {
    pub fn new(
        name: impl Into<String>,
        general_seats: u32,
        reserved_seats: CategoryTable<u32>,
        window: RankWindow,
    ) -> Self {
        Self {
            name: name.into(),
            general_seats,
            reserved_seats,
            window,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn window(&self) -> RankWindow {
        self.window
    }

    pub fn general_remaining(&self) -> u32 {
        self.general_seats
    }

    pub fn reserved_remaining(&self, category: Category) -> u32 {
        *self.reserved_seats.get(category)
    }

    pub fn reserved_table(&self) -> &CategoryTable<u32> {
        &self.reserved_seats
    }

    /// General plus reserved seats left; `None` if the sum does not fit a `u32`.
    pub fn seats_total(&self) -> Option<u32> {
        self.reserved_seats
            .iter()
            .try_fold(self.general_seats, |total, (_, seats)| total.checked_add(*seats))
    }

    /// Claims one seat for the applicant. A reserved seat in the applicant's
    /// category is always taken before a general one.
    pub fn allocate_seat(&mut self, applicant: &Applicant) -> Result<SeatQuota, SeatRefusal> {
        if !self.window.contains(applicant.rank()) {
            return Err(SeatRefusal::OutsideRankWindow {
                rank: applicant.rank(),
                window: self.window,
            });
        }

        let category = applicant.category();
        let reserved = self.reserved_seats.get_mut(category);
        let quota = if *reserved > 0 {
            *reserved -= 1;
            SeatQuota::Reserved(category)
        } else if self.general_seats > 0 {
            self.general_seats -= 1;
            SeatQuota::General
        } else {
            return Err(SeatRefusal::Exhausted);
        };

        info!(
            branch = %self.name,
            applicant = applicant.name(),
            quota = quota.label(),
            "seat allocated"
        );
        Ok(quota)
    }
}
