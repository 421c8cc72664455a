use super::applicant::Applicant;
use super::domain::{Category, MessPlan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessRefusal {
    #[error("mess is full")]
    Full,
    #[error("invalid mess plan: {0}")]
    UnknownPlan(MessPlan),
    #[error("applicant already has a mess allocation")]
    AlreadyAllocated,
    #[error("applicant must hold a hostel room before mess allocation")]
    HostelRequired,
}

/// Income bands used to pick a plan for a newly housed applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessPlanPolicy {
    pub basic_income_ceiling: u64,
    pub premium_income_floor: u64,
}

impl Default for MessPlanPolicy {
    fn default() -> Self {
        Self {
            basic_income_ceiling: 100_000,
            premium_income_floor: 500_000,
        }
    }
}

impl MessPlanPolicy {
    pub fn plan_for(&self, applicant: &Applicant) -> MessPlan {
        let subsidised = matches!(applicant.category(), Category::Sc | Category::St);
        if applicant.income() <= self.basic_income_ceiling || subsidised {
            MessPlan::Basic
        } else if applicant.income() > self.premium_income_floor {
            MessPlan::Premium
        } else {
            MessPlan::Standard
        }
    }
}

/// Dining pool with a fixed number of slots and a price per plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessPool {
    name: String,
    capacity: u32,
    allocations: u32,
    plan_prices: BTreeMap<MessPlan, u32>,
}

impl MessPool {
    /// Starts with the standard tariff: Basic 2000, Standard 3000, Premium 4500.
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        let plan_prices = BTreeMap::from([
            (MessPlan::Basic, 2000),
            (MessPlan::Standard, 3000),
            (MessPlan::Premium, 4500),
        ]);
        Self::with_prices(name, capacity, plan_prices)
    }

    pub fn with_prices(
        name: impl Into<String>,
        capacity: u32,
        plan_prices: BTreeMap<MessPlan, u32>,
    ) -> Self {
        Self {
            name: name.into(),
            capacity,
            allocations: 0,
            plan_prices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn allocated(&self) -> u32 {
        self.allocations
    }

    pub fn available(&self) -> u32 {
        self.capacity - self.allocations
    }

    pub fn is_available(&self) -> bool {
        self.allocations < self.capacity
    }

    pub fn set_plan_price(&mut self, plan: MessPlan, price: u32) {
        self.plan_prices.insert(plan, price);
    }

    pub fn plan_price(&self, plan: MessPlan) -> Option<u32> {
        self.plan_prices.get(&plan).copied()
    }

    pub fn plan_price_by_name(&self, name: &str) -> Option<u32> {
        MessPlan::from_label(name).and_then(|plan| self.plan_price(plan))
    }

    pub fn plan_prices(&self) -> impl Iterator<Item = (MessPlan, u32)> + '_ {
        self.plan_prices.iter().map(|(plan, price)| (*plan, *price))
    }

    /// Grants `plan` to the applicant and returns its price.
    pub fn allocate(
        &mut self,
        applicant: &mut Applicant,
        plan: MessPlan,
    ) -> Result<u32, MessRefusal> {
        let price = self.check(applicant, plan).map_err(|refusal| {
            warn!(
                mess = %self.name,
                applicant = applicant.name(),
                %refusal,
                "mess allocation refused"
            );
            refusal
        })?;

        applicant.mark_mess(plan);
        self.allocations += 1;
        info!(
            mess = %self.name,
            applicant = applicant.name(),
            plan = plan.label(),
            price,
            "mess plan allocated"
        );
        Ok(price)
    }

    fn check(&self, applicant: &Applicant, plan: MessPlan) -> Result<u32, MessRefusal> {
        if !self.is_available() {
            return Err(MessRefusal::Full);
        }
        let price = self.plan_price(plan).ok_or(MessRefusal::UnknownPlan(plan))?;
        if applicant.has_mess() {
            return Err(MessRefusal::AlreadyAllocated);
        }
        if !applicant.has_hostel() {
            return Err(MessRefusal::HostelRequired);
        }
        Ok(price)
    }
}
