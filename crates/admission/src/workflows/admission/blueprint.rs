use super::domain::{Category, CategoryTable, RankWindow};
use super::institution::Institution;
use super::ledger::BranchLedger;
use super::SetupError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

const DEFAULT_OPENING_RANK: u32 = 1;
const DEFAULT_CLOSING_RANK: u32 = 100_000;
const DEFAULT_GENERAL_SEATS: u32 = 10;

fn default_opening_rank() -> u32 {
    DEFAULT_OPENING_RANK
}

fn default_closing_rank() -> u32 {
    DEFAULT_CLOSING_RANK
}

fn default_general_seats() -> u32 {
    DEFAULT_GENERAL_SEATS
}

/// Declarative description of the universities taking part in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusBlueprint {
    pub institutions: Vec<InstitutionBlueprint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionBlueprint {
    pub name: String,
    #[serde(default = "default_opening_rank")]
    pub opening_rank: u32,
    #[serde(default = "default_closing_rank")]
    pub closing_rank: u32,
    #[serde(default)]
    pub branches: Vec<BranchBlueprint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchBlueprint {
    pub name: String,
    #[serde(default = "default_general_seats")]
    pub general_seats: u32,
    #[serde(default)]
    pub reserved: BTreeMap<Category, u32>,
    #[serde(default = "default_opening_rank")]
    pub opening_rank: u32,
    #[serde(default = "default_closing_rank")]
    pub closing_rank: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum BlueprintError {
    #[error("failed to read campus blueprint: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid campus blueprint: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

impl CampusBlueprint {
    /// The two sample universities used for quick setup and demos.
    pub fn sample() -> Self {
        Self {
            institutions: vec![
                InstitutionBlueprint {
                    name: "TechVille Institute of Technology".to_string(),
                    opening_rank: 1,
                    closing_rank: 50_000,
                    branches: vec![
                        branch(
                            "Computer Science",
                            15,
                            &[
                                (Category::Obc, 5),
                                (Category::Sc, 3),
                                (Category::St, 2),
                                (Category::Ews, 2),
                            ],
                            5_000,
                        ),
                        branch(
                            "Electronics",
                            12,
                            &[(Category::Obc, 4), (Category::Sc, 2), (Category::Ews, 2)],
                            8_000,
                        ),
                        branch(
                            "Mechanical",
                            10,
                            &[(Category::Obc, 3), (Category::Sc, 2), (Category::St, 1)],
                            15_000,
                        ),
                    ],
                },
                InstitutionBlueprint {
                    name: "Global Engineering College".to_string(),
                    opening_rank: 1,
                    closing_rank: 75_000,
                    branches: vec![
                        branch(
                            "Computer Science",
                            12,
                            &[(Category::Obc, 4), (Category::Sc, 2), (Category::Ews, 2)],
                            3_000,
                        ),
                        branch(
                            "Information Technology",
                            10,
                            &[(Category::Obc, 3), (Category::Sc, 2), (Category::Ews, 1)],
                            7_000,
                        ),
                        branch(
                            "Civil Engineering",
                            8,
                            &[(Category::Obc, 2), (Category::Sc, 2), (Category::St, 1)],
                            20_000,
                        ),
                    ],
                },
            ],
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlueprintError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BlueprintError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Materialises fresh institutions with full seat ledgers.
    pub fn build(&self) -> Result<Vec<Institution>, SetupError> {
        self.institutions
            .iter()
            .map(InstitutionBlueprint::build)
            .collect()
    }
}

impl InstitutionBlueprint {
    pub fn build(&self) -> Result<Institution, SetupError> {
        let window = RankWindow::new(self.opening_rank, self.closing_rank);
        let mut institution = Institution::new(self.name.clone(), window);
        for branch in &self.branches {
            institution.add_branch(branch.build())?;
        }
        Ok(institution)
    }
}

impl BranchBlueprint {
    pub fn build(&self) -> BranchLedger {
        let reserved: CategoryTable<u32> = self
            .reserved
            .iter()
            .map(|(category, seats)| (*category, *seats))
            .collect();
        BranchLedger::new(
            self.name.clone(),
            self.general_seats,
            reserved,
            RankWindow::new(self.opening_rank, self.closing_rank),
        )
    }
}

fn branch(
    name: &str,
    general_seats: u32,
    reserved: &[(Category, u32)],
    closing_rank: u32,
) -> BranchBlueprint {
    BranchBlueprint {
        name: name.to_string(),
        general_seats,
        reserved: reserved.iter().copied().collect(),
        opening_rank: 1,
        closing_rank,
    }
}
