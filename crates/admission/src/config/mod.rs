use crate::workflows::admission::{EligibilityCriteria, MessPlanPolicy};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Distinguishes runtime behavior for different stages of the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub campus: CampusConfig,
    pub policy: PolicyConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("ADMISSION_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let campus = CampusConfig {
            boys_hostel_rooms: read_number("ADMISSION_BOYS_HOSTEL_ROOMS", 40, u32::MAX)?,
            girls_hostel_rooms: read_number("ADMISSION_GIRLS_HOSTEL_ROOMS", 40, u32::MAX)?,
            mess_capacity: read_number("ADMISSION_MESS_CAPACITY", 60, u32::MAX)?,
        };

        let policy = PolicyConfig {
            min_percentage: read_number("ADMISSION_MIN_PERCENTAGE", 60, 100)?,
            min_age: read_number("ADMISSION_MIN_AGE", 17, u32::MAX)?,
            basic_income_ceiling: read_number(
                "ADMISSION_BASIC_INCOME_CEILING",
                100_000,
                u64::MAX,
            )?,
            premium_income_floor: read_number(
                "ADMISSION_PREMIUM_INCOME_FLOOR",
                500_000,
                u64::MAX,
            )?,
        };
        if policy.basic_income_ceiling > policy.premium_income_floor {
            return Err(ConfigError::InvertedIncomeBands {
                basic_income_ceiling: policy.basic_income_ceiling,
                premium_income_floor: policy.premium_income_floor,
            });
        }

        let log_level = env::var("ADMISSION_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            campus,
            policy,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Reads a whole number in `0..=max`, falling back to `default` when unset.
fn read_number<T>(key: &'static str, default: T, max: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Copy + Into<u64>,
{
    let Ok(value) = env::var(key) else {
        return Ok(default);
    };
    match value.trim().parse::<T>() {
        Ok(number) if number <= max => Ok(number),
        _ => Err(ConfigError::InvalidNumber {
            key,
            value,
            max: max.into(),
        }),
    }
}

/// Shared facility capacities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampusConfig {
    pub boys_hostel_rooms: u32,
    pub girls_hostel_rooms: u32,
    pub mess_capacity: u32,
}

/// Thresholds for eligibility and mess plan assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    pub min_percentage: u8,
    pub min_age: u32,
    pub basic_income_ceiling: u64,
    pub premium_income_floor: u64,
}

impl PolicyConfig {
    pub fn criteria(&self) -> EligibilityCriteria {
        EligibilityCriteria {
            min_percentage: self.min_percentage,
            min_age: self.min_age,
        }
    }

    pub fn mess_policy(&self) -> MessPlanPolicy {
        MessPlanPolicy {
            basic_income_ceiling: self.basic_income_ceiling,
            premium_income_floor: self.premium_income_floor,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        key: &'static str,
        value: String,
        max: u64,
    },
    InvertedIncomeBands {
        basic_income_ceiling: u64,
        premium_income_floor: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value, max } => {
                write!(f, "{key} must be a whole number from 0 to {max}, got '{value}'")
            }
            ConfigError::InvertedIncomeBands {
                basic_income_ceiling,
                premium_income_floor,
            } => write!(
                f,
                "ADMISSION_BASIC_INCOME_CEILING ({basic_income_ceiling}) must not exceed \
                 ADMISSION_PREMIUM_INCOME_FLOOR ({premium_income_floor})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
