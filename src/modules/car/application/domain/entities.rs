use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Earliest model year a listing may carry.
pub const MIN_CAR_YEAR: i32 = 1900;

/// Condition of a listed vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarCondition {
    New,
    Reconditioned,
    PreOwned,
}

impl CarCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarCondition::New => "NEW",
            CarCondition::Reconditioned => "RECONDITIONED",
            CarCondition::PreOwned => "PRE_OWNED",
        }
    }
}

impl fmt::Display for CarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(CarCondition::New),
            "RECONDITIONED" => Ok(CarCondition::Reconditioned),
            "PRE_OWNED" => Ok(CarCondition::PreOwned),
            other => Err(format!("Unknown condition: {}", other)),
        }
    }
}

/// Latest acceptable model year: next year's models are already on sale.
pub fn max_car_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year() + 1
}
