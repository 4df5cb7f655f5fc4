use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

/// Demand window a ride falls into, used for scheduled surge selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Normal,
    Peak,
    Night,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Normal => write!(f, "normal"),
            TimeOfDay::Peak => write!(f, "peak"),
            TimeOfDay::Night => write!(f, "night"),
        }
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(TimeOfDay::Normal),
            "peak" => Ok(TimeOfDay::Peak),
            "night" => Ok(TimeOfDay::Night),
            _ => Err(format!("Invalid time of day: {}", s)),
        }
    }
}

/// Parameters of a single ride to be priced
///
/// Ephemeral: constructed per calculation (real trips or what-if
/// simulations) and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideParameters {
    pub distance_km: Decimal,
    pub duration_min: Decimal,
    pub time_of_day: TimeOfDay,
}

impl RideParameters {
    /// Create ride parameters with validation
    pub fn new(distance_km: Decimal, duration_min: Decimal, time_of_day: TimeOfDay) -> Result<Self> {
        if distance_km <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Distance must be positive, got: {} km",
                distance_km
            )));
        }

        if duration_min < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Duration must be non-negative, got: {} min",
                duration_min
            )));
        }

        Ok(Self {
            distance_km,
            duration_min,
            time_of_day,
        })
    }
}
