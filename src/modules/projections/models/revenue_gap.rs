use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting cadence for the per-cadence target breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

impl Cadence {
    /// Number of days this cadence covers; monthly uses the configured
    /// days-per-month so all three scale off the same base
    pub fn days(&self, days_per_month: u32) -> u32 {
        match self {
            Cadence::Daily => 1,
            Cadence::Weekly => 7,
            Cadence::Monthly => days_per_month,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cadence::Daily => write!(f, "daily"),
            Cadence::Weekly => write!(f, "weekly"),
            Cadence::Monthly => write!(f, "monthly"),
        }
    }
}

/// Whether a cadence's realized net-after-cost meets its scaled target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CadenceStatus {
    #[serde(rename = "on-track")]
    OnTrack,
    #[serde(rename = "behind")]
    Behind,
}

/// Platform net already observed in each cadence window, relative to a
/// reference instant: same calendar day, trailing 7 days, same calendar month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CadenceActuals {
    pub daily_net: Decimal,
    pub weekly_net: Decimal,
    pub monthly_net: Decimal,
}

impl CadenceActuals {
    pub fn net_for(&self, cadence: Cadence) -> Decimal {
        match cadence {
            Cadence::Daily => self.daily_net,
            Cadence::Weekly => self.weekly_net,
            Cadence::Monthly => self.monthly_net,
        }
    }
}

/// One row of the daily/weekly/monthly target table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadenceProjection {
    pub cadence: Cadence,
    /// Monthly profit target scaled to this cadence
    pub scaled_target: Decimal,
    /// Trips needed at this cadence to hit the scaled target
    pub trips_needed: u64,
    /// Platform net already observed in this cadence window
    pub actual_net: Decimal,
    /// Operating cost share for this cadence
    pub operating_cost_share: Decimal,
    /// actual_net - operating_cost_share
    pub net_after_cost: Decimal,
    pub status: CadenceStatus,
}

/// Gap analysis between a revenue target and realized platform net
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueGap {
    /// Monthly profit target divided over the configured month length
    pub daily_target_share: Decimal,
    pub trips_needed_per_day: u64,
    pub trips_needed_per_month: u64,
    /// max(0, target - realized net)
    pub deficit: Decimal,
    /// max(0, realized net - target)
    pub surplus: Decimal,
    /// Realized net as a whole percentage of target, clamped to [0, 100]
    pub progress_percent: u8,
    /// Daily/weekly/monthly breakdown rows
    pub cadences: Vec<CadenceProjection>,
}
