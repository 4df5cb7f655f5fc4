use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary of realized money flow over a period of completed trips
///
/// Only payment-collected trips contribute; a completed trip whose payment
/// was never captured carries no realized revenue and is excluded from the
/// counts so the averages stay consistent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    /// Number of collected trips in the period
    pub trip_count: u64,
    /// Sum of customer fares
    pub gross_revenue: Decimal,
    /// Sum of platform commissions before processor fees
    pub platform_earnings: Decimal,
    /// Sum of driver payouts including incentives
    pub driver_payouts: Decimal,
    /// Sum of platform commissions net of processor fees
    pub platform_net: Decimal,
    /// gross_revenue / trip_count (zero when there are no trips)
    pub average_fare_per_trip: Decimal,
    /// platform_net / trip_count — the platform's net take per trip, which
    /// is what revenue projections divide targets by
    pub average_cut_per_trip: Decimal,
}

impl PeriodAggregate {
    /// Aggregate with no trips; all figures zero, no NaN anywhere
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.trip_count == 0
    }
}
