use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How well a vehicle class's current commission covers its allocated need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    /// Commission already covers the need with headroom
    Good,
    /// Commission covers most of the need
    Ok,
    /// Commission falls well short of the need
    Low,
}

/// Advisory pricing change for one vehicle class
///
/// Offers two independent levers: adjust the commission percentage, or keep
/// the commission and raise base/per-km fares instead. Both aim at the same
/// allocated share of the fleet-wide revenue need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSuggestion {
    pub vehicle_type: String,
    /// This class's share of the fleet-wide monthly commission need
    pub allocated_need: Decimal,
    /// Minimum commission that meets the allocated need at current volume
    pub break_even_commission_percent: Decimal,
    /// Break-even with the configured profit headroom applied
    pub profit_commission_percent: Decimal,
    /// Fare-based alternative: new base fare, rounded to the quote unit
    pub suggested_base_fare: Decimal,
    /// Fare-based alternative: new per-km rate, rounded to the per-km unit
    pub suggested_per_km: Decimal,
    /// Monthly commission if the profit commission were adopted at current
    /// volume and average fare
    pub projected_monthly_earnings: Decimal,
    pub status: SuggestionStatus,
}
