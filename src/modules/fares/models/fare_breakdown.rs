use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;

/// Itemized fare for one ride, immutable once computed
///
/// All fields are kept unrounded so downstream payout math never compounds
/// rounding error. `quoted_total` is the only place rounding is applied and
/// exists purely for display/quoting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    /// Flat component from the rate config
    pub base_fare: Decimal,
    /// per_km x distance
    pub distance_fare: Decimal,
    /// per_min x duration
    pub time_fare: Decimal,
    /// base_fare + distance_fare + time_fare
    pub subtotal: Decimal,
    /// The single multiplier that won surge selection
    pub applied_surge_multiplier: Decimal,
    /// after_surge - subtotal
    pub surge_amount: Decimal,
    /// subtotal x applied_surge_multiplier
    pub after_surge: Decimal,
    /// Tax on the post-surge amount
    pub gst_amount: Decimal,
    /// Final amount charged, floored at min_fare (precise, unrounded)
    pub total_customer_pays: Decimal,
}

impl FareBreakdown {
    /// Customer total rounded to the nearest quoting unit
    ///
    /// Display-only: never feed this back into payout computation.
    pub fn quoted_total(&self, unit: Decimal) -> Decimal {
        money::round_to_unit(self.total_customer_pays, unit)
    }
}
