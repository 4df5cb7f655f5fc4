use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a realized fare divides between platform, driver, and processor
///
/// Invariant: `driver_base_payout + platform_commission == gross_fare`,
/// exactly. The incentive is funded by the platform on top of the split,
/// and the processor fee comes out of the platform's commission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutSplit {
    /// Fare the customer paid
    pub gross_fare: Decimal,
    /// Platform's percentage cut of the gross fare
    pub platform_commission: Decimal,
    /// gross_fare - platform_commission
    pub driver_base_payout: Decimal,
    /// Flat per-ride bonus, additive to the base payout
    pub driver_incentive: Decimal,
    /// driver_base_payout + driver_incentive
    pub driver_total_payout: Decimal,
    /// Modeled payment-gateway cost, a percentage of the commission
    pub processor_fee: Decimal,
    /// platform_commission - processor_fee
    pub platform_net: Decimal,
}
