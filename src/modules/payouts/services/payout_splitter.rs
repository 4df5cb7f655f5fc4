use rust_decimal::Decimal;

use crate::core::money;
use crate::modules::payouts::models::PayoutSplit;
use crate::modules::rates::models::RateConfig;

/// Splits a realized fare between platform commission, driver payout, and
/// payment-processor cost
pub struct PayoutSplitter;

impl PayoutSplitter {
    /// Split a fare according to the rate config's commission terms
    ///
    /// The driver's base payout is computed by subtraction rather than an
    /// independent percentage, so base payout and commission always sum
    /// back to the gross fare exactly.
    ///
    /// `processor_fee_percent` is the modeled gateway cost as a percentage
    /// of the platform commission (see `EngineConfig`); real gateway fees
    /// vary by payment method, so it is policy, not a constant.
    ///
    /// A `platform_fee_percent` of 0 is a valid free plan: commission,
    /// processor fee, and platform net are all zero and the driver keeps
    /// the full fare.
    pub fn split(
        total_fare: Decimal,
        rate: &RateConfig,
        processor_fee_percent: Decimal,
    ) -> PayoutSplit {
        let platform_commission = money::percent_of(total_fare, rate.platform_fee_percent);
        let driver_base_payout = total_fare - platform_commission;
        let driver_incentive = rate.per_ride_incentive;
        let driver_total_payout = driver_base_payout + driver_incentive;
        let processor_fee = money::percent_of(platform_commission, processor_fee_percent);
        let platform_net = platform_commission - processor_fee;

        PayoutSplit {
            gross_fare: total_fare,
            platform_commission,
            driver_base_payout,
            driver_incentive,
            driver_total_payout,
            processor_fee,
            platform_net,
        }
    }
}
