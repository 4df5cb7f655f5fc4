use rust_decimal::Decimal;

use crate::core::money;
use crate::modules::fares::models::FareBreakdown;
use crate::modules::rates::models::{RateConfig, RideParameters, TimeOfDay};

/// Computes itemized fares from a rate config and ride parameters
///
/// This is the single source of truth for fare math; every screen that
/// needs a fare (quoting, money flow, what-if simulation) goes through it
/// rather than re-deriving the formulas.
pub struct FareCalculator;

impl FareCalculator {
    /// Compute the itemized fare for one ride
    ///
    /// Pure and total for validated inputs. Two rules are deliberate policy:
    ///
    /// - Surge selection takes the **largest** applicable multiplier among
    ///   manual surge and the scheduled peak/night multiplier. Multipliers
    ///   never stack multiplicatively, so an operator who sets a manual
    ///   surge during peak hours does not double-charge the rider.
    /// - The `min_fare` floor is applied **after** GST, so a high floor acts
    ///   as a tax-inclusive minimum.
    pub fn compute(rate: &RateConfig, ride: &RideParameters) -> FareBreakdown {
        let base_fare = rate.base_fare;
        let distance_fare = rate.per_km * ride.distance_km;
        let time_fare = rate.per_min * ride.duration_min;
        let subtotal = base_fare + distance_fare + time_fare;

        let applied_surge_multiplier = Self::select_surge(rate, ride.time_of_day);
        let after_surge = subtotal * applied_surge_multiplier;
        let surge_amount = after_surge - subtotal;

        let gst_amount = money::percent_of(after_surge, rate.gst_percent);
        let total_customer_pays = (after_surge + gst_amount).max(rate.min_fare);

        FareBreakdown {
            base_fare,
            distance_fare,
            time_fare,
            subtotal,
            applied_surge_multiplier,
            surge_amount,
            after_surge,
            gst_amount,
            total_customer_pays,
        }
    }

    /// Largest applicable multiplier: manual surge, raised to the scheduled
    /// multiplier for the ride's time window when that one is higher.
    fn select_surge(rate: &RateConfig, time_of_day: TimeOfDay) -> Decimal {
        let mut applied = rate.manual_surge;

        match time_of_day {
            TimeOfDay::Peak if rate.peak_multiplier > applied => applied = rate.peak_multiplier,
            TimeOfDay::Night if rate.night_multiplier > applied => applied = rate.night_multiplier,
            _ => {}
        }

        applied
    }
}
