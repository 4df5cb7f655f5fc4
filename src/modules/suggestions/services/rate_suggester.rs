use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::core::money;
use crate::modules::projections::models::{PeriodAggregate, RevenueTarget};
use crate::modules::rates::models::RateConfig;
use crate::modules::suggestions::models::{RateSuggestion, SuggestionStatus};

/// Shortest trip length a per-trip increase may be spread over when
/// converting it to a per-km step
const MIN_REFERENCE_DISTANCE_KM: u32 = 3;

/// Proposes commission or fare changes that close a revenue gap
pub struct RateSuggester;

impl RateSuggester {
    /// A vehicle class's share of total completed-trip volume
    ///
    /// Classes with no history get an equal default share (`1/n`) instead of
    /// zero, so new or unused rate configs still receive a suggestion.
    pub fn volume_share(
        vehicle_trip_count: u64,
        total_trip_count: u64,
        vehicle_type_count: usize,
    ) -> Decimal {
        if vehicle_trip_count == 0 || total_trip_count == 0 {
            if vehicle_type_count == 0 {
                return Decimal::ZERO;
            }
            return Decimal::ONE / Decimal::from(vehicle_type_count);
        }
        Decimal::from(vehicle_trip_count) / Decimal::from(total_trip_count)
    }

    /// Suggest a rate change for one vehicle class
    ///
    /// The fleet-wide need is the monthly profit target plus operating cost
    /// (the commission the fleet must generate); `share` scales it down to
    /// this class. A class with no volume data keeps its current commission
    /// and fares unchanged — there is nothing to extrapolate from.
    pub fn suggest(
        vehicle_aggregate: &PeriodAggregate,
        rate: &RateConfig,
        target: &RevenueTarget,
        share: Decimal,
        config: &EngineConfig,
    ) -> RateSuggestion {
        let overall_need = target.monthly_profit_target + target.monthly_operating_cost;
        let allocated_need = overall_need * share;

        let monthly_trips = vehicle_aggregate.trip_count;
        let average_fare = vehicle_aggregate.average_fare_per_trip;
        let current_commission = vehicle_aggregate.platform_earnings;
        let status = Self::classify(current_commission, allocated_need, config);

        if monthly_trips == 0 || average_fare <= Decimal::ZERO {
            warn!(
                "No volume data for '{}'; keeping current commission {}%",
                rate.vehicle_type, rate.platform_fee_percent
            );
            return RateSuggestion {
                vehicle_type: rate.vehicle_type.clone(),
                allocated_need,
                break_even_commission_percent: rate.platform_fee_percent,
                profit_commission_percent: rate.platform_fee_percent,
                suggested_base_fare: rate.base_fare,
                suggested_per_km: rate.per_km,
                projected_monthly_earnings: Decimal::ZERO,
                status,
            };
        }

        let monthly_fare_volume = average_fare * Decimal::from(monthly_trips);

        let break_even_commission_percent = config
            .break_even_band
            .clamp(allocated_need / monthly_fare_volume * Decimal::ONE_HUNDRED);
        let profit_commission_percent = config.profit_band.clamp(
            allocated_need * config.profit_buffer / monthly_fare_volume * Decimal::ONE_HUNDRED,
        );

        let extra_per_trip = Self::extra_per_trip(
            allocated_need,
            current_commission,
            monthly_trips,
            rate.platform_fee_percent,
        );
        let reference_distance = config
            .reference_distance_km
            .max(Decimal::from(MIN_REFERENCE_DISTANCE_KM));

        let suggested_base_fare =
            money::round_to_unit(rate.base_fare + extra_per_trip, config.quote_rounding_unit);
        let suggested_per_km = money::round_to_unit(
            rate.per_km + extra_per_trip / reference_distance,
            config.per_km_rounding_unit,
        );

        let projected_monthly_earnings =
            money::percent_of(monthly_fare_volume, profit_commission_percent);

        info!(
            "Suggestion for '{}': break-even {}%, profit {}%, status {:?}",
            rate.vehicle_type, break_even_commission_percent, profit_commission_percent, status
        );

        RateSuggestion {
            vehicle_type: rate.vehicle_type.clone(),
            allocated_need,
            break_even_commission_percent,
            profit_commission_percent,
            suggested_base_fare,
            suggested_per_km,
            projected_monthly_earnings,
            status,
        }
    }

    /// Suggestions for every configured vehicle class
    ///
    /// Volume shares are computed over the classes present in `aggregates`;
    /// classes missing from the map are treated as zero-volume.
    pub fn suggest_all(
        aggregates: &BTreeMap<String, PeriodAggregate>,
        rates: &[RateConfig],
        target: &RevenueTarget,
        config: &EngineConfig,
    ) -> Vec<RateSuggestion> {
        let total_trips: u64 = aggregates.values().map(|a| a.trip_count).sum();
        let empty = PeriodAggregate::empty();

        rates
            .iter()
            .map(|rate| {
                let aggregate = aggregates.get(&rate.vehicle_type).unwrap_or(&empty);
                let share =
                    Self::volume_share(aggregate.trip_count, total_trips, rates.len());
                Self::suggest(aggregate, rate, target, share, config)
            })
            .collect()
    }

    /// Extra revenue needed per trip to close the gap through fares alone,
    /// given that only `platform_fee_percent` of each fare reaches the
    /// platform
    ///
    /// A 0% commission plan has no commission channel to fund the gap, so
    /// the answer is zero rather than a division by zero.
    fn extra_per_trip(
        allocated_need: Decimal,
        current_commission: Decimal,
        monthly_trips: u64,
        platform_fee_percent: Decimal,
    ) -> Decimal {
        if platform_fee_percent <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let shortfall = (allocated_need - current_commission).max(Decimal::ZERO);
        let commission_rate = platform_fee_percent / Decimal::ONE_HUNDRED;
        shortfall / Decimal::from(monthly_trips) / commission_rate
    }

    fn classify(
        current_commission: Decimal,
        allocated_need: Decimal,
        config: &EngineConfig,
    ) -> SuggestionStatus {
        if allocated_need <= Decimal::ZERO {
            return SuggestionStatus::Good;
        }

        let coverage = current_commission / allocated_need;
        if coverage >= config.good_coverage_ratio {
            SuggestionStatus::Good
        } else if coverage >= config.ok_coverage_ratio {
            SuggestionStatus::Ok
        } else {
            SuggestionStatus::Low
        }
    }
}
