use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::payouts::services::PayoutSplitter;
use crate::modules::projections::models::{CadenceActuals, PeriodAggregate};
use crate::modules::rates::models::RateConfig;
use crate::modules::trips::models::TripRecord;

/// Folds completed trips into period-level money-flow summaries
///
/// Each trip is split with the same `PayoutSplitter` the per-trip screens
/// use, so aggregates and single-trip views always agree. Trips whose
/// vehicle type has no rate config cannot be split and are skipped with a
/// warning; trips whose payment was never collected are excluded entirely.
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Aggregate all collected trips
    pub fn aggregate(
        trips: &[TripRecord],
        rates: &[RateConfig],
        processor_fee_percent: Decimal,
    ) -> PeriodAggregate {
        let index = Self::rate_index(rates);
        let mut aggregate = PeriodAggregate::empty();

        for trip in trips {
            if let Some(rate) = Self::rate_for(&index, trip) {
                Self::accumulate(&mut aggregate, trip, rate, processor_fee_percent);
            }
        }

        Self::finalize(&mut aggregate);
        aggregate
    }

    /// Aggregate collected trips completed within `[start, end]` (inclusive)
    pub fn aggregate_between(
        trips: &[TripRecord],
        rates: &[RateConfig],
        start: NaiveDate,
        end: NaiveDate,
        processor_fee_percent: Decimal,
    ) -> Result<PeriodAggregate> {
        if start > end {
            return Err(AppError::validation(format!(
                "start ({}) must be before or equal to end ({})",
                start, end
            )));
        }

        let index = Self::rate_index(rates);
        let mut aggregate = PeriodAggregate::empty();

        for trip in trips {
            let day = trip.completed_at.date_naive();
            if day < start || day > end {
                continue;
            }
            if let Some(rate) = Self::rate_for(&index, trip) {
                Self::accumulate(&mut aggregate, trip, rate, processor_fee_percent);
            }
        }

        Self::finalize(&mut aggregate);
        info!(
            "Aggregated {} trips between {} and {} (gross: {})",
            aggregate.trip_count, start, end, aggregate.gross_revenue
        );
        Ok(aggregate)
    }

    /// Per-vehicle-class aggregates
    ///
    /// Every configured vehicle class gets an entry, including classes with
    /// no trips yet — the rate suggester needs those to hand out its
    /// zero-volume fallback.
    pub fn aggregate_by_vehicle(
        trips: &[TripRecord],
        rates: &[RateConfig],
        processor_fee_percent: Decimal,
    ) -> BTreeMap<String, PeriodAggregate> {
        let index = Self::rate_index(rates);
        let mut by_vehicle: BTreeMap<String, PeriodAggregate> = rates
            .iter()
            .map(|rate| (rate.vehicle_type.clone(), PeriodAggregate::empty()))
            .collect();

        for trip in trips {
            if let Some(rate) = Self::rate_for(&index, trip) {
                let aggregate = by_vehicle
                    .entry(rate.vehicle_type.clone())
                    .or_insert_with(PeriodAggregate::empty);
                Self::accumulate(aggregate, trip, rate, processor_fee_percent);
            }
        }

        for aggregate in by_vehicle.values_mut() {
            Self::finalize(aggregate);
        }
        by_vehicle
    }

    /// Platform net already realized today, in the trailing 7 days, and in
    /// the current calendar month, relative to `now`
    pub fn cadence_actuals(
        trips: &[TripRecord],
        rates: &[RateConfig],
        now: DateTime<Utc>,
        processor_fee_percent: Decimal,
    ) -> CadenceActuals {
        let index = Self::rate_index(rates);
        let today = now.date_naive();
        let week_start = today - Duration::days(6);
        let mut actuals = CadenceActuals::default();

        for trip in trips {
            let rate = match Self::rate_for(&index, trip) {
                Some(rate) => rate,
                None => continue,
            };
            let day = trip.completed_at.date_naive();
            if day > today {
                continue;
            }

            let net =
                PayoutSplitter::split(trip.fare, rate, processor_fee_percent).platform_net;

            if day == today {
                actuals.daily_net += net;
            }
            if day >= week_start {
                actuals.weekly_net += net;
            }
            if day.year() == today.year() && day.month() == today.month() {
                actuals.monthly_net += net;
            }
        }

        actuals
    }

    fn rate_index(rates: &[RateConfig]) -> BTreeMap<&str, &RateConfig> {
        rates
            .iter()
            .map(|rate| (rate.vehicle_type.as_str(), rate))
            .collect()
    }

    fn rate_for<'a>(
        index: &BTreeMap<&str, &'a RateConfig>,
        trip: &TripRecord,
    ) -> Option<&'a RateConfig> {
        if !trip.payment_collected {
            return None;
        }
        match index.get(trip.vehicle_type.as_str()).copied() {
            Some(rate) => Some(rate),
            None => {
                warn!(
                    "Skipping trip {}: no rate config for vehicle type '{}'",
                    trip.id, trip.vehicle_type
                );
                None
            }
        }
    }

    fn accumulate(
        aggregate: &mut PeriodAggregate,
        trip: &TripRecord,
        rate: &RateConfig,
        processor_fee_percent: Decimal,
    ) {
        let split = PayoutSplitter::split(trip.fare, rate, processor_fee_percent);
        aggregate.trip_count += 1;
        aggregate.gross_revenue += split.gross_fare;
        aggregate.platform_earnings += split.platform_commission;
        aggregate.driver_payouts += split.driver_total_payout;
        aggregate.platform_net += split.platform_net;
    }

    fn finalize(aggregate: &mut PeriodAggregate) {
        if aggregate.trip_count > 0 {
            let count = Decimal::from(aggregate.trip_count);
            aggregate.average_fare_per_trip = aggregate.gross_revenue / count;
            aggregate.average_cut_per_trip = aggregate.platform_net / count;
        }
    }
}
