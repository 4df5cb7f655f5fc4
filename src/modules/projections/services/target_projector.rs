use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::core::money;
use crate::modules::fares::services::FareCalculator;
use crate::modules::payouts::services::PayoutSplitter;
use crate::modules::projections::models::{
    Cadence, CadenceActuals, CadenceProjection, CadenceStatus, PeriodAggregate, RevenueGap,
    RevenueTarget,
};
use crate::modules::rates::models::RateConfig;

/// Works backward from a profit target to trips-needed and progress figures
pub struct TargetProjector;

impl TargetProjector {
    /// Per-trip platform net of the configured what-if ride under `rate`
    ///
    /// Used as the divisor fallback when a fleet has no trip history yet,
    /// so the dashboard always has a usable trips-needed number.
    pub fn simulated_cut(rate: &RateConfig, config: &EngineConfig) -> Decimal {
        let fare = FareCalculator::compute(rate, &config.simulated_ride);
        PayoutSplitter::split(
            fare.total_customer_pays,
            rate,
            config.processor_fee_percent,
        )
        .platform_net
    }

    /// Project a revenue target against realized history
    ///
    /// `fallback_cut_per_trip` replaces the aggregate's average cut when no
    /// history exists (see `simulated_cut`). If both are zero the
    /// trips-needed figures are zero rather than non-finite; the dashboard
    /// renders zeros and the operator sees a warning in the logs.
    pub fn project(
        aggregate: &PeriodAggregate,
        target: &RevenueTarget,
        fallback_cut_per_trip: Decimal,
        actuals: &CadenceActuals,
        config: &EngineConfig,
    ) -> RevenueGap {
        let days = Decimal::from(config.days_per_month);
        let monthly_target = target.monthly_profit_target;
        let daily_target_share = monthly_target / days;

        let cut = Self::effective_cut(aggregate, fallback_cut_per_trip);

        let trips_needed_per_day = money::ceil_div(daily_target_share, cut);
        let trips_needed_per_month = money::ceil_div(monthly_target, cut);

        let deficit = (monthly_target - aggregate.platform_net).max(Decimal::ZERO);
        let surplus = (aggregate.platform_net - monthly_target).max(Decimal::ZERO);
        let progress_percent = Self::progress_percent(aggregate.platform_net, monthly_target);

        let cadences = [Cadence::Daily, Cadence::Weekly, Cadence::Monthly]
            .into_iter()
            .map(|cadence| {
                Self::project_cadence(cadence, target, cut, actuals, config)
            })
            .collect();

        info!(
            "Projected target {}: net {} ({}%), {} trips/day needed",
            monthly_target, aggregate.platform_net, progress_percent, trips_needed_per_day
        );

        RevenueGap {
            daily_target_share,
            trips_needed_per_day,
            trips_needed_per_month,
            deficit,
            surplus,
            progress_percent,
            cadences,
        }
    }

    fn effective_cut(aggregate: &PeriodAggregate, fallback: Decimal) -> Decimal {
        if aggregate.average_cut_per_trip > Decimal::ZERO {
            return aggregate.average_cut_per_trip;
        }

        if fallback > Decimal::ZERO {
            warn!(
                "No realized per-trip cut in aggregate; using simulated fallback {}",
                fallback
            );
            return fallback;
        }

        warn!("Per-trip cut is zero and no fallback available; trips-needed will be zero");
        Decimal::ZERO
    }

    fn progress_percent(platform_net: Decimal, monthly_target: Decimal) -> u8 {
        if monthly_target <= Decimal::ZERO {
            return 100;
        }
        money::whole_percent(platform_net, monthly_target)
            .min(Decimal::ONE_HUNDRED)
            .max(Decimal::ZERO)
            .to_u8()
            .unwrap_or(100)
    }

    fn project_cadence(
        cadence: Cadence,
        target: &RevenueTarget,
        cut: Decimal,
        actuals: &CadenceActuals,
        config: &EngineConfig,
    ) -> CadenceProjection {
        let month_days = Decimal::from(config.days_per_month);
        let cadence_days = Decimal::from(cadence.days(config.days_per_month));

        let scaled_target = target.monthly_profit_target * cadence_days / month_days;
        let operating_cost_share = target.monthly_operating_cost * cadence_days / month_days;
        let actual_net = actuals.net_for(cadence);
        let net_after_cost = actual_net - operating_cost_share;

        let status = if net_after_cost >= scaled_target {
            CadenceStatus::OnTrack
        } else {
            CadenceStatus::Behind
        };

        CadenceProjection {
            cadence,
            scaled_target,
            trips_needed: money::ceil_div(scaled_target, cut),
            actual_net,
            operating_cost_share,
            net_after_cost,
            status,
        }
    }
}
