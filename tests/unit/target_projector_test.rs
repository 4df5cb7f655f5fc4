// Unit tests for revenue-target projection
//
// Validates:
// - Trips-needed arithmetic, including the worked 50000 / 25 -> 2000 case
// - The simulated-scenario fallback when no trip history exists
// - Progress percentage clamping and the zero-target convention
// - Per-cadence rows: scaling, cost shares, and on-track/behind flags

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fareflow::config::EngineConfig;
use fareflow::projections::{
    Cadence, CadenceActuals, CadenceStatus, PeriodAggregate, RevenueTarget, TargetProjector,
};
use fareflow::rates::RateConfig;

fn aggregate_with_cut(trip_count: u64, average_cut: Decimal, platform_net: Decimal) -> PeriodAggregate {
    PeriodAggregate {
        trip_count,
        gross_revenue: platform_net * dec!(10),
        platform_earnings: platform_net,
        driver_payouts: platform_net * dec!(9),
        platform_net,
        average_fare_per_trip: average_cut * dec!(10),
        average_cut_per_trip: average_cut,
    }
}

fn quoting_rate() -> RateConfig {
    RateConfig::new("sedan", dec!(30), dec!(8))
        .unwrap()
        .with_per_min(dec!(1))
        .unwrap()
        .with_min_fare(dec!(40))
        .unwrap()
}

#[test]
fn test_trips_needed_for_monthly_target() {
    let config = EngineConfig::default();
    let target = RevenueTarget::new(dec!(50000), Decimal::ZERO).unwrap();
    let aggregate = aggregate_with_cut(1000, dec!(25), dec!(25000));

    let gap = TargetProjector::project(
        &aggregate,
        &target,
        Decimal::ZERO,
        &CadenceActuals::default(),
        &config,
    );

    assert_eq!(gap.trips_needed_per_month, 2000);
    // 50000 / 30 per day, at 25 per trip
    assert_eq!(gap.trips_needed_per_day, 67);
    assert_eq!(gap.deficit, dec!(25000));
    assert_eq!(gap.surplus, Decimal::ZERO);
    assert_eq!(gap.progress_percent, 50);
}

#[test]
fn test_simulated_cut_composes_fare_and_split() {
    let config = EngineConfig::default();

    // Default what-if ride: 5 km, 15 min, normal -> fare 85; 10% commission
    // = 8.5, minus 2% processor fee = 8.33
    let cut = TargetProjector::simulated_cut(&quoting_rate(), &config);

    assert_eq!(cut, dec!(8.33));
}

#[test]
fn test_empty_history_falls_back_to_simulated_cut() {
    let config = EngineConfig::default();
    let target = RevenueTarget::new(dec!(50000), Decimal::ZERO).unwrap();
    let fallback = TargetProjector::simulated_cut(&quoting_rate(), &config);

    let gap = TargetProjector::project(
        &PeriodAggregate::empty(),
        &target,
        fallback,
        &CadenceActuals::default(),
        &config,
    );

    // 50000 / 8.33 = 6002.4 -> 6003; the dashboard gets a usable number,
    // never a division-by-zero artifact
    assert_eq!(gap.trips_needed_per_month, 6003);
    assert_eq!(gap.trips_needed_per_day, 201);
}

#[test]
fn test_zero_cut_and_zero_fallback_yield_zero_trips() {
    let config = EngineConfig::default();
    let target = RevenueTarget::new(dec!(50000), Decimal::ZERO).unwrap();

    let gap = TargetProjector::project(
        &PeriodAggregate::empty(),
        &target,
        Decimal::ZERO,
        &CadenceActuals::default(),
        &config,
    );

    assert_eq!(gap.trips_needed_per_month, 0);
    assert_eq!(gap.trips_needed_per_day, 0);
    assert_eq!(gap.deficit, dec!(50000));
}

#[test]
fn test_progress_clamps_at_100() {
    let config = EngineConfig::default();
    let target = RevenueTarget::new(dec!(50000), Decimal::ZERO).unwrap();
    let aggregate = aggregate_with_cut(2400, dec!(25), dec!(60000));

    let gap = TargetProjector::project(
        &aggregate,
        &target,
        Decimal::ZERO,
        &CadenceActuals::default(),
        &config,
    );

    assert_eq!(gap.progress_percent, 100);
    assert_eq!(gap.surplus, dec!(10000));
    assert_eq!(gap.deficit, Decimal::ZERO);
}

#[test]
fn test_progress_rounds_to_whole_percent() {
    let config = EngineConfig::default();
    let target = RevenueTarget::new(dec!(1000), Decimal::ZERO).unwrap();
    let aggregate = aggregate_with_cut(10, dec!(33.5), dec!(335));

    let gap = TargetProjector::project(
        &aggregate,
        &target,
        Decimal::ZERO,
        &CadenceActuals::default(),
        &config,
    );

    // 33.5% rounds to 34, midpoint away from zero
    assert_eq!(gap.progress_percent, 34);
}

#[test]
fn test_zero_target_counts_as_fully_met() {
    let config = EngineConfig::default();
    let target = RevenueTarget::new(Decimal::ZERO, Decimal::ZERO).unwrap();
    let aggregate = aggregate_with_cut(10, dec!(25), dec!(250));

    let gap = TargetProjector::project(
        &aggregate,
        &target,
        Decimal::ZERO,
        &CadenceActuals::default(),
        &config,
    );

    assert_eq!(gap.progress_percent, 100);
    assert_eq!(gap.trips_needed_per_month, 0);
    assert_eq!(gap.surplus, dec!(250));
}

#[test]
fn test_cadence_rows_scale_target_and_costs() {
    let config = EngineConfig::default();
    let target = RevenueTarget::new(dec!(30000), dec!(6000)).unwrap();
    let aggregate = aggregate_with_cut(1000, dec!(25), dec!(28000));
    let actuals = CadenceActuals {
        daily_net: dec!(1500),
        weekly_net: dec!(5000),
        monthly_net: dec!(28000),
    };

    let gap = TargetProjector::project(&aggregate, &target, Decimal::ZERO, &actuals, &config);

    assert_eq!(gap.cadences.len(), 3);

    let daily = &gap.cadences[0];
    assert_eq!(daily.cadence, Cadence::Daily);
    assert_eq!(daily.scaled_target, dec!(1000));
    assert_eq!(daily.operating_cost_share, dec!(200));
    assert_eq!(daily.net_after_cost, dec!(1300));
    assert_eq!(daily.trips_needed, 40);
    assert_eq!(daily.status, CadenceStatus::OnTrack);

    let weekly = &gap.cadences[1];
    assert_eq!(weekly.cadence, Cadence::Weekly);
    assert_eq!(weekly.scaled_target, dec!(7000));
    assert_eq!(weekly.operating_cost_share, dec!(1400));
    assert_eq!(weekly.net_after_cost, dec!(3600));
    assert_eq!(weekly.trips_needed, 280);
    assert_eq!(weekly.status, CadenceStatus::Behind);

    let monthly = &gap.cadences[2];
    assert_eq!(monthly.cadence, Cadence::Monthly);
    assert_eq!(monthly.scaled_target, dec!(30000));
    assert_eq!(monthly.operating_cost_share, dec!(6000));
    assert_eq!(monthly.net_after_cost, dec!(22000));
    assert_eq!(monthly.trips_needed, 1200);
    assert_eq!(monthly.status, CadenceStatus::Behind);
}

#[test]
fn test_cadence_status_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&CadenceStatus::OnTrack).unwrap(),
        "\"on-track\""
    );
    assert_eq!(
        serde_json::to_string(&CadenceStatus::Behind).unwrap(),
        "\"behind\""
    );
}
