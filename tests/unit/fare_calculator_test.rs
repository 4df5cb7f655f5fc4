// Property-based tests for itemized fare computation
//
// Validates:
// - The minimum-fare floor always holds (total >= max(0, min_fare))
// - Surge selection takes the max of manual and scheduled multipliers,
//   never their product
// - Increasing distance never decreases the customer total
// - Computation is deterministic (pure function, no hidden state)
//
// Uses proptest to validate the invariants across many rate configurations

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fareflow::rates::{RateConfig, RideParameters, TimeOfDay};
use fareflow::fares::FareCalculator;

fn build_rate(
    base: u64,
    per_km: u64,
    per_min: u64,
    min_fare: u64,
    manual_pct: u32,
    peak_pct: u32,
    night_pct: u32,
    gst: u64,
) -> RateConfig {
    RateConfig::new("test", Decimal::from(base), Decimal::from(per_km))
        .unwrap()
        .with_per_min(Decimal::from(per_min))
        .unwrap()
        .with_min_fare(Decimal::from(min_fare))
        .unwrap()
        .with_manual_surge(Decimal::from(manual_pct) / Decimal::ONE_HUNDRED)
        .unwrap()
        .with_peak_multiplier(Decimal::from(peak_pct) / Decimal::ONE_HUNDRED)
        .unwrap()
        .with_night_multiplier(Decimal::from(night_pct) / Decimal::ONE_HUNDRED)
        .unwrap()
        .with_gst_percent(Decimal::from(gst))
        .unwrap()
}

fn time_of_day(choice: u8) -> TimeOfDay {
    match choice % 3 {
        0 => TimeOfDay::Normal,
        1 => TimeOfDay::Peak,
        _ => TimeOfDay::Night,
    }
}

proptest! {
    #[test]
    fn test_floor_invariant_always_holds(
        base in 0u64..500,
        per_km in 0u64..50,
        per_min in 0u64..10,
        min_fare in 0u64..400,
        manual_pct in 100u32..300,
        schedule_pct in 100u32..300,
        gst in 0u64..=18,
        distance in 1u64..50,
        duration in 0u64..120,
        tod in 0u8..3
    ) {
        let rate = build_rate(base, per_km, per_min, min_fare, manual_pct, schedule_pct, schedule_pct, gst);
        let ride = RideParameters::new(
            Decimal::from(distance),
            Decimal::from(duration),
            time_of_day(tod),
        ).unwrap();

        let fare = FareCalculator::compute(&rate, &ride);

        prop_assert!(fare.total_customer_pays >= rate.min_fare,
            "Total {} fell below floor {}", fare.total_customer_pays, rate.min_fare);
        prop_assert!(fare.total_customer_pays >= Decimal::ZERO);
    }

    #[test]
    fn test_surge_is_max_never_product(
        manual_pct in 100u32..300,
        peak_pct in 100u32..300,
        night_pct in 100u32..300,
        tod in 0u8..3
    ) {
        let rate = build_rate(30, 8, 1, 0, manual_pct, peak_pct, night_pct, 0);
        let tod = time_of_day(tod);
        let ride = RideParameters::new(dec!(5), dec!(15), tod).unwrap();

        let fare = FareCalculator::compute(&rate, &ride);

        let expected = match tod {
            TimeOfDay::Normal => rate.manual_surge,
            TimeOfDay::Peak => rate.manual_surge.max(rate.peak_multiplier),
            TimeOfDay::Night => rate.manual_surge.max(rate.night_multiplier),
        };
        prop_assert_eq!(fare.applied_surge_multiplier, expected);

        // Never the product of the two applicable multipliers
        let product_peak = rate.manual_surge * rate.peak_multiplier;
        if tod == TimeOfDay::Peak && rate.manual_surge > Decimal::ONE && rate.peak_multiplier > Decimal::ONE {
            prop_assert!(fare.applied_surge_multiplier < product_peak);
        }
    }

    #[test]
    fn test_distance_monotonicity(
        base in 0u64..200,
        per_km in 0u64..50,
        min_fare in 0u64..200,
        gst in 0u64..=18,
        distance in 1u64..50,
        extra in 0u64..50
    ) {
        let rate = build_rate(base, per_km, 1, min_fare, 100, 100, 100, gst);
        let short = RideParameters::new(Decimal::from(distance), dec!(10), TimeOfDay::Normal).unwrap();
        let long = RideParameters::new(Decimal::from(distance + extra), dec!(10), TimeOfDay::Normal).unwrap();

        let short_fare = FareCalculator::compute(&rate, &short);
        let long_fare = FareCalculator::compute(&rate, &long);

        prop_assert!(long_fare.total_customer_pays >= short_fare.total_customer_pays,
            "Longer ride {} paid less than shorter ride {}",
            long_fare.total_customer_pays, short_fare.total_customer_pays);
    }

    #[test]
    fn test_computation_is_deterministic(
        base in 0u64..500,
        per_km in 0u64..50,
        distance in 1u64..50,
        duration in 0u64..120,
        gst in 0u64..=18
    ) {
        let rate = build_rate(base, per_km, 2, 40, 120, 150, 130, gst);
        let ride = RideParameters::new(
            Decimal::from(distance),
            Decimal::from(duration),
            TimeOfDay::Peak,
        ).unwrap();

        let first = FareCalculator::compute(&rate, &ride);
        let second = FareCalculator::compute(&rate, &ride);

        prop_assert_eq!(first, second, "Identical inputs must yield identical breakdowns");
    }

    #[test]
    fn test_breakdown_fields_are_consistent(
        base in 0u64..500,
        per_km in 0u64..50,
        per_min in 0u64..10,
        distance in 1u64..50,
        duration in 0u64..120,
        manual_pct in 100u32..300
    ) {
        let rate = build_rate(base, per_km, per_min, 0, manual_pct, 100, 100, 0);
        let ride = RideParameters::new(
            Decimal::from(distance),
            Decimal::from(duration),
            TimeOfDay::Normal,
        ).unwrap();

        let fare = FareCalculator::compute(&rate, &ride);

        prop_assert_eq!(fare.subtotal, fare.base_fare + fare.distance_fare + fare.time_fare);
        prop_assert_eq!(fare.after_surge, fare.subtotal * fare.applied_surge_multiplier);
        prop_assert_eq!(fare.surge_amount, fare.after_surge - fare.subtotal);
    }
}

#[test]
fn test_city_ride_scenario() {
    // base 30, 5 km at 8/km, 15 min at 1/min, floor 40, no surge, no GST
    let rate = RateConfig::new("sedan", dec!(30), dec!(8))
        .unwrap()
        .with_per_min(dec!(1))
        .unwrap()
        .with_min_fare(dec!(40))
        .unwrap();
    let ride = RideParameters::new(dec!(5), dec!(15), TimeOfDay::Normal).unwrap();

    let fare = FareCalculator::compute(&rate, &ride);

    assert_eq!(fare.subtotal, dec!(85));
    assert_eq!(fare.surge_amount, Decimal::ZERO);
    assert_eq!(fare.gst_amount, Decimal::ZERO);
    assert_eq!(fare.total_customer_pays, dec!(85));
}

#[test]
fn test_minimum_fare_met_exactly_not_exceeded() {
    let rate = RateConfig::new("sedan", dec!(30), dec!(8))
        .unwrap()
        .with_per_min(dec!(1))
        .unwrap()
        .with_min_fare(dec!(40))
        .unwrap();
    let ride = RideParameters::new(dec!(1), dec!(2), TimeOfDay::Normal).unwrap();

    let fare = FareCalculator::compute(&rate, &ride);

    assert_eq!(fare.subtotal, dec!(40));
    assert_eq!(fare.total_customer_pays, dec!(40));
}

#[test]
fn test_peak_surge_scenario() {
    let rate = RateConfig::new("sedan", dec!(30), dec!(8))
        .unwrap()
        .with_per_min(dec!(1))
        .unwrap()
        .with_peak_multiplier(dec!(1.8))
        .unwrap();
    let ride = RideParameters::new(dec!(5), dec!(15), TimeOfDay::Peak).unwrap();

    let fare = FareCalculator::compute(&rate, &ride);

    assert_eq!(fare.applied_surge_multiplier, dec!(1.8));
    assert_eq!(fare.surge_amount, fare.subtotal * dec!(0.8));
}

#[test]
fn test_manual_and_peak_surge_do_not_stack() {
    let rate = RateConfig::new("sedan", dec!(30), dec!(8))
        .unwrap()
        .with_manual_surge(dec!(1.2))
        .unwrap()
        .with_peak_multiplier(dec!(1.5))
        .unwrap();
    let ride = RideParameters::new(dec!(5), dec!(15), TimeOfDay::Peak).unwrap();

    let fare = FareCalculator::compute(&rate, &ride);

    // The max of the two, not 1.2 * 1.5 = 1.8
    assert_eq!(fare.applied_surge_multiplier, dec!(1.5));
}

#[test]
fn test_serialized_breakdown_keeps_field_names() {
    let rate = RateConfig::new("sedan", dec!(30), dec!(8)).unwrap();
    let ride = RideParameters::new(dec!(5), dec!(15), TimeOfDay::Normal).unwrap();

    let fare = FareCalculator::compute(&rate, &ride);
    let json = serde_json::to_value(&fare).unwrap();

    // The dashboard consumes these as plain data; field names are a contract
    for key in [
        "base_fare",
        "distance_fare",
        "time_fare",
        "subtotal",
        "applied_surge_multiplier",
        "surge_amount",
        "after_surge",
        "gst_amount",
        "total_customer_pays",
    ] {
        assert!(json.get(key).is_some(), "Missing field: {}", key);
    }
}
