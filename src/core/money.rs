use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest multiple of `unit` (e.g. nearest 5 for
/// quoted totals, nearest 0.5 for per-km steps).
///
/// Midpoints round away from zero, which is what operators expect from
/// "round to the nearest 5". Rounding happens only at the display/quoting
/// boundary; itemized breakdown fields stay unrounded so the payout split
/// never accumulates rounding error.
pub fn round_to_unit(amount: Decimal, unit: Decimal) -> Decimal {
    if unit <= Decimal::ZERO {
        return amount;
    }
    (amount / unit).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * unit
}

/// Applies a percentage expressed as a 0-100 value (`percent_of(200, 10)` is 20).
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

/// Ceiling division for "how many trips are needed" style questions.
///
/// Returns 0 when the divisor is not positive; callers are expected to have
/// substituted their documented fallback before reaching that point.
pub fn ceil_div(amount: Decimal, per_unit: Decimal) -> u64 {
    if per_unit <= Decimal::ZERO {
        return 0;
    }
    (amount / per_unit).ceil().to_u64().unwrap_or(0)
}

/// Rounds a ratio to a whole percentage, midpoints away from zero.
pub fn whole_percent(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (numerator / denominator * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
