use crate::core::{AppError, Result};
use crate::modules::rates::models::{RideParameters, TimeOfDay};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

/// Operational band for suggested commission percentages
///
/// Suggestions are clamped into the band so the engine never proposes a
/// commission outside what operations considers a sane range.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionBand {
    pub floor_percent: Decimal,
    pub ceiling_percent: Decimal,
}

impl CommissionBand {
    pub fn new(floor_percent: Decimal, ceiling_percent: Decimal) -> Self {
        Self {
            floor_percent,
            ceiling_percent,
        }
    }

    /// Clamps a raw percentage into the band
    pub fn clamp(&self, percent: Decimal) -> Decimal {
        percent.max(self.floor_percent).min(self.ceiling_percent)
    }
}

/// Engine configuration
///
/// Everything the fare engine treats as policy rather than input lives here:
/// the simulated payment-processor cost, rounding units used at the quoting
/// boundary, the guardrail bands for commission suggestions, and the default
/// what-if ride used when no trip history exists.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Payment-processor cost as a percentage of platform commission
    pub processor_fee_percent: Decimal,
    /// Quoted customer totals round to the nearest multiple of this unit
    pub quote_rounding_unit: Decimal,
    /// Suggested per-km rates round to the nearest multiple of this unit
    pub per_km_rounding_unit: Decimal,
    /// Allowed range for break-even commission suggestions
    pub break_even_band: CommissionBand,
    /// Allowed range for profit commission suggestions
    pub profit_band: CommissionBand,
    /// Multiplier applied to the allocated need when computing the profit
    /// commission (1.2 = 20% headroom above break-even)
    pub profit_buffer: Decimal,
    /// Commission coverage at or above this ratio of need is rated "good"
    pub good_coverage_ratio: Decimal,
    /// Commission coverage at or above this ratio of need is rated "ok"
    pub ok_coverage_ratio: Decimal,
    /// Days used to scale monthly figures to daily ones
    pub days_per_month: u32,
    /// Trip length used to spread a per-trip increase across per-km pricing
    pub reference_distance_km: Decimal,
    /// Ride used by the what-if calculator and as the projection fallback
    /// when a vehicle class has no history
    pub simulated_ride: RideParameters,
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = EngineConfig {
            processor_fee_percent: env_decimal("FAREFLOW_PROCESSOR_FEE_PERCENT", Decimal::from(2))?,
            quote_rounding_unit: env_decimal("FAREFLOW_QUOTE_ROUNDING_UNIT", Decimal::from(5))?,
            per_km_rounding_unit: env_decimal("FAREFLOW_PER_KM_ROUNDING_UNIT", Decimal::new(5, 1))?,
            break_even_band: CommissionBand::new(
                env_decimal("FAREFLOW_BREAK_EVEN_FLOOR_PERCENT", Decimal::from(5))?,
                env_decimal("FAREFLOW_BREAK_EVEN_CEILING_PERCENT", Decimal::from(25))?,
            ),
            profit_band: CommissionBand::new(
                env_decimal("FAREFLOW_PROFIT_FLOOR_PERCENT", Decimal::from(5))?,
                env_decimal("FAREFLOW_PROFIT_CEILING_PERCENT", Decimal::from(30))?,
            ),
            profit_buffer: env_decimal("FAREFLOW_PROFIT_BUFFER", Decimal::new(12, 1))?,
            good_coverage_ratio: env_decimal("FAREFLOW_GOOD_COVERAGE_RATIO", Decimal::new(105, 2))?,
            ok_coverage_ratio: env_decimal("FAREFLOW_OK_COVERAGE_RATIO", Decimal::new(85, 2))?,
            days_per_month: env_u32("FAREFLOW_DAYS_PER_MONTH", 30)?,
            reference_distance_km: env_decimal("FAREFLOW_REFERENCE_DISTANCE_KM", Decimal::from(5))?,
            simulated_ride: RideParameters {
                distance_km: env_decimal("FAREFLOW_SIM_DISTANCE_KM", Decimal::from(5))?,
                duration_min: env_decimal("FAREFLOW_SIM_DURATION_MIN", Decimal::from(15))?,
                time_of_day: env_time_of_day("FAREFLOW_SIM_TIME_OF_DAY", TimeOfDay::Normal)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.processor_fee_percent < Decimal::ZERO
            || self.processor_fee_percent > Decimal::ONE_HUNDRED
        {
            return Err(AppError::configuration(
                "Processor fee percent must be between 0 and 100",
            ));
        }

        if self.quote_rounding_unit <= Decimal::ZERO || self.per_km_rounding_unit <= Decimal::ZERO {
            return Err(AppError::configuration(
                "Rounding units must be greater than 0",
            ));
        }

        for (name, band) in [
            ("break-even", &self.break_even_band),
            ("profit", &self.profit_band),
        ] {
            if band.floor_percent < Decimal::ZERO || band.floor_percent > band.ceiling_percent {
                return Err(AppError::configuration(format!(
                    "Invalid {} commission band: floor {} / ceiling {}",
                    name, band.floor_percent, band.ceiling_percent
                )));
            }
        }

        if self.profit_buffer < Decimal::ONE {
            return Err(AppError::configuration(
                "Profit buffer must be at least 1.0",
            ));
        }

        if self.ok_coverage_ratio <= Decimal::ZERO
            || self.ok_coverage_ratio > self.good_coverage_ratio
        {
            return Err(AppError::configuration(
                "Coverage ratios must satisfy 0 < ok <= good",
            ));
        }

        if self.days_per_month == 0 {
            return Err(AppError::configuration(
                "Days per month must be greater than 0",
            ));
        }

        if self.reference_distance_km <= Decimal::ZERO {
            return Err(AppError::configuration(
                "Reference distance must be greater than 0",
            ));
        }

        if self.simulated_ride.distance_km <= Decimal::ZERO
            || self.simulated_ride.duration_min < Decimal::ZERO
        {
            return Err(AppError::configuration(
                "Simulated ride must have positive distance and non-negative duration",
            ));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            processor_fee_percent: Decimal::from(2),
            quote_rounding_unit: Decimal::from(5),
            per_km_rounding_unit: Decimal::new(5, 1),
            break_even_band: CommissionBand::new(Decimal::from(5), Decimal::from(25)),
            profit_band: CommissionBand::new(Decimal::from(5), Decimal::from(30)),
            profit_buffer: Decimal::new(12, 1),
            good_coverage_ratio: Decimal::new(105, 2),
            ok_coverage_ratio: Decimal::new(85, 2),
            days_per_month: 30,
            reference_distance_km: Decimal::from(5),
            simulated_ride: RideParameters {
                distance_km: Decimal::from(5),
                duration_min: Decimal::from(15),
                time_of_day: TimeOfDay::Normal,
            },
        }
    }
}

fn env_decimal(key: &str, default: Decimal) -> Result<Decimal> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<Decimal>()
            .map_err(|_| AppError::configuration(format!("Invalid {}: {}", key, raw))),
        Err(_) => Ok(default),
    }
}

fn env_time_of_day(key: &str, default: TimeOfDay) -> Result<TimeOfDay> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<TimeOfDay>()
            .map_err(|_| AppError::configuration(format!("Invalid {}: {}", key, raw))),
        Err(_) => Ok(default),
    }
}

fn env_u32(key: &str, default: u32) -> Result<u32> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| AppError::configuration(format!("Invalid {}: {}", key, raw))),
        Err(_) => Ok(default),
    }
}
