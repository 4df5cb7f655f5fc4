// A rate configuration is the per-vehicle-class pricing sheet operators edit
// on the fare management screen. Every defaulted field is explicit here so
// downstream formulas never need option-coalescing at the call site.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Pricing configuration for one vehicle class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateConfig {
    /// Vehicle class identifier (e.g. "bike", "sedan")
    pub vehicle_type: String,

    /// Flat amount charged on every ride
    pub base_fare: Decimal,

    /// Amount charged per kilometre
    pub per_km: Decimal,

    /// Amount charged per minute of ride time
    pub per_min: Decimal,

    /// Floor for the customer total, applied after surge and tax
    pub min_fare: Decimal,

    /// Operator-set surge multiplier
    pub manual_surge: Decimal,

    /// Scheduled surge multiplier for peak hours
    pub peak_multiplier: Decimal,

    /// Scheduled surge multiplier for night hours
    pub night_multiplier: Decimal,

    /// Commission retained by the platform, as a percentage of the fare
    pub platform_fee_percent: Decimal,

    /// Tax applied to the post-surge amount, as a percentage
    pub gst_percent: Decimal,

    /// Flat bonus paid to the driver per completed ride, funded by the
    /// platform on top of the fare split
    pub per_ride_incentive: Decimal,

    /// Non-monetary reward units granted to the driver per ride
    pub per_ride_coins: u32,
}

impl RateConfig {
    /// Create a rate config with validation
    ///
    /// Fields not named here start at their defaults: no per-minute charge,
    /// no minimum fare, all surge multipliers at 1.0, 10% platform fee, no
    /// GST, no incentive, no coins. Use the `with_*` setters to change them.
    pub fn new(
        vehicle_type: impl Into<String>,
        base_fare: Decimal,
        per_km: Decimal,
    ) -> Result<Self> {
        let vehicle_type = vehicle_type.into();
        if vehicle_type.trim().is_empty() {
            return Err(AppError::validation("Vehicle type cannot be empty"));
        }
        Self::validate_amount("base_fare", base_fare)?;
        Self::validate_amount("per_km", per_km)?;

        Ok(Self {
            vehicle_type,
            base_fare,
            per_km,
            per_min: Decimal::ZERO,
            min_fare: Decimal::ZERO,
            manual_surge: Decimal::ONE,
            peak_multiplier: Decimal::ONE,
            night_multiplier: Decimal::ONE,
            platform_fee_percent: Decimal::TEN,
            gst_percent: Decimal::ZERO,
            per_ride_incentive: Decimal::ZERO,
            per_ride_coins: 0,
        })
    }

    pub fn with_per_min(mut self, per_min: Decimal) -> Result<Self> {
        Self::validate_amount("per_min", per_min)?;
        self.per_min = per_min;
        Ok(self)
    }

    pub fn with_min_fare(mut self, min_fare: Decimal) -> Result<Self> {
        Self::validate_amount("min_fare", min_fare)?;
        self.min_fare = min_fare;
        Ok(self)
    }

    pub fn with_manual_surge(mut self, manual_surge: Decimal) -> Result<Self> {
        Self::validate_multiplier("manual_surge", manual_surge)?;
        self.manual_surge = manual_surge;
        Ok(self)
    }

    pub fn with_peak_multiplier(mut self, peak_multiplier: Decimal) -> Result<Self> {
        Self::validate_multiplier("peak_multiplier", peak_multiplier)?;
        self.peak_multiplier = peak_multiplier;
        Ok(self)
    }

    pub fn with_night_multiplier(mut self, night_multiplier: Decimal) -> Result<Self> {
        Self::validate_multiplier("night_multiplier", night_multiplier)?;
        self.night_multiplier = night_multiplier;
        Ok(self)
    }

    pub fn with_platform_fee_percent(mut self, platform_fee_percent: Decimal) -> Result<Self> {
        Self::validate_percent("platform_fee_percent", platform_fee_percent)?;
        self.platform_fee_percent = platform_fee_percent;
        Ok(self)
    }

    pub fn with_gst_percent(mut self, gst_percent: Decimal) -> Result<Self> {
        Self::validate_percent("gst_percent", gst_percent)?;
        self.gst_percent = gst_percent;
        Ok(self)
    }

    pub fn with_per_ride_incentive(mut self, per_ride_incentive: Decimal) -> Result<Self> {
        Self::validate_amount("per_ride_incentive", per_ride_incentive)?;
        self.per_ride_incentive = per_ride_incentive;
        Ok(self)
    }

    pub fn with_per_ride_coins(mut self, per_ride_coins: u32) -> Self {
        self.per_ride_coins = per_ride_coins;
        self
    }

    fn validate_amount(field: &str, value: Decimal) -> Result<()> {
        if value < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "{} must be non-negative, got: {}",
                field, value
            )));
        }
        Ok(())
    }

    fn validate_multiplier(field: &str, value: Decimal) -> Result<()> {
        if value <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "{} must be positive, got: {}",
                field, value
            )));
        }
        Ok(())
    }

    fn validate_percent(field: &str, value: Decimal) -> Result<()> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(AppError::validation(format!(
                "{} must be between 0 and 100, got: {}",
                field, value
            )));
        }
        Ok(())
    }
}
