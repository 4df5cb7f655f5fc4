use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A completed trip as delivered by the data-fetching layer
///
/// This is the engine's only view of history: which vehicle class, what the
/// customer actually paid, when, and whether the payment was collected. How
/// the record was fetched or cached is not the engine's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: Uuid,
    pub vehicle_type: String,
    /// Realized fare amount the customer was charged
    pub fare: Decimal,
    pub completed_at: DateTime<Utc>,
    /// Whether payment was actually collected; uncollected trips carry no
    /// realized revenue
    pub payment_collected: bool,
}

impl TripRecord {
    /// Create a trip record with validation
    pub fn new(
        vehicle_type: impl Into<String>,
        fare: Decimal,
        completed_at: DateTime<Utc>,
        payment_collected: bool,
    ) -> Result<Self> {
        let vehicle_type = vehicle_type.into();
        if vehicle_type.trim().is_empty() {
            return Err(AppError::validation("Trip vehicle type cannot be empty"));
        }

        if fare < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Trip fare must be non-negative, got: {}",
                fare
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            vehicle_type,
            fare,
            completed_at,
            payment_collected,
        })
    }
}
