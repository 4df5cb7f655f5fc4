use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Operator-supplied profit goal and cost base for a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueTarget {
    pub monthly_profit_target: Decimal,
    pub monthly_operating_cost: Decimal,
}

impl RevenueTarget {
    /// Create a revenue target with validation
    pub fn new(monthly_profit_target: Decimal, monthly_operating_cost: Decimal) -> Result<Self> {
        if monthly_profit_target < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Monthly profit target must be non-negative, got: {}",
                monthly_profit_target
            )));
        }

        if monthly_operating_cost < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Monthly operating cost must be non-negative, got: {}",
                monthly_operating_cost
            )));
        }

        Ok(Self {
            monthly_profit_target,
            monthly_operating_cost,
        })
    }
}
