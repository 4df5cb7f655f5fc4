pub mod models;
pub mod services;

pub use models::{
    Cadence, CadenceActuals, CadenceProjection, CadenceStatus, PeriodAggregate, RevenueGap,
    RevenueTarget,
};
pub use services::{PeriodAggregator, TargetProjector};
