pub mod period_aggregate;
pub mod revenue_gap;
pub mod revenue_target;

pub use period_aggregate::PeriodAggregate;
pub use revenue_gap::{Cadence, CadenceActuals, CadenceProjection, CadenceStatus, RevenueGap};
pub use revenue_target::RevenueTarget;
