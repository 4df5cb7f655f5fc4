pub mod period_aggregator;
pub mod target_projector;

pub use period_aggregator::PeriodAggregator;
pub use target_projector::TargetProjector;
