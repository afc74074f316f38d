pub mod constraint;
pub mod objective;
pub mod penalty;
pub mod pipeline;

pub use constraint::{ConstraintBound, ConstraintEvaluator, ConstraintSpec};
pub use objective::{ObjectiveAggregator, ObjectiveSpec};
pub use penalty::BiasParameters;
pub use pipeline::{ScoringConfig, ScoringPipeline};
