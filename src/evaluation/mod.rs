//! Tour cost evaluation.

mod evaluator;

pub use evaluator::{cycle_length, evaluate, CostBreakdown, TourEvaluator};
