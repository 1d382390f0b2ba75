//! Distance matrices.
//!
//! Provides a dense, rounded-Euclidean distance matrix shared read-only
//! across strategies and trials.

mod matrix;

pub use matrix::DistanceMatrix;
