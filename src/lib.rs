//! Cognitive bias scoring of random number sequences.
//!
//! A sequence is reduced to fifteen descriptive features (chi-square spread,
//! parity alternation, streaks and short repetition patterns), which are
//! weighed against the ranges people expect from "random" data to produce
//! objective scores and bound checks.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use engines::features::FeatureExtractor;
pub use engines::scoring::{ScoringConfig, ScoringPipeline};
pub use error::{Result, RngbiasError};
pub use types::{FeatureId, FeatureVector, Objective, ResultRecord, Sequence};
