//! Scoring Module - Pure domain services over the respondent's answers.
//!
//! # Components
//!
//! - `ScoringEngine` - dimension totals, aggregate, weakest area, SWOT, next step
//! - `ReadinessLevel` - five tiers over the 0-150 aggregate
//!
//! All functions are stateless. They take responses and catalog content and
//! return derived values; nothing here performs I/O.

mod engine;
mod readiness;

pub use engine::{
    AssessmentResult, DimensionScore, ScoringEngine, ScoringError, Swot, GENERIC_NEXT_STEP,
    SWOT_PICK,
};
pub use readiness::ReadinessLevel;
