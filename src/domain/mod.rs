//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `survey` - Survey catalog content and the response store
//! - `scoring` - Pure scoring, readiness classification and SWOT analysis
//! - `chart` - Radar chart geometry and SVG rendering
//! - `assessment` - Per-respondent form aggregate and submission lifecycle
//! - `report` - Plain-text results report

pub mod assessment;
pub mod chart;
pub mod foundation;
pub mod report;
pub mod scoring;
pub mod survey;
