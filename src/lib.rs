//! Conscious Evolution - self-assessment service
//!
//! Respondents rate thirty statements across six dimensions of personal
//! development, add a written reflection, and receive a scored readiness
//! tier, a SWOT-style analysis and a radar chart by email.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
