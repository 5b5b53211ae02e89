//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `email` - Result mailers (EmailJS, mock)
//! - `memory` - In-process assessment store
//! - `http` - Axum REST surface

pub mod email;
pub mod http;
pub mod memory;

pub use email::{EmailJsConfig, EmailJsMailer, MockResultMailer};
pub use memory::{InMemoryAssessmentStore, StoreLimits};
