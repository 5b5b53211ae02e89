//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentStore` - Holds in-progress and submitted forms
//! - `ResultMailer` - Two-phase delivery of the results email

mod assessment_store;
mod result_mailer;

pub use assessment_store::{AssessmentStore, SharedForm};
pub use result_mailer::{MailerError, ResultEmail, ResultMailer};
