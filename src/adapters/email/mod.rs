//! Email adapters - `ResultMailer` implementations.

mod emailjs_mailer;
mod mock_mailer;

pub use emailjs_mailer::{EmailJsConfig, EmailJsMailer};
pub use mock_mailer::MockResultMailer;
