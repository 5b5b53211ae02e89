//! Report module - text body of the results email.

mod formatter;

pub use formatter::{ReportContext, ReportFormatter};
