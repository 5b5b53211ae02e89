//! Survey module - static assessment content and the respondent's answers.
//!
//! - `SurveyCatalog` - dimensions, statements and advice tables (content-as-data)
//! - `Responses` - the mutable response store keyed by (dimension, question)

mod catalog;
mod responses;

pub use catalog::{
    AdviceTable, AdviceTables, CatalogError, Dimension, ReflectionPrompt, SurveyCatalog,
};
pub use responses::{ResponseKey, Responses};
