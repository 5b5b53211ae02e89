//! Survey content configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::ValidationError;

/// Survey content configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyConfig {
    /// YAML file replacing the embedded catalog
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

impl SurveyConfig {
    pub fn content_path(&self) -> Option<&Path> {
        self.content_path.as_deref()
    }

    /// Validate survey configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.content_path {
            if !path.is_file() {
                return Err(ValidationError::SurveyContentNotFound(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}
