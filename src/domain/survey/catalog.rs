//! Survey catalog - the immutable content the assessment is built from.
//!
//! Dimensions, statements and the advice tables keyed by dimension name are
//! declarative data. The standard catalog is embedded at compile time and
//! parsed once; deployments may point at a replacement YAML file instead.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Rating;

const STANDARD_CATALOG_YAML: &str = include_str!("catalog.yaml");

// Parsing the embedded YAML is exercised by the `standard_catalog_*` tests below.
static STANDARD_CATALOG: Lazy<SurveyCatalog> = Lazy::new(|| {
    SurveyCatalog::from_yaml(STANDARD_CATALOG_YAML)
        .expect("Embedded survey catalog must be valid")
});

/// One assessed dimension and its ordered statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub description: String,
    pub questions: Vec<String>,
}

impl Dimension {
    /// Highest score reachable in this dimension.
    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32 * u32::from(Rating::MAX)
    }
}

/// Prompt shown above the free-text reflection box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionPrompt {
    pub prompt: String,
    pub guidance: String,
}

/// Lookup tables keyed by dimension name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceTables {
    pub opportunities: BTreeMap<String, String>,
    pub threats: BTreeMap<String, String>,
    pub next_steps: BTreeMap<String, String>,
}

/// Identifies one of the advice tables, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceTable {
    Opportunities,
    Threats,
    NextSteps,
}

impl fmt::Display for AdviceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdviceTable::Opportunities => "opportunities",
            AdviceTable::Threats => "threats",
            AdviceTable::NextSteps => "next_steps",
        };
        write!(f, "{}", s)
    }
}

impl AdviceTables {
    /// Returns the requested table.
    pub fn table(&self, table: AdviceTable) -> &BTreeMap<String, String> {
        match table {
            AdviceTable::Opportunities => &self.opportunities,
            AdviceTable::Threats => &self.threats,
            AdviceTable::NextSteps => &self.next_steps,
        }
    }

    /// Looks up the advice for a dimension in one table.
    pub fn lookup(&self, table: AdviceTable, dimension: &str) -> Option<&str> {
        self.table(table).get(dimension).map(String::as_str)
    }
}

/// Errors raised while loading or validating catalog content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Failed to read survey catalog '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse survey catalog: {0}")]
    Parse(String),

    #[error("Survey catalog defines no dimensions")]
    NoDimensions,

    #[error("Dimension '{0}' is defined more than once")]
    DuplicateDimension(String),

    #[error("Dimension '{0}' has no questions")]
    EmptyDimension(String),

    #[error("No {table} entry for dimension '{dimension}'")]
    MissingAdvice { table: AdviceTable, dimension: String },
}

/// The full, validated survey content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyCatalog {
    pub title: String,
    pub subtitle: String,
    pub overview: String,
    pub reflection: ReflectionPrompt,
    pub consent_statement: String,
    dimensions: Vec<Dimension>,
    advice: AdviceTables,
}

impl SurveyCatalog {
    /// Returns the catalog embedded in the binary.
    pub fn standard() -> &'static SurveyCatalog {
        &STANDARD_CATALOG
    }

    /// Loads the catalog from `path`, or the embedded one when no path is configured.
    pub fn load(path: Option<&Path>) -> Result<SurveyCatalog, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::standard().clone()),
        }
    }

    /// Parses and validates a catalog from a YAML file.
    pub fn from_path(path: &Path) -> Result<SurveyCatalog, CatalogError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&yaml)
    }

    /// Parses and validates a catalog from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<SurveyCatalog, CatalogError> {
        let catalog: SurveyCatalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that every dimension is well formed and covered by every advice table.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.dimensions.is_empty() {
            return Err(CatalogError::NoDimensions);
        }

        let mut seen = HashSet::new();
        for dimension in &self.dimensions {
            if !seen.insert(dimension.name.as_str()) {
                return Err(CatalogError::DuplicateDimension(dimension.name.clone()));
            }
            if dimension.questions.is_empty() {
                return Err(CatalogError::EmptyDimension(dimension.name.clone()));
            }
            for table in [
                AdviceTable::Opportunities,
                AdviceTable::Threats,
                AdviceTable::NextSteps,
            ] {
                if self.advice.lookup(table, &dimension.name).is_none() {
                    return Err(CatalogError::MissingAdvice {
                        table,
                        dimension: dimension.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Dimensions in their fixed presentation order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Returns the dimension at `index`, if any.
    pub fn dimension(&self, index: usize) -> Option<&Dimension> {
        self.dimensions.get(index)
    }

    /// Advice tables keyed by dimension name.
    pub fn advice(&self) -> &AdviceTables {
        &self.advice
    }

    /// Number of statements across all dimensions.
    pub fn total_questions(&self) -> usize {
        self.dimensions.iter().map(|d| d.questions.len()).sum()
    }

    /// Highest total score reachable.
    pub fn max_total_score(&self) -> u32 {
        self.dimensions.iter().map(Dimension::max_score).sum()
    }
}
