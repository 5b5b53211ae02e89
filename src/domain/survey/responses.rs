//! Response store - ratings keyed by (dimension index, question index).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::SurveyCatalog;
use crate::domain::foundation::{Rating, ValidationError};

/// Position of one statement in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResponseKey {
    pub dimension: usize,
    pub question: usize,
}

impl ResponseKey {
    pub fn new(dimension: usize, question: usize) -> Self {
        Self {
            dimension,
            question,
        }
    }

    /// Checks that the key addresses an existing statement.
    pub fn validate(&self, catalog: &SurveyCatalog) -> Result<(), ValidationError> {
        let dimensions = catalog.dimensions();
        let dimension = dimensions.get(self.dimension).ok_or_else(|| {
            ValidationError::out_of_range(
                "dimension_index",
                0,
                dimensions.len() as i32 - 1,
                self.dimension as i32,
            )
        })?;
        if self.question >= dimension.questions.len() {
            return Err(ValidationError::out_of_range(
                "question_index",
                0,
                dimension.questions.len() as i32 - 1,
                self.question as i32,
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.dimension, self.question)
    }
}

/// Ratings given so far. A re-selection overwrites the previous rating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responses {
    ratings: BTreeMap<ResponseKey, Rating>,
}

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a rating, returning the one it replaced.
    pub fn record(&mut self, key: ResponseKey, rating: Rating) -> Option<Rating> {
        self.ratings.insert(key, rating)
    }

    pub fn get(&self, key: ResponseKey) -> Option<Rating> {
        self.ratings.get(&key).copied()
    }

    /// Numeric value of a response, 0 when unanswered.
    pub fn value_or_zero(&self, key: ResponseKey) -> u32 {
        self.get(key).map_or(0, |r| u32::from(r.value()))
    }

    /// Number of answered statements.
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// True when every statement in the catalog has a rating.
    pub fn is_complete(&self, catalog: &SurveyCatalog) -> bool {
        catalog
            .dimensions()
            .iter()
            .enumerate()
            .all(|(d, dimension)| {
                (0..dimension.questions.len()).all(|q| self.get(ResponseKey::new(d, q)).is_some())
            })
    }

    /// Forgets every rating.
    pub fn clear(&mut self) {
        self.ratings.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResponseKey, Rating)> + '_ {
        self.ratings.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(ResponseKey, Rating)> for Responses {
    fn from_iter<I: IntoIterator<Item = (ResponseKey, Rating)>>(iter: I) -> Self {
        Self {
            ratings: iter.into_iter().collect(),
        }
    }
}
