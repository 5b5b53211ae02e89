//! Rating value object for survey statements (1 to 5 agreement scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Self-assessment rating: 1 (never / strongly disagree) to 5 (always / strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Rating {
    Never = 1,
    Rarely = 2,
    Sometimes = 3,
    Often = 4,
    Always = 5,
}

impl Rating {
    /// Lowest selectable rating.
    pub const MIN: u8 = 1;

    /// Highest selectable rating.
    pub const MAX: u8 = 5;

    /// All ratings in ascending order.
    pub const ALL: [Rating; 5] = [
        Rating::Never,
        Rating::Rarely,
        Rating::Sometimes,
        Rating::Often,
        Rating::Always,
    ];

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Rating::Never),
            2 => Ok(Rating::Rarely),
            3 => Ok(Rating::Sometimes),
            4 => Ok(Rating::Often),
            5 => Ok(Rating::Always),
            _ => Err(ValidationError::out_of_range(
                "rating",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                i32::from(value),
            )),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label shown next to the number in the form.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Never => "Never/Strongly Disagree",
            Rating::Rarely => "Rarely/Disagree",
            Rating::Sometimes => "Sometimes/Neutral",
            Rating::Often => "Often/Agree",
            Rating::Always => "Always/Strongly Agree",
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::try_from_u8(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
