//! Readiness tiers over the aggregate score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five contiguous bands covering the 0-150 total score.
///
/// Each tier is keyed by an inclusive lower bound; a score sitting exactly on
/// a bound belongs to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    InvitationToBegin,
    EarlyRecognition,
    AwakeningPhase,
    DevelopingAwareness,
    ConsciousNavigator,
}

impl ReadinessLevel {
    /// Tiers from highest to lowest, paired with their inclusive lower bound.
    pub const THRESHOLDS: [(u32, ReadinessLevel); 5] = [
        (120, ReadinessLevel::ConsciousNavigator),
        (90, ReadinessLevel::DevelopingAwareness),
        (60, ReadinessLevel::AwakeningPhase),
        (30, ReadinessLevel::EarlyRecognition),
        (0, ReadinessLevel::InvitationToBegin),
    ];

    /// Classifies a total score.
    pub fn from_total_score(total_score: u32) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(lower_bound, _)| total_score >= *lower_bound)
            .map(|(_, level)| *level)
            .unwrap_or(ReadinessLevel::InvitationToBegin)
    }

    /// Inclusive lower bound of this tier.
    pub fn lower_bound(&self) -> u32 {
        match self {
            ReadinessLevel::ConsciousNavigator => 120,
            ReadinessLevel::DevelopingAwareness => 90,
            ReadinessLevel::AwakeningPhase => 60,
            ReadinessLevel::EarlyRecognition => 30,
            ReadinessLevel::InvitationToBegin => 0,
        }
    }

    /// Display name of the tier.
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessLevel::ConsciousNavigator => "Conscious Navigator",
            ReadinessLevel::DevelopingAwareness => "Developing Awareness",
            ReadinessLevel::AwakeningPhase => "Awakening Phase",
            ReadinessLevel::EarlyRecognition => "Early Recognition",
            ReadinessLevel::InvitationToBegin => "Invitation to Begin",
        }
    }

    /// Guidance shown with the tier.
    pub fn description(&self) -> &'static str {
        match self {
            ReadinessLevel::ConsciousNavigator => "You're well-prepared for conscious evolution. Focus on maintaining and deepening your strongest areas while supporting others on their journey.",
            ReadinessLevel::DevelopingAwareness => "You have good foundations with room for growth. Identify your 1-2 weakest areas and focus development there.",
            ReadinessLevel::AwakeningPhase => "You're beginning to recognize the importance of conscious development. Choose your lowest-scoring dimension and start there.",
            ReadinessLevel::EarlyRecognition => "You're at the beginning of the journey. This is perfect - awareness is the first step. Start with small, consistent practices.",
            ReadinessLevel::InvitationToBegin => "No judgment - everyone starts somewhere. The fact that you took this assessment shows readiness. Pick one area that resonates and take one small step.",
        }
    }
}

impl fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
