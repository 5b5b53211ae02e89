//! Scoring Engine - per-dimension totals, readiness, weakest area and SWOT.
//!
//! Every function here is pure: results are recomputed from the raw
//! responses whenever they are needed and never cached.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ReadinessLevel;
use crate::domain::foundation::Percentage;
use crate::domain::survey::{
    AdviceTable, AdviceTables, Dimension, ResponseKey, Responses, SurveyCatalog,
};

/// Shown when no dimension-specific next step exists.
pub const GENERIC_NEXT_STEP: &str =
    "Focus on small, consistent improvements in your lowest-scoring area.";

/// Number of dimensions listed as strengths and as weaknesses.
pub const SWOT_PICK: usize = 2;

/// Score of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
}

impl DimensionScore {
    pub fn new(name: impl Into<String>, score: u32, max_score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            max_score,
        }
    }

    /// Rounded share of the maximum, 0% when the maximum is 0.
    pub fn percentage(&self) -> Percentage {
        Percentage::from_ratio(self.score, self.max_score)
    }
}

/// Strengths, weaknesses, opportunities and threats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// Everything derived from one set of responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub dimension_scores: Vec<DimensionScore>,
    pub total_score: u32,
    pub readiness_level: ReadinessLevel,
    pub weakest_area: DimensionScore,
    pub swot: Swot,
}

/// Failures while deriving results. All of them point at broken content,
/// never at incomplete answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Cannot score an assessment without dimensions")]
    NoDimensions,

    #[error("No {table} entry for dimension '{dimension}'")]
    MissingAdvice { table: AdviceTable, dimension: String },
}

/// Stateless scoring functions.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes the full result for a set of responses.
    ///
    /// Unanswered statements count as 0, so incomplete input scores low
    /// instead of failing.
    pub fn score(
        responses: &Responses,
        catalog: &SurveyCatalog,
    ) -> Result<AssessmentResult, ScoringError> {
        let dimension_scores = Self::dimension_scores(responses, catalog.dimensions());
        let total_score = Self::total_score(&dimension_scores);
        let weakest_area = Self::weakest_dimension(&dimension_scores)
            .cloned()
            .ok_or(ScoringError::NoDimensions)?;
        let swot = Self::swot_analysis(&dimension_scores, catalog.advice())?;

        Ok(AssessmentResult {
            readiness_level: Self::classify(total_score),
            dimension_scores,
            total_score,
            weakest_area,
            swot,
        })
    }

    /// Sums each dimension's responses, in catalog order.
    pub fn dimension_scores(responses: &Responses, dimensions: &[Dimension]) -> Vec<DimensionScore> {
        dimensions
            .iter()
            .enumerate()
            .map(|(d, dimension)| {
                let score = (0..dimension.questions.len())
                    .map(|q| responses.value_or_zero(ResponseKey::new(d, q)))
                    .sum();
                DimensionScore::new(dimension.name.clone(), score, dimension.max_score())
            })
            .collect()
    }

    pub fn total_score(dimension_scores: &[DimensionScore]) -> u32 {
        dimension_scores.iter().map(|d| d.score).sum()
    }

    pub fn classify(total_score: u32) -> ReadinessLevel {
        ReadinessLevel::from_total_score(total_score)
    }

    /// First dimension holding the strictly lowest score.
    ///
    /// Ties resolve to the earlier dimension. `None` only for empty input.
    pub fn weakest_dimension(dimension_scores: &[DimensionScore]) -> Option<&DimensionScore> {
        let mut iter = dimension_scores.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |weakest, current| {
            if current.score < weakest.score {
                current
            } else {
                weakest
            }
        }))
    }

    /// Top two and bottom two dimensions, with advice for the bottom two.
    ///
    /// Uses a stable descending sort, so equal scores keep catalog order.
    /// A weakness without opportunity or threat text is an error.
    pub fn swot_analysis(
        dimension_scores: &[DimensionScore],
        advice: &AdviceTables,
    ) -> Result<Swot, ScoringError> {
        let mut sorted: Vec<&DimensionScore> = dimension_scores.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));

        let strengths: Vec<String> = sorted
            .iter()
            .take(SWOT_PICK)
            .map(|d| d.name.clone())
            .collect();
        let weaknesses: Vec<String> = sorted[sorted.len().saturating_sub(SWOT_PICK)..]
            .iter()
            .map(|d| d.name.clone())
            .collect();

        let lookup_all = |table: AdviceTable| -> Result<Vec<String>, ScoringError> {
            weaknesses
                .iter()
                .map(|name| {
                    advice
                        .lookup(table, name)
                        .map(str::to_string)
                        .ok_or_else(|| ScoringError::MissingAdvice {
                            table,
                            dimension: name.clone(),
                        })
                })
                .collect()
        };
        let opportunities = lookup_all(AdviceTable::Opportunities)?;
        let threats = lookup_all(AdviceTable::Threats)?;

        Ok(Swot {
            strengths,
            weaknesses,
            opportunities,
            threats,
        })
    }

    /// Suggested first action for a dimension, or a generic fallback.
    pub fn next_step_advice(dimension_name: &str, advice: &AdviceTables) -> String {
        advice
            .lookup(AdviceTable::NextSteps, dimension_name)
            .unwrap_or(GENERIC_NEXT_STEP)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Rating;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn catalog() -> &'static SurveyCatalog {
        SurveyCatalog::standard()
    }

    fn uniform(rating: Rating) -> Responses {
        (0..6)
            .flat_map(|d| (0..5).map(move |q| (ResponseKey::new(d, q), rating)))
            .collect()
    }

    fn from_values(values: &[u8]) -> Responses {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                (
                    ResponseKey::new(i / 5, i % 5),
                    Rating::try_from_u8(*v).unwrap(),
                )
            })
            .collect()
    }

    fn scores(values: &[u32]) -> Vec<DimensionScore> {
        catalog()
            .dimensions()
            .iter()
            .zip(values)
            .map(|(d, v)| DimensionScore::new(d.name.clone(), *v, 25))
            .collect()
    }

    #[test]
    fn all_threes_is_developing_awareness() {
        let result = ScoringEngine::score(&uniform(Rating::Sometimes), catalog()).unwrap();
        assert!(result.dimension_scores.iter().all(|d| d.score == 15));
        assert_eq!(result.total_score, 90);
        assert_eq!(result.readiness_level, ReadinessLevel::DevelopingAwareness);
    }

    #[test]
    fn all_fives_is_conscious_navigator() {
        let result = ScoringEngine::score(&uniform(Rating::Always), catalog()).unwrap();
        assert_eq!(result.total_score, 150);
        assert_eq!(result.readiness_level, ReadinessLevel::ConsciousNavigator);
    }

    #[test]
    fn all_ones_is_early_recognition() {
        let result = ScoringEngine::score(&uniform(Rating::Never), catalog()).unwrap();
        assert_eq!(result.total_score, 30);
        assert_eq!(result.readiness_level, ReadinessLevel::EarlyRecognition);
    }

    #[test]
    fn missing_responses_score_zero() {
        let result = ScoringEngine::score(&Responses::new(), catalog()).unwrap();
        assert_eq!(result.total_score, 0);
        assert_eq!(result.readiness_level, ReadinessLevel::InvitationToBegin);
        assert!(result.dimension_scores.iter().all(|d| d.max_score == 25));
    }

    #[test]
    fn classify_matches_documented_boundaries() {
        assert_eq!(ScoringEngine::classify(120), ReadinessLevel::ConsciousNavigator);
        assert_eq!(ScoringEngine::classify(119), ReadinessLevel::DevelopingAwareness);
        assert_eq!(ScoringEngine::classify(90), ReadinessLevel::DevelopingAwareness);
        assert_eq!(ScoringEngine::classify(89), ReadinessLevel::AwakeningPhase);
        assert_eq!(ScoringEngine::classify(0), ReadinessLevel::InvitationToBegin);
    }

    #[test]
    fn weakest_dimension_picks_lowest() {
        let scores = scores(&[20, 18, 9, 22, 14, 25]);
        let weakest = ScoringEngine::weakest_dimension(&scores).unwrap();
        assert_eq!(weakest.name, "Real Community");
    }

    #[test]
    fn weakest_dimension_tie_prefers_earlier_index() {
        let scores = scores(&[20, 10, 15, 10, 22, 21]);
        let weakest = ScoringEngine::weakest_dimension(&scores).unwrap();
        assert_eq!(weakest.name, "Informational Sovereignty");
    }

    #[test]
    fn weakest_dimension_empty_is_none() {
        assert!(ScoringEngine::weakest_dimension(&[]).is_none());
    }

    #[test]
    fn swot_picks_top_and_bottom_two() {
        let scores = scores(&[20, 8, 24, 12, 5, 17]);
        let swot = ScoringEngine::swot_analysis(&scores, catalog().advice()).unwrap();

        assert_eq!(swot.strengths, vec!["Real Community", "Mental Resilience"]);
        assert_eq!(swot.weaknesses, vec!["Informational Sovereignty", "Natural Connection"]);
        assert_eq!(
            swot.opportunities,
            vec![
                "Create curated information diet to expand perspective",
                "Integrate nature practices to ground your technological life",
            ]
        );
        assert_eq!(
            swot.threats,
            vec![
                "Susceptible to algorithmic manipulation and echo chambers",
                "Digital overwhelm may disconnect you from natural rhythms",
            ]
        );
    }

    #[test]
    fn swot_ties_keep_catalog_order() {
        let scores = scores(&[15, 15, 15, 15, 15, 15]);
        let swot = ScoringEngine::swot_analysis(&scores, catalog().advice()).unwrap();

        assert_eq!(swot.strengths, vec!["Mental Resilience", "Informational Sovereignty"]);
        assert_eq!(swot.weaknesses, vec!["Natural Connection", "Solid Character"]);
    }

    #[test]
    fn weakest_area_and_swot_weaknesses_are_separate_views() {
        let result = ScoringEngine::score(&uniform(Rating::Sometimes), catalog()).unwrap();
        assert_eq!(result.weakest_area.name, "Mental Resilience");
        assert!(!result.swot.weaknesses.contains(&result.weakest_area.name));
    }

    #[test]
    fn swot_fails_loudly_on_missing_advice() {
        let scores = vec![
            DimensionScore::new("Mental Resilience", 20, 25),
            DimensionScore::new("Real Community", 18, 25),
            DimensionScore::new("Quantum Flow", 3, 25),
        ];
        let err = ScoringEngine::swot_analysis(&scores, catalog().advice()).unwrap_err();
        assert_eq!(
            err,
            ScoringError::MissingAdvice {
                table: AdviceTable::Opportunities,
                dimension: "Quantum Flow".to_string(),
            }
        );
    }

    #[test]
    fn next_step_advice_uses_table() {
        let advice = ScoringEngine::next_step_advice("Natural Connection", catalog().advice());
        assert_eq!(advice, "You're over-digitized. Spend 20 minutes outside today without your phone.");
    }

    #[test]
    fn next_step_advice_falls_back_for_unknown_dimension() {
        let advice = ScoringEngine::next_step_advice("Unknown", catalog().advice());
        assert_eq!(advice, GENERIC_NEXT_STEP);
    }

    #[test]
    fn dimension_score_percentage_rounds() {
        assert_eq!(DimensionScore::new("x", 17, 25).percentage().value(), 68);
        assert_eq!(DimensionScore::new("x", 0, 0).percentage().value(), 0);
    }

    proptest! {
        #[test]
        fn totals_are_sums_of_answers(values in prop::collection::vec(1u8..=5, 30)) {
            let result = ScoringEngine::score(&from_values(&values), catalog()).unwrap();

            let expected_total: u32 = values.iter().map(|v| u32::from(*v)).sum();
            prop_assert_eq!(result.total_score, expected_total);
            prop_assert!(result.total_score <= 150);

            for (d, dimension) in result.dimension_scores.iter().enumerate() {
                let expected: u32 = values[d * 5..d * 5 + 5].iter().map(|v| u32::from(*v)).sum();
                prop_assert_eq!(dimension.score, expected);
                prop_assert!(dimension.score <= 25);
            }
        }

        #[test]
        fn partial_answers_stay_in_range(
            answers in prop::collection::btree_map((0usize..6, 0usize..5), 1u8..=5, 0..30)
        ) {
            let responses: Responses = answers
                .iter()
                .map(|((d, q), v)| (ResponseKey::new(*d, *q), Rating::try_from_u8(*v).unwrap()))
                .collect();
            let result = ScoringEngine::score(&responses, catalog()).unwrap();

            prop_assert!(result.total_score <= 150);
            prop_assert!(result.dimension_scores.iter().all(|d| d.score <= 25));
        }

        #[test]
        fn swot_is_disjoint_and_weaknesses_are_lowest(values in prop::collection::vec(0u32..=25, 6)) {
            let scores = scores(&values);
            let swot = ScoringEngine::swot_analysis(&scores, catalog().advice()).unwrap();

            prop_assert_eq!(swot.strengths.len(), 2);
            prop_assert_eq!(swot.weaknesses.len(), 2);
            let strengths: HashSet<_> = swot.strengths.iter().collect();
            prop_assert!(swot.weaknesses.iter().all(|w| !strengths.contains(w)));

            let mut indexed: Vec<(usize, u32)> = values.iter().copied().enumerate().collect();
            indexed.sort_by(|a, b| b.1.cmp(&a.1));
            let expected: Vec<String> = indexed[4..]
                .iter()
                .map(|(i, _)| scores[*i].name.clone())
                .collect();
            prop_assert_eq!(swot.weaknesses, expected);
        }

        #[test]
        fn weakest_is_first_minimum(values in prop::collection::vec(0u32..=25, 6)) {
            let scores = scores(&values);
            let weakest = ScoringEngine::weakest_dimension(&scores).unwrap();
            let min = *values.iter().min().unwrap();
            let first_min = values.iter().position(|v| *v == min).unwrap();
            prop_assert_eq!(&weakest.name, &scores[first_min].name);
        }
    }
}
