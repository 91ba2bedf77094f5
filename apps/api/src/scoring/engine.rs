//! Scoring Engine: pure function from an answer map to a structured result.
//!
//! Per-dimension scores are weighted sums over the catalog's per-option
//! weights: unanswered questions earn nothing, so the score rewards both
//! completion and the quality of the choices made. An empty answer map is a
//! valid input and yields a well-formed low-score result, never an error.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::assessment::catalog::Catalog;
use crate::models::question::{Dimension, WiscarFacet};
use crate::models::results::{AssessmentResults, Recommendation, WiscarScores};
use crate::scoring::guidance::{build_guidance, summary_for};

/// Overall scores at or above this threshold map to `Yes`.
pub const YES_THRESHOLD: u32 = 75;
/// Overall scores below this threshold map to `No`. The band between the
/// two thresholds maps to `Maybe`.
pub const NO_THRESHOLD: u32 = 50;

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a completed (or abandoned) answer map against the catalog.
///
/// Deterministic: identical inputs yield identical outputs, apart from the
/// `generated_at` timestamp.
pub fn score(catalog: &Catalog, answers: &BTreeMap<String, String>) -> AssessmentResults {
    let psychometric_score = dimension_score(catalog, answers, |d| *d == Dimension::Psychometric);
    let technical_score = dimension_score(catalog, answers, |d| *d == Dimension::Technical);
    let wiscar = WiscarScores {
        will: facet_score(catalog, answers, WiscarFacet::Will),
        interest: facet_score(catalog, answers, WiscarFacet::Interest),
        skill: facet_score(catalog, answers, WiscarFacet::Skill),
        cognitive: facet_score(catalog, answers, WiscarFacet::Cognitive),
        ability_to_learn: facet_score(catalog, answers, WiscarFacet::AbilityToLearn),
        real_world: facet_score(catalog, answers, WiscarFacet::RealWorld),
    };

    let overall_score = ((psychometric_score + technical_score) as f64 / 2.0).round() as u32;
    let recommendation = recommend(overall_score);
    let guidance = build_guidance(psychometric_score, technical_score, &wiscar);

    AssessmentResults {
        overall_score,
        recommendation,
        summary: summary_for(recommendation).to_string(),
        psychometric_score,
        technical_score,
        wiscar,
        strengths: guidance.strengths,
        improvements: guidance.improvements,
        next_steps: guidance.next_steps,
        top_roles: guidance.top_roles,
        alternative_roles: guidance.alternative_roles,
        generated_at: Utc::now(),
    }
}

/// Maps an overall score to the three-way recommendation tier.
pub fn recommend(overall: u32) -> Recommendation {
    if overall >= YES_THRESHOLD {
        Recommendation::Yes
    } else if overall < NO_THRESHOLD {
        Recommendation::No
    } else {
        Recommendation::Maybe
    }
}

fn facet_score(catalog: &Catalog, answers: &BTreeMap<String, String>, facet: WiscarFacet) -> u32 {
    dimension_score(catalog, answers, |d| *d == Dimension::Wiscar(facet))
}

/// Bounded [0, 100] score for one dimension: earned weight over attainable
/// weight. Answer values not among a question's options earn nothing (the
/// state machine rejects them, but the engine stays total regardless).
fn dimension_score(
    catalog: &Catalog,
    answers: &BTreeMap<String, String>,
    feeds: impl Fn(&Dimension) -> bool,
) -> u32 {
    let mut earned = 0.0_f64;
    let mut attainable = 0.0_f64;

    for question in catalog.questions().filter(|q| feeds(&q.dimension)) {
        attainable += question.max_weight();
        if let Some(value) = answers.get(&question.id) {
            if let Some(option) = question.option(value) {
                earned += option.weight;
            }
        }
    }

    if attainable > 0.0 {
        ((earned / attainable) * 100.0).round().clamp(0.0, 100.0) as u32
    } else {
        // A dimension with no feeding questions scores 0 rather than failing.
        0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
