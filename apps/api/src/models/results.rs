use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::question::WiscarFacet;

/// Three-way career-fit recommendation derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

/// Per-facet WISCAR scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive: u32,
    pub ability_to_learn: u32,
    pub real_world: u32,
}

impl WiscarScores {
    pub fn facet(&self, facet: WiscarFacet) -> u32 {
        match facet {
            WiscarFacet::Will => self.will,
            WiscarFacet::Interest => self.interest,
            WiscarFacet::Skill => self.skill,
            WiscarFacet::Cognitive => self.cognitive,
            WiscarFacet::AbilityToLearn => self.ability_to_learn,
            WiscarFacet::RealWorld => self.real_world,
        }
    }
}

/// Full assessment report returned once per completed session.
/// Immutable after creation; the presentation layer owns it from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub overall_score: u32, // 0 - 100
    pub recommendation: Recommendation,
    /// One-sentence reading of the recommendation tier.
    pub summary: String,
    pub psychometric_score: u32,
    pub technical_score: u32,
    pub wiscar: WiscarScores,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_steps: Vec<String>,
    pub top_roles: Vec<String>,
    pub alternative_roles: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_serde_matches_display_tiers() {
        assert_eq!(serde_json::to_string(&Recommendation::Yes).unwrap(), r#""Yes""#);
        assert_eq!(serde_json::to_string(&Recommendation::Maybe).unwrap(), r#""Maybe""#);
        assert_eq!(serde_json::to_string(&Recommendation::No).unwrap(), r#""No""#);
    }

    #[test]
    fn test_facet_accessor_covers_all_six() {
        let scores = WiscarScores {
            will: 10,
            interest: 20,
            skill: 30,
            cognitive: 40,
            ability_to_learn: 50,
            real_world: 60,
        };
        let seen: Vec<u32> = WiscarFacet::ALL.iter().map(|f| scores.facet(*f)).collect();
        assert_eq!(seen, vec![10, 20, 30, 40, 50, 60]);
    }
}
