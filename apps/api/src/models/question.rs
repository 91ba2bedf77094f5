use serde::{Deserialize, Serialize};

/// The ordered sections of the assessment. Traversal order is fixed:
/// Introduction, then Psychometric, then Technical, then WISCAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Introduction,
    Psychometric,
    Technical,
    Wiscar,
}

impl SectionKind {
    /// Display name used in section listings and snapshots.
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Introduction => "Introduction",
            SectionKind::Psychometric => "Psychometric",
            SectionKind::Technical => "Technical",
            SectionKind::Wiscar => "WISCAR",
        }
    }
}

/// The six facets of the WISCAR readiness framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarFacet {
    Will,
    Interest,
    Skill,
    Cognitive,
    AbilityToLearn,
    RealWorld,
}

impl WiscarFacet {
    pub const ALL: [WiscarFacet; 6] = [
        WiscarFacet::Will,
        WiscarFacet::Interest,
        WiscarFacet::Skill,
        WiscarFacet::Cognitive,
        WiscarFacet::AbilityToLearn,
        WiscarFacet::RealWorld,
    ];
}

/// The scoring dimension a question feeds. Closed so the engine's
/// partitioning step is exhaustively checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Introduction questions: gate traversal and inform guidance, but feed
    /// no numeric dimension.
    Background,
    Psychometric,
    Technical,
    Wiscar(WiscarFacet),
}

/// A single selectable answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Stable value recorded in the answer map. Unique within its question.
    pub value: String,
    pub label: String,
    /// Calibrated quality of this choice for the question's dimension,
    /// in [0.0, 1.0]. Never exposed to clients.
    pub weight: f64,
}

/// An immutable question definition. Identity is `id`; no two questions in a
/// catalog share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub section: SectionKind,
    pub dimension: Dimension,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Looks up an option by its recorded value.
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// The highest weight among this question's options: the per-question
    /// maximum a respondent can earn toward the dimension score.
    pub fn max_weight(&self) -> f64 {
        self.options.iter().map(|o| o.weight).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_question() -> Question {
        Question {
            id: "q1".to_string(),
            section: SectionKind::Technical,
            dimension: Dimension::Technical,
            prompt: "Pick one".to_string(),
            options: vec![
                AnswerOption {
                    value: "right".to_string(),
                    label: "The right one".to_string(),
                    weight: 1.0,
                },
                AnswerOption {
                    value: "wrong".to_string(),
                    label: "The wrong one".to_string(),
                    weight: 0.25,
                },
            ],
        }
    }

    #[test]
    fn test_option_lookup_by_value() {
        let q = make_question();
        assert_eq!(q.option("right").unwrap().weight, 1.0);
        assert!(q.option("missing").is_none());
    }

    #[test]
    fn test_max_weight_is_highest_option() {
        assert_eq!(make_question().max_weight(), 1.0);
    }

    #[test]
    fn test_section_kind_serde_snake_case() {
        let json = serde_json::to_string(&SectionKind::Wiscar).unwrap();
        assert_eq!(json, r#""wiscar""#);
    }

    #[test]
    fn test_wiscar_dimension_serde_carries_facet() {
        let json = serde_json::to_string(&Dimension::Wiscar(WiscarFacet::AbilityToLearn)).unwrap();
        assert_eq!(json, r#"{"wiscar":"ability_to_learn"}"#);
    }
}
