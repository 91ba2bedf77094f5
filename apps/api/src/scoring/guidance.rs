//! Qualitative guidance attached to a scored result: strengths, improvement
//! areas, next steps, and role suggestions. Entries are selected per
//! dimension by score band, with fallbacks so every list is non-empty no
//! matter how little was answered.

use crate::models::question::WiscarFacet;
use crate::models::results::{Recommendation, WiscarScores};

/// A dimension scoring at or above this band reads as a strength.
const STRONG_BAND: u32 = 75;
/// A dimension scoring below this band goes on the improvement list.
const WEAK_BAND: u32 = 60;

/// The textual portion of an assessment report.
#[derive(Debug, Clone)]
pub struct Guidance {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_steps: Vec<String>,
    pub top_roles: Vec<String>,
    pub alternative_roles: Vec<String>,
}

/// One-sentence reading of the recommendation tier.
pub fn summary_for(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Yes => {
            "You show strong potential for a successful career in IoT Security Engineering!"
        }
        Recommendation::Maybe => {
            "You have good foundational qualities but may need additional preparation."
        }
        Recommendation::No => {
            "Consider exploring alternative cybersecurity roles that better match your profile."
        }
    }
}

/// Builds the guidance lists from the dimension scores.
pub fn build_guidance(psychometric: u32, technical: u32, wiscar: &WiscarScores) -> Guidance {
    let mut strengths = Vec::new();
    if psychometric >= STRONG_BAND {
        strengths.push("Strong analytical thinking and problem-solving skills".to_string());
        strengths.push("Good stress tolerance under pressure situations".to_string());
    }
    if technical >= STRONG_BAND {
        strengths.push(
            "Solid grasp of IoT protocols, encryption, and security fundamentals".to_string(),
        );
    }
    for facet in WiscarFacet::ALL {
        if wiscar.facet(facet) >= STRONG_BAND {
            strengths.push(facet_strength(facet).to_string());
        }
    }
    if strengths.is_empty() {
        strengths.push("A clear picture of where you stand across every assessed dimension".to_string());
    }

    let mut improvements = Vec::new();
    if technical < WEAK_BAND {
        improvements.push("Strengthen networking fundamentals and IoT protocols".to_string());
        improvements.push("Develop deeper understanding of encryption methods".to_string());
    }
    if psychometric < WEAK_BAND {
        improvements
            .push("Build systematic work habits for long-running investigations".to_string());
    }
    for facet in WiscarFacet::ALL {
        if wiscar.facet(facet) < WEAK_BAND {
            improvements.push(facet_improvement(facet).to_string());
        }
    }
    if improvements.is_empty() {
        improvements
            .push("Maintain your edge with hands-on practice in new IoT environments".to_string());
    }

    Guidance {
        strengths,
        improvements,
        next_steps: NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
        top_roles: TOP_ROLES.iter().map(|s| s.to_string()).collect(),
        alternative_roles: ALTERNATIVE_ROLES.iter().map(|s| s.to_string()).collect(),
    }
}

fn facet_strength(facet: WiscarFacet) -> &'static str {
    match facet {
        WiscarFacet::Will => "High persistence when problems resist quick fixes",
        WiscarFacet::Interest => "High curiosity and motivation for cybersecurity",
        WiscarFacet::Skill => "A transferable programming foundation to build on",
        WiscarFacet::Cognitive => "Systematic approach to complex technical challenges",
        WiscarFacet::AbilityToLearn => "Comfortable relearning as tools and standards change",
        WiscarFacet::RealWorld => "Realistic expectations of day-to-day security work",
    }
}

fn facet_improvement(facet: WiscarFacet) -> &'static str {
    match facet {
        WiscarFacet::Will => "Build staying power on long, slow-burn problems",
        WiscarFacet::Interest => {
            "Explore more areas of security work to find what holds your attention"
        }
        WiscarFacet::Skill => "Gain hands-on experience with security testing tools",
        WiscarFacet::Cognitive => "Practice decomposing unfamiliar systems before changing them",
        WiscarFacet::AbilityToLearn => "Set a regular cadence for learning new tools and standards",
        WiscarFacet::RealWorld => "Practice with real IoT devices and environments",
    }
}

const NEXT_STEPS: &[&str] = &[
    "Enroll in 'IoT Security Fundamentals' course",
    "Set up a home lab with Raspberry Pi for hands-on practice",
    "Learn tools like Wireshark, Metasploit, and Kali Linux",
    "Join IoT security communities and forums",
    "Consider CompTIA Security+ certification",
];

const TOP_ROLES: &[&str] = &[
    "IoT Security Analyst",
    "Embedded Security Engineer",
    "Penetration Tester (IoT)",
    "Cybersecurity Architect",
];

const ALTERNATIVE_ROLES: &[&str] = &[
    "Network Security Engineer",
    "Cloud Security Analyst",
    "Software Security Developer",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_wiscar(value: u32) -> WiscarScores {
        WiscarScores {
            will: value,
            interest: value,
            skill: value,
            cognitive: value,
            ability_to_learn: value,
            real_world: value,
        }
    }

    #[test]
    fn test_strong_profile_lists_dimension_strengths() {
        let guidance = build_guidance(90, 85, &uniform_wiscar(80));
        assert!(guidance
            .strengths
            .iter()
            .any(|s| s.contains("analytical thinking")));
        // Two psychometric lines, one technical, six facets.
        assert_eq!(guidance.strengths.len(), 9);
    }

    #[test]
    fn test_weak_profile_lists_dimension_improvements() {
        let guidance = build_guidance(10, 10, &uniform_wiscar(10));
        assert!(guidance
            .improvements
            .iter()
            .any(|s| s.contains("networking fundamentals")));
        assert_eq!(guidance.strengths.len(), 1, "fallback strength expected");
    }

    #[test]
    fn test_middle_band_triggers_neither_list() {
        // 60..75 is neither strong nor weak.
        let guidance = build_guidance(70, 70, &uniform_wiscar(70));
        assert_eq!(guidance.strengths.len(), 1);
        assert_eq!(guidance.improvements.len(), 1);
    }

    #[test]
    fn test_lists_are_never_empty() {
        for (p, t, w) in [(0, 0, 0), (100, 100, 100), (70, 40, 90)] {
            let guidance = build_guidance(p, t, &uniform_wiscar(w));
            assert!(!guidance.strengths.is_empty());
            assert!(!guidance.improvements.is_empty());
            assert!(!guidance.next_steps.is_empty());
            assert!(!guidance.top_roles.is_empty());
            assert!(!guidance.alternative_roles.is_empty());
        }
    }

    #[test]
    fn test_summary_covers_all_tiers() {
        assert!(summary_for(Recommendation::Yes).contains("strong potential"));
        assert!(summary_for(Recommendation::Maybe).contains("additional preparation"));
        assert!(summary_for(Recommendation::No).contains("alternative"));
    }
}
