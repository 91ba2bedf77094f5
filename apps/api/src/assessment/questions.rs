//! The fixed FutureFit question set for the IoT Security Engineering
//! assessment. Content is configuration data, not user-editable: two
//! introduction questions, three psychometric, three technical, and one
//! question per WISCAR facet. Option weights are the calibrated quality of
//! each choice for the question's scoring dimension.

use crate::assessment::catalog::{Catalog, CatalogError};
use crate::models::question::{
    AnswerOption, Dimension, Question, SectionKind, WiscarFacet,
};

fn question(
    id: &str,
    section: SectionKind,
    dimension: Dimension,
    prompt: &str,
    options: &[(&str, &str, f64)],
) -> Question {
    Question {
        id: id.to_string(),
        section,
        dimension,
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|(value, label, weight)| AnswerOption {
                value: value.to_string(),
                label: label.to_string(),
                weight: *weight,
            })
            .collect(),
    }
}

/// Builds the validated FutureFit catalog.
///
/// # Errors
///
/// Returns a `CatalogError` if the compiled-in question set violates the
/// catalog shape rules; `main` treats that as fatal and refuses to serve.
pub fn futurefit_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(vec![
        (SectionKind::Introduction, introduction_questions()),
        (SectionKind::Psychometric, psychometric_questions()),
        (SectionKind::Technical, technical_questions()),
        (SectionKind::Wiscar, wiscar_questions()),
    ])
}

fn introduction_questions() -> Vec<Question> {
    vec![
        question(
            "intro_1",
            SectionKind::Introduction,
            Dimension::Background,
            "How familiar are you with IoT (Internet of Things) devices and systems?",
            &[
                ("expert", "Very familiar - I work with IoT systems regularly", 1.0),
                ("intermediate", "Moderately familiar - I understand the basics", 0.7),
                ("beginner", "Somewhat familiar - I've heard about it", 0.4),
                ("novice", "Not familiar - This is new to me", 0.2),
            ],
        ),
        question(
            "intro_2",
            SectionKind::Introduction,
            Dimension::Background,
            "What interests you most about cybersecurity?",
            &[
                ("problem_solving", "Solving complex technical puzzles", 1.0),
                ("protection", "Protecting people and organizations from threats", 1.0),
                ("continuous_learning", "Staying ahead of evolving threats", 0.9),
                ("ethical_hacking", "Ethical hacking and penetration testing", 0.9),
            ],
        ),
    ]
}

fn psychometric_questions() -> Vec<Question> {
    vec![
        question(
            "psych_1",
            SectionKind::Psychometric,
            Dimension::Psychometric,
            "When working on a complex project, I prefer to:",
            &[
                ("detailed_plan", "Create a detailed plan and follow it systematically", 1.0),
                ("research_first", "Research extensively before starting any work", 0.85),
                ("flexible_approach", "Start with a rough plan and adapt as I go", 0.7),
                ("dive_in", "Dive in immediately and figure it out along the way", 0.4),
            ],
        ),
        question(
            "psych_2",
            SectionKind::Psychometric,
            Dimension::Psychometric,
            "When facing a security incident under pressure, I typically:",
            &[
                ("stay_calm", "Remain calm and work through the problem methodically", 1.0),
                ("prioritize", "Focus on the most critical issues first", 0.9),
                ("get_energized", "Feel energized and motivated by the challenge", 0.75),
                ("seek_help", "Quickly involve team members and delegate tasks", 0.6),
            ],
        ),
        question(
            "psych_3",
            SectionKind::Psychometric,
            Dimension::Psychometric,
            "How do you typically respond to new technologies or security threats?",
            &[
                ("eager_explore", "I'm eager to explore and understand them immediately", 1.0),
                ("cautious_research", "I research carefully before engaging with them", 0.75),
                ("learn_needed", "I learn about them only when necessary for my work", 0.45),
                ("wait_proven", "I wait until they're proven and well-documented", 0.3),
            ],
        ),
    ]
}

fn technical_questions() -> Vec<Question> {
    vec![
        question(
            "tech_1",
            SectionKind::Technical,
            Dimension::Technical,
            "Which protocol is commonly used for lightweight communication in IoT devices?",
            &[
                ("mqtt", "MQTT (Message Queuing Telemetry Transport)", 1.0),
                ("http", "HTTP (Hypertext Transfer Protocol)", 0.25),
                ("ftp", "FTP (File Transfer Protocol)", 0.0),
                ("smtp", "SMTP (Simple Mail Transfer Protocol)", 0.0),
            ],
        ),
        question(
            "tech_2",
            SectionKind::Technical,
            Dimension::Technical,
            "What is the primary security concern with default passwords on IoT devices?",
            &[
                ("easy_access", "They provide easy unauthorized access to attackers", 1.0),
                ("compatibility", "They cause compatibility issues with networks", 0.1),
                ("performance", "They slow down device performance", 0.0),
                ("battery_life", "They drain battery life faster", 0.0),
            ],
        ),
        question(
            "tech_3",
            SectionKind::Technical,
            Dimension::Technical,
            "In IoT security, what is the purpose of implementing AES encryption?",
            &[
                (
                    "data_protection",
                    "To protect data confidentiality during transmission and storage",
                    1.0,
                ),
                ("device_authentication", "To authenticate devices on the network", 0.25),
                ("network_routing", "To improve network routing efficiency", 0.0),
                ("power_management", "To optimize power consumption", 0.0),
            ],
        ),
    ]
}

fn wiscar_questions() -> Vec<Question> {
    vec![
        question(
            "wiscar_will",
            SectionKind::Wiscar,
            Dimension::Wiscar(WiscarFacet::Will),
            "When debugging a complex IoT security vulnerability that takes weeks to resolve, I:",
            &[
                (
                    "persist_enjoy",
                    "Persist with determination and actually enjoy the challenge",
                    1.0,
                ),
                ("persist_duty", "Continue working on it because it's my responsibility", 0.8),
                ("seek_help_continue", "Seek help from others but continue my efforts", 0.7),
                ("prefer_switch", "Prefer to switch to other tasks when possible", 0.3),
            ],
        ),
        question(
            "wiscar_interest",
            SectionKind::Wiscar,
            Dimension::Wiscar(WiscarFacet::Interest),
            "Which IoT security activity would you find most engaging?",
            &[
                ("penetration_testing", "Conducting penetration tests on IoT networks", 1.0),
                ("firmware_analysis", "Analyzing firmware for security vulnerabilities", 0.9),
                ("incident_response", "Responding to IoT security incidents", 0.8),
                ("policy_development", "Developing security policies and procedures", 0.5),
            ],
        ),
        question(
            "wiscar_skill",
            SectionKind::Wiscar,
            Dimension::Wiscar(WiscarFacet::Skill),
            "How would you rate your current programming skills?",
            &[
                (
                    "advanced",
                    "Advanced - I can code complex applications in multiple languages",
                    1.0,
                ),
                ("intermediate", "Intermediate - I'm comfortable with basic programming tasks", 0.7),
                ("beginner", "Beginner - I understand basics but need more practice", 0.4),
                ("none", "No programming experience", 0.1),
            ],
        ),
        question(
            "wiscar_cognitive",
            SectionKind::Wiscar,
            Dimension::Wiscar(WiscarFacet::Cognitive),
            "When tracing a fault through a system with many interacting components, I:",
            &[
                (
                    "map_system",
                    "Sketch how the components fit together, then isolate the fault layer by layer",
                    1.0,
                ),
                (
                    "halve_search",
                    "Narrow the search by repeatedly splitting the system in half",
                    0.85,
                ),
                ("trial_error", "Try likely fixes one at a time until something works", 0.4),
                ("need_guidance", "Ask someone who knows the system to point me at the cause", 0.2),
            ],
        ),
        question(
            "wiscar_ability",
            SectionKind::Wiscar,
            Dimension::Wiscar(WiscarFacet::AbilityToLearn),
            "When a tool or standard I rely on is replaced by something new, I:",
            &[
                (
                    "primary_docs",
                    "Enjoy relearning from the primary documentation and specs",
                    1.0,
                ),
                ("structured_course", "Work through a structured course before switching over", 0.75),
                ("learn_from_peers", "Pick it up gradually from colleagues who adopted it first", 0.6),
                ("stick_with_old", "Keep using the old one for as long as possible", 0.2),
            ],
        ),
        question(
            "wiscar_real_world",
            SectionKind::Wiscar,
            Dimension::Wiscar(WiscarFacet::RealWorld),
            "Which part of the day-to-day reality of security work sounds most acceptable to you?",
            &[
                (
                    "on_call",
                    "Being on call for incidents, including the occasional late night",
                    1.0,
                ),
                (
                    "audits_reports",
                    "Methodical audit work and writing detailed findings reports",
                    0.8,
                ),
                ("project_only", "Project work during office hours, handing off incidents", 0.5),
                ("avoid_pressure", "I would rather avoid incident pressure entirely", 0.2),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_futurefit_catalog_is_valid() {
        let catalog = futurefit_catalog().expect("fixed catalog must pass validation");
        assert_eq!(catalog.section_count(), 4);
        assert_eq!(catalog.question_count(), 14);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let catalog = futurefit_catalog().unwrap();
        let order: Vec<SectionKind> = (0..catalog.section_count())
            .map(|i| catalog.section_at(i))
            .collect();
        assert_eq!(
            order,
            vec![
                SectionKind::Introduction,
                SectionKind::Psychometric,
                SectionKind::Technical,
                SectionKind::Wiscar,
            ]
        );
    }

    #[test]
    fn test_every_wiscar_facet_has_a_feeding_question() {
        let catalog = futurefit_catalog().unwrap();
        for facet in WiscarFacet::ALL {
            let covered = catalog
                .questions()
                .any(|q| q.dimension == Dimension::Wiscar(facet));
            assert!(covered, "facet {facet:?} has no feeding question");
        }
    }

    #[test]
    fn test_every_question_has_a_full_credit_option() {
        // Dimension scores can only reach 100 if each question's best option
        // earns full weight.
        let catalog = futurefit_catalog().unwrap();
        for q in catalog.questions() {
            assert_eq!(q.max_weight(), 1.0, "question `{}` caps below 1.0", q.id);
        }
    }

    #[test]
    fn test_questions_carry_their_sections() {
        let catalog = futurefit_catalog().unwrap();
        for index in 0..catalog.section_count() {
            let kind = catalog.section_at(index);
            for q in catalog.questions_for_section(index) {
                assert_eq!(q.section, kind, "question `{}` filed under wrong section", q.id);
            }
        }
    }
}
