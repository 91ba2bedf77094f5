//! Navigation state machine for one assessment session.
//!
//! One state per (section, question) pair reachable by in-order traversal,
//! plus a distinguished terminal `Complete` state. The session owns its
//! answer map exclusively; the catalog is passed by reference to every
//! operation and never stored, so a session is just data.
//!
//! Traversal requests outside valid bounds are absorbed as no-ops rather
//! than errors: navigation controls at the boundary are expected to be
//! disabled client-side, and an out-of-order click must not corrupt state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::assessment::catalog::Catalog;
use crate::models::question::Question;

/// Recording failures. Recoverable: the caller retries with a valid value.
#[derive(Debug, Error, PartialEq)]
pub enum AnswerError {
    #[error("`{value}` is not an option of question `{question}`")]
    InvalidAnswer { question: String, value: String },
}

/// Outcome of an `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Pointer moved to the next question (possibly in the next section).
    Moved,
    /// The terminal transition fired. Reported exactly once per session;
    /// the caller hands the answer map to the scoring engine.
    Completed,
    /// Nothing happened: current question unanswered, or already complete.
    Blocked,
}

/// A live assessment run. Created zeroed, mutated only via `record_answer`,
/// `advance` and `retreat`, discarded once `Completed` has been observed.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    section_index: usize,
    question_index: usize,
    answers: BTreeMap<String, String>,
    complete: bool,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            section_index: 0,
            question_index: 0,
            answers: BTreeMap::new(),
            complete: false,
        }
    }

    pub fn section_index(&self) -> usize {
        self.section_index
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The accumulated answer map, keyed by question id. Monotonic: entries
    /// are only ever added or overwritten, never removed.
    pub fn answers(&self) -> &BTreeMap<String, String> {
        &self.answers
    }

    /// The question at the current pointer, or `None` in the terminal state.
    pub fn current_question<'a>(&self, catalog: &'a Catalog) -> Option<&'a Question> {
        if self.complete {
            return None;
        }
        Some(&catalog.questions_for_section(self.section_index)[self.question_index])
    }

    /// The recorded answer for the current question, if any.
    pub fn current_answer(&self, catalog: &Catalog) -> Option<&str> {
        let question = self.current_question(catalog)?;
        self.answers.get(&question.id).map(String::as_str)
    }

    /// Stores or overwrites the answer for the question at the current
    /// pointer. No pointer side effects. No-op in the terminal state.
    ///
    /// # Errors
    ///
    /// `AnswerError::InvalidAnswer` if `value` is not among the current
    /// question's declared option values.
    pub fn record_answer(&mut self, catalog: &Catalog, value: &str) -> Result<(), AnswerError> {
        let Some(question) = self.current_question(catalog) else {
            return Ok(());
        };
        if question.option(value).is_none() {
            return Err(AnswerError::InvalidAnswer {
                question: question.id.clone(),
                value: value.to_string(),
            });
        }
        self.answers.insert(question.id.clone(), value.to_string());
        Ok(())
    }

    /// True iff the current question has a recorded answer. The sole gating
    /// precondition for forward navigation.
    pub fn can_advance(&self, catalog: &Catalog) -> bool {
        self.current_answer(catalog).is_some()
    }

    /// Moves the pointer forward one question, crossing into the next
    /// section's first question, or fires the terminal transition after the
    /// last question of the last section.
    pub fn advance(&mut self, catalog: &Catalog) -> Advance {
        if self.complete || !self.can_advance(catalog) {
            return Advance::Blocked;
        }

        let in_section = catalog.questions_for_section(self.section_index).len();
        if self.question_index + 1 < in_section {
            self.question_index += 1;
            Advance::Moved
        } else if self.section_index + 1 < catalog.section_count() {
            self.section_index += 1;
            self.question_index = 0;
            Advance::Moved
        } else {
            self.complete = true;
            Advance::Completed
        }
    }

    /// Moves the pointer back one question, crossing to the previous
    /// section's last question. No-op at (0, 0) and in the terminal state.
    pub fn retreat(&mut self, catalog: &Catalog) {
        if self.complete {
            return;
        }
        if self.question_index > 0 {
            self.question_index -= 1;
        } else if self.section_index > 0 {
            self.section_index -= 1;
            self.question_index = catalog.questions_for_section(self.section_index).len() - 1;
        }
    }

    /// Overall progress in [0, 100]: each section contributes an equal slice,
    /// filled in proportion to the pointer's position inside it. A
    /// presentation aid, but its monotonicity under `advance` is a tested
    /// property.
    pub fn progress_percent(&self, catalog: &Catalog) -> f64 {
        if self.complete {
            return 100.0;
        }
        let slice = 100.0 / catalog.section_count() as f64;
        let in_section = catalog.questions_for_section(self.section_index).len() as f64;
        self.section_index as f64 * slice + self.question_index as f64 / in_section * slice
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}
