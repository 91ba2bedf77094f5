// Scoring engine: pure mapping from an accumulated answer map to a full
// assessment report. No handler computes scores inline; everything numeric
// lives in `engine`, everything textual in `guidance`.

pub mod engine;
pub mod guidance;

pub use engine::{recommend, score, NO_THRESHOLD, YES_THRESHOLD};
