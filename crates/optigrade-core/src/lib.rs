//! optigrade-core — Answer-sheet state machine, scoring, and attempt lifecycle.
//!
//! This crate defines the per-question answer/mark state machine, the pure
//! scoring function, and the attempt lifecycle controller that the rest of
//! the optigrade system builds on. It performs no I/O.

pub mod attempt;
pub mod error;
pub mod question;
pub mod scoring;

pub use attempt::{Attempt, DEFAULT_WRONG_RATIO, QUESTION_COUNT};
pub use error::GradeError;
pub use question::{Choice, Mark, MarkKind, MarkOutcome, Question, SelectOutcome};
pub use scoring::{tally, Tally};
