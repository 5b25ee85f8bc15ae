//! Validation error types.
//!
//! These errors cover the validation taxonomy of the grading core: invalid
//! settings, out-of-range question numbers, and lifecycle guard violations.
//! All of them are rejected before any state mutation takes place.

use thiserror::Error;

use crate::attempt::QUESTION_COUNT;

/// Errors produced by the grading core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeError {
    /// The wrong ratio was outside the accepted {2, 3, 4, 5} range.
    #[error("wrong ratio must be between 2 and 5, got {0}")]
    InvalidWrongRatio(u32),

    /// A question number outside 1..=20 was referenced.
    #[error("question number must be between 1 and {QUESTION_COUNT}, got {0}")]
    QuestionOutOfRange(u8),

    /// An attempt title must be a non-empty string.
    #[error("attempt title must not be empty")]
    EmptyTitle,

    /// Finish was requested on an attempt that is already finished.
    #[error("attempt is already finished")]
    AlreadyCompleted,

    /// A finished-only operation was requested on an in-progress attempt.
    #[error("attempt has not been finished yet")]
    NotCompleted,

    /// Save was requested on an attempt that is already saved.
    #[error("attempt has already been saved")]
    AlreadySaved,

    /// The wrong ratio can no longer change once the attempt is finished.
    #[error("wrong ratio cannot change after the attempt is finished")]
    RatioLocked,

    /// The title can no longer change once the attempt is saved.
    #[error("title cannot change after the attempt is saved")]
    TitleLocked,
}
