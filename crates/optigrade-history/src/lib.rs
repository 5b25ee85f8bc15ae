//! optigrade-history — persisted attempt records.
//!
//! Defines the on-disk record format for saved attempts and the
//! directory-backed store that writes, lists, and deletes them. The store
//! depends only on the attempt's serialized shape; it never drives the
//! grading state machine.

pub mod record;
pub mod store;

pub use record::{AttemptRecord, QuestionRecord, ScoreBand};
pub use store::{HistoryError, HistoryStore, PurgeOutcome, SavedRecord};
