//! Per-question answer and grading state machine.
//!
//! A question carries two orthogonal pieces of state: the option the solver
//! picked (`selected`) and the grading mark a grader applied (`mark`). The
//! transition rules coupling the two live in [`Question::select`] and
//! [`Question::mark`], which return explicit outcomes so the owning attempt
//! can decide whether anything changed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One option on the fixed answer alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
    E,
}

impl Choice {
    /// All options in sheet order.
    pub const ALL: [Choice; 5] = [Choice::A, Choice::B, Choice::C, Choice::D, Choice::E];
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::A => write!(f, "A"),
            Choice::B => write!(f, "B"),
            Choice::C => write!(f, "C"),
            Choice::D => write!(f, "D"),
            Choice::E => write!(f, "E"),
        }
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            "C" => Ok(Choice::C),
            "D" => Ok(Choice::D),
            "E" => Ok(Choice::E),
            other => Err(format!("unknown option: {other} (expected A-E)")),
        }
    }
}

/// The grading mark on a question, independent of the selected option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    #[default]
    Unmarked,
    Correct,
    Wrong,
    Empty,
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Unmarked => write!(f, "unmarked"),
            Mark::Correct => write!(f, "correct"),
            Mark::Wrong => write!(f, "wrong"),
            Mark::Empty => write!(f, "empty"),
        }
    }
}

/// A mark a grader can apply. `Unmarked` is reachable only by toggling a
/// mark off, so it is not part of this alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Correct,
    Wrong,
    Empty,
}

impl From<MarkKind> for Mark {
    fn from(kind: MarkKind) -> Self {
        match kind {
            MarkKind::Correct => Mark::Correct,
            MarkKind::Wrong => Mark::Wrong,
            MarkKind::Empty => Mark::Empty,
        }
    }
}

impl fmt::Display for MarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Mark::from(*self).fmt(f)
    }
}

impl FromStr for MarkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "correct" => Ok(MarkKind::Correct),
            "wrong" => Ok(MarkKind::Wrong),
            "empty" => Ok(MarkKind::Empty),
            other => Err(format!(
                "unknown mark kind: {other} (expected correct, wrong, or empty)"
            )),
        }
    }
}

/// What a call to [`Question::select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The selection was rejected; nothing changed.
    Rejected,
    /// The given option is now selected.
    Selected,
    /// The previously selected option was cleared.
    Cleared,
    /// The question stays wrong-marked; the option was recorded as the
    /// true answer instead of replacing the selection.
    TrueAnswerRecorded,
}

impl SelectOutcome {
    /// Whether the call changed any state.
    pub fn accepted(self) -> bool {
        self != SelectOutcome::Rejected
    }
}

/// What a call to [`Question::mark`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The mark is now the given kind.
    Marked,
    /// Re-applying the current mark toggled the question back to unmarked.
    Reverted,
}

/// One question on the sheet: its number, the solver's pick, and the
/// grader's mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position on the sheet. Never changes after creation.
    pub number: u8,
    /// The option currently holding the "picked" designation, if any.
    pub selected: Option<Choice>,
    /// The grading mark.
    pub mark: Mark,
    /// Set when the attempt is finished; blocks new selections except on
    /// empty-marked questions.
    pub locked: bool,
    /// The option a grader confirmed or substituted as the true answer.
    pub correct_answer: Option<Choice>,
    /// Whether this question was ever marked empty. Reporting only; scoring
    /// reads `mark` directly.
    pub was_empty: bool,
}

impl Question {
    /// A fresh question: unmarked, nothing selected, unlocked.
    pub fn new(number: u8) -> Self {
        Self {
            number,
            selected: None,
            mark: Mark::Unmarked,
            locked: false,
            correct_answer: None,
            was_empty: false,
        }
    }

    /// Apply a selection intent.
    ///
    /// Locked questions reject selections unless marked empty (an empty
    /// question stays re-selectable so the grader can record what the solver
    /// actually picked without affecting the empty count). A correct or
    /// wrong mark freezes the pick, with one exception: selecting on a
    /// wrong-marked question that already has a pick records the option as
    /// the true answer rather than replacing the selection.
    pub fn select(&mut self, choice: Choice) -> SelectOutcome {
        if self.locked && self.mark != Mark::Empty {
            return SelectOutcome::Rejected;
        }

        match self.mark {
            Mark::Wrong if self.selected.is_some() => {
                self.correct_answer = Some(choice);
                SelectOutcome::TrueAnswerRecorded
            }
            Mark::Correct | Mark::Wrong => SelectOutcome::Rejected,
            // Unmarked and empty behave the same: picking the selected
            // option again clears it, anything else replaces it.
            Mark::Unmarked | Mark::Empty => {
                if self.selected == Some(choice) {
                    self.selected = None;
                    SelectOutcome::Cleared
                } else {
                    self.selected = Some(choice);
                    SelectOutcome::Selected
                }
            }
        }
    }

    /// Apply a grading mark.
    ///
    /// Re-applying the current mark toggles the question back to unmarked
    /// without touching the selection. Otherwise the mark is replaced:
    /// `Correct` snapshots the current pick as the true answer, `Empty`
    /// latches `was_empty`, `Wrong` records nothing (a later `select` call
    /// is the override path for the true answer).
    pub fn mark(&mut self, kind: MarkKind) -> MarkOutcome {
        if self.mark == Mark::from(kind) {
            self.mark = Mark::Unmarked;
            return MarkOutcome::Reverted;
        }

        self.mark = kind.into();
        match kind {
            MarkKind::Correct => {
                if let Some(choice) = self.selected {
                    self.correct_answer = Some(choice);
                }
            }
            MarkKind::Wrong => {}
            MarkKind::Empty => {
                self.was_empty = true;
            }
        }
        MarkOutcome::Marked
    }

    /// Lock the question against new selections. Marks stay editable; what
    /// counts as correct or wrong is solely a function of the marks applied,
    /// never derived from an answer key.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Restore the initial state: unmarked, no selection, unlocked.
    pub fn reset(&mut self) {
        let number = self.number;
        *self = Question::new(number);
    }
}
