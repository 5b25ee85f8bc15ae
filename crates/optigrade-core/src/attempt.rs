//! Attempt lifecycle: a full 20-question grading session.
//!
//! The attempt owns the question sequence and gates every user intent with
//! the validation rules, so callers can apply intents blindly and surface
//! whatever comes back. Score and counts are derived on demand via
//! [`crate::scoring::tally`], never stored.

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::question::{Choice, MarkKind, MarkOutcome, Question, SelectOutcome};
use crate::scoring::{tally, Tally};

/// Questions per attempt. Fixed by the sheet layout.
pub const QUESTION_COUNT: usize = 20;

/// Default wrong ratio: four wrong marks offset one correct mark.
pub const DEFAULT_WRONG_RATIO: u32 = 4;

/// One grading session over a 20-question sheet.
///
/// Lifecycle: in progress → finished (questions locked, score exposed) →
/// optionally saved. A new attempt replaces the old one wholesale; there is
/// no un-finish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    title: String,
    wrong_ratio: u32,
    questions: Vec<Question>,
    completed: bool,
    saved: bool,
}

impl Attempt {
    /// A fresh attempt with 20 unmarked questions and the default ratio.
    pub fn new(title: impl Into<String>) -> Result<Self, GradeError> {
        Self::with_wrong_ratio(title, DEFAULT_WRONG_RATIO)
    }

    /// A fresh attempt with an explicit wrong ratio.
    pub fn with_wrong_ratio(title: impl Into<String>, ratio: u32) -> Result<Self, GradeError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GradeError::EmptyTitle);
        }
        validate_ratio(ratio)?;
        Ok(Self {
            title,
            wrong_ratio: ratio,
            questions: (1..=QUESTION_COUNT as u8).map(Question::new).collect(),
            completed: false,
            saved: false,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn wrong_ratio(&self) -> u32 {
        self.wrong_ratio
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by its 1-based sheet number.
    pub fn question(&self, number: u8) -> Result<&Question, GradeError> {
        self.index(number).map(|i| &self.questions[i])
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Rename the attempt. Editable until the attempt is saved.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), GradeError> {
        if self.saved {
            return Err(GradeError::TitleLocked);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GradeError::EmptyTitle);
        }
        self.title = title;
        Ok(())
    }

    /// Change the wrong ratio. Mutable until the attempt is finished.
    pub fn set_wrong_ratio(&mut self, ratio: u32) -> Result<(), GradeError> {
        if self.completed {
            return Err(GradeError::RatioLocked);
        }
        validate_ratio(ratio)?;
        self.wrong_ratio = ratio;
        Ok(())
    }

    /// Apply a selection intent to one question.
    pub fn select(&mut self, number: u8, choice: Choice) -> Result<SelectOutcome, GradeError> {
        let i = self.index(number)?;
        Ok(self.questions[i].select(choice))
    }

    /// Apply a grading mark to one question.
    pub fn mark(&mut self, number: u8, kind: MarkKind) -> Result<MarkOutcome, GradeError> {
        let i = self.index(number)?;
        Ok(self.questions[i].mark(kind))
    }

    /// Current score and bucket counts.
    pub fn tally(&self) -> Tally {
        tally(&self.questions, self.wrong_ratio)
    }

    /// Finish the attempt: lock every question and expose the score.
    ///
    /// Finishing twice leaves the state untouched and reports
    /// [`GradeError::AlreadyCompleted`] so the caller can tell the user.
    pub fn finish(&mut self) -> Result<Tally, GradeError> {
        if self.completed {
            return Err(GradeError::AlreadyCompleted);
        }
        for q in &mut self.questions {
            q.lock();
        }
        self.completed = true;
        Ok(self.tally())
    }

    /// Record that the attempt was persisted. Valid exactly once, and only
    /// after finishing; the caller performs the actual write first so a
    /// failed write never flips this flag.
    pub fn mark_saved(&mut self) -> Result<(), GradeError> {
        if !self.completed {
            return Err(GradeError::NotCompleted);
        }
        if self.saved {
            return Err(GradeError::AlreadySaved);
        }
        self.saved = true;
        Ok(())
    }

    /// Wipe every question's selection and mark, keeping title and ratio.
    ///
    /// On a finished attempt the locks are re-applied afterwards, so the
    /// attempt stays "completed" with a fully unmarked sheet, and the saved
    /// flag resets so the wiped state cannot masquerade as persisted.
    pub fn clear(&mut self) {
        for q in &mut self.questions {
            q.reset();
        }
        if self.completed {
            for q in &mut self.questions {
                q.lock();
            }
        }
        self.saved = false;
    }

    /// Whether any question carries a selection or a mark.
    pub fn has_entries(&self) -> bool {
        self.questions
            .iter()
            .any(|q| q.selected.is_some() || q.mark != crate::question::Mark::Unmarked)
    }

    fn index(&self, number: u8) -> Result<usize, GradeError> {
        if number == 0 || number as usize > QUESTION_COUNT {
            return Err(GradeError::QuestionOutOfRange(number));
        }
        Ok(number as usize - 1)
    }
}

fn validate_ratio(ratio: u32) -> Result<(), GradeError> {
    if !(2..=5).contains(&ratio) {
        return Err(GradeError::InvalidWrongRatio(ratio));
    }
    Ok(())
}
