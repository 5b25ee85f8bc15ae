//! Record types for saved attempts.
//!
//! An [`AttemptRecord`] is the immutable snapshot written when a finished
//! attempt is saved. Field names and value spellings are the wire format:
//! lowercase mark states, `correct`/`wrong`/`empty` count keys, and a
//! minute-precision local `date` string.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use optigrade_core::question::{Choice, Mark};
use optigrade_core::Attempt;

/// Snapshot of one saved attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Attempt title as entered by the user.
    pub title: String,
    /// Creation time, `YYYY-MM-DD HH:MM` in local time.
    pub date: String,
    /// Final score, one decimal.
    pub score: f64,
    /// Count of correct-marked questions.
    pub correct: u32,
    /// Count of wrong-marked questions.
    pub wrong: u32,
    /// Count of empty questions (marked empty or never touched).
    pub empty: u32,
    /// Wrong ratio the score was computed with.
    pub wrong_ratio: u32,
    /// Per-question entries, sheet order.
    pub questions: Vec<QuestionRecord>,
}

/// One question inside a saved record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub number: u8,
    pub selected_option: Option<Choice>,
    pub state: Mark,
    pub is_correct: bool,
    pub was_empty: bool,
}

impl AttemptRecord {
    /// Snapshot an attempt at the given instant.
    ///
    /// The caller passes the timestamp so the record date and the filename
    /// stamp derived from the same instant always agree.
    pub fn from_attempt(attempt: &Attempt, at: DateTime<Local>) -> Self {
        let tally = attempt.tally();
        let questions = attempt
            .questions()
            .iter()
            .map(|q| QuestionRecord {
                number: q.number,
                selected_option: q.selected,
                state: q.mark,
                is_correct: q.mark == Mark::Correct && q.selected.is_some(),
                was_empty: q.was_empty,
            })
            .collect();

        Self {
            title: attempt.title().to_string(),
            date: at.format("%Y-%m-%d %H:%M").to_string(),
            score: tally.score,
            correct: tally.correct,
            wrong: tally.wrong,
            empty: tally.empty,
            wrong_ratio: attempt.wrong_ratio(),
            questions,
        }
    }

    /// The score band this record falls into.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

impl QuestionRecord {
    /// Human-readable one-liner for detail views.
    pub fn describe(&self) -> String {
        match (self.state, self.selected_option) {
            (Mark::Correct, Some(c)) => format!("{c} picked, judged correct"),
            (Mark::Correct, None) => "judged correct, no pick recorded".into(),
            (Mark::Wrong, Some(c)) => format!("{c} picked, judged wrong"),
            (Mark::Wrong, None) => "judged wrong, no pick recorded".into(),
            (Mark::Empty, Some(c)) => format!("{c} picked, counted empty"),
            (Mark::Empty, None) => "left empty".into(),
            (Mark::Unmarked, Some(c)) => format!("{c} picked, not judged"),
            (Mark::Unmarked, None) => "untouched".into(),
        }
    }
}

/// Coarse score classification used when rendering history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 85 and up.
    Excellent,
    /// 70 to 85.
    Good,
    /// 60 to 70.
    Fair,
    /// 50 to 60.
    Pass,
    /// Below 50.
    Fail,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else if score >= 50.0 {
            ScoreBand::Pass
        } else {
            ScoreBand::Fail
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreBand::Excellent => write!(f, "excellent"),
            ScoreBand::Good => write!(f, "good"),
            ScoreBand::Fair => write!(f, "fair"),
            ScoreBand::Pass => write!(f, "pass"),
            ScoreBand::Fail => write!(f, "fail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use optigrade_core::question::MarkKind;

    fn graded_attempt() -> Attempt {
        let mut a = Attempt::new("Midterm rehearsal").unwrap();
        for n in 1..=10 {
            a.select(n, Choice::A).unwrap();
            a.mark(n, MarkKind::Correct).unwrap();
        }
        for n in 11..=18 {
            a.select(n, Choice::B).unwrap();
            a.mark(n, MarkKind::Wrong).unwrap();
        }
        // 19 picked but counted empty, 20 never touched.
        a.select(19, Choice::C).unwrap();
        a.mark(19, MarkKind::Empty).unwrap();
        a.finish().unwrap();
        a
    }

    fn stamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn snapshot_counts_and_date() {
        let record = AttemptRecord::from_attempt(&graded_attempt(), stamp());
        assert_eq!(record.title, "Midterm rehearsal");
        assert_eq!(record.date, "2025-03-14 09:26");
        assert_eq!(record.score, 40.0);
        assert_eq!(
            (record.correct, record.wrong, record.empty),
            (10, 8, 2)
        );
        assert_eq!(record.wrong_ratio, 4);
        assert_eq!(record.questions.len(), 20);
    }

    #[test]
    fn empty_with_pick_keeps_selection_in_record() {
        let record = AttemptRecord::from_attempt(&graded_attempt(), stamp());
        let q19 = &record.questions[18];
        assert_eq!(q19.state, Mark::Empty);
        assert_eq!(q19.selected_option, Some(Choice::C));
        assert!(q19.was_empty);
        assert!(!q19.is_correct);
    }

    #[test]
    fn is_correct_requires_mark_and_pick() {
        let record = AttemptRecord::from_attempt(&graded_attempt(), stamp());
        assert!(record.questions[0].is_correct);
        assert!(!record.questions[10].is_correct);
        assert!(!record.questions[19].is_correct);
    }

    #[test]
    fn wire_format_spelling() {
        let record = AttemptRecord::from_attempt(&graded_attempt(), stamp());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"correct\":10"));
        assert!(json.contains("\"wrong\":8"));
        assert!(json.contains("\"empty\":2"));
        assert!(json.contains("\"state\":\"wrong\""));
        assert!(json.contains("\"selected_option\":\"A\""));
        assert!(json.contains("\"selected_option\":null"));
    }

    #[test]
    fn record_serde_roundtrip() {
        let record = AttemptRecord::from_attempt(&graded_attempt(), stamp());
        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: AttemptRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn describe_variants() {
        let record = AttemptRecord::from_attempt(&graded_attempt(), stamp());
        assert_eq!(record.questions[0].describe(), "A picked, judged correct");
        assert_eq!(record.questions[10].describe(), "B picked, judged wrong");
        assert_eq!(record.questions[18].describe(), "C picked, counted empty");
        assert_eq!(record.questions[19].describe(), "untouched");
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::from_score(100.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(85.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(84.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(50.0), ScoreBand::Pass);
        assert_eq!(ScoreBand::from_score(40.0), ScoreBand::Fail);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Fail);
    }
}
