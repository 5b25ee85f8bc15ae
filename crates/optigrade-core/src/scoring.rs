//! Aggregate scoring over a question sequence.
//!
//! Pure computation: counts the correct/wrong/empty buckets and applies the
//! wrong-answer penalty. A question that is unmarked but has a pick belongs
//! to no bucket — it is pending judgment and stays out of the counts until
//! a grader marks it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::question::{Mark, Question};

/// Score and bucket counts for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    /// Questions marked correct.
    pub correct: u32,
    /// Questions marked wrong.
    pub wrong: u32,
    /// Questions marked empty, plus untouched ones (unmarked, no pick).
    pub empty: u32,
    /// 0.0..=100.0, rounded to one decimal. Never negative.
    pub score: f64,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {:.1}/100 | Correct: {} | Wrong: {} | Empty: {}",
            self.score, self.correct, self.wrong, self.empty
        )
    }
}

/// Compute the tally for a question sequence with the given wrong ratio
/// (how many wrong marks offset one correct mark).
///
/// `score = max(0, (correct - wrong / ratio) / n * 100)`, rounded to one
/// decimal. Unmarked questions without a pick count as empty so an attempt
/// scored before every question is judged keeps its full denominator.
pub fn tally(questions: &[Question], wrong_ratio: u32) -> Tally {
    let mut correct = 0u32;
    let mut wrong = 0u32;
    let mut empty = 0u32;

    for q in questions {
        match q.mark {
            Mark::Correct => correct += 1,
            Mark::Wrong => wrong += 1,
            Mark::Empty => empty += 1,
            Mark::Unmarked if q.selected.is_none() => empty += 1,
            Mark::Unmarked => {}
        }
    }

    if questions.is_empty() || wrong_ratio == 0 {
        return Tally {
            correct,
            wrong,
            empty,
            score: 0.0,
        };
    }

    let raw = (correct as f64 - wrong as f64 / wrong_ratio as f64)
        / questions.len() as f64
        * 100.0;

    Tally {
        correct,
        wrong,
        empty,
        score: round_one(raw.max(0.0)),
    }
}

fn round_one(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{Choice, MarkKind};

    fn sheet(correct: usize, wrong: usize, empty: usize) -> Vec<Question> {
        assert!(correct + wrong + empty <= 20);
        let mut questions: Vec<Question> = (1..=20).map(Question::new).collect();
        let mut it = questions.iter_mut();
        for q in it.by_ref().take(correct) {
            q.select(Choice::A);
            q.mark(MarkKind::Correct);
        }
        for q in it.by_ref().take(wrong) {
            q.select(Choice::B);
            q.mark(MarkKind::Wrong);
        }
        for q in it.by_ref().take(empty) {
            q.mark(MarkKind::Empty);
        }
        questions
    }

    #[test]
    fn all_correct_scores_hundred() {
        let t = tally(&sheet(20, 0, 0), 4);
        assert_eq!(t.score, 100.0);
        assert_eq!((t.correct, t.wrong, t.empty), (20, 0, 0));
    }

    #[test]
    fn all_wrong_clamps_to_zero() {
        let t = tally(&sheet(0, 20, 0), 4);
        assert_eq!(t.score, 0.0);
        assert_eq!(t.wrong, 20);
    }

    #[test]
    fn mixed_sheet_applies_penalty() {
        // 10 correct, 8 wrong at ratio 4: (10 - 2) / 20 * 100 = 40.0
        let t = tally(&sheet(10, 8, 2), 4);
        assert_eq!(t.score, 40.0);
        assert_eq!((t.correct, t.wrong, t.empty), (10, 8, 2));
    }

    #[test]
    fn matches_formula_across_ratios() {
        for ratio in 2..=5u32 {
            for correct in 0..=20u32 {
                for wrong in 0..=(20 - correct) {
                    let empty = 20 - correct - wrong;
                    let t = tally(&sheet(correct as usize, wrong as usize, empty as usize), ratio);
                    let raw = (correct as f64 - wrong as f64 / ratio as f64) / 20.0 * 100.0;
                    let expected = (raw.max(0.0) * 10.0).round() / 10.0;
                    assert_eq!(
                        t.score, expected,
                        "ratio={ratio} correct={correct} wrong={wrong}"
                    );
                }
            }
        }
    }

    #[test]
    fn untouched_questions_count_as_empty() {
        // Nothing marked, nothing picked: all 20 are empty.
        let t = tally(&sheet(0, 0, 0), 4);
        assert_eq!(t.empty, 20);
        assert_eq!(t.score, 0.0);
    }

    #[test]
    fn unmarked_with_pick_counts_nowhere() {
        let mut questions = sheet(0, 0, 0);
        questions[0].select(Choice::C);
        let t = tally(&questions, 4);
        assert_eq!((t.correct, t.wrong, t.empty), (0, 0, 19));
    }

    #[test]
    fn empty_mark_with_pick_counts_as_empty() {
        let mut questions = sheet(0, 0, 0);
        questions[0].select(Choice::B);
        questions[0].mark(MarkKind::Empty);
        let t = tally(&questions, 4);
        assert_eq!(t.empty, 20);
        assert_eq!(questions[0].selected, Some(Choice::B));
    }

    #[test]
    fn reverting_a_mark_rescores_as_untouched() {
        let mut questions = sheet(0, 0, 0);
        questions[4].select(Choice::A);
        questions[4].mark(MarkKind::Correct);
        assert_eq!(tally(&questions, 4).correct, 1);
        // Toggle the mark off: back to unmarked-with-pick, no bucket.
        questions[4].mark(MarkKind::Correct);
        let t = tally(&questions, 4);
        assert_eq!((t.correct, t.wrong, t.empty), (0, 0, 19));
    }

    #[test]
    fn empty_slice_scores_zero() {
        let t = tally(&[], 4);
        assert_eq!(t.score, 0.0);
        assert_eq!((t.correct, t.wrong, t.empty), (0, 0, 0));
    }

    #[test]
    fn summary_line_format() {
        let t = tally(&sheet(10, 8, 2), 4);
        assert_eq!(
            t.to_string(),
            "Score: 40.0/100 | Correct: 10 | Wrong: 8 | Empty: 2"
        );
    }
}
