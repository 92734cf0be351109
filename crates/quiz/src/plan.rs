//! Question-count plan derived from extracted text length

use serde::{Deserialize, Serialize};

/// Texts shorter than this get the smallest quiz.
const SHORT_TEXT_CHARS: usize = 1000;
/// Texts at least this long get the largest quiz.
const LONG_TEXT_CHARS: usize = 3000;

/// How many questions of each type to request.
///
/// `choice_count + short_count + essay_count == total` always holds; the
/// essay count absorbs whatever integer division leaves over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizPlan {
    pub total: usize,
    pub choice_count: usize,
    pub short_count: usize,
    pub essay_count: usize,
}

impl QuizPlan {
    /// Plan for a text of `text_length` characters: 6, 12 or 18 questions.
    #[must_use]
    pub fn for_text_length(text_length: usize) -> Self {
        let total = if text_length < SHORT_TEXT_CHARS {
            6
        } else if text_length < LONG_TEXT_CHARS {
            12
        } else {
            18
        };
        Self::with_total(total)
    }

    /// Split `total` into half choice, a third short answer, and the rest essay.
    #[must_use]
    pub fn with_total(total: usize) -> Self {
        let choice_count = total / 2;
        let short_count = total / 3;
        Self {
            total,
            choice_count,
            short_count,
            essay_count: total - choice_count - short_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_always_sum_to_total() {
        for len in (0..5000).step_by(7).chain([usize::MAX]) {
            let plan = QuizPlan::for_text_length(len);
            assert_eq!(
                plan.choice_count + plan.short_count + plan.essay_count,
                plan.total,
                "len={len}"
            );
        }
        for total in 0..50 {
            let plan = QuizPlan::with_total(total);
            assert_eq!(plan.choice_count + plan.short_count + plan.essay_count, total);
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(QuizPlan::for_text_length(0).total, 6);
        assert_eq!(QuizPlan::for_text_length(999).total, 6);
        assert_eq!(QuizPlan::for_text_length(1000).total, 12);
        assert_eq!(QuizPlan::for_text_length(2999).total, 12);
        assert_eq!(QuizPlan::for_text_length(3000).total, 18);
        assert_eq!(QuizPlan::for_text_length(1_000_000).total, 18);
    }

    #[test]
    fn test_type_split() {
        let plan = QuizPlan::with_total(18);
        assert_eq!((plan.choice_count, plan.short_count, plan.essay_count), (9, 6, 3));

        let plan = QuizPlan::with_total(12);
        assert_eq!((plan.choice_count, plan.short_count, plan.essay_count), (6, 4, 2));

        let plan = QuizPlan::for_text_length(500);
        assert_eq!(
            plan,
            QuizPlan {
                total: 6,
                choice_count: 3,
                short_count: 2,
                essay_count: 1,
            }
        );
    }

    #[test]
    fn test_remainder_goes_to_essay() {
        let plan = QuizPlan::with_total(7);
        assert_eq!((plan.choice_count, plan.short_count, plan.essay_count), (3, 2, 2));
    }
}
