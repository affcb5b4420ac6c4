use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::question::{Question, MULTIPLIER_RANGE};
use crate::settings::QuizSettings;

/// The questions of one round, fixed at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    questions: Vec<Question>,
    started_at: DateTime<Utc>,
}

impl Round {
    pub fn generate<R: Rng>(settings: &QuizSettings, rng: &mut R) -> Self {
        let range = settings.range;
        let questions: Vec<Question> = (0..settings.count.get())
            .map(|_| {
                let a = rng.gen_range(range.min()..=range.max());
                let b = rng.gen_range(MULTIPLIER_RANGE);
                Question::new(a, b)
            })
            .collect();

        tracing::debug!(
            count = questions.len(),
            min = range.min(),
            max = range.max(),
            "generated round"
        );

        Self {
            questions,
            started_at: Utc::now(),
        }
    }

    /// Deterministic for `Some(seed)`, entropy-seeded otherwise.
    pub fn seeded(settings: &QuizSettings, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate(settings, &mut rng)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Question> {
        self.questions.get(index).copied()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{QuestionCount, TableRange};

    fn settings(min: u8, max: u8, count: QuestionCount) -> QuizSettings {
        QuizSettings {
            range: TableRange::new(min, max).unwrap(),
            count,
        }
    }

    #[test]
    fn length_matches_question_count() {
        for count in QuestionCount::ALL {
            let round = Round::seeded(&settings(2, 12, count), Some(7));
            assert_eq!(round.len(), count.get());
            assert_eq!(round.last_index(), count.get() - 1);
        }
    }

    #[test]
    fn operands_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF);
        for (min, max) in [(1, 2), (2, 12), (5, 6), (13, 20), (1, 20)] {
            let s = settings(min, max, QuestionCount::Twenty);
            for _ in 0..50 {
                let round = Round::generate(&s, &mut rng);
                for q in round.questions() {
                    assert!(s.range.contains(q.a), "{} outside {}..={}", q.a, min, max);
                    assert!(MULTIPLIER_RANGE.contains(&q.b));
                }
            }
        }
    }

    #[test]
    fn both_range_ends_are_reachable() {
        let s = settings(4, 5, QuestionCount::Twenty);
        let mut rng = StdRng::seed_from_u64(1);
        let seen: std::collections::HashSet<u8> = (0..20)
            .flat_map(|_| Round::generate(&s, &mut rng).questions().to_vec())
            .map(|q| q.a)
            .collect();
        assert!(seen.contains(&4) && seen.contains(&5));
    }

    #[test]
    fn same_seed_same_questions() {
        let s = settings(2, 12, QuestionCount::Fifteen);
        let a = Round::seeded(&s, Some(42));
        let b = Round::seeded(&s, Some(42));
        assert_eq!(a.questions(), b.questions());
    }

    #[test]
    fn unseeded_round_is_valid() {
        let round = Round::seeded(&QuizSettings::default(), None);
        assert_eq!(round.len(), 5);
        assert!(round.get(5).is_none());
        assert!(!round.is_empty());
    }
}
