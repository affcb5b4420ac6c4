//! Round state machine.
//!
//! ```text
//! NotStarted --start--> InProgress --wrong--> Verifying --acknowledge--> InProgress
//!                           |
//!                           +--right, last question--> NotStarted (Outcome reported)
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::question::{parse_answer, Question};
use crate::round::Round;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    InProgress,
    /// A wrong answer is being shown to the user.
    Verifying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub questions: usize,
    pub mistakes: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl Outcome {
    pub fn elapsed_secs(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds().max(0)
    }

    pub fn notice(&self) -> Notice {
        Notice::results(self.questions, self.mistakes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Correct { next: Question },
    Incorrect,
    Finished(Outcome),
}

/// Title and body of an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn not_started() -> Self {
        Self::new(
            "Game not started",
            "Press the start button at the top right to start the game!",
        )
    }

    pub fn incorrect() -> Self {
        Self::new("Incorrect", "Try again!")
    }

    pub fn results(questions: usize, mistakes: u32) -> Self {
        Self::new(
            "You won!",
            format!(
                "You answered {} questions correctly and got {} mistakes.",
                questions, mistakes
            ),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    round: Option<Round>,
    index: usize,
    mistakes: u32,
    phase: Phase,
    last_verdict: Option<Verdict>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            round: None,
            index: 0,
            mistakes: 0,
            phase: Phase::NotStarted,
            last_verdict: None,
        }
    }

    /// Begins `round`, discarding any round already in play.
    pub fn start(&mut self, round: Round) {
        if self.is_started() {
            tracing::info!(answered = self.index, "restarting round in progress");
        }
        // An empty round has nothing to play.
        if round.is_empty() {
            self.reset();
            return;
        }
        tracing::info!(questions = round.len(), "round started");

        *self = Self {
            round: Some(round),
            phase: Phase::InProgress,
            ..Self::new()
        };
    }

    pub fn submit(&mut self, input: &str) -> Result<Submission, GameError> {
        match self.phase {
            Phase::NotStarted => return Err(GameError::NotStarted),
            Phase::Verifying => return Err(GameError::AwaitingAcknowledgement),
            Phase::InProgress => {}
        }

        let (question, last_index, started_at) = match &self.round {
            Some(round) => match round.get(self.index) {
                Some(q) => (q, round.last_index(), round.started_at()),
                None => return Err(GameError::NotStarted),
            },
            None => return Err(GameError::NotStarted),
        };

        let answer = parse_answer(input);
        if !question.check(answer) {
            self.mistakes += 1;
            self.phase = Phase::Verifying;
            self.last_verdict = Some(Verdict::Incorrect);
            tracing::debug!(%question, answer, mistakes = self.mistakes, "incorrect answer");
            return Ok(Submission::Incorrect);
        }

        self.last_verdict = Some(Verdict::Correct);
        tracing::debug!(%question, index = self.index, "correct answer");

        if self.index == last_index {
            let outcome = Outcome {
                questions: last_index + 1,
                mistakes: self.mistakes,
                started_at,
                finished_at: Utc::now(),
            };
            tracing::info!(
                questions = outcome.questions,
                mistakes = outcome.mistakes,
                elapsed_secs = outcome.elapsed_secs(),
                "round finished"
            );
            self.reset();
            return Ok(Submission::Finished(outcome));
        }

        self.index += 1;
        match self.current_question() {
            Some(next) => Ok(Submission::Correct { next }),
            None => Err(GameError::NotStarted),
        }
    }

    /// Dismisses the incorrect-answer alert so the question can be retried.
    pub fn acknowledge(&mut self) {
        if self.phase == Phase::Verifying {
            self.phase = Phase::InProgress;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    pub fn current_question(&self) -> Option<Question> {
        self.round.as_ref()?.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }

    /// `(answered, total)` for the round in play.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.round.as_ref().map(|r| (self.index, r.len()))
    }
}
