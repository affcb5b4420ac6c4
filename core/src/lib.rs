//! Logic for the Multitainment times-tables quiz: settings, question
//! generation, answer checking and the round state machine.

pub mod error;
pub mod game;
pub mod question;
pub mod round;
pub mod settings;

pub use error::{GameError, ParseQuestionError, SettingsError};
pub use game::{Game, Notice, Outcome, Phase, Submission, Verdict};
pub use question::{parse_answer, Question, MULTIPLIER_RANGE};
pub use round::Round;
pub use settings::{QuestionCount, QuizSettings, TableRange};
