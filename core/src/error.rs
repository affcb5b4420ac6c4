//! Error types for quiz settings, question parsing and game transitions.

use thiserror::Error;

use crate::game::Notice;

/// Rejected quiz settings, usually from a hand-edited config file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("table bound {0} is outside {min}..={max}", min = crate::settings::TABLE_MIN, max = crate::settings::TABLE_MAX)]
    BoundOutOfRange(u8),

    #[error("table range is empty: min {min} must be below max {max}")]
    EmptyRange { min: u8, max: u8 },

    #[error("question count must be 5, 10, 15 or 20, got {0}")]
    InvalidQuestionCount(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQuestionError {
    #[error("no multiplication operator in {0:?}")]
    MissingOperator(String),

    #[error("invalid operand {0:?}")]
    InvalidOperand(String),
}

/// Submissions the game refuses in its current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game not started")]
    NotStarted,

    #[error("previous answer has not been acknowledged")]
    AwaitingAcknowledgement,
}

impl GameError {
    /// The alert shown for this refusal, if the user should see one.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            GameError::NotStarted => Some(Notice::not_started()),
            GameError::AwaitingAcknowledgement => None,
        }
    }
}
