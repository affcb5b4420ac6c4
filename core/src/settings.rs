//! Quiz configuration: which tables to draw from and how long a round is.
//!
//! The range setters mirror a pair of steppers: they never fail, they clamp.
//! Strict validation happens only when a range is built from outside input
//! via [`TableRange::new`] or deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SettingsError;

pub const TABLE_MIN: u8 = 1;
pub const TABLE_MAX: u8 = 20;

/// Inclusive range of multiplicands. Always `min < max`, both in `1..=20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTableRange")]
pub struct TableRange {
    min: u8,
    max: u8,
}

#[derive(Deserialize)]
struct RawTableRange {
    min: u8,
    max: u8,
}

impl TryFrom<RawTableRange> for TableRange {
    type Error = SettingsError;

    fn try_from(raw: RawTableRange) -> Result<Self, Self::Error> {
        TableRange::new(raw.min, raw.max)
    }
}

impl Default for TableRange {
    fn default() -> Self {
        Self { min: 2, max: 12 }
    }
}

impl TableRange {
    pub fn new(min: u8, max: u8) -> Result<Self, SettingsError> {
        for bound in [min, max] {
            if !(TABLE_MIN..=TABLE_MAX).contains(&bound) {
                return Err(SettingsError::BoundOutOfRange(bound));
            }
        }
        if min >= max {
            return Err(SettingsError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn set_min(&mut self, value: u8) {
        let value = value.clamp(TABLE_MIN, TABLE_MAX);
        self.min = if value >= self.max { self.max - 1 } else { value };
    }

    pub fn set_max(&mut self, value: u8) {
        let value = value.clamp(TABLE_MIN, TABLE_MAX);
        self.max = if value <= self.min { self.min + 1 } else { value };
    }

    pub fn increment_min(&mut self) {
        self.set_min(self.min.saturating_add(1));
    }

    pub fn decrement_min(&mut self) {
        self.set_min(self.min.saturating_sub(1));
    }

    pub fn increment_max(&mut self) {
        self.set_max(self.max.saturating_add(1));
    }

    pub fn decrement_max(&mut self) {
        self.set_max(self.max.saturating_sub(1));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum QuestionCount {
    #[default]
    Five,
    Ten,
    Fifteen,
    Twenty,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 4] = [
        QuestionCount::Five,
        QuestionCount::Ten,
        QuestionCount::Fifteen,
        QuestionCount::Twenty,
    ];

    pub fn get(self) -> usize {
        match self {
            QuestionCount::Five => 5,
            QuestionCount::Ten => 10,
            QuestionCount::Fifteen => 15,
            QuestionCount::Twenty => 20,
        }
    }
}

impl TryFrom<usize> for QuestionCount {
    type Error = SettingsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        QuestionCount::ALL
            .into_iter()
            .find(|c| c.get() == value)
            .ok_or(SettingsError::InvalidQuestionCount(value))
    }
}

impl From<QuestionCount> for usize {
    fn from(count: QuestionCount) -> usize {
        count.get()
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizSettings {
    #[serde(default)]
    pub range: TableRange,
    #[serde(default)]
    pub count: QuestionCount,
}
