use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseQuestionError;

/// Multipliers always come from this fixed range, whatever tables are selected.
pub const MULTIPLIER_RANGE: std::ops::RangeInclusive<u8> = 1..=12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub a: u8,
    pub b: u8,
}

impl Question {
    pub fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    pub fn answer(&self) -> u32 {
        self.a as u32 * self.b as u32
    }

    pub fn check(&self, answer: i64) -> bool {
        answer == self.answer() as i64
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {}", self.a, self.b)
    }
}

impl FromStr for Question {
    type Err = ParseQuestionError;

    /// Parses `"7 * 8"`. `x` and `×` are accepted in place of `*`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lhs, rhs) = s
            .split_once(['*', 'x', '×'])
            .ok_or_else(|| ParseQuestionError::MissingOperator(s.to_string()))?;

        let operand = |part: &str| {
            let part = part.trim();
            part.parse::<u8>()
                .map_err(|_| ParseQuestionError::InvalidOperand(part.to_string()))
        };

        Ok(Self::new(operand(lhs)?, operand(rhs)?))
    }
}

/// Reads the answer field. Missing or non-numeric input counts as zero.
pub fn parse_answer(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_the_product() {
        assert_eq!(Question::new(7, 8).answer(), 56);
        assert_eq!(Question::new(20, 12).answer(), 240);
    }

    #[test]
    fn check_compares_against_product() {
        let q = Question::new(6, 4);
        assert!(q.check(24));
        assert!(!q.check(25));
        assert!(!q.check(-24));
    }

    #[test]
    fn displays_as_expression() {
        assert_eq!(Question::new(3, 11).to_string(), "3 * 11");
    }

    #[test]
    fn parses_expression_forms() {
        assert_eq!("3 * 11".parse::<Question>().unwrap(), Question::new(3, 11));
        assert_eq!("3*11".parse::<Question>().unwrap(), Question::new(3, 11));
        assert_eq!(" 9 x 2 ".parse::<Question>().unwrap(), Question::new(9, 2));
        assert_eq!("4 × 5".parse::<Question>().unwrap(), Question::new(4, 5));
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert!(matches!(
            "3 + 4".parse::<Question>(),
            Err(ParseQuestionError::MissingOperator(_))
        ));
        assert!(matches!(
            "three * 4".parse::<Question>(),
            Err(ParseQuestionError::InvalidOperand(op)) if op == "three"
        ));
        assert!(matches!(
            "3 * ".parse::<Question>(),
            Err(ParseQuestionError::InvalidOperand(_))
        ));
    }

    #[test]
    fn blank_or_garbage_answers_are_zero() {
        assert_eq!(parse_answer(""), 0);
        assert_eq!(parse_answer("   "), 0);
        assert_eq!(parse_answer("abc"), 0);
        assert_eq!(parse_answer("4.5"), 0);
        assert_eq!(parse_answer(" 42 "), 42);
        assert_eq!(parse_answer("-3"), -3);
    }
}
