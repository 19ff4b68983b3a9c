use serde::{Deserialize, Serialize};

use crate::models::question::QUESTION_COUNT;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Likert value must be between 1 and 5, got {0}")]
pub struct InvalidLikert(pub i64);

/// A single rating on the 1 (never) to 5 (always) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Likert(u8);

impl Likert {
    pub fn new(value: u8) -> Result<Self, InvalidLikert> {
        Self::try_from(i64::from(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Likert {
    type Error = InvalidLikert;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(LIKERT_MIN)..=i64::from(LIKERT_MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidLikert(value))
        }
    }
}

impl From<Likert> for u8 {
    fn from(value: Likert) -> Self {
        value.0
    }
}

impl std::fmt::Display for Likert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One slot per question, positionally aligned with [`crate::models::question::QUESTIONS`].
///
/// Serialized as a JSON array of exactly `QUESTION_COUNT` items, each `null` or a Likert value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet([Option<Likert>; QUESTION_COUNT]);

impl AnswerSet {
    pub fn empty() -> Self {
        Self([None; QUESTION_COUNT])
    }

    pub fn get(&self, index: usize) -> Option<Likert> {
        self.0.get(index).copied().flatten()
    }

    /// # Panics
    ///
    /// Panics if `index >= QUESTION_COUNT`.
    pub fn set(&mut self, index: usize, value: Likert) {
        self.0[index] = Some(value);
    }

    pub fn clear(&mut self) {
        self.0 = [None; QUESTION_COUNT];
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Likert>> + '_ {
        self.0.iter().copied()
    }

    pub fn answered_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == QUESTION_COUNT
    }

    /// Raw sum with unanswered slots counted as zero. Says nothing about completion.
    pub fn sum(&self) -> i32 {
        self.0
            .iter()
            .flatten()
            .map(|v| i32::from(v.value()))
            .sum()
    }
}
