use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::answer::{AnswerSet, Likert, LIKERT_MAX};
use crate::models::profile::Profile;
use crate::models::question::{QUESTIONS, QUESTION_COUNT};
use crate::utils::time::to_iso8601;

const SUMMARY_HEADER: &str = "Gratitude Test - Results";
const UNANSWERED_PLACEHOLDER: &str = "-";

/// Record written to the downloadable JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportPayload {
    pub score: i32,
    pub profile: String,
    pub answers: AnswerSet,
    pub timestamp: String,
}

/// Owns the answer set of one quiz session and everything derived from it.
///
/// The model never touches storage; [`crate::services::quiz_service::QuizService`] pairs it
/// with the persistence adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizModel {
    answers: AnswerSet,
}

impl QuizModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_answers(answers: AnswerSet) -> Self {
        Self { answers }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// # Panics
    ///
    /// Panics if `index >= QUESTION_COUNT`.
    pub fn set_answer(&mut self, index: usize, value: Likert) {
        self.answers.set(index, value);
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn answered_count(&self) -> usize {
        self.answers.answered_count()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    /// Raw sum of answered slots. Only meaningful once [`Self::is_complete`] holds.
    pub fn score(&self) -> i32 {
        self.answers.sum()
    }

    pub fn max_score() -> i32 {
        QUESTION_COUNT as i32 * i32::from(LIKERT_MAX)
    }

    pub fn classify(score: i32) -> Profile {
        Profile::classify(score)
    }

    pub fn profile(&self) -> Profile {
        Self::classify(self.score())
    }

    pub fn to_summary_text(&self) -> String {
        let mut lines = vec![
            SUMMARY_HEADER.to_string(),
            format!("Score: {} / {}", self.score(), Self::max_score()),
            format!("Profile: {}", self.profile().label()),
            String::new(),
        ];
        for (idx, (prompt, answer)) in QUESTIONS.iter().zip(self.answers.iter()).enumerate() {
            let answer = answer
                .map(|v| v.to_string())
                .unwrap_or_else(|| UNANSWERED_PLACEHOLDER.to_string());
            lines.push(format!("Q{}. {}\n→ Answer: {}", idx + 1, prompt, answer));
        }
        lines.join("\n")
    }

    pub fn to_export_payload(&self, at: DateTime<Utc>) -> ExportPayload {
        ExportPayload {
            score: self.score(),
            profile: self.profile().label().to_string(),
            answers: self.answers,
            timestamp: to_iso8601(at),
        }
    }
}
