use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::answer::AnswerSet;
use crate::models::profile::Profile;
use crate::models::question::{all_questions, LikertOption, LIKERT_SCALE, QUESTION_COUNT};
use crate::models::quiz::QuizModel;
use crate::models::tip::{Tip, GROWTH_TIPS};

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub number: usize,
    pub prompt: String,
    pub answer: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizStateResponse {
    pub questions: Vec<QuestionView>,
    pub scale: Vec<LikertOption>,
    pub answers: AnswerSet,
    pub answered_count: usize,
    pub total_questions: usize,
    pub score: i32,
    pub max_score: i32,
    pub is_complete: bool,
}

impl From<&QuizModel> for QuizStateResponse {
    fn from(model: &QuizModel) -> Self {
        let questions = all_questions()
            .into_iter()
            .map(|q| QuestionView {
                number: q.index + 1,
                answer: model.answers().get(q.index).map(|v| v.value()),
                index: q.index,
                prompt: q.prompt,
            })
            .collect();

        Self {
            questions,
            scale: LIKERT_SCALE.to_vec(),
            answers: *model.answers(),
            answered_count: model.answered_count(),
            total_questions: QUESTION_COUNT,
            score: model.score(),
            max_score: QuizModel::max_score(),
            is_complete: model.is_complete(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetAnswerRequest {
    #[validate(range(min = 1, max = 5))]
    pub value: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub band: Profile,
    pub label: &'static str,
    pub tone: &'static str,
    pub message: &'static str,
}

impl From<Profile> for ProfileView {
    fn from(profile: Profile) -> Self {
        Self {
            band: profile,
            label: profile.label(),
            tone: profile.tone(),
            message: profile.message(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultResponse {
    pub score: i32,
    pub max_score: i32,
    pub profile: ProfileView,
    pub answers: AnswerSet,
    pub tips: Vec<Tip>,
}

impl From<&QuizModel> for ResultResponse {
    fn from(model: &QuizModel) -> Self {
        Self {
            score: model.score(),
            max_score: QuizModel::max_score(),
            profile: model.profile().into(),
            answers: *model.answers(),
            tips: GROWTH_TIPS.to_vec(),
        }
    }
}
