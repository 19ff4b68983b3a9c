use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::dto::quiz_dto::{QuizStateResponse, ResultResponse, SetAnswerRequest};
use crate::error::{Error, Result};
use crate::models::answer::Likert;
use crate::services::export_service::ExportService;
use crate::utils::time;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_quiz(State(state): State<AppState>) -> Result<Json<QuizStateResponse>> {
    let model = state.quiz_service.snapshot().await;
    Ok(Json(QuizStateResponse::from(&model)))
}

#[axum::debug_handler]
pub async fn set_answer(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    payload: std::result::Result<Json<SetAnswerRequest>, JsonRejection>,
) -> Result<Json<QuizStateResponse>> {
    let Json(req) = payload?;
    req.validate()?;
    let value = Likert::try_from(req.value).map_err(|e| Error::BadRequest(e.to_string()))?;
    let model = state.quiz_service.set_answer(index, value).await?;
    tracing::debug!(index, value = %value, answered = model.answered_count(), "Answer saved");
    Ok(Json(QuizStateResponse::from(&model)))
}

#[axum::debug_handler]
pub async fn reset(State(state): State<AppState>) -> Result<Json<QuizStateResponse>> {
    let model = state.quiz_service.reset().await;
    Ok(Json(QuizStateResponse::from(&model)))
}

#[axum::debug_handler]
pub async fn get_result(State(state): State<AppState>) -> Result<Json<ResultResponse>> {
    let model = state.quiz_service.completed().await?;
    Ok(Json(ResultResponse::from(&model)))
}

/// Plain-text recap meant for the clipboard.
#[axum::debug_handler]
pub async fn get_summary(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let model = state.quiz_service.completed().await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        model.to_summary_text(),
    ))
}

#[axum::debug_handler]
pub async fn export_result(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let model = state.quiz_service.completed().await?;
    let at = time::now();
    let buffer = ExportService::render(&model.to_export_payload(at))?;
    let disposition = format!("attachment; filename=\"{}\"", ExportService::filename(at));
    tracing::info!(score = model.score(), "Quiz result exported");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}
