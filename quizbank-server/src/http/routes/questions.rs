//! Question endpoints

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::MessageResponse;
use crate::db::repos::QuestionRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{DbSession, PathId, ValidJson};
use crate::http::server::AppState;
use crate::models::{NewQuestion, Question, QuestionWithChoices};

/// Create question response: confirmation plus the stored rows
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub question: QuestionWithChoices,
}

/// GET /questions/{id}
async fn get_question(
    PathId(id): PathId,
    mut session: DbSession,
) -> Result<Json<Question>, ApiError> {
    let question = QuestionRepo::new(&mut session)
        .find(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Question is not found"))?;

    Ok(Json(question))
}

/// GET /questions/ - empty store is `[]`, never 404
async fn list_questions(mut session: DbSession) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = QuestionRepo::new(&mut session).list().await?;
    Ok(Json(questions))
}

/// POST /questions/ - create a question with its choices
async fn create_question(
    mut session: DbSession,
    ValidJson(req): ValidJson<NewQuestion>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let question = QuestionRepo::new(&mut session).create(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "The Question is created along with the Choices",
            question,
        }),
    ))
}

/// DELETE /questions/{id} - removes the question's choices first
async fn delete_question(
    PathId(id): PathId,
    mut session: DbSession,
) -> Result<Json<MessageResponse>, ApiError> {
    QuestionRepo::new(&mut session)
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Question not found"))?;

    Ok(Json(MessageResponse::new("Question deleted successfully")))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions/", get(list_questions).post(create_question))
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", get(get_question).delete(delete_question))
}
