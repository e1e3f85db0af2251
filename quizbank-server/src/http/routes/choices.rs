//! Choice endpoints

use std::sync::Arc;

use axum::{routing::get, Json, Router};

use super::MessageResponse;
use crate::db::repos::ChoiceRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{DbSession, PathId};
use crate::http::server::AppState;
use crate::models::Choice;

/// GET /choices/{question_id} - 404 when the question has no choices
async fn list_question_choices(
    PathId(question_id): PathId,
    mut session: DbSession,
) -> Result<Json<Vec<Choice>>, ApiError> {
    let choices = ChoiceRepo::new(&mut session)
        .list_for_question(question_id)
        .await?;

    if choices.is_empty() {
        return Err(ApiError::not_found("Choices is not found"));
    }

    Ok(Json(choices))
}

/// GET /choices/
async fn list_choices(mut session: DbSession) -> Result<Json<Vec<Choice>>, ApiError> {
    let choices = ChoiceRepo::new(&mut session).list().await?;
    Ok(Json(choices))
}

/// DELETE /choices/{question_id} - deletes the question's first choice only
async fn delete_choice(
    PathId(question_id): PathId,
    mut session: DbSession,
) -> Result<Json<MessageResponse>, ApiError> {
    ChoiceRepo::new(&mut session)
        .delete_first_for_question(question_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Choice not found"))?;

    Ok(Json(MessageResponse::new("choice deleted successfully")))
}

/// Choice routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/choices/", get(list_choices))
        .route("/choices", get(list_choices))
        .route(
            "/choices/{question_id}",
            get(list_question_choices).delete(delete_choice),
        )
}
