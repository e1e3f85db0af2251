//! Aggregate retrieval endpoints
//!
//! Three views over the same two tables: nested (question with choices),
//! side by side (two flat lists), and wide-flat (one record per question).

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{ChoiceRepo, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::DbSession;
use crate::http::server::AppState;
use crate::models::{flat_rows, flatten, Choice, FlatQuestion, FlatRow, Question, QuestionWithChoices};

/// Both tables, unjoined
#[derive(Serialize)]
pub struct IndividualData {
    pub no_questions: usize,
    pub no_choices: usize,
    #[serde(rename = "Questions")]
    pub questions: Vec<Question>,
    #[serde(rename = "Choices")]
    pub choices: Vec<Choice>,
}

/// GET /all_data_retrival/ - 404 on an empty store
async fn all_data(mut session: DbSession) -> Result<Json<Vec<QuestionWithChoices>>, ApiError> {
    let questions = QuestionRepo::new(&mut session).with_choices().await?;

    if questions.is_empty() {
        return Err(ApiError::not_found("Data Not found"));
    }

    Ok(Json(questions))
}

/// GET /all-data_individual
async fn individual_data(mut session: DbSession) -> Result<Json<IndividualData>, ApiError> {
    let questions = QuestionRepo::new(&mut session).list().await?;
    let choices = ChoiceRepo::new(&mut session).list().await?;

    Ok(Json(IndividualData {
        no_questions: questions.len(),
        no_choices: choices.len(),
        questions,
        choices,
    }))
}

/// GET /flat-data - one wide record per question that has choices
async fn flat_data(mut session: DbSession) -> Result<Json<Vec<FlatQuestion>>, ApiError> {
    let rows = QuestionRepo::new(&mut session).joined().await?;
    Ok(Json(flatten(rows)))
}

/// GET /flat-data/rows - one record per joined (question, choice) pair
async fn flat_data_rows(mut session: DbSession) -> Result<Json<Vec<FlatRow>>, ApiError> {
    let rows = QuestionRepo::new(&mut session).joined().await?;
    Ok(Json(flat_rows(rows)))
}

/// Aggregate routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/all_data_retrival/", get(all_data))
        .route("/all_data_retrival", get(all_data))
        .route("/all-data_individual", get(individual_data))
        .route("/flat-data", get(flat_data))
        .route("/flat-data/rows", get(flat_data_rows))
}
