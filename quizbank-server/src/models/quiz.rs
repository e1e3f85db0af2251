//! Question and choice records, plus the request bodies that create them

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Question row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
}

/// Choice row from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Choice {
    pub id: i64,
    pub choice_text: String,
    pub is_correct: bool,
    pub question_id: i64,
}

/// Question with its choices attached (eager load)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionWithChoices {
    pub id: i64,
    pub question_text: String,
    pub choices: Vec<Choice>,
}

/// One choice in a create request
#[derive(Debug, Clone, Deserialize)]
pub struct NewChoice {
    pub choice_text: String,
    pub is_correct: bool,
}

/// Create question request: the question and its initial batch of choices
#[derive(Debug, Clone, Deserialize)]
pub struct NewQuestion {
    pub question_text: String,
    pub choices: Vec<NewChoice>,
}
