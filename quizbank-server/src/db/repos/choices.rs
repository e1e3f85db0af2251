//! Choice repository

use sqlx::SqliteConnection;

use super::DbError;
use crate::models::Choice;

/// Choice repository
pub struct ChoiceRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> ChoiceRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// List the choices of one question.
    pub async fn list_for_question(&mut self, question_id: i64) -> Result<Vec<Choice>, DbError> {
        let choices = sqlx::query_as(
            r#"
            SELECT id, choice_text, is_correct, question_id
            FROM choices
            WHERE question_id = ?
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(choices)
    }

    /// List every choice.
    pub async fn list(&mut self) -> Result<Vec<Choice>, DbError> {
        let choices = sqlx::query_as(
            "SELECT id, choice_text, is_correct, question_id FROM choices ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(choices)
    }

    /// Delete the first (lowest id) choice of a question.
    ///
    /// Only one row goes, even when the question has several. Returns the
    /// deleted choice, or `None` when the question has none.
    pub async fn delete_first_for_question(
        &mut self,
        question_id: i64,
    ) -> Result<Option<Choice>, DbError> {
        // One statement, so the write lock is taken before any read
        let deleted: Option<Choice> = sqlx::query_as(
            r#"
            DELETE FROM choices
            WHERE id = (
                SELECT id FROM choices
                WHERE question_id = ?
                ORDER BY id
                LIMIT 1
            )
            RETURNING id, choice_text, is_correct, question_id
            "#,
        )
        .bind(question_id)
        .fetch_optional(&mut *self.conn)
        .await?;

        let Some(choice) = deleted else {
            return Ok(None);
        };

        tracing::info!(question_id, choice_id = choice.id, "choice deleted");
        Ok(Some(choice))
    }
}
