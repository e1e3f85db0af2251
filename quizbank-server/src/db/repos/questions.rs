//! Question repository
//!
//! Handles question CRUD plus the joined views:
//! - create: question + choices in one transaction
//! - delete: choices then question in one transaction, writes first
//! - joined/with_choices: single JOIN query, grouped in memory

use sqlx::{Connection, SqliteConnection};

use super::DbError;
use crate::models::{nest, Choice, JoinedRow, NewQuestion, Question, QuestionWithChoices};

/// Question repository
pub struct QuestionRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> QuestionRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create a question with its initial choices (atomic).
    ///
    /// If any choice insert fails the question is rolled back with it.
    pub async fn create(&mut self, new: NewQuestion) -> Result<QuestionWithChoices, DbError> {
        let mut tx = self.conn.begin().await?;

        let question: Question = sqlx::query_as(
            r#"
            INSERT INTO questions (question_text)
            VALUES (?)
            RETURNING id, question_text
            "#,
        )
        .bind(&new.question_text)
        .fetch_one(&mut *tx)
        .await?;

        let mut choices = Vec::with_capacity(new.choices.len());
        for choice in &new.choices {
            let row: Choice = sqlx::query_as(
                r#"
                INSERT INTO choices (choice_text, is_correct, question_id)
                VALUES (?, ?, ?)
                RETURNING id, choice_text, is_correct, question_id
                "#,
            )
            .bind(&choice.choice_text)
            .bind(choice.is_correct)
            .bind(question.id)
            .fetch_one(&mut *tx)
            .await?;
            choices.push(row);
        }

        tx.commit().await?;

        tracing::info!(
            question_id = question.id,
            choices = choices.len(),
            "question created"
        );

        Ok(QuestionWithChoices {
            id: question.id,
            question_text: question.question_text,
            choices,
        })
    }

    /// Get a single question by id.
    pub async fn find(&mut self, id: i64) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as("SELECT id, question_text FROM questions WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(question)
    }

    /// List all questions by id.
    pub async fn list(&mut self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as("SELECT id, question_text FROM questions ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(questions)
    }

    /// Delete a question and all of its choices (atomic).
    ///
    /// Returns the number of choices removed, or `None` if the question
    /// does not exist.
    pub async fn delete(&mut self, id: i64) -> Result<Option<u64>, DbError> {
        let mut tx = self.conn.begin().await?;

        // Writes only: a read before the first write cannot be upgraded under WAL
        let removed = sqlx::query("DELETE FROM choices WHERE question_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;

        tracing::info!(question_id = id, choices = removed, "question deleted");
        Ok(Some(removed))
    }

    /// Questions INNER JOIN choices, one row per choice.
    ///
    /// Questions without any choice do not appear.
    pub async fn joined(&mut self) -> Result<Vec<JoinedRow>, DbError> {
        let rows = sqlx::query_as(
            r#"
            SELECT
                q.id AS question_id,
                q.question_text,
                c.id AS choice_id,
                c.choice_text,
                c.is_correct
            FROM questions q
            JOIN choices c ON c.question_id = q.id
            ORDER BY q.id, c.id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }

    /// All questions with their choices attached.
    ///
    /// Uses a LEFT JOIN in a single query (no N+1); questions without
    /// choices come back with an empty list.
    pub async fn with_choices(&mut self) -> Result<Vec<QuestionWithChoices>, DbError> {
        let rows: Vec<JoinedRow> = sqlx::query_as(
            r#"
            SELECT
                q.id AS question_id,
                q.question_text,
                c.id AS choice_id,
                c.choice_text,
                c.is_correct
            FROM questions q
            LEFT JOIN choices c ON c.question_id = q.id
            ORDER BY q.id, c.id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(nest(rows))
    }
}
