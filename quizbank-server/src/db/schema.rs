//! Schema creation
//!
//! Tables are created on startup if absent. There is no migration history;
//! changing a table means changing these statements.

use sqlx::SqlitePool;

/// Create the `questions` and `choices` tables if they do not exist.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question_text TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // No ON DELETE CASCADE: deleting a question removes its choices itself.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS choices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            choice_text TEXT NOT NULL,
            is_correct BOOLEAN NOT NULL DEFAULT 0,
            question_id INTEGER NOT NULL REFERENCES questions(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_choices_question_id ON choices(question_id)")
        .execute(pool)
        .await?;

    tracing::info!("Database schema ready");
    Ok(())
}
