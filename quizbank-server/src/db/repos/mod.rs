//! Repository implementations for database access
//!
//! Each repository borrows the request's connection and follows these patterns:
//! - Uses JOINs for aggregate reads (no N+1)
//! - Uses transactions for multi-step writes
//! - Absent rows are `Ok(None)`; the HTTP layer picks the 404 wording

pub mod questions;
pub mod choices;

pub use questions::QuestionRepo;
pub use choices::ChoiceRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
