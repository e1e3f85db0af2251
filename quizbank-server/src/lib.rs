//! quizbank-server: HTTP service for quiz questions and their choices
//!
//! Questions own multiple-choice answers. Besides plain CRUD the server
//! exposes joined views of the two tables: nested, side by side, and
//! flattened into one wide record per question.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ServerConfig, ServerError};
