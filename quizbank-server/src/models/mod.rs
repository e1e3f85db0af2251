//! Domain models
//!
//! Rows as they come out of the store, the request bodies that create them,
//! and the joined shapes built by [`shape`].

pub mod validation;
pub mod quiz;
pub mod shape;

pub use validation::ValidationError;
pub use quiz::{Choice, NewChoice, NewQuestion, Question, QuestionWithChoices};
pub use shape::{flat_rows, flatten, nest, FlatChoice, FlatQuestion, FlatRow, JoinedRow};
