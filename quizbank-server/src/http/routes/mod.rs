//! Route handlers organized by resource

use serde::Serialize;

pub mod health;
pub mod questions;
pub mod choices;
pub mod aggregates;

/// Confirmation body for mutations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
