//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool passed in explicitly - no global engine
//! - One pooled connection per request, borrowed by the repositories
//! - Aggregate reads use JOINs - no N+1 queries
//! - Transactions for multi-step writes

pub mod pool;
pub mod schema;
pub mod repos;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
