//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool handed to every repository explicitly, no global session
//! - List operations use JOINs and aggregates, no N+1 queries
//! - Every write runs in its own transaction; dropping an uncommitted
//!   transaction rolls it back and returns the connection to the pool

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
