//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Lookups by id return `DbError::NotFound` instead of `Option`
//! - Writes run in a transaction that commits last
//! - Upcoming/past comparisons take the caller's `now`, never `NOW()`

pub mod artists;
pub mod shows;
pub mod venues;

use serde::Serialize;
use sqlx::FromRow;

pub use artists::{Artist, ArtistRepo, ArtistSummary};
pub use shows::{ArtistBooking, Show, ShowListing, ShowRepo, VenueBooking};
pub use venues::{Venue, VenueRepo, VenueSummary};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Name search hit with its upcoming show count.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// `{id, name}` pair for select boxes.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Choice {
    pub id: i64,
    pub name: String,
}

/// Build an `ILIKE ... ESCAPE '\'` pattern matching `term` anywhere.
///
/// `%`, `_` and `\` in the term match literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
