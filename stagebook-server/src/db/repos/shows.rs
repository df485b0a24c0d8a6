//! Show repository
//!
//! Shows are only ever read joined with their artist and venue, so every
//! list here returns the counterpart's name alongside the show.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::ShowInput;
use super::DbError;

/// Show record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

/// Row of the show directory
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show seen from its venue: who plays and when
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct VenueBooking {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show seen from its artist: where and when
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ArtistBooking {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Show repository
pub struct ShowRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All shows with artist and venue names, earliest first.
    pub async fn list(&self) -> Result<Vec<ShowListing>, DbError> {
        let rows = sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT
                s.venue_id,
                v.name AS venue_name,
                s.artist_id,
                a.name AS artist_name,
                a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            JOIN venues v ON v.id = s.venue_id
            ORDER BY s.start_time, s.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Every show at venue `venue_id`, earliest first.
    pub async fn for_venue(&self, venue_id: i64) -> Result<Vec<VenueBooking>, DbError> {
        let rows = sqlx::query_as::<_, VenueBooking>(
            r#"
            SELECT
                a.id AS artist_id,
                a.name AS artist_name,
                a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(venue_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Every show by artist `artist_id`, earliest first.
    pub async fn for_artist(&self, artist_id: i64) -> Result<Vec<ArtistBooking>, DbError> {
        let rows = sqlx::query_as::<_, ArtistBooking>(
            r#"
            SELECT
                v.id AS venue_id,
                v.name AS venue_name,
                v.image_link AS venue_image_link,
                s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(artist_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Schedule a show (atomic).
    ///
    /// Both ends are checked inside the transaction so a missing artist or
    /// venue surfaces as `NotFound` rather than a foreign-key violation.
    pub async fn create(&self, input: &ShowInput) -> Result<Show, DbError> {
        let mut tx = self.pool.begin().await?;

        let (artist_exists, venue_exists): (bool, bool) = sqlx::query_as(
            r#"
            SELECT
                EXISTS(SELECT 1 FROM artists WHERE id = $1),
                EXISTS(SELECT 1 FROM venues WHERE id = $2)
            "#,
        )
        .bind(input.artist_id)
        .bind(input.venue_id)
        .fetch_one(&mut *tx)
        .await?;

        if !artist_exists {
            return Err(DbError::not_found("artist", input.artist_id));
        }
        if !venue_exists {
            return Err(DbError::not_found("venue", input.venue_id));
        }

        let show = sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (artist_id, venue_id, start_time)
            VALUES ($1, $2, $3)
            RETURNING id, artist_id, venue_id, start_time
            "#,
        )
        .bind(input.artist_id)
        .bind(input.venue_id)
        .bind(input.start_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(show)
    }
}
