//! Venue repository
//!
//! - list: LEFT JOIN with an upcoming-show aggregate, ordered by location
//! - create/update/delete: single statement inside a transaction

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::VenueInput;
use super::{Choice, DbError, SearchHit};

/// Venue record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Venue with its location and upcoming show count, for the area listing
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

impl From<Venue> for VenueInput {
    fn from(v: Venue) -> Self {
        Self {
            name: v.name,
            city: v.city,
            state: v.state,
            address: v.address,
            phone: v.phone,
            genres: v.genres,
            image_link: v.image_link,
            facebook_link: v.facebook_link,
            website: v.website,
            seeking_talent: v.seeking_talent,
            seeking_description: v.seeking_description,
        }
    }
}

/// Venue repository
pub struct VenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All venues ordered by (state, city) with shows starting after `now`.
    pub async fn list_with_upcoming(&self, now: DateTime<Utc>) -> Result<Vec<VenueSummary>, DbError> {
        let rows = sqlx::query_as::<_, VenueSummary>(
            r#"
            SELECT
                v.id,
                v.name,
                v.city,
                v.state,
                COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            GROUP BY v.id
            ORDER BY v.state, v.city, v.id
            "#,
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Case-insensitive name search. `pattern` comes from [`super::contains_pattern`].
    pub async fn search(&self, pattern: &str, now: DateTime<Utc>) -> Result<Vec<SearchHit>, DbError> {
        let rows = sqlx::query_as::<_, SearchHit>(
            r#"
            SELECT
                v.id,
                v.name,
                COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            WHERE v.name ILIKE $1 ESCAPE '\'
            GROUP BY v.id
            ORDER BY v.name, v.id
            "#,
        )
        .bind(pattern)
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single venue by id.
    pub async fn get(&self, id: i64) -> Result<Venue, DbError> {
        sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, city, state, address, phone, image_link, facebook_link,
                   genres, website, seeking_talent, seeking_description
            FROM venues
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("venue", id))
    }

    /// Venue names for the show form.
    pub async fn choices(&self) -> Result<Vec<Choice>, DbError> {
        let rows = sqlx::query_as::<_, Choice>("SELECT id, name FROM venues ORDER BY name, id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a venue and return the stored record.
    pub async fn create(&self, input: &VenueInput) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let venue = sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link,
                                genres, website, seeking_talent, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, name, city, state, address, phone, image_link, facebook_link,
                      genres, website, seeking_talent, seeking_description
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(input.phone.as_deref())
        .bind(input.image_link.as_deref())
        .bind(input.facebook_link.as_deref())
        .bind(&input.genres)
        .bind(input.website.as_deref())
        .bind(input.seeking_talent)
        .bind(input.seeking_description.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Overwrite every editable column of venue `id`.
    pub async fn update(&self, id: i64, input: &VenueInput) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let venue = sqlx::query_as::<_, Venue>(
            r#"
            UPDATE venues
            SET name = $2, city = $3, state = $4, address = $5, phone = $6,
                image_link = $7, facebook_link = $8, genres = $9, website = $10,
                seeking_talent = $11, seeking_description = $12
            WHERE id = $1
            RETURNING id, name, city, state, address, phone, image_link, facebook_link,
                      genres, website, seeking_talent, seeking_description
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(input.phone.as_deref())
        .bind(input.image_link.as_deref())
        .bind(input.facebook_link.as_deref())
        .bind(&input.genres)
        .bind(input.website.as_deref())
        .bind(input.seeking_talent)
        .bind(input.seeking_description.as_deref())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("venue", id))?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Delete venue `id` (and, by cascade, its shows). Returns the removed record.
    pub async fn delete(&self, id: i64) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let venue = sqlx::query_as::<_, Venue>(
            r#"
            DELETE FROM venues
            WHERE id = $1
            RETURNING id, name, city, state, address, phone, image_link, facebook_link,
                      genres, website, seeking_talent, seeking_description
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("venue", id))?;

        tx.commit().await?;
        Ok(venue)
    }
}
