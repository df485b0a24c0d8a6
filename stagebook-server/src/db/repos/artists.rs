//! Artist repository

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::models::ArtistInput;
use super::{Choice, DbError, SearchHit};

/// Artist record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Artist row for the directory listing
pub type ArtistSummary = Choice;

impl From<Artist> for ArtistInput {
    fn from(a: Artist) -> Self {
        Self {
            name: a.name,
            city: a.city,
            state: a.state,
            phone: a.phone,
            genres: a.genres,
            image_link: a.image_link,
            facebook_link: a.facebook_link,
            website: a.website,
            seeking_venue: a.seeking_venue,
            seeking_description: a.seeking_description,
        }
    }
}

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All artists ordered by name.
    pub async fn list(&self) -> Result<Vec<ArtistSummary>, DbError> {
        let rows = sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Case-insensitive name search. `pattern` comes from [`super::contains_pattern`].
    pub async fn search(&self, pattern: &str, now: DateTime<Utc>) -> Result<Vec<SearchHit>, DbError> {
        let rows = sqlx::query_as::<_, SearchHit>(
            r#"
            SELECT
                a.id,
                a.name,
                COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
            FROM artists a
            LEFT JOIN shows s ON s.artist_id = a.id
            WHERE a.name ILIKE $1 ESCAPE '\'
            GROUP BY a.id
            ORDER BY a.name, a.id
            "#,
        )
        .bind(pattern)
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a single artist by id.
    pub async fn get(&self, id: i64) -> Result<Artist, DbError> {
        sqlx::query_as::<_, Artist>(
            r#"
            SELECT id, name, city, state, phone, genres, image_link, facebook_link,
                   website, seeking_venue, seeking_description
            FROM artists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("artist", id))
    }

    pub async fn create(&self, input: &ArtistInput) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let artist = sqlx::query_as::<_, Artist>(
            r#"
            INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link,
                                 website, seeking_venue, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, name, city, state, phone, genres, image_link, facebook_link,
                      website, seeking_venue, seeking_description
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(input.phone.as_deref())
        .bind(&input.genres)
        .bind(input.image_link.as_deref())
        .bind(input.facebook_link.as_deref())
        .bind(input.website.as_deref())
        .bind(input.seeking_venue)
        .bind(input.seeking_description.as_deref())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Overwrite every editable column of artist `id`.
    pub async fn update(&self, id: i64, input: &ArtistInput) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let artist = sqlx::query_as::<_, Artist>(
            r#"
            UPDATE artists
            SET name = $2, city = $3, state = $4, phone = $5, genres = $6,
                image_link = $7, facebook_link = $8, website = $9,
                seeking_venue = $10, seeking_description = $11
            WHERE id = $1
            RETURNING id, name, city, state, phone, genres, image_link, facebook_link,
                      website, seeking_venue, seeking_description
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(input.phone.as_deref())
        .bind(&input.genres)
        .bind(input.image_link.as_deref())
        .bind(input.facebook_link.as_deref())
        .bind(input.website.as_deref())
        .bind(input.seeking_venue)
        .bind(input.seeking_description.as_deref())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("artist", id))?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Delete artist `id` (and, by cascade, its shows).
    pub async fn delete(&self, id: i64) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let artist = sqlx::query_as::<_, Artist>(
            r#"
            DELETE FROM artists
            WHERE id = $1
            RETURNING id, name, city, state, phone, genres, image_link, facebook_link,
                      website, seeking_venue, seeking_description
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("artist", id))?;

        tx.commit().await?;
        Ok(artist)
    }
}
