//! Artist queries and commands

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::db::{contains_pattern, Artist, ArtistRepo, ArtistSummary, DbError, ShowRepo};
use crate::models::ArtistInput;
use crate::views::{ArtistDetail, SearchResults, ShowSplit};

pub struct ArtistService<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ArtistSummary>, DbError> {
        ArtistRepo::new(self.pool).list().await
    }

    pub async fn search(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults, DbError> {
        let hits = ArtistRepo::new(self.pool)
            .search(&contains_pattern(term), now)
            .await?;
        Ok(SearchResults::from(hits))
    }

    pub async fn get(&self, id: i64) -> Result<Artist, DbError> {
        ArtistRepo::new(self.pool).get(id).await
    }

    pub async fn detail(&self, id: i64, now: DateTime<Utc>) -> Result<ArtistDetail, DbError> {
        let artist = ArtistRepo::new(self.pool).get(id).await?;
        let bookings = ShowRepo::new(self.pool).for_artist(id).await?;

        Ok(ArtistDetail {
            artist,
            shows: ShowSplit::at(bookings, now),
        })
    }

    pub async fn create(&self, input: &ArtistInput) -> Result<Artist, DbError> {
        let artist = ArtistRepo::new(self.pool).create(input).await?;
        tracing::info!(artist_id = artist.id, name = %artist.name, "artist created");
        Ok(artist)
    }

    pub async fn update(&self, id: i64, input: &ArtistInput) -> Result<Artist, DbError> {
        let artist = ArtistRepo::new(self.pool).update(id, input).await?;
        tracing::info!(artist_id = artist.id, "artist updated");
        Ok(artist)
    }

    pub async fn delete(&self, id: i64) -> Result<Artist, DbError> {
        let artist = ArtistRepo::new(self.pool).delete(id).await?;
        tracing::info!(artist_id = artist.id, name = %artist.name, "artist deleted");
        Ok(artist)
    }
}
