//! Show queries and commands

use sqlx::PgPool;

use crate::db::{ArtistRepo, DbError, Show, ShowListing, ShowRepo, VenueRepo};
use crate::models::{ShowDraft, ShowInput};
use crate::views::ShowFormOptions;

pub struct ShowService<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ShowListing>, DbError> {
        ShowRepo::new(self.pool).list().await
    }

    /// New-show form prefilled with `draft`.
    pub async fn form(&self, draft: ShowDraft) -> Result<ShowFormOptions, DbError> {
        Ok(ShowFormOptions {
            form: draft,
            artists: ArtistRepo::new(self.pool).list().await?,
            venues: VenueRepo::new(self.pool).choices().await?,
        })
    }

    pub async fn create(&self, input: &ShowInput) -> Result<Show, DbError> {
        let show = ShowRepo::new(self.pool).create(input).await?;
        tracing::info!(
            show_id = show.id,
            artist_id = show.artist_id,
            venue_id = show.venue_id,
            start_time = %show.start_time,
            "show created"
        );
        Ok(show)
    }
}
