//! Venue queries and commands

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::db::{contains_pattern, DbError, ShowRepo, Venue, VenueRepo};
use crate::models::VenueInput;
use crate::views::{group_by_location, SearchResults, ShowSplit, VenueArea, VenueDetail};

pub struct VenueService<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueService<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Venues bucketed by (city, state) with upcoming show counts.
    pub async fn areas(&self, now: DateTime<Utc>) -> Result<Vec<VenueArea>, DbError> {
        let rows = VenueRepo::new(self.pool).list_with_upcoming(now).await?;
        Ok(group_by_location(rows))
    }

    pub async fn search(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults, DbError> {
        let hits = VenueRepo::new(self.pool)
            .search(&contains_pattern(term), now)
            .await?;
        Ok(SearchResults::from(hits))
    }

    pub async fn get(&self, id: i64) -> Result<Venue, DbError> {
        VenueRepo::new(self.pool).get(id).await
    }

    pub async fn detail(&self, id: i64, now: DateTime<Utc>) -> Result<VenueDetail, DbError> {
        let venue = VenueRepo::new(self.pool).get(id).await?;
        let bookings = ShowRepo::new(self.pool).for_venue(id).await?;

        Ok(VenueDetail {
            venue,
            shows: ShowSplit::at(bookings, now),
        })
    }

    pub async fn create(&self, input: &VenueInput) -> Result<Venue, DbError> {
        let venue = VenueRepo::new(self.pool).create(input).await?;
        tracing::info!(venue_id = venue.id, name = %venue.name, "venue created");
        Ok(venue)
    }

    pub async fn update(&self, id: i64, input: &VenueInput) -> Result<Venue, DbError> {
        let venue = VenueRepo::new(self.pool).update(id, input).await?;
        tracing::info!(venue_id = venue.id, "venue updated");
        Ok(venue)
    }

    pub async fn delete(&self, id: i64) -> Result<Venue, DbError> {
        let venue = VenueRepo::new(self.pool).delete(id).await?;
        tracing::info!(venue_id = venue.id, name = %venue.name, "venue deleted");
        Ok(venue)
    }
}
