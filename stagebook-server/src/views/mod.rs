//! View-models handed to the presentation layer
//!
//! Pure functions over repository rows. Everything time-dependent takes
//! the request's `now` so one page never mixes two clocks.

pub mod artists;
pub mod shows;
pub mod venues;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::{ArtistBooking, SearchHit, VenueBooking};

pub use artists::ArtistDetail;
pub use shows::ShowFormOptions;
pub use venues::{group_by_location, VenueArea, VenueDetail, VenueListing};

/// Anything with a start time that can be split into past and upcoming.
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for VenueBooking {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ArtistBooking {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Shows partitioned around a single instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSplit<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<T: Scheduled> ShowSplit<T> {
    /// Past is `start_time < now`, upcoming is `start_time >= now`.
    /// Input order is preserved within each half.
    pub fn at(shows: Vec<T>, now: DateTime<Utc>) -> Self {
        let (past_shows, upcoming_shows): (Vec<T>, Vec<T>) =
            shows.into_iter().partition(|s| s.start_time() < now);

        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// Search page payload. `count` is always `data.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl From<Vec<SearchHit>> for SearchResults {
    fn from(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Search page: results plus the term that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub results: SearchResults,
    pub search_term: String,
}

/// Form page payload. `id` is set when editing an existing record.
#[derive(Debug, Clone, Serialize)]
pub struct FormView<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub form: T,
}

impl<T> FormView<T> {
    pub fn blank(form: T) -> Self {
        Self { id: None, form }
    }

    pub fn editing(id: i64, form: T) -> Self {
        Self { id: Some(id), form }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking(offset_hours: i64, now: DateTime<Utc>) -> ArtistBooking {
        ArtistBooking {
            venue_id: offset_hours,
            venue_name: format!("venue {offset_hours}"),
            venue_image_link: None,
            start_time: now + Duration::hours(offset_hours),
        }
    }

    #[test]
    fn split_partitions_exactly() {
        let now = Utc::now();
        let shows: Vec<_> = [-48, -1, 0, 1, 72].iter().map(|h| booking(*h, now)).collect();

        let split = ShowSplit::at(shows.clone(), now);

        assert_eq!(split.past_shows_count + split.upcoming_shows_count, shows.len());
        assert!(split.past_shows.iter().all(|s| s.start_time < now));
        assert!(split.upcoming_shows.iter().all(|s| s.start_time >= now));
        for s in &shows {
            let in_past = split.past_shows.contains(s);
            let in_upcoming = split.upcoming_shows.contains(s);
            assert!(in_past ^ in_upcoming, "{} must land in exactly one half", s.venue_name);
        }
    }

    #[test]
    fn show_starting_now_is_upcoming() {
        let now = Utc::now();
        let split = ShowSplit::at(vec![booking(0, now)], now);
        assert_eq!(split.past_shows_count, 0);
        assert_eq!(split.upcoming_shows_count, 1);
    }

    #[test]
    fn split_keeps_order() {
        let now = Utc::now();
        let shows: Vec<_> = [-3, -2, 2, 3].iter().map(|h| booking(*h, now)).collect();
        let split = ShowSplit::at(shows, now);
        let past: Vec<_> = split.past_shows.iter().map(|s| s.venue_id).collect();
        let upcoming: Vec<_> = split.upcoming_shows.iter().map(|s| s.venue_id).collect();
        assert_eq!(past, vec![-3, -2]);
        assert_eq!(upcoming, vec![2, 3]);
    }

    #[test]
    fn search_count_matches_data() {
        let results = SearchResults::from(vec![
            SearchHit { id: 1, name: "Music Hall".into(), num_upcoming_shows: 2 },
            SearchHit { id: 2, name: "The Hallows".into(), num_upcoming_shows: 0 },
        ]);
        assert_eq!(results.count, 2);

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["data"][0]["name"], "Music Hall");
    }

    #[test]
    fn blank_form_omits_id() {
        let json = serde_json::to_value(FormView::blank(())).unwrap();
        assert!(json.get("id").is_none());
        let json = serde_json::to_value(FormView::editing(3, ())).unwrap();
        assert_eq!(json["id"], 3);
    }
}
