//! Venue pages

use serde::Serialize;

use crate::db::{Venue, VenueBooking, VenueSummary};
use super::ShowSplit;

/// Venue entry inside a location bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueListing {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// All venues sharing one (city, state)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListing>,
}

/// Bucket venues by location.
///
/// `rows` must already be ordered by (state, city); each run of equal
/// locations becomes one area, in input order.
pub fn group_by_location(rows: Vec<VenueSummary>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();

    for row in rows {
        let listing = VenueListing {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };

        match areas.last_mut() {
            Some(area) if area.city == row.city && area.state == row.state => {
                area.venues.push(listing);
            }
            _ => areas.push(VenueArea {
                city: row.city,
                state: row.state,
                venues: vec![listing],
            }),
        }
    }

    areas
}

/// Venue page: the record plus its shows split around `now`
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowSplit<VenueBooking>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn summary(id: i64, city: &str, state: &str, upcoming: i64) -> VenueSummary {
        VenueSummary {
            id,
            name: format!("venue {id}"),
            city: city.into(),
            state: state.into(),
            num_upcoming_shows: upcoming,
        }
    }

    #[test]
    fn groups_consecutive_locations() {
        let areas = group_by_location(vec![
            summary(1, "San Francisco", "CA", 0),
            summary(3, "San Francisco", "CA", 1),
            summary(2, "New York", "NY", 2),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(areas[0].venues.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(areas[1].state, "NY");
        assert_eq!(areas[1].venues[0].num_upcoming_shows, 2);
    }

    #[test]
    fn same_city_name_in_different_states_is_split() {
        let areas = group_by_location(vec![
            summary(1, "Portland", "ME", 0),
            summary(2, "Portland", "OR", 0),
        ]);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn empty_listing() {
        assert!(group_by_location(Vec::new()).is_empty());
    }

    #[test]
    fn detail_flattens_venue_and_counts() {
        let now = Utc::now();
        let venue = Venue {
            id: 1,
            name: "Blue Note".into(),
            city: "New York".into(),
            state: "NY".into(),
            address: "131 W 3rd St".into(),
            phone: None,
            image_link: None,
            facebook_link: None,
            genres: vec!["Jazz".into()],
            website: None,
            seeking_talent: false,
            seeking_description: None,
        };
        let bookings = vec![VenueBooking {
            artist_id: 9,
            artist_name: "Jazz Trio".into(),
            artist_image_link: None,
            start_time: now + Duration::days(1),
        }];

        let detail = VenueDetail {
            venue,
            shows: ShowSplit::at(bookings, now),
        };
        let json = serde_json::to_value(&detail).unwrap();

        assert_eq!(json["name"], "Blue Note");
        assert_eq!(json["genres"][0], "Jazz");
        assert_eq!(json["upcoming_shows_count"], 1);
        assert_eq!(json["past_shows_count"], 0);
        assert_eq!(json["upcoming_shows"][0]["artist_name"], "Jazz Trio");
    }
}
