//! Artist pages

use serde::Serialize;

use crate::db::{Artist, ArtistBooking};
use super::ShowSplit;

/// Artist page: the record plus its shows split around `now`
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowSplit<ArtistBooking>,
}
