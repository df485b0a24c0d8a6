//! Query/command services
//!
//! One method per page or form submission. Services borrow the pool for
//! the length of a request and compose repository calls with the
//! view-model builders in [`crate::views`].

pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::ArtistService;
pub use shows::ShowService;
pub use venues::VenueService;
