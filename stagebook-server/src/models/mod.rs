//! Domain models with validation at construction
//!
//! Submitted forms are turned into typed inputs here. Anything that reaches
//! a repository has already passed these checks.

pub mod artist;
pub mod contact;
pub mod form;
pub mod show;
pub mod validation;
pub mod venue;

pub use artist::ArtistInput;
pub use form::FormFields;
pub use show::{parse_start_time, ShowDraft, ShowInput};
pub use validation::ValidationError;
pub use venue::VenueInput;

/// Column width shared by most short text fields.
pub(crate) const SHORT_TEXT_MAX: usize = 120;

/// Column width for display names.
pub(crate) const NAME_MAX: usize = 200;

/// Column width for website links.
pub(crate) const WEBSITE_MAX: usize = 200;

/// Column width for image links and free-form descriptions.
pub(crate) const LONG_TEXT_MAX: usize = 500;
