//! Show form input and start time parsing

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde::Serialize;

use super::form::FormFields;
use super::ValidationError;

/// Naive layouts accepted besides RFC 3339. Interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Years a `TIMESTAMPTZ` column round-trips without surprises.
const START_YEARS: RangeInclusive<i32> = 1..=9999;

/// Validated show fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowInput {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: DateTime<Utc>,
}

impl ShowInput {
    pub fn from_form(form: &FormFields) -> Result<Self, ValidationError> {
        let artist_id = form.id("artist_id")?;
        let venue_id = form.id("venue_id")?;
        let raw = form
            .text("start_time")
            .ok_or(ValidationError::Missing { field: "start_time" })?;

        Ok(Self {
            artist_id,
            venue_id,
            start_time: parse_start_time(raw)?,
        })
    }
}

/// Raw show form values, echoed back when a submission is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowDraft {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowDraft {
    pub fn from_form(form: &FormFields) -> Self {
        let owned = |name: &str| form.text(name).unwrap_or_default().to_owned();
        Self {
            artist_id: owned("artist_id"),
            venue_id: owned("venue_id"),
            start_time: owned("start_time"),
        }
    }
}

/// Parse a submitted start time.
///
/// Accepts RFC 3339 (any offset, normalised to UTC) or one of
/// [`NAIVE_FORMATS`], which carry no offset and are taken as UTC.
/// The year must fall in [`START_YEARS`].
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let raw = raw.trim();

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|naive| naive.and_utc())
        })
        .ok_or(ValidationError::InvalidFormat {
            field: "start_time",
            reason: "expected YYYY-MM-DD HH:MM:SS or an RFC 3339 timestamp",
        })?;

    if !START_YEARS.contains(&parsed.year()) {
        return Err(ValidationError::InvalidFormat {
            field: "start_time",
            reason: "year must be between 1 and 9999",
        });
    }

    Ok(parsed)
}
