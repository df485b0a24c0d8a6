//! Page errors with IntoResponse
//!
//! Errors render the 404 or 500 page. Database detail is logged, never
//! sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use super::flash::Flash;
use super::page::{templates, Page};

/// Page error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum PageError {
    /// No route, or a path id that can't name a record (404)
    RouteNotFound,

    /// Record lookup came back empty (404)
    NotFound { resource: &'static str, id: String },

    /// Request body couldn't be decoded as a form (400)
    BadForm,

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

/// "venue" -> "Venue"
fn capitalized(resource: &str) -> String {
    let mut chars = resource.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn server_error() -> Response {
    Page::new(templates::SERVER_ERROR, ())
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::RouteNotFound => Page::new(templates::NOT_FOUND, ())
                .status(StatusCode::NOT_FOUND)
                .into_response(),
            Self::NotFound { resource, id } => Page::new(templates::NOT_FOUND, ())
                .status(StatusCode::NOT_FOUND)
                .flash(Flash::danger(format!(
                    "{} {} was not found.",
                    capitalized(resource),
                    id
                )))
                .into_response(),
            Self::BadForm => Page::new(templates::HOME, ())
                .status(StatusCode::BAD_REQUEST)
                .flash(Flash::danger("The submitted form could not be read."))
                .into_response(),
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                server_error()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                server_error()
            }
        }
    }
}

impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
