//! Rendered page payloads
//!
//! Handlers never produce HTML themselves. A page is the template name,
//! the flashes to show and the view-model, serialized as JSON for the
//! presentation layer.

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::flash::{clear_cookie, Flash, IncomingFlashes};

/// Template names understood by the presentation layer.
pub mod templates {
    pub const HOME: &str = "pages/home.html";
    pub const VENUES: &str = "pages/venues.html";
    pub const SEARCH_VENUES: &str = "pages/search_venues.html";
    pub const SHOW_VENUE: &str = "pages/show_venue.html";
    pub const NEW_VENUE: &str = "forms/new_venue.html";
    pub const EDIT_VENUE: &str = "forms/edit_venue.html";
    pub const ARTISTS: &str = "pages/artists.html";
    pub const SEARCH_ARTISTS: &str = "pages/search_artists.html";
    pub const SHOW_ARTIST: &str = "pages/show_artist.html";
    pub const NEW_ARTIST: &str = "forms/new_artist.html";
    pub const EDIT_ARTIST: &str = "forms/edit_artist.html";
    pub const SHOWS: &str = "pages/shows.html";
    pub const NEW_SHOW: &str = "forms/new_show.html";
    pub const NOT_FOUND: &str = "errors/404.html";
    pub const SERVER_ERROR: &str = "errors/500.html";
}

/// A page to render.
#[derive(Debug)]
pub struct Page<T> {
    status: StatusCode,
    template: &'static str,
    flashes: Vec<Flash>,
    clear_flash_cookie: bool,
    data: T,
}

#[derive(Serialize)]
struct PageBody<'a, T> {
    template: &'static str,
    flashes: &'a [Flash],
    data: &'a T,
}

impl<T> Page<T> {
    pub fn new(template: &'static str, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            template,
            flashes: Vec::new(),
            clear_flash_cookie: false,
            data,
        }
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Attach a message produced by this request.
    pub fn flash(mut self, flash: Flash) -> Self {
        self.flashes.push(flash);
        self
    }

    /// Show messages left by a previous redirect and clear their cookie.
    pub fn consume(mut self, incoming: IncomingFlashes) -> Self {
        if !incoming.is_empty() {
            self.clear_flash_cookie = true;
            let mut flashes = incoming.0;
            flashes.append(&mut self.flashes);
            self.flashes = flashes;
        }
        self
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        let body = PageBody {
            template: self.template,
            flashes: &self.flashes,
            data: &self.data,
        };

        let mut response = (self.status, Json(body)).into_response();
        if self.clear_flash_cookie {
            response.headers_mut().insert(SET_COOKIE, clear_cookie());
        }
        response
    }
}
