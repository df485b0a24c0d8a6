//! Home page

use axum::{routing::get, Router};

use crate::http::flash::IncomingFlashes;
use crate::http::page::{templates, Page};

/// GET /
async fn index(flashes: IncomingFlashes) -> Page<()> {
    Page::new(templates::HOME, ()).consume(flashes)
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
