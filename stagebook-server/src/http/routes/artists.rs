//! Artist pages and form submissions

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;

use super::SearchParams;
use crate::db::ArtistSummary;
use crate::http::error::PageError;
use crate::http::extractors::{EntityId, SubmittedForm};
use crate::http::flash::{Flash, FlashRedirect, IncomingFlashes};
use crate::http::page::{templates, Page};
use crate::http::server::AppState;
use crate::models::ArtistInput;
use crate::services::ArtistService;
use crate::views::{ArtistDetail, FormView, SearchPage};

/// GET /artists
async fn list_artists(
    State(state): State<Arc<AppState>>,
    flashes: IncomingFlashes,
) -> Result<Page<Vec<ArtistSummary>>, PageError> {
    let artists = ArtistService::new(&state.pool).list().await?;
    Ok(Page::new(templates::ARTISTS, artists).consume(flashes))
}

async fn search(
    state: &AppState,
    search_term: String,
    flashes: IncomingFlashes,
) -> Result<Page<SearchPage>, PageError> {
    let results = ArtistService::new(&state.pool)
        .search(&search_term, Utc::now())
        .await?;
    Ok(Page::new(
        templates::SEARCH_ARTISTS,
        SearchPage {
            results,
            search_term,
        },
    )
    .consume(flashes))
}

/// GET /artists/search?search_term=
async fn search_artists(
    State(state): State<Arc<AppState>>,
    flashes: IncomingFlashes,
    Query(params): Query<SearchParams>,
) -> Result<Page<SearchPage>, PageError> {
    search(&state, params.search_term, flashes).await
}

/// POST /artists/search
async fn search_artists_form(
    State(state): State<Arc<AppState>>,
    flashes: IncomingFlashes,
    SubmittedForm(form): SubmittedForm,
) -> Result<Page<SearchPage>, PageError> {
    let term = form.get("search_term").unwrap_or_default().to_owned();
    search(&state, term, flashes).await
}

/// GET /artists/{id}
async fn show_artist(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flashes: IncomingFlashes,
) -> Result<Page<ArtistDetail>, PageError> {
    let detail = ArtistService::new(&state.pool).detail(id, Utc::now()).await?;
    Ok(Page::new(templates::SHOW_ARTIST, detail).consume(flashes))
}

/// GET /artists/create
async fn create_artist_form(flashes: IncomingFlashes) -> Page<FormView<ArtistInput>> {
    Page::new(templates::NEW_ARTIST, FormView::blank(ArtistInput::default())).consume(flashes)
}

/// POST /artists/create
async fn create_artist_submission(
    State(state): State<Arc<AppState>>,
    SubmittedForm(form): SubmittedForm,
) -> Response {
    let input = match ArtistInput::from_form(&form) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, "rejected artist form");
            return Page::new(templates::NEW_ARTIST, FormView::blank(ArtistInput::draft(&form)))
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .flash(Flash::danger(format!("Artist could not be listed: {}.", e)))
                .into_response();
        }
    };

    match ArtistService::new(&state.pool).create(&input).await {
        Ok(artist) => FlashRedirect::to(
            format!("/artists/{}", artist.id),
            Flash::success(format!("Artist {} was successfully listed!", artist.name)),
        )
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, name = %input.name, "artist insert failed");
            Page::new(templates::HOME, ())
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .flash(Flash::danger(format!(
                    "An error occurred. Artist {} could not be listed.",
                    input.name
                )))
                .into_response()
        }
    }
}

/// DELETE /artists/{id}
async fn delete_artist(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Page<()>, PageError> {
    match ArtistService::new(&state.pool).delete(id).await {
        Ok(artist) => Ok(Page::new(templates::HOME, ()).flash(Flash::success(format!(
            "Artist {} was successfully deleted.",
            artist.name
        )))),
        Err(e) if e.is_not_found() => {
            tracing::warn!(artist_id = id, "delete of unknown artist");
            Err(e.into())
        }
        Err(e) => {
            tracing::error!(error = %e, artist_id = id, "artist delete failed");
            Ok(Page::new(templates::HOME, ())
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .flash(Flash::danger(format!(
                    "An error occurred. Artist {} could not be deleted.",
                    id
                ))))
        }
    }
}

/// GET /artists/{id}/edit - form prefilled with the stored artist
async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flashes: IncomingFlashes,
) -> Result<Page<FormView<ArtistInput>>, PageError> {
    let artist = ArtistService::new(&state.pool).get(id).await?;
    Ok(Page::new(templates::EDIT_ARTIST, FormView::editing(id, artist.into())).consume(flashes))
}

/// POST /artists/{id}/edit
async fn edit_artist_submission(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    SubmittedForm(form): SubmittedForm,
) -> Response {
    let input = match ArtistInput::from_form(&form) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, artist_id = id, "rejected artist edit");
            return Page::new(templates::EDIT_ARTIST, FormView::editing(id, ArtistInput::draft(&form)))
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .flash(Flash::danger(format!("Artist {} could not be updated: {}.", id, e)))
                .into_response();
        }
    };

    let location = format!("/artists/{}", id);
    match ArtistService::new(&state.pool).update(id, &input).await {
        Ok(_) => FlashRedirect::to(
            location,
            Flash::success(format!("Artist {} was successfully updated!", id)),
        )
        .into_response(),
        Err(e) if e.is_not_found() => PageError::from(e).into_response(),
        Err(e) => {
            tracing::error!(error = %e, artist_id = id, "artist update failed");
            FlashRedirect::to(
                location,
                Flash::danger(format!("An error occurred. Artist {} could not be updated.", id)),
            )
            .into_response()
        }
    }
}

/// Artist routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", get(search_artists).post(search_artists_form))
        .route("/artists/create", get(create_artist_form).post(create_artist_submission))
        .route("/artists/{id}", get(show_artist).delete(delete_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist_submission))
}
