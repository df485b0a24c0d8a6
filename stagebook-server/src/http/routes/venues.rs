//! Venue pages and form submissions

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
use crate::http::error::PageError;
use crate::http::extractors::{EntityId, SubmittedForm};
use crate::http::flash::{Flash, FlashRedirect, IncomingFlashes};
use crate::http::page::{templates, Page};
use crate::http::server::AppState;
use crate::models::VenueInput;
use crate::services::VenueService;
use crate::views::{FormView, SearchPage, VenueArea, VenueDetail};

/// GET /venues - venues grouped by city and state
async fn list_venues(
    State(state): State<Arc<AppState>>,
    flashes: IncomingFlashes,
) -> Result<Page<Vec<VenueArea>>, PageError> {
    let areas = VenueService::new(&state.pool).areas(Utc::now()).await?;
    Ok(Page::new(templates::VENUES, areas).consume(flashes))
}

async fn search(
    state: &AppState,
    search_term: String,
    flashes: IncomingFlashes,
) -> Result<Page<SearchPage>, PageError> {
    let results = VenueService::new(&state.pool)
        .search(&search_term, Utc::now())
        .await?;
    Ok(Page::new(
        templates::SEARCH_VENUES,
        SearchPage {
            results,
            search_term,
        },
    )
    .consume(flashes))
}

/// GET /venues/search?search_term=
async fn search_venues(
    State(state): State<Arc<AppState>>,
    flashes: IncomingFlashes,
    Query(params): Query<SearchParams>,
) -> Result<Page<SearchPage>, PageError> {
    search(&state, params.search_term, flashes).await
}

/// POST /venues/search
async fn search_venues_form(
    State(state): State<Arc<AppState>>,
    flashes: IncomingFlashes,
    SubmittedForm(form): SubmittedForm,
) -> Result<Page<SearchPage>, PageError> {
    let term = form.get("search_term").unwrap_or_default().to_owned();
    search(&state, term, flashes).await
}

/// GET /venues/{id}
async fn show_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flashes: IncomingFlashes,
) -> Result<Page<VenueDetail>, PageError> {
    let detail = VenueService::new(&state.pool).detail(id, Utc::now()).await?;
    Ok(Page::new(templates::SHOW_VENUE, detail).consume(flashes))
}

/// GET /venues/create
async fn create_venue_form(flashes: IncomingFlashes) -> Page<FormView<VenueInput>> {
    Page::new(templates::NEW_VENUE, FormView::blank(VenueInput::default())).consume(flashes)
}

/// POST /venues/create
async fn create_venue_submission(
    State(state): State<Arc<AppState>>,
    SubmittedForm(form): SubmittedForm,
) -> Response {
    let input = match VenueInput::from_form(&form) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, "rejected venue form");
            return Page::new(templates::NEW_VENUE, FormView::blank(VenueInput::draft(&form)))
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .flash(Flash::danger(format!("Venue could not be listed: {}.", e)))
                .into_response();
        }
    };

    match VenueService::new(&state.pool).create(&input).await {
        Ok(venue) => FlashRedirect::to(
            format!("/venues/{}", venue.id),
            Flash::success(format!("Venue {} was successfully listed!", venue.name)),
        )
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, name = %input.name, "venue insert failed");
            Page::new(templates::HOME, ())
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .flash(Flash::danger(format!(
                    "An error occurred. Venue {} could not be listed.",
                    input.name
                )))
                .into_response()
        }
    }
}

/// DELETE /venues/{id}
async fn delete_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Page<()>, PageError> {
    match VenueService::new(&state.pool).delete(id).await {
        Ok(venue) => Ok(Page::new(templates::HOME, ()).flash(Flash::success(format!(
            "Venue {} was successfully deleted.",
            venue.name
        )))),
        Err(e) if e.is_not_found() => {
            tracing::warn!(venue_id = id, "delete of unknown venue");
            Err(e.into())
        }
        Err(e) => {
            tracing::error!(error = %e, venue_id = id, "venue delete failed");
            Ok(Page::new(templates::HOME, ())
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .flash(Flash::danger(format!(
                    "An error occurred. Venue {} could not be deleted.",
                    id
                ))))
        }
    }
}

/// GET /venues/{id}/edit - form prefilled with the stored venue
async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flashes: IncomingFlashes,
) -> Result<Page<FormView<VenueInput>>, PageError> {
    let venue = VenueService::new(&state.pool).get(id).await?;
    Ok(Page::new(templates::EDIT_VENUE, FormView::editing(id, venue.into())).consume(flashes))
}

/// POST /venues/{id}/edit
async fn edit_venue_submission(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    SubmittedForm(form): SubmittedForm,
) -> Response {
    let input = match VenueInput::from_form(&form) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, venue_id = id, "rejected venue edit");
            return Page::new(templates::EDIT_VENUE, FormView::editing(id, VenueInput::draft(&form)))
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .flash(Flash::danger(format!("Venue {} could not be updated: {}.", id, e)))
                .into_response();
        }
    };

    let location = format!("/venues/{}", id);
    match VenueService::new(&state.pool).update(id, &input).await {
        Ok(_) => FlashRedirect::to(
            location,
            Flash::success(format!("Venue {} was successfully updated!", id)),
        )
        .into_response(),
        Err(e) if e.is_not_found() => PageError::from(e).into_response(),
        Err(e) => {
            tracing::error!(error = %e, venue_id = id, "venue update failed");
            FlashRedirect::to(
                location,
                Flash::danger(format!("An error occurred. Venue {} could not be updated.", id)),
            )
            .into_response()
        }
    }
}

/// Venue routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", get(search_venues).post(search_venues_form))
        .route("/venues/create", get(create_venue_form).post(create_venue_submission))
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue_submission))
}
