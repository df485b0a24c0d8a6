//! Show directory and booking form

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::db::{DbError, ShowListing};
use crate::http::error::PageError;
use crate::http::extractors::SubmittedForm;
use crate::http::flash::{Flash, FlashRedirect, IncomingFlashes};
use crate::http::page::{templates, Page};
use crate::http::server::AppState;
use crate::models::{ShowDraft, ShowInput};
use crate::services::ShowService;
use crate::views::ShowFormOptions;

/// GET /shows
async fn list_shows(
    State(state): State<Arc<AppState>>,
    flashes: IncomingFlashes,
) -> Result<Page<Vec<ShowListing>>, PageError> {
    let shows = ShowService::new(&state.pool).list().await?;
    Ok(Page::new(templates::SHOWS, shows).consume(flashes))
}

/// GET /shows/create
async fn create_show_form(
    State(state): State<Arc<AppState>>,
    flashes: IncomingFlashes,
) -> Result<Page<ShowFormOptions>, PageError> {
    let options = ShowService::new(&state.pool).form(ShowDraft::default()).await?;
    Ok(Page::new(templates::NEW_SHOW, options).consume(flashes))
}

/// Re-render the booking form with the submitted values.
async fn rejected(state: &AppState, draft: ShowDraft, message: String) -> Response {
    match ShowService::new(&state.pool).form(draft).await {
        Ok(options) => Page::new(templates::NEW_SHOW, options)
            .status(StatusCode::UNPROCESSABLE_ENTITY)
            .flash(Flash::danger(message))
            .into_response(),
        Err(e) => PageError::from(e).into_response(),
    }
}

/// POST /shows/create
async fn create_show_submission(
    State(state): State<Arc<AppState>>,
    SubmittedForm(form): SubmittedForm,
) -> Response {
    let input = match ShowInput::from_form(&form) {
        Ok(input) => input,
        Err(e) => {
            tracing::warn!(error = %e, "rejected show form");
            let message = format!("Show could not be listed: {}.", e);
            return rejected(&state, ShowDraft::from_form(&form), message).await;
        }
    };

    match ShowService::new(&state.pool).create(&input).await {
        Ok(_) => FlashRedirect::to("/shows", Flash::success("Show was successfully listed!"))
            .into_response(),
        Err(DbError::NotFound { resource, id }) => {
            tracing::warn!(resource, id = %id, "show references unknown record");
            let message = format!("Show could not be listed: {} {} does not exist.", resource, id);
            rejected(&state, ShowDraft::from_form(&form), message).await
        }
        Err(e) => {
            tracing::error!(error = %e, "show insert failed");
            Page::new(templates::HOME, ())
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .flash(Flash::danger("An error occurred. Show could not be listed."))
                .into_response()
        }
    }
}

/// Show routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show_submission))
}
