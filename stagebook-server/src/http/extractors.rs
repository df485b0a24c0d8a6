//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;

use crate::models::FormFields;
use super::error::PageError;

/// Extract a record id from the path.
///
/// Anything that isn't a positive integer can't name a record, so it is
/// answered with the 404 page rather than a 400.
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| PageError::RouteNotFound)?;

        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(PageError::RouteNotFound),
        }
    }
}

/// Extract a urlencoded form body, keeping repeated keys.
pub struct SubmittedForm(pub FormFields);

impl<S> FromRequest<S> for SubmittedForm
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs): Form<Vec<(String, String)>> = Form::from_request(req, state)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "unreadable form body");
                PageError::BadForm
            })?;

        Ok(Self(FormFields::new(pairs)))
    }
}
