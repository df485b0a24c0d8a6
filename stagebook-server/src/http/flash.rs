//! One-shot flash messages
//!
//! A redirect stores its message in the `flash` cookie; the next rendered
//! page reads it, shows it and clears the cookie. The cookie value is the
//! percent-encoded list of `category:message` lines.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;

/// Cookie name holding pending flashes.
pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Danger,
}

impl FlashCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "danger" => Some(Self::Danger),
            _ => None,
        }
    }
}

/// A user-visible message attached to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Danger,
            message: message.into(),
        }
    }
}

/// Encode flashes into a cookie-safe value.
pub fn encode(flashes: &[Flash]) -> String {
    let joined = flashes
        .iter()
        .map(|f| format!("{}:{}", f.category.as_str(), f.message.replace('\n', " ")))
        .collect::<Vec<_>>()
        .join("\n");
    urlencoding::encode(&joined).into_owned()
}

/// Decode a cookie value; malformed entries are skipped.
pub fn decode(value: &str) -> Vec<Flash> {
    let Ok(decoded) = urlencoding::decode(value) else {
        return Vec::new();
    };

    decoded
        .lines()
        .filter_map(|line| {
            let (category, message) = line.split_once(':')?;
            Some(Flash {
                category: FlashCategory::parse(category)?,
                message: message.to_owned(),
            })
        })
        .collect()
}

pub(crate) fn set_cookie(flashes: &[Flash]) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        encode(flashes)
    ))
    .ok()
}

pub(crate) fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Flashes queued by the previous response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingFlashes(pub Vec<Flash>);

impl IncomingFlashes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S> FromRequestParts<S> for IncomingFlashes
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flashes = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|h| h.split(';'))
            .filter_map(|pair| pair.trim().strip_prefix(FLASH_COOKIE)?.strip_prefix('='))
            .flat_map(decode)
            .collect();

        Ok(Self(flashes))
    }
}

/// `303 See Other` that leaves a flash for the target page.
#[derive(Debug)]
pub struct FlashRedirect {
    location: String,
    flash: Flash,
}

impl FlashRedirect {
    pub fn to(location: impl Into<String>, flash: Flash) -> Self {
        Self {
            location: location.into(),
            flash,
        }
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        let mut response = Redirect::to(&self.location).into_response();
        match set_cookie(std::slice::from_ref(&self.flash)) {
            Some(cookie) => {
                response.headers_mut().insert(SET_COOKIE, cookie);
            }
            None => tracing::warn!(location = %self.location, "flash dropped from redirect"),
        }
        response
    }
}
