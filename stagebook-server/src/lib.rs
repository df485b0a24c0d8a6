//! stagebook-server: venue/artist/show booking directory
//!
//! Venues and artists are listed, searched, created, edited and deleted;
//! shows link one artist to one venue at a start time. Pages are returned
//! as JSON payloads naming the template that renders them.

pub mod db;
pub mod http;
pub mod models;
pub mod services;
pub mod views;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
