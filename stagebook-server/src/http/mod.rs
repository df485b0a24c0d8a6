//! HTTP layer
//!
//! Axum server with:
//! - One handler per page or form submission
//! - JSON page payloads naming the template to render
//! - Flash messages carried across redirects in a cookie
//! - 404/500 error pages, including for panics

pub mod error;
pub mod extractors;
pub mod flash;
pub mod page;
pub mod routes;
pub mod server;

pub use error::PageError;
pub use flash::{Flash, FlashCategory, FlashRedirect, IncomingFlashes};
pub use page::Page;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
