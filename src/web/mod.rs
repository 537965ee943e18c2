//! Web API module for folio.
//!
//! This module serves the article feed and repository statistics as JSON
//! for the site's front end.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
