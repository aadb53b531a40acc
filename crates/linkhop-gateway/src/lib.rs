//! HTTP gateway for the Linkhop URL shortener.
//!
//! Translates the JSON/HTTP surface onto the shortener (write path) and the
//! redirector (read path).

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
