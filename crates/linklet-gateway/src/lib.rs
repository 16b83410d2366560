//! HTTP gateway for the Linklet URL shortener.
//!
//! Exposes the axum [`Router`](axum::Router) built by [`app::App`] plus the
//! pieces `main` wires together: CLI parsing, logging and application state.

pub mod app;
pub mod cli;
pub mod client;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
