//! Summit server library: state wiring, auth, and the HTTP API.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
