// src/server/state.rs

//! Application state for the frame server.
//!
//! Holds the runtime configuration. Game state is never stored here: it lives
//! in the requests.

use crate::config::server::ServerConfig;

/// Shared application state, injected into HTTP handlers.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    /// Create a new AppState with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        AppState { config }
    }
}
