//! Runtime server configuration.
//!
//! Read once from the environment at startup and handed to the HTTP handlers
//! through the application state.

use std::env;
use log::{info, warn};

use crate::game::GameKind;

/// Public URL used when `FRAME_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Listen address used when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Public URL the frame client reaches this server at, without trailing slash.
    pub base_url: String,
    pub bind_addr: String,
    /// Game served by the root page and the unprefixed `/api/*` routes.
    pub default_game: GameKind,
}

impl ServerConfig {
    pub fn new(base_url: &str, bind_addr: &str, default_game: GameKind) -> Self {
        ServerConfig {
            base_url: normalize_base_url(base_url),
            bind_addr: bind_addr.to_string(),
            default_game,
        }
    }

    /// Builds the configuration from `FRAME_BASE_URL`, `BIND_ADDR` and `FRAME_GAME`.
    pub fn from_env() -> Self {
        let base_url = match env::var("FRAME_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                warn!("[Config] FRAME_BASE_URL not set, using fallback {}", DEFAULT_BASE_URL);
                DEFAULT_BASE_URL.to_string()
            }
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let default_game = match env::var("FRAME_GAME") {
            Ok(slug) => GameKind::from_slug(&slug).unwrap_or_else(|| {
                warn!("[Config] Unknown FRAME_GAME '{}', serving {}", slug, GameKind::TicTacToe);
                GameKind::TicTacToe
            }),
            Err(_) => GameKind::TicTacToe,
        };

        let config = ServerConfig::new(&base_url, &bind_addr, default_game);
        info!("[Config] {:?}", config);
        config
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
