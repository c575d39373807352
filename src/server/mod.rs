// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the HTTP side of the frame games, including:
//! - Application state management
//! - HTTP routing and handlers
//! - Game state encoding for the round trip through the client
//! - Frame HTML templating and error responses

pub mod state;
pub mod router;
pub mod handlers;
pub mod codec;
pub mod frame;
pub mod error;
