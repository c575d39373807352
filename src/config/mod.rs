/// Main configuration module.
/// 
/// Re-exports submodules for game constants and runtime server configuration.
pub mod game;
pub mod server;
