//! Error types for sessions and their configuration

use lp_state::StateError;

/// Session operation errors
///
/// Only programmer errors end up here (bad coordinates, colliding ids);
/// refused edits are reported through outcome enums instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// State mutation rejected
    #[error("state error: {0}")]
    State(#[from] StateError),
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// TOML did not match the config schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
