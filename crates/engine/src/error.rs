//! Engine-level error types.

use thiserror::Error;

/// Errors produced by the invoker (resolution + activity execution).
#[derive(Debug, Error)]
pub enum EngineError {
    /// No activity is registered under the requested kind identifier.
    #[error("no activity registered for kind '{0}'")]
    UnknownActivity(String),

    /// The activity (or the parameter check preceding it) failed.
    #[error(transparent)]
    Activity(#[from] activities::ActivityError),
}
