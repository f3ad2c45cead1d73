use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Losing a round is a state transition, not an error.
#[derive(Debug, Error)]
pub enum GameError {
    /// An asset could not be resolved at startup.
    #[error("resource unavailable: {name} ({}): {reason}", path.display())]
    ResourceUnavailable {
        name: String,
        path: PathBuf,
        reason: String,
    },

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

impl GameError {
    pub fn unavailable(name: &str, path: PathBuf, reason: impl Into<String>) -> Self {
        GameError::ResourceUnavailable {
            name: name.to_string(),
            path,
            reason: reason.into(),
        }
    }
}
