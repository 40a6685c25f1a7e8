// src/error.rs
// Error types for objtrim

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the objtrim library
#[derive(Error, Debug)]
pub enum TrimError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed usemtl declaration (no material name) at {}:{line}", .path.display())]
    MalformedMaterial { path: PathBuf, line: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Result using TrimError
pub type Result<T> = std::result::Result<T, TrimError>;

impl TrimError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrimError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from the filesystem
    pub fn is_io(&self) -> bool {
        matches!(self, TrimError::Io { .. })
    }
}

impl From<String> for TrimError {
    fn from(s: String) -> Self {
        TrimError::Config(s)
    }
}
