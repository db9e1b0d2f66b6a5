//! Error handling for the scaffolding generator.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Every variant is fatal to a
//! generation run: the generator stops at the first error it meets.
//!
//! # Examples
//!
//! ```
//! use echo_scaffold::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::template("handler.go.tera is missing"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for scaffolding operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output path exists but is not a directory
    #[error("{} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The schema file could not be parsed into a list of endpoints
    #[error("Malformed schema {}: {reason}", path.display())]
    MalformedSchema { path: PathBuf, reason: String },

    /// An endpoint violates the schema invariants
    #[error("Invalid endpoint #{index}: {reason}")]
    InvalidEndpoint { index: usize, reason: String },

    /// Template error
    #[error("Template error: {0}")]
    Template(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),
}

impl Error {
    /// Create a new I/O error bound to `path`
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new malformed schema error
    pub fn malformed<P: AsRef<Path>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::MalformedSchema {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a new template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }
}
