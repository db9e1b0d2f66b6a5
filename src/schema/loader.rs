//! File-based schema loader
//!
//! Reads the whole definition file in one call, so the file handle never
//! outlives `Schema::load`.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::types::Schema;
use crate::core::{Error, Result};

/// Document format of a definition file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
    /// Try JSON first, then YAML
    Auto,
}

impl SchemaFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Auto,
        }
    }
}

impl Schema {
    /// Read, parse and validate the definition file at `path`.
    ///
    /// # Errors
    /// - [`Error::Io`] when the file cannot be read
    /// - [`Error::MalformedSchema`] when the content is not a valid definition
    /// - [`Error::InvalidEndpoint`] when an endpoint lacks a name or has an
    ///   empty or path-like prefix
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading API definition");

        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let content = std::str::from_utf8(&bytes)
            .map_err(|e| Error::malformed(path, format!("not valid UTF-8: {e}")))?;
        let schema = Self::parse(content, SchemaFormat::from_path(path))
            .map_err(|reason| Error::malformed(path, reason))?;
        schema.validate()?;

        info!("Found {} endpoints", schema.endpoints.len());
        Ok(schema)
    }

    /// Parse definition text in the given format, returning the parser's
    /// message on failure
    pub fn parse(content: &str, format: SchemaFormat) -> std::result::Result<Self, String> {
        match format {
            SchemaFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            SchemaFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            SchemaFormat::Auto => serde_json::from_str(content)
                .or_else(|_| serde_yaml::from_str(content))
                .map_err(|e| e.to_string()),
        }
    }

    /// Check that every endpoint has a name and a prefix usable as a plain
    /// file name
    pub fn validate(&self) -> Result<()> {
        for (index, endpoint) in self.endpoints.iter().enumerate() {
            if endpoint.name.trim().is_empty() {
                return Err(Error::InvalidEndpoint {
                    index,
                    reason: "name is empty".to_string(),
                });
            }
            if endpoint.prefix.trim().is_empty() {
                return Err(Error::InvalidEndpoint {
                    index,
                    reason: format!("prefix of {} is empty", endpoint.name),
                });
            }
            if endpoint.prefix.contains(['/', '\\']) || endpoint.prefix.starts_with('.') {
                return Err(Error::InvalidEndpoint {
                    index,
                    reason: format!(
                        "prefix {:?} of {} is not a plain file name",
                        endpoint.prefix, endpoint.name
                    ),
                });
            }
        }
        Ok(())
    }
}
