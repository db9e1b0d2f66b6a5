//! Run configuration.
//!
//! A single `Config` value is built by the command line front end and passed
//! explicitly to every stage of a run.

use std::path::{Path, PathBuf};

/// Default schema file name
pub const DEFAULT_SCHEMA_FILE: &str = "api.json";

/// Default application name used in generated import paths
pub const DEFAULT_APP_NAME: &str = "app";

/// Directory (under the output root) that receives binding files
pub const BINDING_DIR: &str = "bindings";

/// Directory (under the output root) that receives handler files
pub const HANDLER_DIR: &str = "handlers";

/// Configuration for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the API description
    pub schema_path: PathBuf,
    /// Application/module name injected into generated imports
    pub app_name: String,
    /// Root under which the binding and handler directories live
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(schema_path: P, app_name: S) -> Self {
        Self {
            schema_path: schema_path.into(),
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    /// Set the output root
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn binding_dir(&self) -> PathBuf {
        self.output_dir.join(BINDING_DIR)
    }

    pub fn handler_dir(&self) -> PathBuf {
        self.output_dir.join(HANDLER_DIR)
    }

    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_FILE),
            app_name: DEFAULT_APP_NAME.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}
