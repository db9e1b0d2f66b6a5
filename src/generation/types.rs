//! Core types for the generation domain

use std::path::PathBuf;

/// How an artifact treats a file that is already on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Regenerate the file on every run
    Overwrite,
    /// Write only when no file exists yet
    CreateOnly,
}

/// Generated artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
    pub policy: WritePolicy,
}

/// Files touched while emitting one endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    pub written: Vec<PathBuf>,
    pub kept: Vec<PathBuf>,
}

/// Result of a whole generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub endpoints: usize,
    pub written: Vec<PathBuf>,
    pub kept: Vec<PathBuf>,
}

impl GenerationSummary {
    pub(crate) fn absorb(&mut self, report: EmitReport) {
        self.endpoints += 1;
        self.written.extend(report.written);
        self.kept.extend(report.kept);
    }
}
