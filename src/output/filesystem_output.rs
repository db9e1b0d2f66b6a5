//! Filesystem-based output service implementation

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::{debug, info};

use super::{OutputService, WriteOutcome};
use crate::core::{Error, Result};
use crate::generation::{Artifact, WritePolicy};

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl OutputService for FileSystemOutputService {
    fn ensure_directory(&self, path: &Path) -> Result<()> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => {
                debug!(path = %path.display(), "Directory already exists");
                Ok(())
            }
            Ok(_) => Err(Error::NotADirectory(path.to_path_buf())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Creating directory");
                fs::create_dir_all(path).map_err(|e| Error::io(path, e))
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    fn write_artifact(&self, artifact: &Artifact) -> Result<WriteOutcome> {
        let path = &artifact.path;

        let mut options = OpenOptions::new();
        match artifact.policy {
            WritePolicy::Overwrite => options.write(true).create(true).truncate(true),
            WritePolicy::CreateOnly => options.write(true).create_new(true),
        };

        let file = match options.open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Keeping existing file");
                return Ok(WriteOutcome::Kept);
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        info!("Creating {}", path.display());
        let mut writer = BufWriter::new(file);
        writer
            .write_all(artifact.content.as_bytes())
            .map_err(|e| Error::io(path, e))?;
        writer.flush().map_err(|e| Error::io(path, e))?;

        Ok(WriteOutcome::Written)
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}
