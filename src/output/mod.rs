//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

use std::path::Path;

use crate::core::Result;
use crate::generation::Artifact;

/// What happened to an artifact handed to an [`OutputService`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// A create-only artifact whose file already existed
    Kept,
}

/// Destination for generated artifacts
pub trait OutputService {
    /// Make sure `path` exists as a directory, creating it and its parents
    /// when absent
    fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Write one artifact, honouring its write policy
    fn write_artifact(&self, artifact: &Artifact) -> Result<WriteOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::generation::WritePolicy;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_creates_nested_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let nested_path = temp_dir.path().join("deeply/nested/directory");

        let result = output_service.ensure_directory(&nested_path);
        assert!(result.is_ok());
        assert!(nested_path.is_dir());
    }

    #[test]
    fn test_ensure_directory_accepts_existing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        std::fs::write(temp_dir.path().join("keep.txt"), "x").unwrap();
        assert!(output_service.ensure_directory(temp_dir.path()).is_ok());
        assert!(temp_dir.path().join("keep.txt").exists());
    }

    #[test]
    fn test_ensure_directory_rejects_regular_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let file_path = temp_dir.path().join("bindings");
        std::fs::write(&file_path, "not a directory").unwrap();

        let result = output_service.ensure_directory(&file_path);
        assert!(matches!(result, Err(Error::NotADirectory(p)) if p == file_path));
    }

    #[test]
    fn test_write_artifact_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let path = temp_dir.path().join("getUser.go");
        std::fs::write(&path, "stale").unwrap();

        let artifact = Artifact {
            path: path.clone(),
            content: "package handlers\n".to_string(),
            policy: WritePolicy::Overwrite,
        };

        let outcome = output_service.write_artifact(&artifact).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "package handlers\n");
    }

    #[test]
    fn test_write_artifact_create_only_keeps_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let path = temp_dir.path().join("getUserImpl.go");

        let artifact = Artifact {
            path: path.clone(),
            content: "generated".to_string(),
            policy: WritePolicy::CreateOnly,
        };

        assert_eq!(
            output_service.write_artifact(&artifact).unwrap(),
            WriteOutcome::Written
        );

        std::fs::write(&path, "hand written").unwrap();
        assert_eq!(
            output_service.write_artifact(&artifact).unwrap(),
            WriteOutcome::Kept
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hand written");
    }

    #[test]
    fn test_write_artifact_overwrite_truncates_longer_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let path = temp_dir.path().join("getUser_results.go");
        std::fs::write(&path, "a much longer stale body than the new one").unwrap();

        let artifact = Artifact {
            path: path.clone(),
            content: "short".to_string(),
            policy: WritePolicy::Overwrite,
        };

        output_service.write_artifact(&artifact).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_artifact_create_only_never_truncates() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let path = temp_dir.path().join("getUserImpl.go");
        std::fs::write(&path, "").unwrap();

        let artifact = Artifact {
            path: path.clone(),
            content: "generated".to_string(),
            policy: WritePolicy::CreateOnly,
        };

        assert_eq!(
            output_service.write_artifact(&artifact).unwrap(),
            WriteOutcome::Kept
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_artifact_into_missing_directory_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let artifact = Artifact {
            path: temp_dir.path().join("missing/file.go"),
            content: String::new(),
            policy: WritePolicy::Overwrite,
        };

        assert!(matches!(
            output_service.write_artifact(&artifact),
            Err(Error::Io { .. })
        ));
    }
}
