//! Image staging service implementation
//!
//! [`StagingService`] is bound to a single destination directory (normally
//! `ComfyUI/input`) and copies source files into it under their original file
//! names.
//!
//! # Copy Semantics
//!
//! - The source is read fully into memory and written to the destination in one call
//! - An existing destination file is replaced, so repeated runs converge on the same bytes
//! - The SHA-256 digest is computed over the bytes that were written
//! - Media type detection is best-effort and never blocks a copy

use crate::FilesError;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Description of a file copied into the destination directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
    /// File name shared by the source and the staged copy
    pub file_name: String,

    /// Path of the staged copy inside the destination directory
    pub destination: PathBuf,

    /// Size of the copied content in bytes
    pub size_bytes: u64,

    /// Lowercase hexadecimal SHA-256 digest of the copied content
    pub sha256: String,

    /// Detected media type (MIME type), if available
    ///
    /// Detection looks at magic bytes only. `None` means the content was not
    /// recognised, which for a face swap input usually means it is not an image.
    pub media_type: Option<&'static str>,
}

impl StagedImage {
    /// Returns `true` when the sniffed media type is an image type.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type
            .map(|mime| mime.starts_with("image/"))
            .unwrap_or(false)
    }
}

/// Service copying files into one destination directory
#[derive(Debug)]
pub struct StagingService {
    destination_dir: PathBuf,
}

impl StagingService {
    /// Creates a new `StagingService`, creating `destination_dir` if needed
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if:
    /// - `destination_dir` exists but is not a directory
    /// - the directory cannot be created (I/O)
    pub fn new(destination_dir: &Path) -> Result<Self, FilesError> {
        if destination_dir.exists() && !destination_dir.is_dir() {
            return Err(FilesError::InvalidDestination(format!(
                "Path is not a directory: {}",
                destination_dir.display()
            )));
        }

        fs::create_dir_all(destination_dir).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create destination directory {}: {}",
                    destination_dir.display(),
                    e
                ),
            ))
        })?;

        Ok(Self {
            destination_dir: destination_dir.to_path_buf(),
        })
    }

    /// Copies `source_path` into the destination directory
    ///
    /// The copy keeps the source's file name and overwrites any file already
    /// present under that name.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if:
    /// - `source_path` has no file name component
    /// - the source cannot be read (I/O)
    /// - the destination cannot be written (I/O)
    pub fn stage(&self, source_path: &Path) -> Result<StagedImage, FilesError> {
        let file_name = source_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| FilesError::MissingFileName(source_path.display().to_string()))?
            .to_owned();

        let buffer = fs::read(source_path).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read source file {}: {}",
                    source_path.display(),
                    e
                ),
            ))
        })?;

        let destination = self.destination_dir.join(&file_name);
        fs::write(&destination, &buffer).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write file to {}: {}", destination.display(), e),
            ))
        })?;

        let sha256 = hex::encode(Sha256::digest(&buffer));
        let media_type = infer::get(&buffer).map(|kind| kind.mime_type());

        tracing::debug!(
            "staged {} -> {} ({} bytes, sha256 {})",
            source_path.display(),
            destination.display(),
            buffer.len(),
            sha256
        );

        Ok(StagedImage {
            file_name,
            destination,
            size_bytes: buffer.len() as u64,
            sha256,
            media_type,
        })
    }

    /// Stages each source in order, stopping at the first failure
    ///
    /// Files copied before a failure are left in place.
    pub fn stage_all<P: AsRef<Path>>(&self, sources: &[P]) -> Result<Vec<StagedImage>, FilesError> {
        sources
            .iter()
            .map(|source| self.stage(source.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Minimal PNG signature followed by an IHDR chunk header
    const PNG_BYTES: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52,
    ];

    #[test]
    fn test_new_creates_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("ComfyUI").join("input");

        StagingService::new(&dest).unwrap();

        assert!(dest.is_dir());
    }

    #[test]
    fn test_new_rejects_file_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("input");
        fs::write(&dest, b"not a dir").unwrap();

        let result = StagingService::new(&dest);

        assert!(matches!(result, Err(FilesError::InvalidDestination(_))));
    }

    #[test]
    fn test_stage_copies_bytes_and_metadata() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source_face.png");
        fs::write(&source, PNG_BYTES).unwrap();

        let service = StagingService::new(&temp.path().join("input")).unwrap();
        let staged = service.stage(&source).unwrap();

        assert_eq!(staged.file_name, "source_face.png");
        assert_eq!(fs::read(&staged.destination).unwrap(), PNG_BYTES);
        assert_eq!(staged.size_bytes, PNG_BYTES.len() as u64);
        assert_eq!(staged.sha256.len(), 64);
        assert_eq!(staged.sha256, hex::encode(Sha256::digest(PNG_BYTES)));
        assert_eq!(staged.media_type, Some("image/png"));
        assert!(staged.is_image());
    }

    #[test]
    fn test_stage_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("input");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("target_image.png"), b"stale content").unwrap();

        let source = temp.path().join("target_image.png");
        fs::write(&source, PNG_BYTES).unwrap();

        let service = StagingService::new(&dest).unwrap();
        service.stage(&source).unwrap();

        assert_eq!(fs::read(dest.join("target_image.png")).unwrap(), PNG_BYTES);
    }

    #[test]
    fn test_stage_twice_is_identical() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source_face.png");
        fs::write(&source, PNG_BYTES).unwrap();

        let service = StagingService::new(&temp.path().join("input")).unwrap();
        let first = service.stage(&source).unwrap();
        let second = service.stage(&source).unwrap();

        assert_eq!(first.sha256, second.sha256);
        assert_eq!(first.destination, second.destination);
    }

    #[test]
    fn test_stage_unrecognised_content_is_not_image() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source_face.png");
        fs::write(&source, b"plain text pretending to be a png").unwrap();

        let service = StagingService::new(&temp.path().join("input")).unwrap();
        let staged = service.stage(&source).unwrap();

        assert!(!staged.is_image());
    }

    #[test]
    fn test_stage_missing_source_is_io_error() {
        let temp = TempDir::new().unwrap();
        let service = StagingService::new(&temp.path().join("input")).unwrap();

        let result = service.stage(&temp.path().join("missing.png"));

        match result {
            Err(FilesError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_stage_all_stops_at_first_failure() {
        let temp = TempDir::new().unwrap();
        let present = temp.path().join("source_face.png");
        fs::write(&present, PNG_BYTES).unwrap();
        let missing = temp.path().join("target_image.png");

        let dest = temp.path().join("input");
        let service = StagingService::new(&dest).unwrap();
        let result = service.stage_all(&[&present, &missing]);

        assert!(result.is_err());
        // No rollback for files copied before the failure
        assert!(dest.join("source_face.png").is_file());
        assert!(!dest.join("target_image.png").exists());
    }
}
