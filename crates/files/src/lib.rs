//! Face Swap Image Staging
//!
//! This crate copies user-supplied images into the input folder of the host
//! application (ComfyUI) so that a workflow can reference them by file name.
//!
//! ## Behaviour
//!
//! - The destination directory is created on construction if it does not exist
//! - Files keep their original file name in the destination
//! - Existing files with the same name are overwritten
//! - Every staged copy is described by a [`StagedImage`] carrying its SHA-256 digest
//! - There is no rollback: the first failed copy stops a batch
//!
//! ## Layout
//!
//! ```text
//! <repo_root>/
//! ├── test_inputs/          # staging directory (source)
//! │   ├── source_face.png
//! │   └── target_image.png
//! └── ComfyUI/
//!     └── input/            # destination
//!         ├── source_face.png
//!         └── target_image.png
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use faceswap_files::StagingService;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = StagingService::new(Path::new("ComfyUI/input"))?;
//! let staged = service.stage(Path::new("test_inputs/source_face.png"))?;
//! println!("{} -> {}", staged.file_name, staged.destination.display());
//! # Ok(())
//! # }
//! ```

mod staging;

pub use staging::{StagedImage, StagingService};

/// Errors that can occur while staging files
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Destination exists but is not a directory
    #[error("Invalid destination directory: {0}")]
    InvalidDestination(String),

    /// Source path has no usable file name component
    #[error("Source path has no file name: {0}")]
    MissingFileName(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
