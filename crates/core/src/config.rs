//! Checker runtime configuration.
//!
//! All paths the checker touches are resolved once at process startup into a
//! [`CheckerConfig`] and passed into every step. Library code never reads
//! environment variables; binaries read them and hand the values to
//! [`resolve_repo_root`] and [`CheckerConfig::new`].

use crate::constants::{
    BUFFALO_MODEL_SEGMENTS, COMFYUI_DIR_NAME, COMFYUI_INPUT_DIR_NAME, INPUT_DIR_NAME,
    OUTPUT_DIR_NAME, REACTOR_EXTENSION_SEGMENTS, SOURCE_IMAGE_FILENAME, TARGET_IMAGE_FILENAME,
    WORKFLOW_FILENAME,
};
use crate::{CheckError, CheckResult};
use std::path::{Path, PathBuf};

/// Path layout resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckerConfig {
    repo_root: PathBuf,
    comfyui_dir: PathBuf,
}

impl CheckerConfig {
    /// Create a new `CheckerConfig`.
    ///
    /// `comfyui_dir` defaults to `<repo_root>/ComfyUI`. The repository root must
    /// be an existing directory; the ComfyUI directory is not required to exist
    /// because its absence is reported by the extension check.
    pub fn new(repo_root: PathBuf, comfyui_dir: Option<PathBuf>) -> CheckResult<Self> {
        if !repo_root.is_dir() {
            return Err(CheckError::InvalidConfig(format!(
                "repository root is not a directory: {}",
                repo_root.display()
            )));
        }

        let comfyui_dir = comfyui_dir.unwrap_or_else(|| repo_root.join(COMFYUI_DIR_NAME));

        Ok(Self {
            repo_root,
            comfyui_dir,
        })
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn comfyui_dir(&self) -> &Path {
        &self.comfyui_dir
    }

    /// Staging directory for user-supplied images.
    pub fn input_dir(&self) -> PathBuf {
        self.repo_root.join(INPUT_DIR_NAME)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.repo_root.join(OUTPUT_DIR_NAME)
    }

    /// Workflow definition path. Computed for the next-steps checklist only.
    pub fn workflow_path(&self) -> PathBuf {
        self.repo_root.join(WORKFLOW_FILENAME)
    }

    pub fn source_image_path(&self) -> PathBuf {
        self.input_dir().join(SOURCE_IMAGE_FILENAME)
    }

    pub fn target_image_path(&self) -> PathBuf {
        self.input_dir().join(TARGET_IMAGE_FILENAME)
    }

    pub fn reactor_dir(&self) -> PathBuf {
        join_segments(&self.comfyui_dir, &REACTOR_EXTENSION_SEGMENTS)
    }

    pub fn buffalo_model_dir(&self) -> PathBuf {
        join_segments(&self.comfyui_dir, &BUFFALO_MODEL_SEGMENTS)
    }

    /// ComfyUI's own input directory, the staging destination.
    pub fn comfyui_input_dir(&self) -> PathBuf {
        self.comfyui_dir.join(COMFYUI_INPUT_DIR_NAME)
    }
}

fn join_segments(base: &Path, segments: &[&str]) -> PathBuf {
    segments
        .iter()
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}

/// Resolve the repository root without reading environment variables.
///
/// A non-empty `override_dir` is used as-is. Otherwise the current working
/// directory is the root.
pub fn resolve_repo_root(override_dir: Option<PathBuf>) -> CheckResult<PathBuf> {
    let override_dir = override_dir.filter(|dir| !dir.as_os_str().is_empty());

    match override_dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().map_err(CheckError::CurrentDir),
    }
}
