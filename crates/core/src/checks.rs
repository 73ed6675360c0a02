//! Individual precondition checks.
//!
//! Each check is a predicate over filesystem state that returns a [`Finding`].
//! Checks never print; the [`crate::Runner`] decides ordering and renders
//! findings. Steps that mutate the filesystem ([`setup_directories`] and
//! [`copy_images_to_comfyui`]) return [`CheckResult`] so I/O failures
//! propagate to the caller.

use crate::config::CheckerConfig;
use crate::constants::{INPUT_DIR_NAME, SOURCE_IMAGE_FILENAME, TARGET_IMAGE_FILENAME};
use crate::{CheckError, CheckResult};
use faceswap_files::{StagedImage, StagingService};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Marker printed in front of passed checks.
const PASS_MARKER: &str = "✅";

/// Outcome of a single check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    /// The precondition holds.
    Passed(String),
    /// The precondition does not hold, but the flow may continue.
    Warning(Vec<String>),
    /// The precondition does not hold and the flow must stop.
    Failed(Vec<String>),
}

impl Finding {
    pub fn is_failure(&self) -> bool {
        matches!(self, Finding::Failed(_))
    }

    /// Lines as they appear on the console.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Finding::Passed(message) => vec![format!("{PASS_MARKER} {message}")],
            Finding::Warning(lines) | Finding::Failed(lines) => lines.clone(),
        }
    }

    /// Writes the finding to `out`, one line per entry.
    pub fn render<W: Write>(&self, out: &mut W) -> CheckResult<()> {
        for line in self.lines() {
            writeln!(out, "{line}").map_err(CheckError::Report)?;
        }
        Ok(())
    }
}

/// Creates the input and output staging directories if they are missing.
///
/// # Returns
///
/// The input and output directory paths, both guaranteed to exist.
///
/// # Errors
///
/// Returns `CheckError::DirCreation` if either directory cannot be created.
pub fn setup_directories(config: &CheckerConfig) -> CheckResult<(PathBuf, PathBuf)> {
    let input_dir = config.input_dir();
    let output_dir = config.output_dir();

    for dir in [&input_dir, &output_dir] {
        fs::create_dir_all(dir).map_err(|source| CheckError::DirCreation {
            path: dir.clone(),
            source,
        })?;
    }

    tracing::debug!(
        "staging directories ready: {} and {}",
        input_dir.display(),
        output_dir.display()
    );

    Ok((input_dir, output_dir))
}

/// Checks that both the source face and the target image are present.
///
/// The source image is checked first, so when both are missing only the
/// source is reported. An image counts as present only when it is a regular
/// file: a directory named `source_face.png` fails here rather than in the
/// copy step.
pub fn check_images(config: &CheckerConfig) -> Finding {
    let images = [
        ("Source face image", config.source_image_path(), SOURCE_IMAGE_FILENAME, "source face"),
        ("Target image", config.target_image_path(), TARGET_IMAGE_FILENAME, "target"),
    ];

    for (label, path, file_name, role) in images {
        if !path.is_file() {
            return Finding::Failed(vec![
                format!("Error: {label} not found at {}", path.display()),
                format!(
                    "Please place your {role} image in the {INPUT_DIR_NAME} directory and name it '{file_name}'"
                ),
            ]);
        }
    }

    Finding::Passed("Found both source and target images".into())
}

/// Checks that the ReActor extension directory is installed.
///
/// Only the directory's existence is inspected.
pub fn check_reactor_extension(config: &CheckerConfig) -> Finding {
    let reactor_dir = config.reactor_dir();

    if !reactor_dir.is_dir() {
        return Finding::Failed(vec![
            format!(
                "Error: ReActor extension not found at {}",
                reactor_dir.display()
            ),
            "The ReActor extension is required for face swapping.".into(),
        ]);
    }

    Finding::Passed("ReActor extension is installed".into())
}

/// Checks whether the buffalo_l face analysis model has been downloaded.
///
/// Never fails: ComfyUI downloads the model on first use, so absence only
/// costs time on the first run.
pub fn check_buffalo_model(config: &CheckerConfig) -> Finding {
    let model_dir = config.buffalo_model_dir();

    if !model_dir.is_dir() {
        tracing::debug!("buffalo_l model missing at {}", model_dir.display());
        return Finding::Warning(vec![
            format!("Warning: buffalo_l model not found at {}", model_dir.display()),
            "The model will be downloaded automatically when running ComfyUI,".into(),
            "but this might cause delays on the first run.".into(),
        ]);
    }

    Finding::Passed("buffalo_l model is available".into())
}

/// Copies the source and target images into ComfyUI's input directory.
///
/// The destination is created if needed and existing files are overwritten.
/// A failure on the first image leaves the second uncopied.
pub fn copy_images_to_comfyui(config: &CheckerConfig) -> CheckResult<Vec<StagedImage>> {
    let service = StagingService::new(&config.comfyui_input_dir())?;
    let staged = service.stage_all(&[config.source_image_path(), config.target_image_path()])?;
    Ok(staged)
}

/// Builds a warning for staged files whose content does not look like an image.
pub fn check_staged_media(staged: &[StagedImage]) -> Option<Finding> {
    let lines: Vec<String> = staged
        .iter()
        .filter(|image| !image.is_image())
        .map(|image| {
            format!(
                "Warning: {} does not look like an image (detected type: {})",
                image.file_name,
                image.media_type.unwrap_or("unknown")
            )
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(Finding::Warning(lines))
    }
}
