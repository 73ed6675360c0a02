//! Orchestration of the precondition checks.
//!
//! The [`Runner`] fixes the order of the steps and owns all console output:
//!
//! 1. create staging directories
//! 2. check images (stop on failure)
//! 3. check the ReActor extension (stop on failure)
//! 4. check the buffalo_l model (warning only)
//! 5. copy images into ComfyUI's input directory
//! 6. print the manual next steps

use crate::checks::{
    check_buffalo_model, check_images, check_reactor_extension, check_staged_media,
    copy_images_to_comfyui, setup_directories, Finding,
};
use crate::config::CheckerConfig;
use crate::constants::WORKFLOW_FILENAME;
use crate::{CheckError, CheckResult};
use std::io::Write;
use std::process::ExitCode;

const BANNER: &str = "=== ComfyUI Face Swap Test ===";

/// Final state of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every hard check passed and the images were copied.
    Ready,
    /// One of the input images is missing.
    ImagesMissing,
    /// The ReActor extension directory is missing.
    ExtensionMissing,
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Ready => 0,
            RunOutcome::ImagesMissing | RunOutcome::ExtensionMissing => 1,
        }
    }

    pub fn is_ready(self) -> bool {
        self == RunOutcome::Ready
    }
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

/// Runs the checks against one resolved configuration.
#[derive(Clone, Debug)]
pub struct Runner {
    config: CheckerConfig,
}

impl Runner {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Runs the full flow, writing the human-readable report to `out`.
    ///
    /// # Returns
    /// * `Ok(RunOutcome)` - the run completed or stopped at a failed check
    /// * `Err(CheckError)` - a directory could not be created, a copy failed, or
    ///   `out` could not be written
    pub fn run<W: Write>(&self, out: &mut W) -> CheckResult<RunOutcome> {
        writeln!(out, "{BANNER}").map_err(CheckError::Report)?;

        if let Some(outcome) = self.verify(out)? {
            return Ok(outcome);
        }

        self.stage(out)?;
        self.print_next_steps(out)?;

        tracing::info!("face swap preconditions satisfied");
        Ok(RunOutcome::Ready)
    }

    /// Runs every step except the copy.
    ///
    /// Returns `Some(outcome)` when a hard check failed, `None` when the flow
    /// may continue to staging.
    pub fn verify<W: Write>(&self, out: &mut W) -> CheckResult<Option<RunOutcome>> {
        self.init(out)?;

        tracing::info!("checking input images");
        let images = check_images(&self.config);
        images.render(out)?;
        if images.is_failure() {
            return Ok(Some(RunOutcome::ImagesMissing));
        }

        tracing::info!("checking ReActor extension");
        let extension = check_reactor_extension(&self.config);
        extension.render(out)?;
        if extension.is_failure() {
            return Ok(Some(RunOutcome::ExtensionMissing));
        }

        tracing::info!("checking buffalo_l model");
        check_buffalo_model(&self.config).render(out)?;

        Ok(None)
    }

    /// Creates the staging directories and reports them.
    pub fn init<W: Write>(&self, out: &mut W) -> CheckResult<()> {
        let (input_dir, output_dir) = setup_directories(&self.config)?;
        writeln!(
            out,
            "Test directories created: {} and {}",
            input_dir.display(),
            output_dir.display()
        )
        .map_err(CheckError::Report)
    }

    /// Copies both images into ComfyUI's input directory and reports it.
    pub fn stage<W: Write>(&self, out: &mut W) -> CheckResult<()> {
        tracing::info!("copying images into ComfyUI");
        let staged = copy_images_to_comfyui(&self.config)?;

        if let Some(warning) = check_staged_media(&staged) {
            tracing::debug!("staged files with unrecognised media type");
            warning.render(out)?;
        }

        Finding::Passed(format!(
            "Copied images to ComfyUI input directory: {}",
            self.config.comfyui_input_dir().display()
        ))
        .render(out)?;

        for image in &staged {
            writeln!(
                out,
                "   {} -> {} ({} bytes, sha256 {})",
                image.file_name,
                image.destination.display(),
                image.size_bytes,
                short_digest(&image.sha256)
            )
            .map_err(CheckError::Report)?;
        }
        Ok(())
    }

    fn print_next_steps<W: Write>(&self, out: &mut W) -> CheckResult<()> {
        tracing::debug!(
            "workflow definition expected at {}",
            self.config.workflow_path().display()
        );

        let steps = [
            "Start ComfyUI server".to_string(),
            format!("Import the workflow from {WORKFLOW_FILENAME}"),
            "Run the workflow to test face swapping".to_string(),
            "If everything works, push your model to Replicate".to_string(),
        ];

        writeln!(out, "\nAll checks passed! You can now:").map_err(CheckError::Report)?;
        for (index, step) in steps.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, step).map_err(CheckError::Report)?;
        }
        Ok(())
    }
}

/// First 12 hex characters of a digest, enough to compare runs by eye.
fn short_digest(sha256: &str) -> &str {
    sha256.get(..12).unwrap_or(sha256)
}
