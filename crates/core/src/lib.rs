//! # Face Swap Core
//!
//! Precondition checks for running the ReActor face swap workflow in ComfyUI.
//!
//! This crate contains pure filesystem checks and the orchestration around them:
//! - Staging directory creation under the repository root
//! - Presence checks for input images, the ReActor extension and the buffalo_l model
//! - Copying the images into ComfyUI's input directory
//!
//! **No process concerns**: environment variables, subscriber setup and exit codes belong in
//! the binaries; [`logging`] only builds the filter they install. Everything here takes a
//! resolved [`CheckerConfig`].

pub mod checks;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod runner;

#[cfg(test)]
mod test_support;

pub use checks::Finding;
pub use config::{resolve_repo_root, CheckerConfig};
pub use error::{CheckError, CheckResult};
pub use runner::{RunOutcome, Runner};
