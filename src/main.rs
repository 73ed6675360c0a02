use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faceswap_core::constants::{COMFYUI_DIR_ENV_VAR, ROOT_ENV_VAR};
use faceswap_core::{CheckerConfig, Runner, logging, resolve_repo_root};

/// Main entry point for the face swap precondition checker
///
/// Runs the full flow once: staging directories, image check, ReActor check,
/// buffalo_l check, copy into ComfyUI, next steps.
///
/// # Environment Variables
/// - `FACESWAP_ROOT`: repository root holding `ComfyUI/` and `test_inputs/` (default: current directory)
/// - `FACESWAP_COMFYUI_DIR`: ComfyUI directory (default: `<root>/ComfyUI`)
/// - `RUST_LOG`: diagnostic log filter, written to stderr
///
/// # Returns
/// * `Ok(ExitCode::SUCCESS)` - all hard checks passed and the images were copied
/// * `Ok(ExitCode::from(1))` - the image or extension check failed
/// * `Err(anyhow::Error)` - a filesystem error interrupted the run
fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(logging::env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let root = resolve_repo_root(std::env::var_os(ROOT_ENV_VAR).map(PathBuf::from))?;
    let comfyui_dir = std::env::var_os(COMFYUI_DIR_ENV_VAR).map(PathBuf::from);
    let config = CheckerConfig::new(root, comfyui_dir)?;

    tracing::debug!("repository root: {}", config.repo_root().display());
    tracing::debug!("ComfyUI directory: {}", config.comfyui_dir().display());

    let mut stdout = std::io::stdout().lock();
    let outcome = Runner::new(config).run(&mut stdout)?;

    Ok(outcome.into())
}
