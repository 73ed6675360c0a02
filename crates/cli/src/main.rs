use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faceswap_core::constants::{COMFYUI_DIR_ENV_VAR, ROOT_ENV_VAR};
use faceswap_core::{logging, resolve_repo_root, CheckerConfig, RunOutcome, Runner};

#[derive(Parser)]
#[command(name = "faceswap")]
#[command(about = "Check local preconditions for the ComfyUI ReActor face swap workflow")]
struct Cli {
    /// Repository root holding ComfyUI/ and test_inputs/
    #[arg(long, global = true, env = ROOT_ENV_VAR)]
    root: Option<PathBuf>,

    /// ComfyUI directory (defaults to <root>/ComfyUI)
    #[arg(long, global = true, env = COMFYUI_DIR_ENV_VAR)]
    comfyui_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every check and copy the images (default)
    Run,
    /// Create the staging directories
    Init,
    /// Run every check without copying
    Check,
    /// Copy the images into ComfyUI's input directory
    Stage,
    /// Print the resolved path layout
    Paths,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(logging::env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let root = resolve_repo_root(cli.root)?;
    let config = CheckerConfig::new(root, cli.comfyui_dir)?;
    let runner = Runner::new(config);
    let mut stdout = std::io::stdout().lock();

    let outcome = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => runner.run(&mut stdout)?,
        Commands::Init => {
            runner.init(&mut stdout)?;
            RunOutcome::Ready
        }
        Commands::Check => match runner.verify(&mut stdout)? {
            Some(failed) => failed,
            None => {
                writeln!(stdout, "\nAll checks passed. Run 'faceswap stage' to copy the images.")?;
                RunOutcome::Ready
            }
        },
        Commands::Stage => {
            runner.stage(&mut stdout)?;
            RunOutcome::Ready
        }
        Commands::Paths => {
            let config = runner.config();
            writeln!(stdout, "Repository root:     {}", config.repo_root().display())?;
            writeln!(stdout, "ComfyUI directory:   {}", config.comfyui_dir().display())?;
            writeln!(stdout, "Staging input:       {}", config.input_dir().display())?;
            writeln!(stdout, "Staging output:      {}", config.output_dir().display())?;
            writeln!(stdout, "Source face image:   {}", config.source_image_path().display())?;
            writeln!(stdout, "Target image:        {}", config.target_image_path().display())?;
            writeln!(stdout, "ReActor extension:   {}", config.reactor_dir().display())?;
            writeln!(stdout, "buffalo_l model:     {}", config.buffalo_model_dir().display())?;
            writeln!(stdout, "ComfyUI input:       {}", config.comfyui_input_dir().display())?;
            writeln!(stdout, "Workflow definition: {}", config.workflow_path().display())?;
            RunOutcome::Ready
        }
    };

    Ok(outcome.into())
}
