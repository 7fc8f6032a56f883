use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;
use docker_fish_completions::{FishEmitter, ToolPolicy};
use docker_fish_discovery::ProcessRunner;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output directory, relative to the working directory.
const COMPLETIONS_DIR: &str = "completions";

const DEFAULT_DOCKER_PATH: &str = "/usr/bin";

#[derive(Debug, Parser)]
#[command(name = "gen-docker-fish-completions")]
#[command(about = "Generate fish completions for docker and docker-compose from their help output")]
struct Cli {
    /// Directory containing the docker and docker-compose binaries.
    #[arg(long, default_value = DEFAULT_DOCKER_PATH)]
    docker_path: PathBuf,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let out_dir = Path::new(COMPLETIONS_DIR);
    fs::create_dir_all(out_dir).map_err(|err| {
        format!(
            "Failed to create output directory '{}': {err}",
            out_dir.display()
        )
    })?;

    for policy in [ToolPolicy::docker(), ToolPolicy::docker_compose()] {
        let path = out_dir.join(policy.file_name());
        println!("Generating {}...", path.display());
        write_script(&path, policy, ProcessRunner::new(&cli.docker_path))?;
    }

    println!("Done.");
    Ok(())
}

fn write_script(path: &Path, policy: ToolPolicy, runner: ProcessRunner) -> Result<(), String> {
    info!(tool_dir = %runner.tool_dir().display(), "Using tool directory");
    let emitter = FishEmitter::new(policy, runner);
    let binary = emitter.policy().binary;
    info!(binary, "Generating completions");

    let file = File::create(path)
        .map_err(|err| format!("Failed to create '{}': {err}", path.display()))?;
    let mut out = BufWriter::new(file);
    emitter
        .generate(&mut out)
        .map_err(|err| format!("Failed to generate {binary} completions: {err}"))?;

    info!(path = %path.display(), "Wrote completion script");
    Ok(())
}
