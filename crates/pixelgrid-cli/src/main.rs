mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pixelgrid", about = "Recover the native pixel grid of upscaled pixel art")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image dimensions and decoder info
    Info(commands::info::InfoArgs),
    /// Fit the native grid and report scale/offset/confidence per axis
    Analyze(commands::analyze::AnalyzeArgs),
    /// Fit the native grid and write a reconstructed image
    Reconstruct(commands::reconstruct::ReconstructArgs),
    /// Print a default AnalysisConfig as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Reconstruct(args) => commands::reconstruct::run(args),
        Commands::Config => commands::config::run(),
    }
}
