//! Descent CLI - compile puzzle campaigns into static state graphs
//!
//! This CLI provides a unified interface for:
//! - Building the HTML, JSON or CSV export of a campaign
//! - Reporting state counts
//! - Validating campaign files
//! - Replaying move sequences through the graph

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use descent::cli::{commands, config::CommonConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "descent")]
#[command(version, about = "Compile Sokoban-style puzzles into anchor-navigable state graphs", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore a campaign and write the state graph
    Build(commands::build::BuildArgs),

    /// Report state counts for a campaign
    Stats(commands::stats::StatsArgs),

    /// Check a campaign for errors
    Validate(commands::validate::ValidateArgs),

    /// Replay moves through the state graph
    Trace(commands::trace::TraceArgs),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let common = CommonConfig {
        verbose: cli.verbose > 0,
        ..CommonConfig::default()
    };

    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &common),
        Commands::Stats(args) => commands::stats::execute(args, &common),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Trace(args) => commands::trace::execute(args, &common),
    }
}
