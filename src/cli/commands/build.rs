//! Build command - compile a campaign into an export file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use super::explore_campaign;
use crate::{
    cli::{
        config::{CampaignArgs, CommonConfig, ExploreArgs},
        output::{format_number, print_kv, print_section},
    },
    export::{ExportFormat, export},
};

#[derive(Parser, Debug)]
#[command(about = "Compile a campaign into a navigable state graph")]
pub struct BuildArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    /// Output format (html, json, csv)
    #[arg(long, short = 'f', default_value = "html")]
    pub format: ExportFormat,

    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    #[command(flatten)]
    pub explore: ExploreArgs,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: BuildArgs, common: &CommonConfig) -> Result<()> {
    let campaign = args.explore.apply(args.campaign.load()?);

    let common = CommonConfig {
        progress: common.progress && !args.no_progress,
        verbose: common.verbose,
    };
    let graph = explore_campaign(&campaign, &args.explore.config(), &common)?;

    export(&graph, args.format, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(output = %args.output.display(), "build finished");

    print_section("Build Complete");
    print_kv("Campaign", &args.campaign.label());
    print_kv("Levels", &campaign.level_count().to_string());
    print_kv("States", &format_number(graph.len()));
    print_kv("Format", &args.format.to_string());
    println!("\n✓ State graph written to: {}", args.output.display());
    Ok(())
}
