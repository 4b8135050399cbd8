//! Stats command - explore a campaign and report state counts

use anyhow::Result;
use clap::Parser;

use super::explore_campaign;
use crate::{
    cli::{
        config::{CampaignArgs, CommonConfig, ExploreArgs},
        output::{format_number, print_kv, print_section, print_subsection},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Report state counts for a campaign")]
pub struct StatsArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub explore: ExploreArgs,
}

pub fn execute(args: StatsArgs, common: &CommonConfig) -> Result<()> {
    let campaign = args.explore.apply(args.campaign.load()?);
    let graph = explore_campaign(&campaign, &args.explore.config(), common)?;

    print_section("Campaign Statistics");
    print_kv("Campaign", &args.campaign.label());
    print_kv("Levels", &campaign.level_count().to_string());
    print_kv("Total states", &format_number(graph.len()));
    print_kv("Victory states", &format_number(graph.victory_count()));
    print_kv(
        "Pickups used",
        &format!(
            "{} of {} messages ({} collectibles)",
            graph.pickups_consumed(),
            campaign.pickup_messages().len(),
            campaign.collectible_count()
        ),
    );

    // Victory states carry the level they lead into.
    print_subsection("States per level");
    for (level, count) in graph.level_counts() {
        print_kv(&format!("Level {level}"), &format_number(count));
    }
    Ok(())
}
