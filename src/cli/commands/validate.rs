//! Validate command - parse and check a campaign without exploring it

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::CampaignArgs,
        output::{print_kv, print_section},
    },
    puzzle::Tile,
};

#[derive(Parser, Debug)]
#[command(about = "Check a campaign file for errors")]
pub struct ValidateArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let campaign = args.campaign.load()?;

    print_section("Campaign Validation");
    print_kv("Campaign", &args.campaign.label());
    for (level, board) in campaign.boards().iter().enumerate() {
        print_kv(
            &format!("Level {level}"),
            &format!(
                "{}x{}, {} boulders, {} pits, {} gold{}",
                board.width(),
                board.height(),
                board.count(Tile::Boulder),
                board.count(Tile::Pit),
                board.collectible_count(),
                if board.has_stairs() { "" } else { ", no stairs" }
            ),
        );
    }
    print_kv(
        "Pickup messages",
        &format!(
            "{} for {} collectibles",
            campaign.pickup_messages().len(),
            campaign.collectible_count()
        ),
    );
    println!("\n✓ Campaign is valid");
    Ok(())
}
