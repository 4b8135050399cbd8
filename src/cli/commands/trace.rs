//! Trace command - replay a move string through the state graph

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use super::explore_campaign;
use crate::{
    cli::{
        config::{CampaignArgs, CommonConfig, ExploreArgs},
        output::{print_section, print_state, print_subsection},
    },
    puzzle::Direction,
};

#[derive(Parser, Debug)]
#[command(about = "Walk the state graph along a sequence of moves")]
pub struct TraceArgs {
    #[command(flatten)]
    pub campaign: CampaignArgs,

    #[command(flatten)]
    pub explore: ExploreArgs,

    /// Moves as vi keys (h, j, k, l) or initials (L, D, U, R)
    pub moves: String,
}

/// Parse a move string, ignoring whitespace.
pub fn parse_moves(moves: &str) -> Result<Vec<Direction>> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(i, c)| {
            Direction::from_char(c).ok_or_else(|| {
                anyhow!("Invalid move '{c}' at position {i} (expected h/j/k/l or L/D/U/R)")
            })
        })
        .collect()
}

pub fn execute(args: TraceArgs, common: &CommonConfig) -> Result<()> {
    let moves = parse_moves(&args.moves)?;
    let campaign = args.explore.apply(args.campaign.load()?);
    let graph = explore_campaign(&campaign, &args.explore.config(), common)?;

    let mut current = graph.start().context("State graph is empty")?;
    print_section("Trace");
    print_state(current, common.verbose);

    for (n, direction) in moves.into_iter().enumerate() {
        current = graph
            .follow(current.id, direction)
            .with_context(|| format!("State {} has no {direction} edge", current.id))?;
        print_subsection(&format!("{}. {} {}", n + 1, direction.arrow(), direction));
        print_state(current, common.verbose);
    }
    Ok(())
}
