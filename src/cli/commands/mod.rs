//! Subcommands of the `descent` binary

pub mod build;
pub mod stats;
pub mod trace;
pub mod validate;

use anyhow::{Context, Result};

use crate::{
    adapters::ProgressObserver,
    cli::config::CommonConfig,
    graph::{ExploreConfig, StateGraph, explore, explore_observed},
    puzzle::Campaign,
};

/// Explore `campaign`, with a spinner when progress is enabled.
pub(crate) fn explore_campaign(
    campaign: &Campaign,
    config: &ExploreConfig,
    common: &CommonConfig,
) -> Result<StateGraph> {
    let graph = if common.progress {
        explore_observed(campaign, config, &mut ProgressObserver::new())
    } else {
        explore(campaign, config)
    };
    graph.context("State graph construction failed")
}
