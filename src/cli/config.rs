//! Shared configuration types for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{graph::ExploreConfig, puzzle::Campaign};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Whether to show progress spinners
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: false,
        }
    }
}

/// Where the campaign comes from
#[derive(Args, Debug, Clone, Default)]
pub struct CampaignArgs {
    /// Campaign JSON file (defaults to the built-in campaign)
    #[arg(long, short = 'c')]
    pub campaign: Option<PathBuf>,
}

impl CampaignArgs {
    /// Load and validate the selected campaign.
    pub fn load(&self) -> Result<Campaign> {
        let campaign = Campaign::load_or_builtin(self.campaign.as_deref());
        match &self.campaign {
            Some(path) => {
                campaign.with_context(|| format!("Failed to load campaign {}", path.display()))
            }
            None => campaign.context("Built-in campaign failed validation"),
        }
    }

    /// Human-readable name of the selected campaign.
    pub fn label(&self) -> String {
        match &self.campaign {
            Some(path) => path.display().to_string(),
            None => "built-in".to_string(),
        }
    }
}

/// Settings that change the explored graph. Every command that explores
/// takes the same flags so their ids agree with a `build` run.
#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    /// Abort if the campaign has more distinct states than this
    #[arg(long, default_value_t = ExploreConfig::DEFAULT_MAX_STATES)]
    pub max_states: usize,

    /// First level on which pit hints are no longer shown
    #[arg(long)]
    pub hint_threshold: Option<usize>,
}

impl Default for ExploreArgs {
    fn default() -> Self {
        Self {
            max_states: ExploreConfig::DEFAULT_MAX_STATES,
            hint_threshold: None,
        }
    }
}

impl ExploreArgs {
    pub fn config(&self) -> ExploreConfig {
        ExploreConfig::new().with_max_states(self.max_states)
    }

    /// Apply the hint threshold override, if any.
    pub fn apply(&self, campaign: Campaign) -> Campaign {
        match self.hint_threshold {
            Some(threshold) => campaign.with_hint_threshold(threshold),
            None => campaign,
        }
    }
}
