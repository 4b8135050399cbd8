//! Common test utilities for the descent test suite.
//!
//! Small campaign builders shared by the integration tests.

#![allow(dead_code)]

use descent::puzzle::{Campaign, CampaignSource, LevelSource, MessagePolicy};

/// Build an unvalidated source with one `"intro {i}"` message per level.
pub fn source(levels: &[(usize, &str)], pickups: &[&str]) -> CampaignSource {
    CampaignSource {
        levels: levels
            .iter()
            .map(|&(width, layout)| LevelSource {
                width,
                layout: layout.to_string(),
            })
            .collect(),
        intro_messages: (0..levels.len()).map(|i| format!("intro {i}")).collect(),
        pickup_messages: pickups.iter().map(|m| m.to_string()).collect(),
        policy: MessagePolicy::default(),
    }
}

/// Build and validate a campaign, panicking on invalid input.
pub fn campaign(levels: &[(usize, &str)], pickups: &[&str]) -> Campaign {
    Campaign::from_source(source(levels, pickups)).expect("test campaign should be valid")
}
