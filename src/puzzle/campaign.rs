//! Campaign: the ordered level set with its messages and hint policy.
//!
//! A [`Campaign`] is only ever constructed from validated input, so the
//! explorer never meets a malformed board mid-run.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Configuration, DELIMITER},
    levels,
    rules::MessagePolicy,
};
use crate::{Error, Result};

/// One authored level as it appears in a campaign file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSource {
    pub width: usize,
    /// Row-major tiles; whitespace is alignment only.
    pub layout: String,
}

/// Unvalidated campaign, as read from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSource {
    pub levels: Vec<LevelSource>,
    /// One per level, shown on the level's initial state.
    pub intro_messages: Vec<String>,
    /// Consumed strictly in discovery order.
    #[serde(default)]
    pub pickup_messages: Vec<String>,
    #[serde(default)]
    pub policy: MessagePolicy,
}

/// A validated campaign ready for exploration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    boards: Vec<Board>,
    intro_messages: Vec<String>,
    pickup_messages: Vec<String>,
    policy: MessagePolicy,
}

impl Campaign {
    /// Validate a campaign source.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - There are no levels
    /// - Any level fails [`Board::parse`]
    /// - The number of intro messages differs from the number of levels
    /// - Any message contains the reserved `|` delimiter
    /// - There are fewer pickup messages than collectibles
    pub fn from_source(source: CampaignSource) -> Result<Self> {
        if source.levels.is_empty() {
            return Err(Error::EmptyCampaign);
        }

        let boards = source
            .levels
            .iter()
            .enumerate()
            .map(|(level, src)| Board::parse(level, src.width, &src.layout))
            .collect::<Result<Vec<_>>>()?;

        if source.intro_messages.len() != boards.len() {
            return Err(Error::MessageCountMismatch {
                expected: boards.len(),
                found: source.intro_messages.len(),
            });
        }

        let all_messages = source
            .intro_messages
            .iter()
            .chain(&source.pickup_messages)
            .map(String::as_str)
            .chain(source.policy.messages());
        for message in all_messages {
            if message.contains(DELIMITER) {
                return Err(Error::ReservedDelimiter {
                    message: message.to_string(),
                });
            }
        }

        let collectibles: usize = boards.iter().map(Board::collectible_count).sum();
        if collectibles > source.pickup_messages.len() {
            return Err(Error::InsufficientPickupMessages {
                collectibles,
                messages: source.pickup_messages.len(),
            });
        }

        Ok(Campaign {
            boards,
            intro_messages: source.intro_messages,
            pickup_messages: source.pickup_messages,
            policy: source.policy,
        })
    }

    /// The built-in eight-level campaign.
    pub fn builtin() -> Result<Self> {
        Self::from_source(levels::builtin_source())
    }

    /// Load and validate a campaign from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open campaign {}", path.display()),
            source,
        })?;
        let source: CampaignSource = serde_json::from_reader(BufReader::new(file))?;
        Self::from_source(source)
    }

    /// Load `path` if given, otherwise use the built-in campaign.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Override the level at which pit hints stop.
    pub fn with_hint_threshold(mut self, threshold: usize) -> Self {
        self.policy.hint_threshold = threshold;
        self
    }

    pub fn level_count(&self) -> usize {
        self.boards.len()
    }

    pub fn board(&self, level: usize) -> Option<&Board> {
        self.boards.get(level)
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn intro_message(&self, level: usize) -> Option<&str> {
        self.intro_messages.get(level).map(String::as_str)
    }

    pub fn pickup_messages(&self) -> &[String] {
        &self.pickup_messages
    }

    pub fn policy(&self) -> &MessagePolicy {
        &self.policy
    }

    pub fn collectible_count(&self) -> usize {
        self.boards.iter().map(Board::collectible_count).sum()
    }

    /// Initial configuration of `level`: its intro message and authored board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLevel`] if `level` is past the last level.
    pub fn initial_configuration(&self, level: usize) -> Result<Configuration> {
        let board = self.board(level).ok_or(Error::UnknownLevel { level })?;
        let message = self.intro_message(level).unwrap_or_default();
        Ok(Configuration::new(level, message, board.tiles().to_vec()))
    }
}
