//! Puzzle model: tiles, boards, move rules and campaigns

pub mod board;
pub mod campaign;
pub mod levels;
pub mod rules;
pub mod tile;

pub use board::{Board, Configuration, DELIMITER, rows};
pub use campaign::{Campaign, CampaignSource, LevelSource};
pub use rules::{Direction, MessagePolicy, PickupLedger, Step, step, successors};
pub use tile::Tile;
