//! Descent: compiles Sokoban-style puzzle campaigns into static state graphs
//!
//! This crate provides:
//! - Level parsing and the four-direction move rules of the puzzle
//! - Exhaustive state-graph construction across a multi-level campaign
//! - Export of the graph as a self-contained anchor-navigable HTML document,
//!   or as JSON and CSV for inspection
//! - A command-line front end with progress reporting

pub mod adapters;
pub mod cli;
pub mod error;
pub mod export;
pub mod graph;
pub mod identifiers;
pub mod ports;
pub mod puzzle;

pub use error::{Error, Result};
pub use export::{ExportFormat, export};
pub use graph::{ExploreConfig, State, StateGraph, explore, explore_observed};
pub use identifiers::{StateId, StateKey};
pub use puzzle::{Campaign, CampaignSource, Configuration, Direction, LevelSource, MessagePolicy};
