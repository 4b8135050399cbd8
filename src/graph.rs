//! State graph: discovered states, their edges, and the explorer that builds them

pub mod builder;
pub mod state;

pub use builder::{ExploreConfig, explore, explore_observed};
pub use state::{State, StateGraph};
