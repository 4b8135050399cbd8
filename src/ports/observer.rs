//! Observer port - callbacks fired while the state graph is being built
//!
//! Observers let progress reporting and diagnostics watch an exploration run
//! without the builder knowing how the information is displayed.

use crate::{Result, graph::StateGraph, identifiers::StateId, puzzle::Configuration};

/// Observer trait for monitoring exploration
///
/// # Event Sequence
///
/// 1. `on_explore_start(levels)` - once
/// 2. `on_level_entered(level)` - when the first non-victory state of a level
///    is registered; levels arrive in ascending order
/// 3. `on_state_discovered(id, configuration)` - once per registered state
/// 4. `on_explore_end(graph)` - once, after every edge is resolved
///
/// # Examples
///
/// ```
/// use descent::{identifiers::StateId, ports::ExploreObserver, puzzle::Configuration};
///
/// struct Counter(usize);
///
/// impl ExploreObserver for Counter {
///     fn on_state_discovered(
///         &mut self,
///         _id: StateId,
///         _configuration: &Configuration,
///     ) -> descent::Result<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait ExploreObserver {
    /// Called before the first state is registered.
    fn on_explore_start(&mut self, _levels: usize) -> Result<()> {
        Ok(())
    }

    /// Called when exploration reaches a new level.
    fn on_level_entered(&mut self, _level: usize) -> Result<()> {
        Ok(())
    }

    /// Called for every newly registered state.
    fn on_state_discovered(&mut self, _id: StateId, _configuration: &Configuration) -> Result<()> {
        Ok(())
    }

    /// Called with the finished graph.
    fn on_explore_end(&mut self, _graph: &StateGraph) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl ExploreObserver for SilentObserver {}
