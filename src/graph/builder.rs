//! Exhaustive state-graph construction
//!
//! Exploration is a depth-first walk over configurations with a visited check
//! before expansion. Discovery order decides which pickup message every
//! collectible receives, so the work discipline is fixed:
//!
//! - within a level, successors are pushed in [`Direction::ALL`] order onto a
//!   stack and popped last-first;
//! - the initial configuration of the next level, produced by a victory
//!   state, waits in a FIFO until the current level's stack is empty.
//!
//! Every state of level `n` is therefore registered before any state of
//! level `n + 1`.
//!
//! [`Direction::ALL`]: crate::puzzle::Direction::ALL

use std::collections::{HashMap, VecDeque};

use tracing::{debug, info, instrument, trace};

use super::state::{State, StateGraph};
use crate::{
    Error, Result,
    identifiers::{StateId, StateKey},
    ports::{ExploreObserver, SilentObserver},
    puzzle::{Campaign, Configuration, PickupLedger, successors},
};

/// Limits for an exploration run.
///
/// # Examples
///
/// ```
/// use descent::graph::ExploreConfig;
///
/// let config = ExploreConfig::new().with_max_states(10_000);
/// assert_eq!(config.max_states, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreConfig {
    /// Abort once more than this many distinct states have been registered.
    pub max_states: usize,
}

impl ExploreConfig {
    pub const DEFAULT_MAX_STATES: usize = 250_000;

    pub fn new() -> Self {
        Self {
            max_states: Self::DEFAULT_MAX_STATES,
        }
    }

    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A configuration waiting on the work list.
#[derive(Debug)]
struct Pending {
    configuration: Configuration,
    /// Row width of the board the configuration was produced on.
    width: usize,
    victory: bool,
}

/// A registered state whose edges are still keys.
#[derive(Debug)]
struct Draft {
    id: StateId,
    key: StateKey,
    configuration: Configuration,
    width: usize,
    victory: bool,
    edges: [StateKey; 4],
}

/// Explore every configuration reachable in `campaign`.
///
/// # Errors
///
/// Returns [`Error::StateSpaceExceeded`] past `config.max_states`,
/// [`Error::PickupMessagesExhausted`] when collectibles are reachable from
/// more configurations than there are pickup messages, and propagates any
/// move-rule error.
///
/// # Examples
///
/// ```
/// use descent::{
///     graph::{ExploreConfig, explore},
///     puzzle::{Campaign, CampaignSource, LevelSource, MessagePolicy},
/// };
///
/// let campaign = Campaign::from_source(CampaignSource {
///     levels: vec![LevelSource { width: 3, layout: "@.>".to_string() }],
///     intro_messages: vec!["Go right.".to_string()],
///     pickup_messages: vec![],
///     policy: MessagePolicy::default(),
/// })?;
///
/// let graph = explore(&campaign, &ExploreConfig::default())?;
/// assert_eq!(graph.start().map(|s| s.key.as_str()), Some("0|Go right.|@.>"));
/// assert_eq!(graph.victory_count(), 1);
/// # Ok::<(), descent::Error>(())
/// ```
pub fn explore(campaign: &Campaign, config: &ExploreConfig) -> Result<StateGraph> {
    explore_observed(campaign, config, &mut SilentObserver)
}

/// [`explore`], reporting progress to `observer`.
#[instrument(skip_all, fields(levels = campaign.level_count(), max_states = config.max_states))]
pub fn explore_observed(
    campaign: &Campaign,
    config: &ExploreConfig,
    observer: &mut dyn ExploreObserver,
) -> Result<StateGraph> {
    let policy = campaign.policy();
    // A fresh ledger per run: repeated runs hand out the same messages.
    let mut ledger = PickupLedger::new(campaign.pickup_messages());
    let mut index: HashMap<StateKey, StateId> = HashMap::new();
    let mut drafts: Vec<Draft> = Vec::new();
    let mut stack = vec![initial(campaign, 0)?];
    let mut deferred: VecDeque<Pending> = VecDeque::new();
    let mut next_id = StateId::FIRST;
    let mut current_level = None;

    observer.on_explore_start(campaign.level_count())?;

    loop {
        let Some(pending) = stack.pop().or_else(|| deferred.pop_front()) else {
            break;
        };
        let key = pending.configuration.key();
        if index.contains_key(&key) {
            continue;
        }

        let level = pending.configuration.level;
        if drafts.len() >= config.max_states {
            return Err(Error::StateSpaceExceeded {
                limit: config.max_states,
                level,
                configuration: key.into_inner(),
            });
        }

        if !pending.victory && current_level != Some(level) {
            if let Some(previous) = current_level {
                debug!(level = previous, states = drafts.len(), "level exhausted");
            }
            current_level = Some(level);
            observer.on_level_entered(level)?;
        }

        let id = next_id;
        next_id = next_id.next();
        index.insert(key.clone(), id);
        trace!(id = id.value(), %key, "discovered");

        let edges = if pending.victory {
            if level < campaign.level_count() {
                let next = initial(campaign, level)?;
                let next_key = next.configuration.key();
                deferred.push_back(next);
                std::array::from_fn(|_| next_key.clone())
            } else {
                std::array::from_fn(|_| key.clone())
            }
        } else {
            let steps = successors(&pending.configuration, pending.width, policy, &mut ledger)?;
            let edges = steps.each_ref().map(|step| step.configuration.key());
            stack.extend(steps.into_iter().map(|step| Pending {
                configuration: step.configuration,
                width: pending.width,
                victory: step.advanced,
            }));
            edges
        };

        observer.on_state_discovered(id, &pending.configuration)?;
        drafts.push(Draft {
            id,
            key,
            configuration: pending.configuration,
            width: pending.width,
            victory: pending.victory,
            edges,
        });
    }

    let states = resolve(drafts, &index)?;
    let graph = StateGraph::new(states, index, ledger.consumed());
    info!(
        states = graph.len(),
        pickups = graph.pickups_consumed(),
        victories = graph.victory_count(),
        "exploration complete"
    );
    observer.on_explore_end(&graph)?;
    Ok(graph)
}

fn initial(campaign: &Campaign, level: usize) -> Result<Pending> {
    let configuration = campaign.initial_configuration(level)?;
    let width = campaign
        .board(level)
        .map(|board| board.width())
        .ok_or(Error::UnknownLevel { level })?;
    Ok(Pending {
        configuration,
        width,
        victory: false,
    })
}

/// Replace edge keys with ids now that every successor is registered.
fn resolve(drafts: Vec<Draft>, index: &HashMap<StateKey, StateId>) -> Result<Vec<State>> {
    drafts
        .into_iter()
        .map(|draft| {
            let mut edges = [draft.id; 4];
            for (slot, to) in edges.iter_mut().zip(&draft.edges) {
                *slot = index.get(to).copied().ok_or_else(|| Error::DanglingEdge {
                    from: draft.key.to_string(),
                    to: to.to_string(),
                })?;
            }
            let field = draft.configuration.field();
            Ok(State {
                id: draft.id,
                key: draft.key,
                level: draft.configuration.level,
                message: draft.configuration.message,
                field,
                width: draft.width,
                victory: draft.victory,
                edges,
            })
        })
        .collect()
}
