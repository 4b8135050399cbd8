//! Discovered states and the finished graph

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{
    identifiers::{StateId, StateKey},
    puzzle::{Direction, rows},
};

/// A configuration that has been assigned an id and its four edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    pub id: StateId,
    /// Canonical configuration string.
    pub key: StateKey,
    pub level: usize,
    pub message: String,
    /// Flat row-major field.
    pub field: String,
    /// Row width of `field`. For a victory state this is the width of the
    /// level just left, not of `level`.
    pub width: usize,
    pub victory: bool,
    /// Successors in [`Direction::ALL`] order.
    pub edges: [StateId; 4],
}

impl State {
    pub fn edge(&self, direction: Direction) -> StateId {
        self.edges[direction.index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        rows(&self.field, self.width)
    }

    /// All four edges lead back to this state.
    pub fn is_terminal(&self) -> bool {
        self.edges.iter().all(|&edge| edge == self.id)
    }
}

/// The complete state graph of a campaign, in discovery order.
#[derive(Debug, Clone)]
pub struct StateGraph {
    states: Vec<State>,
    index: HashMap<StateKey, StateId>,
    pickups_consumed: usize,
}

impl StateGraph {
    pub(crate) fn new(
        states: Vec<State>,
        index: HashMap<StateKey, StateId>,
        pickups_consumed: usize,
    ) -> Self {
        Self {
            states,
            index,
            pickups_consumed,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The first discovered state (level 0's initial configuration).
    pub fn start(&self) -> Option<&State> {
        self.states.first()
    }

    /// Look up a state by its canonical configuration string.
    pub fn get(&self, key: &str) -> Option<&State> {
        self.index.get(key).and_then(|&id| self.by_id(id))
    }

    pub fn by_id(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index()?)
    }

    /// Follow one edge.
    pub fn follow(&self, from: StateId, direction: Direction) -> Option<&State> {
        let state = self.by_id(from)?;
        self.by_id(state.edge(direction))
    }

    /// States in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of pickup messages handed out during exploration.
    pub fn pickups_consumed(&self) -> usize {
        self.pickups_consumed
    }

    /// States per level index.
    pub fn level_counts(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for state in &self.states {
            *counts.entry(state.level).or_insert(0) += 1;
        }
        counts
    }

    pub fn victory_count(&self) -> usize {
        self.states.iter().filter(|state| state.victory).count()
    }
}

impl<'a> IntoIterator for &'a StateGraph {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
