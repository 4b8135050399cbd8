//! JSON dump of the state graph

use std::io::Write;

use serde::Serialize;

use crate::{
    Result,
    graph::{State, StateGraph},
    puzzle::Direction,
};

/// Serialized form of a whole graph.
#[derive(Debug, Serialize)]
pub struct GraphDocument<'a> {
    pub total_states: usize,
    /// Anchor of the start state, if any.
    pub start: Option<String>,
    pub states: Vec<StateRecord<'a>>,
}

#[derive(Debug, Serialize)]
pub struct StateRecord<'a> {
    pub id: u32,
    pub anchor: String,
    pub level: usize,
    pub message: &'a str,
    pub width: usize,
    pub rows: Vec<&'a str>,
    pub victory: bool,
    pub edges: EdgeRecord,
}

/// Successor ids keyed by direction name.
#[derive(Debug, Serialize)]
pub struct EdgeRecord {
    pub left: u32,
    pub down: u32,
    pub up: u32,
    pub right: u32,
}

impl From<&State> for EdgeRecord {
    fn from(state: &State) -> Self {
        Self {
            left: state.edge(Direction::Left).value(),
            down: state.edge(Direction::Down).value(),
            up: state.edge(Direction::Up).value(),
            right: state.edge(Direction::Right).value(),
        }
    }
}

impl<'a> From<&'a State> for StateRecord<'a> {
    fn from(state: &'a State) -> Self {
        Self {
            id: state.id.value(),
            anchor: state.id.anchor(),
            level: state.level,
            message: &state.message,
            width: state.width,
            rows: state.rows().collect(),
            victory: state.victory,
            edges: EdgeRecord::from(state),
        }
    }
}

impl<'a> GraphDocument<'a> {
    pub fn new(graph: &'a StateGraph) -> Self {
        Self {
            total_states: graph.len(),
            start: graph.start().map(|state| state.id.anchor()),
            states: graph.iter().map(StateRecord::from).collect(),
        }
    }
}

/// Write `graph` as pretty-printed JSON.
pub fn write_json<W: Write>(graph: &StateGraph, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &GraphDocument::new(graph))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
