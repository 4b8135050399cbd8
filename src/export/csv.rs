//! One CSV row per state

use std::io::Write;

use serde::Serialize;

use crate::{Result, graph::StateGraph, puzzle::Direction};

#[derive(Debug, Serialize)]
struct EdgeRow<'a> {
    id: u32,
    anchor: String,
    level: usize,
    victory: bool,
    left: u32,
    down: u32,
    up: u32,
    right: u32,
    message: &'a str,
}

/// Write an edge table for `graph`. The header row is
/// `id,anchor,level,victory,left,down,up,right,message`.
pub fn write_csv<W: Write>(graph: &StateGraph, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for state in graph {
        writer.serialize(EdgeRow {
            id: state.id.value(),
            anchor: state.id.anchor(),
            level: state.level,
            victory: state.victory,
            left: state.edge(Direction::Left).value(),
            down: state.edge(Direction::Down).value(),
            up: state.edge(Direction::Up).value(),
            right: state.edge(Direction::Right).value(),
            message: &state.message,
        })?;
    }
    writer.flush()?;
    Ok(())
}
