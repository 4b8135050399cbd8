mod common;

use std::fs;

use common::campaign;
use descent::{
    export::{ExportFormat, export, render},
    graph::{ExploreConfig, StateGraph, explore},
    puzzle::Direction,
};

fn corridor() -> StateGraph {
    explore(
        &campaign(&[(4, "@.$>"), (3, "@0^")], &["<gold & glory>"]),
        &ExploreConfig::default(),
    )
    .unwrap()
}

#[test]
fn html_has_an_anchor_and_four_links_per_state() {
    let graph = corridor();
    let html = render(&graph).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<a href=\"#1\">"));
    for state in &graph {
        let anchor = format!("<a id=\"{0}\" name=\"{0}\">", state.id.anchor());
        assert!(html.contains(&anchor), "missing {anchor}");
    }
    assert_eq!(html.matches("<a id=").count(), graph.len());
    // four edge links per state plus the entry link
    assert_eq!(html.matches("<a href=").count(), graph.len() * 4 + 1);
    assert!(html.contains("&lt;gold &amp; glory&gt;"));
    assert!(!html.contains("<gold & glory>"));
}

#[test]
fn html_links_follow_left_down_up_right() {
    // from the top middle every direction leads somewhere different
    let graph = explore(
        &campaign(&[(3, ".@. ... ...")], &[]),
        &ExploreConfig::default(),
    )
    .unwrap();
    let start = graph.start().unwrap();
    let targets: Vec<_> = Direction::ALL.iter().map(|&d| start.edge(d)).collect();
    for (i, a) in targets.iter().enumerate() {
        for b in &targets[i + 1..] {
            assert_ne!(a, b);
        }
    }

    let links: String = Direction::ALL
        .iter()
        .map(|&d| format!("<a href=\"#{}\"></a>", start.edge(d).anchor()))
        .collect();
    let html = render(&graph).unwrap();
    let block = format!("<a id=\"{0}\" name=\"{0}\">", start.id.anchor());
    let after = &html[html.find(&block).unwrap()..];
    let nav = after.find("</a><b>").unwrap() + "</a><b>".len();
    assert!(
        after[nav..].starts_with(&links),
        "links out of order after {block}"
    );
}

#[test]
fn json_export_mirrors_the_graph() {
    let graph = corridor();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    export(&graph, ExportFormat::Json, &path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["total_states"], graph.len());
    let states = value["states"].as_array().unwrap();
    assert_eq!(states.len(), graph.len());
    for (record, state) in states.iter().zip(&graph) {
        assert_eq!(record["id"], state.id.value());
        assert_eq!(record["edges"]["right"], state.edges[3].value());
        assert_eq!(record["victory"], state.victory);
    }
}

#[test]
fn csv_export_has_header_and_one_row_per_state() {
    let graph = corridor();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.csv");
    export(&graph, ExportFormat::Csv, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "anchor", "level", "victory", "left", "down", "up", "right", "message"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), graph.len());
    for (row, state) in rows.iter().zip(&graph) {
        assert_eq!(&row[0], state.id.value().to_string().as_str());
        for (column, direction) in (4..8).zip(Direction::ALL) {
            assert_eq!(
                &row[column],
                state.edge(direction).value().to_string().as_str()
            );
        }
    }
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[0][8], "intro 0");
}

#[test]
fn html_export_writes_a_file() {
    let graph = corridor();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.html");
    export(&graph, ExportFormat::Html, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), render(&graph).unwrap());
}

#[test]
fn export_to_missing_directory_fails_with_io_error() {
    let graph = corridor();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("game.html");
    assert!(matches!(
        export(&graph, ExportFormat::Html, &path),
        Err(descent::Error::Io { .. })
    ));
}
