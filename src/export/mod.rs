//! Writers that turn a finished state graph into files
//!
//! The HTML document is the playable artifact. JSON and CSV carry the same
//! states and edges for inspection with other tools.

mod csv;
mod html;
mod json;

use std::{
    fmt,
    fs::File,
    io::BufWriter,
    path::Path,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::info;

pub use self::csv::write_csv;
pub use html::{render, write_html};
pub use json::{EdgeRecord, GraphDocument, StateRecord, write_json};

use crate::{Error, Result, graph::StateGraph};

/// Output format for [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Html,
    Json,
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Html, ExportFormat::Json, ExportFormat::Csv];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unknown export format '{other}' (expected html, json or csv)")),
        }
    }
}

/// Write `graph` to `path` in `format`, replacing any existing file.
pub fn export(graph: &StateGraph, format: ExportFormat, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    let writer = BufWriter::new(file);
    match format {
        ExportFormat::Html => write_html(graph, writer)?,
        ExportFormat::Json => write_json(graph, writer)?,
        ExportFormat::Csv => write_csv(graph, writer)?,
    }
    info!(path = %path.display(), %format, states = graph.len(), "export written");
    Ok(())
}
