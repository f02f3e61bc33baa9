use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::graph::FlowNetwork;

/// One `start,end,capacity` line of an edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub line: usize,
    pub start: String,
    pub end: String,
    pub capacity: i64,
}

/// Parses a comma separated edge list.
///
/// Blank lines and lines starting with `#` are skipped; every other line must
/// hold exactly three fields. Line numbers in errors are 1-based.
pub fn parse_edges(text: &str) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(Error::parse(
                line,
                format!("expected start,end,capacity but found {} field(s)", fields.len()),
            ));
        }
        if fields[0].is_empty() || fields[1].is_empty() {
            return Err(Error::parse(line, "empty vertex name"));
        }
        let capacity = fields[2]
            .parse::<i64>()
            .map_err(|e| Error::parse(line, format!("bad capacity {:?}: {}", fields[2], e)))?;

        records.push(EdgeRecord {
            line,
            start: fields[0].to_string(),
            end: fields[1].to_string(),
            capacity,
        });
    }
    Ok(records)
}

/// Builds a network from an edge list, registering both endpoints of every
/// record before inserting its edge.
pub fn load_network(text: &str) -> Result<FlowNetwork<String, i64>> {
    let records = parse_edges(text)?;
    let mut network = FlowNetwork::new();
    for record in records {
        network.add_vertex(record.start.clone())?;
        network.add_vertex(record.end.clone())?;
        network
            .add_edge(record.start, record.end, record.capacity)
            .map_err(|e| match e {
                Error::InvalidEdge { .. } => Error::parse(record.line, e.to_string()),
                other => other,
            })?;
    }
    debug!(
        "loaded {} edge(s) over {} vertices",
        network.edge_count(),
        network.vertex_count()
    );
    Ok(network)
}

pub fn read_network(path: impl AsRef<Path>) -> Result<FlowNetwork<String, i64>> {
    let text = fs::read_to_string(path)?;
    load_network(&text)
}
