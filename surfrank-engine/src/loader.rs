// Edge-list text parsing

use crate::error::{EngineError, Result};
use crate::graph::{Edge, NodeId};
use std::io::BufRead;
use tracing::debug;

/// Parses one edge line. `line_no` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for comments and blank lines.
pub fn parse_edge_line(line: &str, line_no: usize) -> Result<Option<Edge>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let [source, target] = fields.as_slice() else {
        return Err(EngineError::MalformedInputLine {
            line: line_no,
            content: line.to_string(),
        });
    };

    Ok(Some((
        parse_node_token(source, line_no)?,
        parse_node_token(target, line_no)?,
    )))
}

fn parse_node_token(token: &str, line_no: usize) -> Result<NodeId> {
    token
        .parse::<NodeId>()
        .map_err(|_| EngineError::InvalidNodeToken {
            line: line_no,
            token: token.to_string(),
        })
}

/// Reads every edge from `reader`.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(edge) = parse_edge_line(&line, idx + 1)? {
            edges.push(edge);
        }
    }
    debug!("Parsed {} edges", edges.len());
    Ok(edges)
}

/// Convenience wrapper for in-memory input.
pub fn parse_edge_str(content: &str) -> Result<Vec<Edge>> {
    parse_edge_list(content.as_bytes())
}
