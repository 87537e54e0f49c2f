use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Malformed input on line {line}: expected two node ids, got '{content}'")]
    MalformedInputLine { line: usize, content: String },

    #[error("Invalid node id '{token}' on line {line}")]
    InvalidNodeToken { line: usize, token: String },

    #[error("Graph has no nodes to rank")]
    EmptyGraph,

    #[error("Damping factor must be within [0, 1], got {0}")]
    InvalidDampingFactor(f64),

    #[error("Node {node} is outside the graph (node count: {node_count})")]
    NodeOutOfRange { node: u32, node_count: usize },

    #[error("Cannot read {}: {source}", path.display())]
    FileUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
