pub mod csr;
pub mod error;
pub mod graph;
pub mod loader;
pub mod result;
pub mod surfer;

pub use csr::CsrGraph;
pub use error::EngineError;
pub use graph::{AdjacencyList, Edge, NodeId};
pub use result::{SurfResult, VisitCounts};
pub use surfer::{RandomSurfer, simulate, simulate_from};
