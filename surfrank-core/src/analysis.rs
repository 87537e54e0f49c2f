// Structural setup for an algebraic PageRank solve

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use surfrank_engine::{AdjacencyList, CsrGraph, NodeId};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PageRankSetup {
    pub graph: AdjacencyList,
    pub dangling: BTreeSet<NodeId>,
    pub branching: BTreeMap<NodeId, usize>,
    pub reversed: AdjacencyList,
}

impl PageRankSetup {
    /// Normalizes `graph` and derives the views an algebraic solver needs.
    pub fn prepare(graph: &AdjacencyList) -> Self {
        let graph = graph.normalize();
        let dangling = graph.dangling();
        let branching = graph.branching_factors();
        let reversed = graph.reverse();

        debug!(
            "Prepared setup: {} nodes, {} dangling, {} with out-edges",
            graph.node_count(),
            dangling.len(),
            branching.len()
        );

        Self {
            graph,
            dangling,
            branching,
            reversed,
        }
    }

    /// Number of in-edges per node, indexed by node id.
    pub fn in_degrees(&self) -> Vec<u64> {
        (0..self.graph.node_count())
            .map(|node| {
                self.reversed
                    .out_edges(node as NodeId)
                    .map_or(0, |sources| sources.len() as u64)
            })
            .collect()
    }

    pub fn summary(&self) -> GraphSummary {
        let max_in_degree = self.in_degrees().into_iter().max().unwrap_or(0) as usize;
        GraphSummary::new(
            self.graph.node_count(),
            self.graph.edge_count(),
            self.dangling.len(),
            self.branching.values().copied().max().unwrap_or(0),
            max_in_degree,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    /// Graph order
    pub node_count: usize,
    /// Graph size
    pub edge_count: usize,
    pub dangling_count: usize,
    pub max_out_degree: usize,
    pub max_in_degree: usize,
    /// Mean out-degree over non-dangling nodes
    pub mean_branching_factor: f64,
}

impl GraphSummary {
    fn new(
        node_count: usize,
        edge_count: usize,
        dangling_count: usize,
        max_out_degree: usize,
        max_in_degree: usize,
    ) -> Self {
        let linked = node_count - dangling_count;
        let mean_branching_factor = if linked > 0 {
            edge_count as f64 / linked as f64
        } else {
            0.0
        };

        Self {
            node_count,
            edge_count,
            dangling_count,
            max_out_degree,
            max_in_degree,
            mean_branching_factor,
        }
    }

    pub fn from_csr(graph: &CsrGraph) -> Self {
        let max_out_degree = (0..graph.node_count())
            .map(|node| graph.out_degree(node as NodeId))
            .max()
            .unwrap_or(0);
        let max_in_degree = graph.in_degrees().into_iter().max().unwrap_or(0);

        Self::new(
            graph.node_count(),
            graph.edge_count(),
            graph.dangling_nodes().len(),
            max_out_degree,
            max_in_degree,
        )
    }
}
