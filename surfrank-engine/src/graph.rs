// Adjacency-list graph store and its derived views

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Padding below this many ids is never reported as sparse.
const SPARSE_ID_FLOOR: u64 = 1 << 20;

/// Node identifier as it appears in the edge list.
pub type NodeId = u32;

/// A directed edge `source -> target`.
pub type Edge = (NodeId, NodeId);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyList {
    lists: BTreeMap<NodeId, Vec<NodeId>>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the adjacency list from edges, keeping input order.
    ///
    /// Only sources become keys; targets without out-edges are added by
    /// [`AdjacencyList::normalize`].
    pub fn build<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        for (source, target) in edges {
            graph.add_edge(source, target);
        }
        graph
    }

    pub fn add_edge(&mut self, source: NodeId, target: NodeId) {
        self.lists.entry(source).or_default().push(target);
    }

    /// Largest node id referenced as a key or as an edge target.
    ///
    /// `None` for an empty graph (the "-1" case).
    pub fn max_node_id(&self) -> Option<NodeId> {
        let max_key = self.lists.keys().next_back().copied();
        let max_target = self.lists.values().flatten().max().copied();
        max_key.max(max_target)
    }

    /// Returns a graph where every id in `[0, max_node_id]` is a key.
    ///
    /// Missing ids get an empty out-edge list, which makes them dangling.
    /// Applying it to an already normalized graph returns an equal graph.
    pub fn normalize(&self) -> Self {
        let mut lists = self.lists.clone();
        if let Some(max) = self.max_node_id() {
            if self.has_sparse_ids() {
                warn!(
                    "Node ids reach {} with only {} edges; normalizing adds {} empty nodes",
                    max,
                    self.edge_count(),
                    self.missing_ids()
                );
            }
            for node in 0..=max {
                lists.entry(node).or_default();
            }
        }
        Self { lists }
    }

    /// Number of ids in `[0, max_node_id]` that `normalize` would add.
    pub fn missing_ids(&self) -> u64 {
        self.max_node_id()
            .map_or(0, |max| u64::from(max) + 1 - self.lists.len() as u64)
    }

    /// True when normalizing would mostly add empty nodes: the padding is
    /// large in absolute terms and dwarfs the number of edges.
    pub fn has_sparse_ids(&self) -> bool {
        let missing = self.missing_ids();
        missing > SPARSE_ID_FLOOR && missing > 16 * self.edge_count() as u64
    }

    /// True when the keys are exactly `0..node_count`.
    pub fn is_normalized(&self) -> bool {
        match self.max_node_id() {
            None => true,
            Some(max) => self.lists.len() == max as usize + 1,
        }
    }

    /// Nodes whose out-edge list is empty.
    pub fn dangling(&self) -> BTreeSet<NodeId> {
        self.lists
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(&node, _)| node)
            .collect()
    }

    /// Out-degree of every non-dangling node.
    pub fn branching_factors(&self) -> BTreeMap<NodeId, usize> {
        self.lists
            .iter()
            .filter(|(_, targets)| !targets.is_empty())
            .map(|(&node, targets)| (node, targets.len()))
            .collect()
    }

    /// Inverts every edge. Nodes without in-edges are not keys of the result.
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new();
        for (&source, targets) in &self.lists {
            for &target in targets {
                reversed.add_edge(target, source);
            }
        }
        reversed
    }

    pub fn out_edges(&self, node: NodeId) -> Option<&[NodeId]> {
        self.lists.get(&node).map(Vec::as_slice)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.lists.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> + '_ {
        self.lists.iter().map(|(&node, targets)| (node, targets.as_slice()))
    }

    /// All edges in key order, then insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.lists
            .iter()
            .flat_map(|(&source, targets)| targets.iter().map(move |&target| (source, target)))
    }
}

impl FromIterator<Edge> for AdjacencyList {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::build(iter)
    }
}
