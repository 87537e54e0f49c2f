// Compressed sparse row view of a normalized graph

use crate::graph::{AdjacencyList, NodeId};

#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Node i's out-edges live at `targets[offsets[i]..offsets[i + 1]]`.
    offsets: Vec<usize>,
    targets: Vec<NodeId>,
}

impl CsrGraph {
    /// Builds the dense view, normalizing first when the key range has gaps.
    pub fn from_adjacency(graph: &AdjacencyList) -> Self {
        if graph.is_normalized() {
            Self::from_normalized(graph)
        } else {
            Self::from_normalized(&graph.normalize())
        }
    }

    fn from_normalized(graph: &AdjacencyList) -> Self {
        let mut offsets = Vec::with_capacity(graph.node_count() + 1);
        let mut targets = Vec::with_capacity(graph.edge_count());

        offsets.push(0);
        for (_, out) in graph.iter() {
            targets.extend_from_slice(out);
            offsets.push(targets.len());
        }

        Self { offsets, targets }
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let node = node as usize;
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        let node = node as usize;
        self.offsets[node + 1] - self.offsets[node]
    }

    pub fn is_dangling(&self, node: NodeId) -> bool {
        self.out_degree(node) == 0
    }

    pub fn dangling_nodes(&self) -> Vec<NodeId> {
        (0..self.node_count())
            .map(|node| node as NodeId)
            .filter(|&node| self.is_dangling(node))
            .collect()
    }

    /// In-degree of every node, indexed by node id.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count()];
        for &target in &self.targets {
            degrees[target as usize] += 1;
        }
        degrees
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    pub fn contains(&self, node: NodeId) -> bool {
        (node as usize) < self.node_count()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            targets: Vec::new(),
        }
    }
}

impl From<&AdjacencyList> for CsrGraph {
    fn from(graph: &AdjacencyList) -> Self {
        Self::from_adjacency(graph)
    }
}
