use crate::graph::NodeId;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;
use std::time::Duration;

/// Per-node visit counters, indexed by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitCounts {
    counts: Vec<u64>,
}

impl VisitCounts {
    pub fn zeroed(node_count: usize) -> Self {
        Self {
            counts: vec![0; node_count],
        }
    }

    #[inline]
    pub fn record(&mut self, node: NodeId) {
        self.counts[node as usize] += 1;
    }

    pub fn get(&self, node: NodeId) -> Option<u64> {
        self.counts.get(node as usize).copied()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(node, &count)| (node as NodeId, count))
    }

    /// Adds another shard's counts. Both must cover the same node range.
    pub fn merge(&mut self, other: &VisitCounts) {
        if self.counts.len() < other.counts.len() {
            self.counts.resize(other.counts.len(), 0);
        }
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
    }
}

impl AddAssign<&VisitCounts> for VisitCounts {
    fn add_assign(&mut self, rhs: &VisitCounts) {
        self.merge(rhs);
    }
}

impl From<Vec<u64>> for VisitCounts {
    fn from(counts: Vec<u64>) -> Self {
        Self { counts }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfResult {
    pub visits: VisitCounts,
    pub damping: f64,
    pub total_steps: u64,
    pub seed: u64,
    pub workers: usize,
    pub elapsed: Duration,
}

impl SurfResult {
    pub fn new(visits: VisitCounts, damping: f64, total_steps: u64, seed: u64) -> Self {
        Self {
            visits,
            damping,
            total_steps,
            seed,
            workers: 1,
            elapsed: Duration::from_secs(0),
        }
    }
}
