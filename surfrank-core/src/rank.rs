// Ranking of per-node values

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use surfrank_engine::{NodeId, VisitCounts};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedNode {
    /// 1-based position
    pub rank: usize,
    pub node: NodeId,
    pub value: u64,
    /// `value` as a fraction of the sum over all nodes
    pub share: f64,
}

fn by_value_desc<T: Ord>(a: &(NodeId, T), b: &(NodeId, T)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// The `n` highest values as `(node, value)`, node id being the slice index.
pub fn top_n_by_value<T: Ord + Copy>(values: &[T], n: usize) -> Vec<(NodeId, T)> {
    if n == 0 || values.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(NodeId, T)> = values
        .iter()
        .enumerate()
        .map(|(node, &value)| (node as NodeId, value))
        .collect();

    if n < ranked.len() {
        ranked.select_nth_unstable_by(n - 1, by_value_desc);
        ranked.truncate(n);
    }
    ranked.sort_unstable_by(by_value_desc);
    ranked
}

/// Ranks raw per-node values and attaches rank and share.
pub fn rank_values(values: &[u64], n: usize) -> Vec<RankedNode> {
    let total: u64 = values.iter().sum();
    top_n_by_value(values, n)
        .into_iter()
        .enumerate()
        .map(|(idx, (node, value))| RankedNode {
            rank: idx + 1,
            node,
            value,
            share: if total > 0 {
                value as f64 / total as f64
            } else {
                0.0
            },
        })
        .collect()
}

/// The `n` most visited nodes. Empty visits give an empty ranking.
pub fn top_n(visits: &VisitCounts, n: usize) -> Vec<RankedNode> {
    rank_values(visits.as_slice(), n)
}
