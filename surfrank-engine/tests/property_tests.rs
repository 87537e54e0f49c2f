//! Property-based tests for graph and walk invariants.
//!
//! - normalization covers every referenced id and is idempotent
//! - reversing twice keeps the edge multiset
//! - visit counts always total steps + 1, for any worker count

use proptest::prelude::*;
use surfrank_engine::surfer::worker_rng;
use surfrank_engine::{AdjacencyList, CsrGraph, RandomSurfer, simulate};

fn arb_edges() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..64, 0u32..64), 1..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn normalize_covers_contiguous_range(edges in arb_edges()) {
        let graph = AdjacencyList::build(edges.iter().copied()).normalize();
        let max = edges.iter().map(|&(u, v)| u.max(v)).max().unwrap();

        prop_assert_eq!(graph.node_count(), max as usize + 1);
        for node in 0..=max {
            prop_assert!(graph.contains(node));
        }
        prop_assert_eq!(graph.edge_count(), edges.len());
    }

    #[test]
    fn normalize_is_idempotent(edges in arb_edges()) {
        let once = AdjacencyList::build(edges).normalize();
        prop_assert_eq!(once.normalize(), once);
    }

    #[test]
    fn reverse_twice_keeps_edges(edges in arb_edges()) {
        let graph = AdjacencyList::build(edges);

        let mut original: Vec<_> = graph.edges().collect();
        let mut round_trip: Vec<_> = graph.reverse().reverse().edges().collect();
        original.sort_unstable();
        round_trip.sort_unstable();

        prop_assert_eq!(original, round_trip);
    }

    #[test]
    fn dangling_and_branching_partition_nodes(edges in arb_edges()) {
        let graph = AdjacencyList::build(edges).normalize();

        let dangling = graph.dangling();
        let branching = graph.branching_factors();

        prop_assert_eq!(dangling.len() + branching.len(), graph.node_count());
        prop_assert!(branching.keys().all(|node| !dangling.contains(node)));
        prop_assert_eq!(branching.values().sum::<usize>(), graph.edge_count());
    }

    #[test]
    fn visits_total_steps_plus_one(
        edges in arb_edges(),
        damping in 0.0f64..=1.0,
        steps in 0u64..5_000,
        seed in any::<u64>(),
    ) {
        let graph = CsrGraph::from_adjacency(&AdjacencyList::build(edges));
        let visits = simulate(&graph, damping, steps, &mut worker_rng(seed, 0)).unwrap();

        prop_assert_eq!(visits.total(), steps + 1);
        prop_assert_eq!(visits.len(), graph.node_count());
    }

    #[test]
    fn sharded_visits_total_steps_plus_one(
        edges in arb_edges(),
        steps in 0u64..5_000,
        workers in 1usize..8,
    ) {
        let graph = CsrGraph::from_adjacency(&AdjacencyList::build(edges));
        let result = RandomSurfer::new()
            .with_steps(steps)
            .with_workers(workers)
            .run(&graph)
            .unwrap();

        prop_assert_eq!(result.visits.total(), steps + 1);
    }
}
