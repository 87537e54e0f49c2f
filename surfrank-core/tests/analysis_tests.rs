// Tests for the algebraic setup views and graph summaries

use surfrank_core::analysis::{GraphSummary, PageRankSetup};
use surfrank_engine::{AdjacencyList, CsrGraph};

fn sample_graph() -> AdjacencyList {
    // 0 -> 1, 0 -> 2, 1 -> 2, 2 -> 0, node 4 only referenced as a target
    AdjacencyList::build([(0, 1), (0, 2), (1, 2), (2, 0), (2, 4)])
}

#[test]
fn test_prepare_normalizes_graph() {
    let setup = PageRankSetup::prepare(&sample_graph());

    assert_eq!(setup.graph.node_count(), 5);
    assert!(setup.graph.is_normalized());
}

#[test]
fn test_prepare_dangling_and_branching() {
    let setup = PageRankSetup::prepare(&sample_graph());

    assert_eq!(setup.dangling.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(setup.branching.get(&0), Some(&2));
    assert_eq!(setup.branching.get(&2), Some(&2));
    assert_eq!(setup.branching.get(&3), None);
}

#[test]
fn test_prepare_reversed_graph() {
    let setup = PageRankSetup::prepare(&sample_graph());

    assert_eq!(setup.reversed.out_edges(2), Some(&[0, 1][..]));
    assert_eq!(setup.reversed.out_edges(4), Some(&[2][..]));
    assert_eq!(setup.reversed.out_edges(3), None);
}

#[test]
fn test_in_degrees_from_reversed_graph() {
    let setup = PageRankSetup::prepare(&sample_graph());
    assert_eq!(setup.in_degrees(), vec![1, 1, 2, 0, 1]);
}

#[test]
fn test_summary_matches_csr_summary() {
    let graph = sample_graph();
    let setup = PageRankSetup::prepare(&graph);
    let csr = CsrGraph::from_adjacency(&graph);

    let summary = setup.summary();

    assert_eq!(summary, GraphSummary::from_csr(&csr));
    assert_eq!(summary.node_count, 5);
    assert_eq!(summary.edge_count, 5);
    assert_eq!(summary.dangling_count, 2);
    assert_eq!(summary.max_out_degree, 2);
    assert_eq!(summary.max_in_degree, 2);
    assert!((summary.mean_branching_factor - 5.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_summary_of_empty_graph() {
    let setup = PageRankSetup::prepare(&AdjacencyList::new());
    let summary = setup.summary();

    assert_eq!(summary.node_count, 0);
    assert_eq!(summary.mean_branching_factor, 0.0);
}
