// Tests for edge-list parsing

use surfrank_engine::EngineError;
use surfrank_engine::loader::{parse_edge_line, parse_edge_list, parse_edge_str};

#[test]
fn test_parse_edge_line_tab_separated() {
    let edge = parse_edge_line("3\t7", 1).unwrap();
    assert_eq!(edge, Some((3, 7)));
}

#[test]
fn test_parse_edge_line_extra_whitespace() {
    let edge = parse_edge_line("   10    20  ", 1).unwrap();
    assert_eq!(edge, Some((10, 20)));
}

#[test]
fn test_parse_edge_line_comment_and_blank() {
    assert_eq!(parse_edge_line("# Directed graph", 1).unwrap(), None);
    assert_eq!(parse_edge_line("", 2).unwrap(), None);
    assert_eq!(parse_edge_line("   ", 3).unwrap(), None);
}

#[test]
fn test_parse_edge_line_wrong_token_count() {
    let err = parse_edge_line("1 2 3", 4).unwrap_err();
    match err {
        EngineError::MalformedInputLine { line, content } => {
            assert_eq!(line, 4);
            assert_eq!(content, "1 2 3");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(matches!(
        parse_edge_line("42", 1),
        Err(EngineError::MalformedInputLine { .. })
    ));
}

#[test]
fn test_parse_edge_line_invalid_token() {
    let err = parse_edge_line("1 abc", 9).unwrap_err();
    match err {
        EngineError::InvalidNodeToken { line, token } => {
            assert_eq!(line, 9);
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_edge_line_negative_rejected() {
    assert!(matches!(
        parse_edge_line("-1 2", 1),
        Err(EngineError::InvalidNodeToken { .. })
    ));
}

#[test]
fn test_parse_edge_line_overflow_rejected() {
    assert!(matches!(
        parse_edge_line("1 99999999999", 1),
        Err(EngineError::InvalidNodeToken { .. })
    ));
}

#[test]
fn test_parse_edge_list_snap_style() {
    let content = "\
# Directed graph (each unordered pair of nodes is saved once): p2p-Gnutella08.txt
# Nodes: 4 Edges: 4
# FromNodeId\tToNodeId
0\t1
0\t2
1\t3

2\t0
";
    let edges = parse_edge_list(content.as_bytes()).unwrap();
    assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3), (2, 0)]);
}

#[test]
fn test_parse_edge_list_stops_at_first_error() {
    let err = parse_edge_str("0 1\n1 x\n2 y\n").unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidNodeToken { line: 2, .. }
    ));
}

#[test]
fn test_error_messages() {
    let err = parse_edge_str("0 1 2\n").unwrap_err();
    assert!(err.to_string().contains("line 1"));
    assert!(err.to_string().contains("0 1 2"));
}
