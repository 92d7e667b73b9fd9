//! Map loading: intersection list files into a street graph.
//!
//! Format: the first line is a header and is skipped. Every other non-blank
//! line is a `;`-separated list of intersections, each a `,`-separated list
//! of cross streets. The first intersection on a line is the home; every
//! following one is adjacent to it, joined by a one-way edge labelled with
//! the street they share (empty when they share none).
//!
//! ```text
//! Home;Adjacent...
//! Main,Oak;Main,Elm;Oak,Pine
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use edge_graph_core::{Graph, GraphError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::intersection::Intersection;

/// Street graph: intersections joined by the name of the street between them.
pub type MapGraph = Graph<Intersection, String>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("map is empty: expected a header line")]
    MissingHeader,

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

/// Load a map file into a graph holding at most `capacity` intersections.
pub fn load_file(path: &Path, capacity: usize) -> Result<MapGraph, LoadError> {
    let file = File::open(path)?;
    load_map(BufReader::new(file), capacity)
}

/// Load a map from any line source.
pub fn load_map<R: BufRead>(reader: R, capacity: usize) -> Result<MapGraph, LoadError> {
    let mut graph = MapGraph::with_capacity(capacity);
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            header?;
        }
        None => return Err(LoadError::MissingHeader),
    }

    for (i, text) in lines.enumerate() {
        let line = i + 2; // 1-based, after the header
        let text = text?;
        // Trailing separators leave no empty field behind
        let text = text.trim().trim_end_matches(';');
        if text.is_empty() {
            continue;
        }
        load_line(&mut graph, line, text)?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "map parsed"
    );
    Ok(graph)
}

fn load_line(graph: &mut MapGraph, line: usize, text: &str) -> Result<(), LoadError> {
    let mut stops = Vec::new();
    for (field, raw) in text.split(';').enumerate() {
        let stop: Intersection = raw.parse().map_err(|_| LoadError::Malformed {
            line,
            reason: format!("field {} names no streets", field + 1),
        })?;
        stops.push(stop);
    }

    for stop in &stops {
        if !graph.has_vertex(stop) {
            graph
                .add_vertex(stop.clone())
                .map_err(|source| LoadError::Graph { line, source })?;
        }
    }

    let Some((home, adjacent)) = stops.split_first() else {
        return Ok(());
    };
    for next in adjacent {
        let street = match home.shared_street(next) {
            Some(street) => street.to_string(),
            None => {
                warn!(line, from = %home, to = %next, "no shared street, edge left unlabelled");
                String::new()
            }
        };
        graph
            .add_edge(home, next, street)
            .map_err(|source| LoadError::Graph { line, source })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL_MAP: &str = "\
Home;Adjacent
Main,Oak;Main,Elm;Oak,Pine
Main,Elm;Main,Oak;Elm,Birch
Elm,Birch;Birch,Pine
Oak,Pine;Birch,Pine
";

    fn at(s: &str) -> Intersection {
        s.parse().unwrap()
    }

    #[test]
    fn test_load_small_map() {
        let g = load_map(SMALL_MAP.as_bytes(), 50).unwrap();
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 6);
        assert_eq!(
            g.get_edge(&at("Main,Oak"), &at("Main,Elm")).unwrap().map(String::as_str),
            Some("Main")
        );
        assert_eq!(
            g.get_edge(&at("Oak,Pine"), &at("Birch,Pine")).unwrap().map(String::as_str),
            Some("Pine")
        );
        // Edges are one-way unless listed from both ends
        assert_eq!(g.edge_exists(&at("Birch,Pine"), &at("Oak,Pine")), Ok(false));
    }

    #[test]
    fn test_vertices_in_first_seen_order() {
        let g = load_map(SMALL_MAP.as_bytes(), 50).unwrap();
        assert_eq!(g.index_of(&at("Main,Oak")), Ok(0));
        assert_eq!(g.index_of(&at("Main,Elm")), Ok(1));
        assert_eq!(g.index_of(&at("Oak,Pine")), Ok(2));
        assert_eq!(g.index_of(&at("Elm,Birch")), Ok(3));
        assert_eq!(g.index_of(&at("Birch,Pine")), Ok(4));
    }

    #[test]
    fn test_query_loaded_map() {
        let mut g = load_map(SMALL_MAP.as_bytes(), 50).unwrap();
        let (home, corner) = (at("Main,Oak"), at("Birch,Pine"));
        assert_eq!(edge_graph_core::shortest_path_weight(&mut g, &home, &corner), Ok(2));
        // Oak then Pine
        assert_eq!(edge_graph_core::shortest_path_turns(&mut g, &home, &corner), Ok(1));
    }

    #[test]
    fn test_header_only() {
        let g = load_map("Home;Adjacent\n".as_bytes(), 50).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(load_map("".as_bytes(), 50), Err(LoadError::MissingHeader)));
    }

    #[test]
    fn test_blank_lines_and_trailing_separator() {
        let map = "header\n\nMain,Oak;Main,Elm;\n   \n";
        let g = load_map(map.as_bytes(), 50).unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_lone_home_adds_vertex_only() {
        let g = load_map("header\nMain,Oak\n".as_bytes(), 50).unwrap();
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_empty_field_rejected() {
        let err = load_map("header\nMain,Oak;;Main,Elm\n".as_bytes(), 50).unwrap_err();
        match err {
            LoadError::Malformed { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("field 2"), "{}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_no_shared_street_gets_empty_label() {
        let map = "header\nMain,Oak;Main,Elm\nMain,Oak;Birch,Pine\n";
        let mut g = load_map(map.as_bytes(), 50).unwrap();
        assert_eq!(g.vertex_count(), 3);
        let (home, far) = (at("Main,Oak"), at("Birch,Pine"));
        assert_eq!(g.get_edge(&home, &far).unwrap().map(String::as_str), Some(""));
        // Unlabelled edges still route
        assert_eq!(edge_graph_core::shortest_path_weight(&mut g, &home, &far), Ok(1));
        assert_eq!(edge_graph_core::shortest_path_turns(&mut g, &home, &far), Ok(0));
    }

    #[test]
    fn test_overflow_reports_line() {
        let err = load_map(SMALL_MAP.as_bytes(), 3).unwrap_err();
        match err {
            LoadError::Graph { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, GraphError::Overflow { capacity: 3 });
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL_MAP.as_bytes()).unwrap();
        let g = load_file(file.path(), 50).unwrap();
        assert_eq!(g.vertex_count(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("nope.txt"), 50).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
