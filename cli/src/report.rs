use std::fmt;

use edge_graph_core::{Metric, UNREACHABLE};
use serde::Serialize;

use crate::intersection::Intersection;
use crate::load::MapGraph;

/// Answer to a route query: both metrics plus the shortest route itself.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub origination: Intersection,
    pub destination: Intersection,
    /// Intersections crossed on the shortest path (-1 when unreachable).
    pub min_path_length: i64,
    /// Fewest turns over all paths (-1 when unreachable or origin == destination).
    pub min_turns: i64,
    /// Shortest path by length, origination to destination.
    pub route: Option<Vec<Intersection>>,
}

impl RouteReport {
    /// Run both queries. Endpoints must already be in the graph.
    pub fn compute(
        graph: &mut MapGraph,
        origination: Intersection,
        destination: Intersection,
    ) -> edge_graph_core::Result<Self> {
        let min_path_length =
            edge_graph_core::shortest_path_weight(graph, &origination, &destination)?;
        let min_turns = edge_graph_core::shortest_path_turns(graph, &origination, &destination)?;
        let route = edge_graph_core::shortest_route(graph, &origination, &destination, Metric::Weight)?
            .map(|r| r.vertices);

        Ok(Self {
            origination,
            destination,
            min_path_length,
            min_turns,
            route,
        })
    }

    pub fn is_reachable(&self) -> bool {
        self.min_path_length != UNREACHABLE
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Origination: {}\tDestination: {}",
            self.origination, self.destination
        )?;
        writeln!(
            f,
            "Minimum Path Length: {}\tMinimum Turns: {}",
            self.min_path_length, self.min_turns
        )?;
        match &self.route {
            Some(stops) => {
                let names: Vec<String> = stops.iter().map(|s| s.to_string()).collect();
                write!(f, "Route: {}", names.join(" -> "))
            }
            None => write!(f, "Route: none"),
        }
    }
}

/// Size summary of a loaded map.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub map: String,
    pub intersections: usize,
    pub streets: usize,
    pub capacity: usize,
    pub memory_bytes: usize,
}

impl StatusReport {
    pub fn of(map: &str, graph: &MapGraph) -> Self {
        Self {
            map: map.to_string(),
            intersections: graph.vertex_count(),
            streets: graph.edge_count(),
            capacity: graph.capacity(),
            memory_bytes: graph.memory_usage(),
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Map: {}", self.map)?;
        writeln!(f, "Intersections: {} of {}", self.intersections, self.capacity)?;
        writeln!(f, "Street segments: {}", self.streets)?;
        write!(f, "Memory: ~{} bytes", self.memory_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::load_map;

    const MAP: &str = "\
header
Main,Oak;Main,Elm;Oak,Pine
Oak,Pine;Birch,Pine
Elm,Cedar
";

    fn at(s: &str) -> Intersection {
        s.parse().unwrap()
    }

    #[test]
    fn test_route_report_text() {
        let mut g = load_map(MAP.as_bytes(), 50).unwrap();
        let report = RouteReport::compute(&mut g, at("Oak,Main"), at("Pine,Birch")).unwrap();
        assert!(report.is_reachable());
        assert_eq!(
            report.to_string(),
            "Origination: Main,Oak\tDestination: Birch,Pine\n\
             Minimum Path Length: 2\tMinimum Turns: 1\n\
             Route: Main,Oak -> Oak,Pine -> Birch,Pine"
        );
    }

    #[test]
    fn test_route_report_unreachable() {
        let mut g = load_map(MAP.as_bytes(), 50).unwrap();
        let report = RouteReport::compute(&mut g, at("Birch,Pine"), at("Main,Oak")).unwrap();
        assert!(!report.is_reachable());
        assert_eq!(report.min_path_length, -1);
        assert_eq!(report.min_turns, -1);
        assert!(report.to_string().ends_with("Route: none"));
    }

    #[test]
    fn test_route_report_json() {
        let mut g = load_map(MAP.as_bytes(), 50).unwrap();
        let report = RouteReport::compute(&mut g, at("Oak,Main"), at("Main,Elm")).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        // Streets serialize in sorted order, not input order
        assert_eq!(value["origination"], "Main,Oak");
        assert_eq!(value["destination"], "Elm,Main");
        assert_eq!(value["min_path_length"], 1);
        assert_eq!(value["min_turns"], 0);
        assert_eq!(value["route"][0], "Main,Oak");
        assert_eq!(value["route"][1], "Elm,Main");
    }

    #[test]
    fn test_route_report_missing_endpoint() {
        let mut g = load_map(MAP.as_bytes(), 50).unwrap();
        let result = RouteReport::compute(&mut g, at("Main,Oak"), at("Nowhere"));
        assert_eq!(result.unwrap_err(), edge_graph_core::GraphError::VertexNotFound);
    }

    #[test]
    fn test_status_report() {
        let g = load_map(MAP.as_bytes(), 50).unwrap();
        let status = StatusReport::of("city.txt", &g);
        assert_eq!(status.intersections, 5);
        assert_eq!(status.streets, 3);
        assert_eq!(status.capacity, 50);
        assert!(status.to_string().starts_with("Map: city.txt\nIntersections: 5 of 50"));
    }
}
