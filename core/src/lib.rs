//! edge-graph-core: bounded directed graph with edges as first-class payloads.
//!
//! A pure Rust library that stores a fixed-capacity vertex set, one optional
//! edge payload per ordered vertex pair, and per-vertex marks, and answers
//! two single-source shortest path queries over it: by cumulative edge
//! weight and by number of turns (changes of edge label along the path).
//!
//! Both queries run through one relaxation engine parameterized by a
//! [`CostModel`]; custom models plug into [`shortest_path_cost`].

mod edge;
mod error;
mod graph;
mod queue;
mod traversal;

pub use edge::{EdgeWeight, WeightedEdge};
pub use error::{GraphError, Result};
pub use graph::{Graph, VertexIndex, DEFAULT_CAPACITY};
pub use queue::Queue;
pub use traversal::{
    shortest_path_cost, shortest_path_turns, shortest_path_weight, shortest_route, ByTurns,
    ByWeight, CostModel, Metric, Route, UNREACHABLE,
};
