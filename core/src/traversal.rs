use std::hash::Hash;

use tracing::debug;

use crate::edge::EdgeWeight;
use crate::error::Result;
use crate::graph::{Graph, VertexIndex};

/// Reported cost of an end vertex no path reaches.
pub const UNREACHABLE: i64 = -1;

/// Cost accumulation strategy for the relaxation engine.
///
/// `Trail` is whatever a vertex must remember about its best-known path for
/// the next step to be priced (nothing for weights, the last edge for turns).
/// Step costs must be non-negative: settled vertices are never reopened.
pub trait CostModel<E> {
    type Trail: Clone;

    /// Trail of the start vertex.
    fn origin(&self) -> Self::Trail;

    /// Cost of leaving a vertex reached via `trail` along `edge`, and the
    /// trail the neighbor inherits.
    fn step(&self, trail: &Self::Trail, edge: &E) -> (u64, Self::Trail);

    /// Convert a settled cost into the number reported to callers.
    fn report(&self, cost: u64) -> i64 {
        saturating_i64(cost)
    }
}

/// Sum of edge weights along the path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByWeight;

impl<E: EdgeWeight> CostModel<E> for ByWeight {
    type Trail = ();

    fn origin(&self) {}

    fn step(&self, _trail: &(), edge: &E) -> (u64, ()) {
        (edge.weight(), ())
    }
}

/// Number of label changes along the path.
///
/// Every edge that differs from the one used to reach the current vertex
/// costs 1, including the first edge out of the start (there is no previous
/// edge). `report` takes that first change back off, so a start vertex
/// compared with itself reports -1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByTurns;

impl<E: Clone + PartialEq> CostModel<E> for ByTurns {
    type Trail = Option<E>;

    fn origin(&self) -> Option<E> {
        None
    }

    fn step(&self, trail: &Option<E>, edge: &E) -> (u64, Option<E>) {
        let change = if trail.as_ref() == Some(edge) { 0 } else { 1 };
        (change, Some(edge.clone()))
    }

    fn report(&self, cost: u64) -> i64 {
        saturating_i64(cost) - 1
    }
}

/// Which cost a route query minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Weight,
    Turns,
}

/// A reconstructed shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    /// Vertices from start to end, both included.
    pub vertices: Vec<V>,
    /// Same number the scalar query reports for this metric.
    pub cost: i64,
}

impl<V> Route<V> {
    /// Number of edges on the route.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Best-known path to one vertex.
#[derive(Debug, Clone)]
struct Label<T> {
    cost: u64,
    trail: T,
    parent: Option<VertexIndex>,
}

fn saturating_i64(cost: u64) -> i64 {
    i64::try_from(cost).unwrap_or(i64::MAX)
}

/// Single-source relaxation from `start` under `model`.
///
/// Simplified Dijkstra: the next vertex to settle is found by a linear scan
/// for the unmarked vertex with the smallest known cost (lowest index wins
/// ties). Marks are cleared on entry and left set on every settled vertex.
/// Returns one label per vertex, None where `start` cannot reach.
fn relax<V, E, M>(
    graph: &mut Graph<V, E>,
    start: &V,
    model: &M,
) -> Result<Vec<Option<Label<M::Trail>>>>
where
    V: Eq + Hash + Clone,
    M: CostModel<E>,
{
    let start_idx = graph.index_of(start)?;
    let mut labels: Vec<Option<Label<M::Trail>>> = vec![None; graph.vertex_count()];
    labels[start_idx] = Some(Label {
        cost: 0,
        trail: model.origin(),
        parent: None,
    });

    graph.clear_marks();
    let mut current_idx = start_idx;
    let mut settled = 0usize;

    loop {
        let (current_cost, current_trail) = match &labels[current_idx] {
            Some(label) => (label.cost, label.trail.clone()),
            None => break, // selection only yields labelled vertices
        };
        let current = graph.vertices()[current_idx].clone();
        graph.mark_vertex(&current)?;
        settled += 1;

        for next in graph.to_vertices(&current)? {
            if graph.is_marked(&next)? {
                continue;
            }
            let Some(edge) = graph.get_edge(&current, &next)? else {
                continue;
            };
            let (step, trail) = model.step(&current_trail, edge);
            let candidate = current_cost.saturating_add(step);

            let next_idx = graph.index_of(&next)?;
            let improves = labels[next_idx]
                .as_ref()
                .map_or(true, |known| candidate < known.cost);
            if improves {
                labels[next_idx] = Some(Label {
                    cost: candidate,
                    trail,
                    parent: Some(current_idx),
                });
            }
        }

        // Next: unmarked vertex with the smallest known cost
        let mut next: Option<(VertexIndex, u64)> = None;
        for (idx, vertex) in graph.vertices().iter().enumerate() {
            let Some(label) = &labels[idx] else {
                continue;
            };
            if graph.is_marked(vertex)? {
                continue;
            }
            if next.map_or(true, |(_, best)| label.cost < best) {
                next = Some((idx, label.cost));
            }
        }

        match next {
            Some((idx, _)) => current_idx = idx,
            None => break,
        }
    }

    debug!(
        start = start_idx,
        settled,
        vertices = graph.vertex_count(),
        "relaxation finished"
    );
    Ok(labels)
}

/// Cost of the cheapest path from `start` to `end` under any cost model.
///
/// Returns [`UNREACHABLE`] when no path exists. Fails with
/// `VertexNotFound` when either endpoint is not in the graph.
pub fn shortest_path_cost<V, E, M>(
    graph: &mut Graph<V, E>,
    start: &V,
    end: &V,
    model: &M,
) -> Result<i64>
where
    V: Eq + Hash + Clone,
    M: CostModel<E>,
{
    let end_idx = graph.index_of(end)?;
    let labels = relax(graph, start, model)?;
    Ok(labels[end_idx]
        .as_ref()
        .map_or(UNREACHABLE, |label| model.report(label.cost)))
}

/// Total edge weight of the lightest path, or [`UNREACHABLE`].
pub fn shortest_path_weight<V, E>(graph: &mut Graph<V, E>, start: &V, end: &V) -> Result<i64>
where
    V: Eq + Hash + Clone,
    E: EdgeWeight,
{
    shortest_path_cost(graph, start, end, &ByWeight)
}

/// Fewest turns (label changes between consecutive edges) on a path, or
/// [`UNREACHABLE`]. `start == end` reports -1.
pub fn shortest_path_turns<V, E>(graph: &mut Graph<V, E>, start: &V, end: &V) -> Result<i64>
where
    V: Eq + Hash + Clone,
    E: Clone + PartialEq,
{
    shortest_path_cost(graph, start, end, &ByTurns)
}

/// Shortest route from `start` to `end` under `metric`, with its vertices.
///
/// Returns None when `end` is unreachable.
pub fn shortest_route<V, E>(
    graph: &mut Graph<V, E>,
    start: &V,
    end: &V,
    metric: Metric,
) -> Result<Option<Route<V>>>
where
    V: Eq + Hash + Clone,
    E: EdgeWeight + Clone + PartialEq,
{
    match metric {
        Metric::Weight => route_with(graph, start, end, &ByWeight),
        Metric::Turns => route_with(graph, start, end, &ByTurns),
    }
}

fn route_with<V, E, M>(
    graph: &mut Graph<V, E>,
    start: &V,
    end: &V,
    model: &M,
) -> Result<Option<Route<V>>>
where
    V: Eq + Hash + Clone,
    M: CostModel<E>,
{
    let end_idx = graph.index_of(end)?;
    let labels = relax(graph, start, model)?;
    let Some(end_label) = &labels[end_idx] else {
        return Ok(None);
    };

    // Parents always point at vertices settled earlier, so the walk ends at start
    let mut path = vec![end_idx];
    let mut at = end_idx;
    while let Some(parent) = labels[at].as_ref().and_then(|label| label.parent) {
        path.push(parent);
        at = parent;
    }
    path.reverse();

    Ok(Some(Route {
        vertices: path
            .into_iter()
            .map(|idx| graph.vertices()[idx].clone())
            .collect(),
        cost: model.report(end_label.cost),
    }))
}
