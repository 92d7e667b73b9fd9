use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::queue::Queue;

/// Capacity used by [`Graph::new`].
pub const DEFAULT_CAPACITY: usize = 50;

/// Position of a vertex in insertion order. Stable for the vertex's lifetime.
pub type VertexIndex = usize;

/// Bounded directed graph whose edges are first-class payloads.
///
/// Vertices are identified by value equality and get the next free index on
/// insertion; a hash index maps each vertex back to that position. Each
/// vertex owns an ordered map of outgoing edges keyed by target index, so at
/// most one edge exists per ordered pair and neighbors come out in ascending
/// index order. A per-vertex mark bit supports the path engine's visited set.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    capacity: usize,
    vertices: Vec<V>,
    index: HashMap<V, VertexIndex>,
    outgoing: Vec<BTreeMap<VertexIndex, E>>,
    marks: Vec<bool>,
}

impl<V, E> Graph<V, E> {
    /// Empty graph holding up to [`DEFAULT_CAPACITY`] vertices.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty graph holding up to `capacity` vertices. The limit never changes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            vertices: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            outgoing: Vec::with_capacity(capacity),
            marks: Vec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|row| row.len()).sum()
    }

    /// Vertices in insertion (index) order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex(&self, index: VertexIndex) -> Option<&V> {
        self.vertices.get(index)
    }

    /// Reset every mark to unmarked.
    pub fn clear_marks(&mut self) {
        self.marks.iter_mut().for_each(|m| *m = false);
    }

    /// First unmarked vertex in index order, or None when all are marked.
    pub fn get_unmarked(&self) -> Option<&V> {
        self.marks
            .iter()
            .position(|&marked| !marked)
            .map(|i| &self.vertices[i])
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        // Vertex stored twice (list + index key), plus hash slot overhead
        let vertex_mem = self.vertices.len() * (2 * size_of::<V>() + size_of::<VertexIndex>() + 16);
        // BTreeMap entries: key + payload + node overhead
        let edge_mem = self.edge_count() * (size_of::<VertexIndex>() + size_of::<E>() + 16);
        let row_mem = self.outgoing.len() * size_of::<BTreeMap<VertexIndex, E>>();

        vertex_mem + edge_mem + row_mem + self.marks.len()
    }
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
{
    /// Append a vertex at the next index and return that index.
    ///
    /// Adding a vertex equal to one already stored is a no-op returning the
    /// existing index, so no two stored vertices are ever equal.
    pub fn add_vertex(&mut self, vertex: V) -> Result<VertexIndex> {
        if let Some(&existing) = self.index.get(&vertex) {
            return Ok(existing);
        }
        if self.is_full() {
            debug!(capacity = self.capacity, "vertex insertion rejected: graph full");
            return Err(GraphError::Overflow {
                capacity: self.capacity,
            });
        }

        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.outgoing.push(BTreeMap::new());
        self.marks.push(false);
        Ok(idx)
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Index assigned to `vertex` at insertion.
    pub fn index_of(&self, vertex: &V) -> Result<VertexIndex> {
        self.index
            .get(vertex)
            .copied()
            .ok_or(GraphError::VertexNotFound)
    }

    fn endpoints(&self, from: &V, to: &V) -> Result<(VertexIndex, VertexIndex)> {
        Ok((self.index_of(from)?, self.index_of(to)?))
    }

    /// Set the edge from `from` to `to`, returning the edge it replaced.
    pub fn add_edge(&mut self, from: &V, to: &V, edge: E) -> Result<Option<E>> {
        let (row, col) = self.endpoints(from, to)?;
        Ok(self.outgoing[row].insert(col, edge))
    }

    /// Edge from `from` to `to`, or None when the pair is not connected.
    pub fn get_edge(&self, from: &V, to: &V) -> Result<Option<&E>> {
        let (row, col) = self.endpoints(from, to)?;
        Ok(self.outgoing[row].get(&col))
    }

    pub fn edge_exists(&self, from: &V, to: &V) -> Result<bool> {
        let (row, col) = self.endpoints(from, to)?;
        Ok(self.outgoing[row].contains_key(&col))
    }

    /// Remove the edge from `from` to `to`. Returns whether one existed.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<bool> {
        let (row, col) = self.endpoints(from, to)?;
        Ok(self.outgoing[row].remove(&col).is_some())
    }

    /// Targets of every edge leaving `vertex`, in ascending index order.
    pub fn to_vertices(&self, vertex: &V) -> Result<Queue<V>> {
        let row = self.index_of(vertex)?;
        Ok(self.outgoing[row]
            .keys()
            .map(|&col| self.vertices[col].clone())
            .collect())
    }

    pub fn mark_vertex(&mut self, vertex: &V) -> Result<()> {
        let idx = self.index_of(vertex)?;
        self.marks[idx] = true;
        Ok(())
    }

    pub fn is_marked(&self, vertex: &V) -> Result<bool> {
        let idx = self.index_of(vertex)?;
        Ok(self.marks[idx])
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
