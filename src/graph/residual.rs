use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{PrimInt, Signed};

use crate::error::{Error, Result};

/// Index of an edge in the network's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed edge together with the index of its residual partner.
///
/// Forward edges carry the inserted capacity. Their partners run the opposite
/// way with capacity 0, so a partner's residual capacity equals the flow that
/// can be pushed back along the forward edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<V, C> {
    pub start: V,
    pub end: V,
    pub capacity: C,
    pub flow: C,
    pub residual: EdgeId,
    pub is_residual: bool,
}

impl<V, C> Edge<V, C>
where
    C: PrimInt + Signed,
{
    pub fn residual_capacity(&self) -> C {
        self.capacity - self.flow
    }
}

/// Capacitated directed graph holding the flow state of every edge.
///
/// All edges live in a single arena; an edge and its residual partner are
/// inserted together and refer to each other by index. Vertices are created
/// lazily the first time an edge references them.
#[derive(Debug, Clone)]
pub struct FlowNetwork<V, C = i64> {
    pub(crate) edges: Vec<Edge<V, C>>,
    pub(crate) adjacency: HashMap<V, Vec<EdgeId>>,
    vertices: Vec<V>,
    sealed: bool,
}

impl<V, C> Default for FlowNetwork<V, C>
where
    V: Hash + Eq + Clone + Debug,
    C: PrimInt + Signed + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C> FlowNetwork<V, C>
where
    V: Hash + Eq + Clone + Debug,
    C: PrimInt + Signed + Debug,
{
    pub fn new() -> Self {
        FlowNetwork {
            edges: Vec::new(),
            adjacency: HashMap::new(),
            vertices: Vec::new(),
            sealed: false,
        }
    }

    /// Registers a vertex with an empty outgoing list. Registering an existing
    /// vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        if self.sealed {
            return Err(Error::NetworkSealed);
        }
        self.ensure_vertex(&vertex);
        Ok(())
    }

    fn ensure_vertex(&mut self, vertex: &V) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.clone(), Vec::new());
            self.vertices.push(vertex.clone());
        }
    }

    /// Inserts a forward edge `start -> end` and its residual partner
    /// `end -> start`, returning the id of the forward edge.
    ///
    /// # Errors
    /// * `Error::InvalidEdge` - if `start == end` or `capacity <= 0`
    /// * `Error::NetworkSealed` - if a flow computation has already started
    ///
    /// Nothing is mutated when an error is returned.
    pub fn add_edge(&mut self, start: V, end: V, capacity: C) -> Result<EdgeId> {
        if self.sealed {
            return Err(Error::NetworkSealed);
        }
        if start == end {
            return Err(Error::invalid_edge(&start, &end, "start and end are equal"));
        }
        if capacity <= C::zero() {
            return Err(Error::invalid_edge(
                &start,
                &end,
                format!("capacity must be positive, got {:?}", capacity),
            ));
        }

        self.ensure_vertex(&start);
        self.ensure_vertex(&end);

        let forward = EdgeId(self.edges.len());
        let residual = EdgeId(forward.0 + 1);

        self.edges.push(Edge {
            start: start.clone(),
            end: end.clone(),
            capacity,
            flow: C::zero(),
            residual,
            is_residual: false,
        });
        self.edges.push(Edge {
            start: end.clone(),
            end: start.clone(),
            capacity: C::zero(),
            flow: C::zero(),
            residual: forward,
            is_residual: true,
        });

        if let Some(out) = self.adjacency.get_mut(&start) {
            out.push(forward);
        }
        if let Some(out) = self.adjacency.get_mut(&end) {
            out.push(residual);
        }

        Ok(forward)
    }

    pub fn edge(&self, id: EdgeId) -> &Edge<V, C> {
        &self.edges[id.0]
    }

    /// Returns the partner of `id`.
    pub fn residual_of(&self, id: EdgeId) -> EdgeId {
        self.edges[id.0].residual
    }

    pub fn residual_capacity(&self, id: EdgeId) -> C {
        self.edges[id.0].residual_capacity()
    }

    /// Outgoing edges of `vertex` in insertion order, residual edges included.
    pub fn outgoing_edges(&self, vertex: &V) -> Result<&[EdgeId]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::unknown_vertex(vertex))
    }

    /// Adds `delta` to the flow of `id` and subtracts it from its partner.
    ///
    /// Bounds are not checked here; callers push at most the residual
    /// capacity of the edge.
    pub fn apply_flow(&mut self, id: EdgeId, delta: C) {
        let partner = self.edges[id.0].residual;
        self.edges[id.0].flow = self.edges[id.0].flow + delta;
        self.edges[partner.0].flow = self.edges[partner.0].flow - delta;
    }

    /// Every edge in the arena, forward and residual alike.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<V, C>)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Forward edges in insertion order.
    pub fn forward_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<V, C>)> {
        self.edges().filter(|(_, e)| !e.is_residual)
    }

    /// Vertices in the order they were first referenced.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of forward edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub(crate) fn seal(&mut self) {
        self.sealed = true;
    }

    /// Zeroes every flow and allows edge insertion again.
    pub fn reset_flow(&mut self) {
        for edge in &mut self.edges {
            edge.flow = C::zero();
        }
        self.sealed = false;
    }
}
