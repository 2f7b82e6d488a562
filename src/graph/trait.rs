use crate::graph::*;

/// Interfaces to grow a low-level undirected graph.
///
/// Growing never fails.
/// `add_edge` requires both endpoints to be present already; handing it an
/// unknown ID is a caller bug, checked by `debug_assert!` in the
/// implementations.
/// The checked, erroring surface lives in
/// [PropertyGraph](crate::property::PropertyGraph).
pub trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId;
}

/// Interfaces to remove edges from a graph.
pub trait EdgeShrinkableGraph {
    /// Removes an edge and returns it if it is present.
    ///
    /// Removing an edge will not remove its endpoints.
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge>;
}

/// Interfaces to remove vertices from a graph.
pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a vertex and all edges incident to it and returns these
    /// edges.  Unknown vertices yield an empty iterator.
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static>;
}

/// Interfaces to query a low-level undirected graph.
///
/// All iterators are finite and restartable; each call starts an
/// independent traversal and none of them mutates the graph.
/// `Edge` items always report their insertion orientation, whatever order
/// the implementation stores them in.
pub trait QueryableGraph {
    /// Total number of vertices.
    fn vertex_size(&self) -> usize;
    /// Iterates over all vertices.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    /// Total number of edges.
    fn edge_size(&self) -> usize;
    /// Iterates over all edges.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, e: &EdgeId) -> bool;
    fn find_edge(&self, e: &EdgeId) -> Option<Edge>;

    /// Iterates over all edges whose unordered endpoint pair is `{u, v}`,
    /// whichever orientation they were inserted with.
    /// For `u == v` these are the self-loops at `u`.
    fn edges_connecting(
        &self,
        u: &VertexId,
        v: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Iterates over all edges having `v` as an endpoint.
    /// A self-loop at `v` appears once.
    fn incident_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Iterates over the neighbors of `v`, once per connecting edge.
    ///
    /// A neighbor reached by k parallel edges appears k times; a self-loop
    /// contributes `v` itself once.
    fn adjacent_vertices(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let v = *v;
        let it = self.incident_edges(&v).map(move |e| e.other(&v));
        Box::new(it)
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
