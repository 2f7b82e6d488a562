//! `PropertyGraph`, an undirected graph with data attached to vertices and
//! edges.
//!
//! This is the layer most applications want: it owns a low-level topology
//! (any [GrowableGraph](crate::graph::GrowableGraph) +
//! [QueryableGraph](crate::graph::QueryableGraph)) together with one
//! property per vertex and per edge, and it checks every ID handed to it.
//! Reads given a stale or foreign ID fail with
//! [Error](crate::error::Error) instead of pretending the element has no
//! neighbors.

use crate::error::{Error, Result};
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

mod graphviz;

/// An undirected multigraph whose vertices carry a `V` and whose edges
/// carry an `E`.
///
/// * `V`: vertex property type.
/// * `E`: edge property type.
/// * `G`: the underlying topology.  The default [TreeBackedGraph] never
///   reuses ID's and iterates vertices and edges in insertion order.
///
/// Parallel edges between the same endpoint pair and self-loops are
/// allowed; [PropertyGraph::ensure_edge] is the opt-in simple-graph
/// insertion for callers that want at most one edge per pair.
#[derive(Clone)]
pub struct PropertyGraph<V, E, G = TreeBackedGraph> {
    topology: G,
    vertex_props: HashMap<VertexId, V, RandomState>,
    edge_props: HashMap<EdgeId, E, RandomState>,
}

impl<V, E, G> Default for PropertyGraph<V, E, G>
where
    G: GrowableGraph,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, G> PropertyGraph<V, E, G>
where
    G: GrowableGraph,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            topology: G::new(),
            vertex_props: HashMap::with_hasher(RandomState::new()),
            edge_props: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Adds a vertex carrying `prop` and returns its fresh ID.
    ///
    /// The vertex is immediately visible to all queries and iterations.
    pub fn add_vertex(&mut self, prop: V) -> VertexId {
        let vid = self.topology.add_vertex();
        self.vertex_props.insert(vid, prop);
        vid
    }

    /// Adds an edge between two existing vertices, carrying `prop`.
    ///
    /// This is the multigraph insertion: it always creates a new edge and
    /// the returned flag is always `true`, so the return shape matches
    /// [PropertyGraph::ensure_edge] and callers can branch on either
    /// uniformly.  Fails with [Error::InvalidVertex] and leaves the graph
    /// unchanged when an endpoint is not live.
    pub fn add_edge(&mut self, source: VertexId, sink: VertexId, prop: E) -> Result<(EdgeId, bool)> {
        self.check_vertex(&source)?;
        self.check_vertex(&sink)?;
        let eid = self.topology.add_edge(source, sink);
        self.edge_props.insert(eid, prop);
        Ok((eid, true))
    }
}

impl<V, E, G> PropertyGraph<V, E, G>
where
    G: GrowableGraph + QueryableGraph,
{
    /// The simple-graph insertion: adds an edge unless one already
    /// connects the two endpoints, in either orientation.
    ///
    /// Returns `(id, true)` when a new edge was created, or
    /// `(existing, false)` when one already connected the pair, in which
    /// case `prop` is dropped.  Among parallel pre-existing edges the one
    /// with the smallest ID is returned.
    pub fn ensure_edge(
        &mut self,
        source: VertexId,
        sink: VertexId,
        prop: E,
    ) -> Result<(EdgeId, bool)> {
        self.check_vertex(&source)?;
        self.check_vertex(&sink)?;
        let existing = self
            .topology
            .edges_connecting(&source, &sink)
            .map(|e| e.id)
            .min();
        if let Some(eid) = existing {
            return Ok((eid, false));
        }
        let eid = self.topology.add_edge(source, sink);
        self.edge_props.insert(eid, prop);
        Ok((eid, true))
    }
}

impl<V, E, G> PropertyGraph<V, E, G> {
    /// The underlying low-level topology, for ID-level queries.
    pub fn topology(&self) -> &G {
        &self.topology
    }

    /// Total number of vertices.
    pub fn vertex_size(&self) -> usize {
        self.vertex_props.len()
    }

    /// Total number of edges.
    pub fn edge_size(&self) -> usize {
        self.edge_props.len()
    }

    pub fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertex_props.contains_key(v)
    }

    pub fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edge_props.contains_key(e)
    }

    /// The property attached to a vertex.
    pub fn vertex_property(&self, v: &VertexId) -> Result<&V> {
        self.vertex_props.get(v).ok_or(Error::InvalidVertex(*v))
    }

    pub fn vertex_property_mut(&mut self, v: &VertexId) -> Result<&mut V> {
        self.vertex_props.get_mut(v).ok_or(Error::InvalidVertex(*v))
    }

    /// The property attached to an edge.
    pub fn edge_property(&self, e: &EdgeId) -> Result<&E> {
        self.edge_props.get(e).ok_or(Error::InvalidEdge(*e))
    }

    pub fn edge_property_mut(&mut self, e: &EdgeId) -> Result<&mut E> {
        self.edge_props.get_mut(e).ok_or(Error::InvalidEdge(*e))
    }

    fn check_vertex(&self, v: &VertexId) -> Result<()> {
        if self.vertex_props.contains_key(v) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(*v))
        }
    }

    fn check_edge(&self, e: &EdgeId) -> Result<()> {
        if self.edge_props.contains_key(e) {
            Ok(())
        } else {
            Err(Error::InvalidEdge(*e))
        }
    }
}

impl<V, E, G> PropertyGraph<V, E, G>
where
    G: QueryableGraph,
{
    /// Iterates over all vertices with their properties.
    ///
    /// Each call starts an independent traversal; the order is the
    /// topology's (insertion order on the default backend).
    pub fn iter_vertices(&self) -> Box<dyn Iterator<Item = (VertexId, &V)> + '_> {
        let it = self
            .topology
            .iter_vertices()
            .map(|vid| (vid, self.vertex_props.get(&vid).unwrap()));
        Box::new(it)
    }

    /// Iterates over all edges with their properties.
    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = (EdgeId, &E)> + '_> {
        let it = self
            .topology
            .iter_edges()
            .map(|e| (e.id, self.edge_props.get(&e.id).unwrap()));
        Box::new(it)
    }

    /// The two endpoints of an edge, in the orientation originally given
    /// to the inserting call.
    pub fn endpoints(&self, e: &EdgeId) -> Result<(VertexId, VertexId)> {
        self.check_edge(e)?;
        let edge = self.topology.find_edge(e).unwrap();
        Ok((edge.source, edge.sink))
    }

    /// Whether any edge connects `u` and `v`, in either orientation.
    ///
    /// `Ok(None)` when the two (live) vertices are not connected.  Among
    /// parallel edges the one with the smallest ID is reported, which on
    /// the default backend is the first inserted.
    pub fn find_edge(&self, u: &VertexId, v: &VertexId) -> Result<Option<EdgeId>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.topology.edges_connecting(u, v).map(|e| e.id).min())
    }

    /// Iterates over all edges whose unordered endpoint pair is `{u, v}`.
    pub fn edges_connecting(
        &self,
        u: &VertexId,
        v: &VertexId,
    ) -> Result<Box<dyn Iterator<Item = (EdgeId, &E)> + '_>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let it = self
            .topology
            .edges_connecting(u, v)
            .map(|e| (e.id, self.edge_props.get(&e.id).unwrap()));
        Ok(Box::new(it))
    }

    /// Iterates over all edges having `v` as an endpoint.
    /// A self-loop at `v` appears once.
    pub fn incident_edges(
        &self,
        v: &VertexId,
    ) -> Result<Box<dyn Iterator<Item = (EdgeId, &E)> + '_>> {
        self.check_vertex(v)?;
        let it = self
            .topology
            .incident_edges(v)
            .map(|e| (e.id, self.edge_props.get(&e.id).unwrap()));
        Ok(Box::new(it))
    }

    /// Iterates over the neighbors of `v`, once per connecting edge.
    ///
    /// A neighbor reached by k parallel edges appears k times; a self-loop
    /// contributes `v` itself once.  The multiplicity matches
    /// [PropertyGraph::incident_edges].
    pub fn adjacent_vertices(
        &self,
        v: &VertexId,
    ) -> Result<Box<dyn Iterator<Item = VertexId> + '_>> {
        self.check_vertex(v)?;
        Ok(self.topology.adjacent_vertices(v))
    }

    pub fn debug(&self) -> PropertyGraphDebug<'_, V, E, G>
    where
        V: std::fmt::Debug,
        E: std::fmt::Debug,
    {
        PropertyGraphDebug {
            graph: self,
            init_indent: 0,
            indent_step: 2,
        }
    }
}

impl<V, E, G> PropertyGraph<V, E, G>
where
    G: EdgeShrinkableGraph,
{
    /// Removes an edge and returns its property.
    ///
    /// The endpoints stay in the graph.  Fails with [Error::InvalidEdge]
    /// when the ID is not live.
    pub fn remove_edge(&mut self, e: &EdgeId) -> Result<E> {
        self.check_edge(e)?;
        self.topology.remove_edge(e);
        Ok(self.edge_props.remove(e).unwrap())
    }
}

impl<V, E, G> PropertyGraph<V, E, G>
where
    G: VertexShrinkableGraph,
{
    /// Removes a vertex together with every edge incident to it.
    ///
    /// Returns the vertex property and the removed edges with theirs.
    /// Fails with [Error::InvalidVertex] when the ID is not live.
    pub fn remove_vertex(&mut self, v: &VertexId) -> Result<(V, Vec<(EdgeId, E)>)> {
        self.check_vertex(v)?;
        let removed: Vec<Edge> = self.topology.remove_vertex(v).collect();
        let edges = removed
            .into_iter()
            .map(|e| (e.id, self.edge_props.remove(&e.id).unwrap()))
            .collect();
        let prop = self.vertex_props.remove(v).unwrap();
        Ok((prop, edges))
    }
}

/// A default implementation of inspecting into a property graph with
/// customized indentation.
pub struct PropertyGraphDebug<'a, V, E, G>
where
    V: std::fmt::Debug,
    E: std::fmt::Debug,
    G: QueryableGraph,
{
    graph: &'a PropertyGraph<V, E, G>,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, V, E, G> PropertyGraphDebug<'a, V, E, G>
where
    V: std::fmt::Debug,
    E: std::fmt::Debug,
    G: QueryableGraph,
{
    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, V, E, G> std::fmt::Debug for PropertyGraphDebug<'a, V, E, G>
where
    V: std::fmt::Debug,
    E: std::fmt::Debug,
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (vid, prop) in self.graph.iter_vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}({:?})", vid, prop)?;
            for e in self.graph.topology.incident_edges(&vid) {
                self.display_indent(f, 1)?;
                let etag = self.graph.edge_props.get(&e.id).unwrap();
                writeln!(f, "--{:?}({:?})-- {:?}", e.id, etag, e.other(&vid))?;
            }
        }
        Ok(())
    }
}
