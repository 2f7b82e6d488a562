use crate::graph::*;
use bimap::BiHashMap;

/// This wraps a graph and mappings of vertices and edges from another graph.
///
/// Two `MappedGraph`s over different implementations compare equal when
/// they present the same graph under their mapped ID's, which makes this
/// the oracle for the randomized cross-implementation tests.
#[derive(Clone)]
pub struct MappedGraph<G> {
    pub graph: G,
    pub vmap: BiHashMap<VertexId, VertexId>,
    pub emap: BiHashMap<EdgeId, EdgeId>,
}

impl<G> QueryableGraph for MappedGraph<G>
where
    G: QueryableGraph,
{
    fn vertex_size(&self) -> usize {
        self.graph.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self
            .graph
            .iter_vertices()
            .map(|l| *self.vmap.get_by_left(&l).unwrap());
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        if let Some(l) = self.vmap.get_by_right(v) {
            self.graph.contains_vertex(l)
        } else {
            false
        }
    }

    fn edge_size(&self) -> usize {
        self.graph.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.graph.iter_edges().map(|e| self.translate(&e));
        Box::new(it)
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        if let Some(e) = self.emap.get_by_right(e) {
            self.graph.contains_edge(e)
        } else {
            false
        }
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        if let Some(l) = self.emap.get_by_right(e) {
            self.graph.find_edge(l).map(|le| self.translate(&le))
        } else {
            None
        }
    }

    fn edges_connecting(
        &self,
        u: &VertexId,
        v: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        match (self.vmap.get_by_right(u), self.vmap.get_by_right(v)) {
            (Some(lu), Some(lv)) => {
                let it = self
                    .graph
                    .edges_connecting(lu, lv)
                    .map(|e| self.translate(&e));
                Box::new(it)
            }
            _ => Box::new(std::iter::empty()),
        }
    }

    fn incident_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        if let Some(lv) = self.vmap.get_by_right(v) {
            let it = self.graph.incident_edges(lv).map(|e| self.translate(&e));
            Box::new(it)
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<G> std::fmt::Debug for MappedGraph<G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}

impl<G1, G2> std::cmp::PartialEq<MappedGraph<G2>> for MappedGraph<G1>
where
    G1: QueryableGraph,
    G2: QueryableGraph,
{
    fn eq(&self, other: &MappedGraph<G2>) -> bool {
        if self.graph.vertex_size() != other.graph.vertex_size() {
            return false;
        }
        for v in self.iter_vertices() {
            if !other.contains_vertex(&v) {
                return false;
            }
        }

        if self.graph.edge_size() != other.graph.edge_size() {
            return false;
        }
        for e in self.iter_edges() {
            if !edge_in(other, &e) {
                return false;
            }
        }
        for v in self.iter_vertices() {
            for e in self.incident_edges(&v) {
                if !edge_in(other, &e) {
                    return false;
                }
            }
        }
        for v in other.iter_vertices() {
            for e in other.incident_edges(&v) {
                if !edge_in(self, &e) {
                    return false;
                }
            }
        }
        true
    }
}

impl<G> Eq for MappedGraph<G> where G: QueryableGraph {}

/// Membership of a mapped edge in another mapped graph,
/// endpoints compared as unordered pairs.
fn edge_in<G>(g: &MappedGraph<G>, e: &Edge) -> bool
where
    G: QueryableGraph,
{
    match g.find_edge(&e.id) {
        Some(mine) => mine.connects(&e.source, &e.sink),
        None => false,
    }
}

impl<G> Default for MappedGraph<G>
where
    G: GrowableGraph,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G> MappedGraph<G>
where
    G: GrowableGraph,
{
    pub fn new() -> Self {
        Self {
            graph: G::new(),
            vmap: BiHashMap::new(),
            emap: BiHashMap::new(),
        }
    }
}

impl<G> MappedGraph<G>
where
    G: QueryableGraph,
{
    fn translate(&self, e: &Edge) -> Edge {
        Edge {
            id: *self.emap.get_by_left(&e.id).unwrap(),
            source: *self.vmap.get_by_left(&e.source).unwrap(),
            sink: *self.vmap.get_by_left(&e.sink).unwrap(),
        }
    }
}

#[cfg(test)]
impl<G> MappedGraph<G>
where
    G: GrowableGraph + EdgeShrinkableGraph + VertexShrinkableGraph,
{
    pub fn apply(&mut self, ops: &Ops) {
        for op in ops.iter() {
            match op {
                Op::AddVertex(vid) => {
                    let my_vid = self.graph.add_vertex();
                    self.vmap.insert(my_vid, *vid);
                }
                Op::RemoveVertex(vid) => {
                    if let Some(my_vid) = self.vmap.get_by_right(vid).copied() {
                        for e in self.graph.remove_vertex(&my_vid) {
                            self.emap.remove_by_left(&e.id);
                        }
                        self.vmap.remove_by_left(&my_vid);
                    }
                }
                Op::AddEdge((source, sink, eid)) => {
                    match (self.vmap.get_by_right(source), self.vmap.get_by_right(sink)) {
                        (Some(my_src), Some(my_sink)) => {
                            let my_eid = self.graph.add_edge(*my_src, *my_sink);
                            self.emap.insert(my_eid, *eid);
                        }
                        _ => {}
                    }
                }
                Op::RemoveEdge(eid) => {
                    if let Some(my_eid) = self.emap.get_by_right(eid).copied() {
                        self.graph.remove_edge(&my_eid);
                        self.emap.remove_by_left(&my_eid);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
impl<G> From<&Ops> for MappedGraph<G>
where
    G: GrowableGraph + EdgeShrinkableGraph + VertexShrinkableGraph,
{
    fn from(ops: &Ops) -> Self {
        let mut res = Self::new();
        res.apply(ops);
        res
    }
}
