use crate::graph::*;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableUnGraph,
    visit::EdgeRef,
};

/// An undirected graph backed by `petgraph::stable_graph::StableUnGraph`.
///
/// Edge weights store the insertion orientation of the endpoints, so
/// `Edge` records never leak whatever orientation petgraph keeps
/// internally.
///
/// Unlike [TreeBackedGraph], removed ID's may be reused by later
/// insertions, and iteration order after removals is stable between
/// mutations but otherwise implementation-defined.
#[derive(Clone)]
pub struct AdjacentListGraph(StableUnGraph<(), (VertexId, VertexId), usize>);

impl GrowableGraph for AdjacentListGraph {
    fn new() -> Self {
        Self(StableUnGraph::<(), (VertexId, VertexId), usize>::with_capacity(0, 0))
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.0.add_node(());
        VertexId::new(vid.index())
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        let a = NodeIndex::new(source.to_raw());
        let b = NodeIndex::new(sink.to_raw());
        debug_assert!(self.0.contains_node(a));
        debug_assert!(self.0.contains_node(b));
        let eid = self.0.add_edge(a, b, (source, sink));
        EdgeId::new(eid.index())
    }
}

impl EdgeShrinkableGraph for AdjacentListGraph {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        let pg_eidx = EdgeIndex::new(edge.to_raw());
        self.0.remove_edge(pg_eidx).map(|(src, snk)| Edge {
            id: *edge,
            source: src,
            sink: snk,
        })
    }
}

impl VertexShrinkableGraph for AdjacentListGraph {
    fn remove_vertex(&mut self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        let a = NodeIndex::new(v.to_raw());
        if !self.0.contains_node(a) {
            return Box::new(std::iter::empty());
        }
        let res: Vec<Edge> = self
            .0
            .edges(a)
            .map(|e| {
                let (src, snk) = e.weight();
                Edge {
                    id: EdgeId::new(e.id().index()),
                    source: *src,
                    sink: *snk,
                }
            })
            .collect();
        self.0.remove_node(a);
        Box::new(res.into_iter())
    }
}

impl QueryableGraph for AdjacentListGraph {
    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let it = self.0.node_indices().map(|x| VertexId::new(x.index()));
        Box::new(it)
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        let nidx = NodeIndex::new(v.to_raw());
        self.0.contains_node(nidx)
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.0.edge_indices().map(|x| {
            let (source, sink) = self.0.edge_weight(x).unwrap();
            Edge {
                id: EdgeId::new(x.index()),
                source: *source,
                sink: *sink,
            }
        });
        Box::new(it)
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        let eidx = EdgeIndex::new(e.to_raw());
        self.0.edge_weight(eidx).is_some()
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        let eidx = EdgeIndex::new(e.to_raw());
        self.0.edge_weight(eidx).map(|(src, snk)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        })
    }

    fn incident_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let nidx = NodeIndex::new(v.to_raw());
        let it = self.0.edges(nidx).map(|x| {
            let (source, sink) = x.weight();
            Edge {
                id: EdgeId::new(x.id().index()),
                source: *source,
                sink: *sink,
            }
        });
        Box::new(it)
    }

    fn edges_connecting(
        &self,
        u: &VertexId,
        v: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        let src = NodeIndex::new(u.to_raw());
        let snk = NodeIndex::new(v.to_raw());
        let it = self.0.edges_connecting(src, snk).map(|x| {
            let (source, sink) = x.weight();
            Edge {
                id: EdgeId::new(x.id().index()),
                source: *source,
                sink: *sink,
            }
        });
        Box::new(it)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;

    #[test]
    fn connecting_queries_are_symmetric() {
        let mut g = AdjacentListGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        let e = g.add_edge(v0, v1);
        let forward: Vec<_> = g.edges_connecting(&v0, &v1).map(|e| e.id).collect();
        let backward: Vec<_> = g.edges_connecting(&v1, &v0).map(|e| e.id).collect();
        assert_eq!(forward, vec![e]);
        assert_eq!(backward, vec![e]);
        assert_eq!(g.edges_connecting(&v0, &v2).count(), 0);
    }

    #[test]
    fn self_loop_is_incident_once() {
        let mut g = AdjacentListGraph::new();
        let v = g.add_vertex();
        let e = g.add_edge(v, v);
        let incident: Vec<_> = g.incident_edges(&v).collect();
        assert_eq!(incident.len(), 1);
        assert_eq!(incident[0].id, e);
        assert_eq!(incident[0].other(&v), v);
    }
}
