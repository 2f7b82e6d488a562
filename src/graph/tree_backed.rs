use crate::graph::*;
use std::collections::{BTreeMap, BTreeSet};

/// A tree-backed undirected graph.
///
/// For any graph operations, this is probably not the fastest
/// implementation.  But it is balanced.
/// For all point queries, it is O(log n); for all iterations, it is
/// amortized O(1).
/// Besides, iterations are always in the order of vertex/edge insertion,
/// because ID's are issued monotonically and never reused.
#[derive(Clone)]
pub struct TreeBackedGraph {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    vertices: BTreeSet<VertexId>,
    edges: BTreeMap<EdgeId, (VertexId, VertexId)>,
    adjacent_edges: BTreeSet<(VertexId, VertexId, EdgeId)>,
}

impl std::fmt::Debug for TreeBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for TreeBackedGraph {
    fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            vertices: BTreeSet::new(),
            edges: BTreeMap::new(),
            adjacent_edges: BTreeSet::new(),
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = self.vid_factory.one_more();
        self.vertices.insert(vid);
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> EdgeId {
        debug_assert!(self.vertices.contains(&source));
        debug_assert!(self.vertices.contains(&sink));
        let eid = self.eid_factory.one_more();
        self.edges.insert(eid, (source, sink));
        self.adjacent_edges.insert((sink, source, eid));
        self.adjacent_edges.insert((source, sink, eid));
        eid
    }
}

impl EdgeShrinkableGraph for TreeBackedGraph {
    fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge> {
        match self.edges.remove(edge) {
            None => None,
            Some((src, snk)) => {
                self.adjacent_edges.remove(&(snk, src, *edge));
                self.adjacent_edges.remove(&(src, snk, *edge));
                Some(Edge {
                    id: *edge,
                    source: src,
                    sink: snk,
                })
            }
        }
    }
}

impl VertexShrinkableGraph for TreeBackedGraph {
    fn remove_vertex(&mut self, vertex: &VertexId) -> Box<dyn Iterator<Item = Edge> + 'static> {
        if !self.vertices.remove(vertex) {
            return Box::new(std::iter::empty());
        }
        let start = (*vertex, VertexId::MIN, EdgeId::MIN);
        let end = (vertex.next(), VertexId::MIN, EdgeId::MIN);
        let res: Vec<Edge> = self
            .adjacent_edges
            .range(start..end)
            .map(|(_, _, eid)| {
                let (src, snk) = self.edges.get(eid).unwrap();
                Edge {
                    id: *eid,
                    source: *src,
                    sink: *snk,
                }
            })
            .collect();
        for x in res.iter() {
            self.remove_edge(&x.id);
        }
        Box::new(res.into_iter())
    }
}

impl QueryableGraph for TreeBackedGraph {
    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains(v)
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.iter().map(|(e, (src, snk))| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        }))
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edges.contains_key(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.edges.get(e).map(|(src, snk)| Edge {
            id: *e,
            source: *src,
            sink: *snk,
        })
    }

    fn incident_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        let start = (*v, VertexId::MIN, EdgeId::MIN);
        let end = (v.next(), VertexId::MIN, EdgeId::MIN);
        let it = self.adjacent_edges.range(start..end).map(|(_, _, eid)| {
            // restores insertion orientation; the adjacency key anchors on `v`
            let (src, snk) = self.edges.get(eid).unwrap();
            Edge {
                id: *eid,
                source: *src,
                sink: *snk,
            }
        });
        Box::new(it)
    }

    fn edges_connecting<'a, 'b>(
        &'a self,
        u: &'b VertexId,
        v: &'b VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + 'a> {
        let start = (*u, *v, EdgeId::MIN);
        let end = (*u, *v, EdgeId::MAX);
        let it = self.adjacent_edges.range(start..=end).map(|(_, _, eid)| {
            let (src, snk) = self.edges.get(eid).unwrap();
            Edge {
                id: *eid,
                source: *src,
                sink: *snk,
            }
        });
        Box::new(it)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck_macros::*;

    #[quickcheck]
    fn tree_backed_gen(ops: Ops) {
        let oracle: MappedGraph<AdjacentListGraph> = (&ops).into();
        let trial: MappedGraph<TreeBackedGraph> = (&ops).into();
        assert_eq!(oracle, trial);
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut g = TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let v2 = g.add_vertex();
        let e0 = g.add_edge(v1, v2);
        let e1 = g.add_edge(v0, v1);
        let vs: Vec<_> = g.iter_vertices().collect();
        assert_eq!(vs, vec![v0, v1, v2]);
        let es: Vec<_> = g.iter_edges().map(|e| e.id).collect();
        assert_eq!(es, vec![e0, e1]);
    }

    #[test]
    fn self_loop_is_incident_once() {
        let mut g = TreeBackedGraph::new();
        let v = g.add_vertex();
        let e = g.add_edge(v, v);
        let incident: Vec<_> = g.incident_edges(&v).collect();
        assert_eq!(incident.len(), 1);
        assert_eq!(incident[0].id, e);
        assert_eq!(incident[0].other(&v), v);
        let connecting: Vec<_> = g.edges_connecting(&v, &v).map(|e| e.id).collect();
        assert_eq!(connecting, vec![e]);
    }

    #[test]
    fn incident_edges_report_insertion_orientation() {
        let mut g = TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let e = g.add_edge(v1, v0);
        for incident_to in [v0, v1] {
            let es: Vec<_> = g.incident_edges(&incident_to).collect();
            assert_eq!(
                es,
                vec![Edge {
                    id: e,
                    source: v1,
                    sink: v0
                }]
            );
        }
    }
}
