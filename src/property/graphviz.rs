//! Visualize property graphs in the graphviz format.

use super::PropertyGraph;
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

impl<V, E, G> PropertyGraph<V, E, G>
where
    G: QueryableGraph,
{
    /// Dumps the graph to a `std::io::Write` object as a graphviz
    /// undirected `graph`.
    ///
    /// `vertex_label` returns the graphviz node name and an optional
    /// attribute list for a vertex; `edge_label` returns an optional
    /// attribute list for an edge.
    pub fn dump_in_graphviz<W>(
        &self,
        out: &mut W,
        graph_name: &str,
        vertex_label: fn(&VertexId, &V) -> (String, Option<String>),
        edge_label: fn(&EdgeId, &E) -> Option<String>,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(out, "graph {} {{", graph_name)?;
        let mut names = HashMap::with_hasher(RandomState::new());
        for (vid, prop) in self.iter_vertices() {
            let (name, label) = vertex_label(&vid, prop);
            if let Some(label) = label {
                writeln!(out, "  {} [{}] ;", name, label)?;
            } else {
                writeln!(out, "  {} ;", name)?;
            }
            names.insert(vid, name);
        }
        for (eid, prop) in self.iter_edges() {
            let (source, sink) = self.endpoints(&eid).unwrap();
            let src = names.get(&source).unwrap();
            let snk = names.get(&sink).unwrap();
            if let Some(label) = edge_label(&eid, prop) {
                writeln!(out, "  {} -- {} [{}] ;", src, snk, label)?;
            } else {
                writeln!(out, "  {} -- {} ;", src, snk)?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}
