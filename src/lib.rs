//! An undirected property graph.
//!
//! Vertices and edges are identified by lightweight, copyable ID's and
//! carry caller-defined data.  The crate is split into two layers:
//! [graph] stores pure topology over ID's (with interchangeable
//! implementations), and [property] wraps a topology with one property per
//! vertex and per edge plus a checked query surface.
//!
//! ```rust
//! use propgraph::property::PropertyGraph;
//!
//! #[derive(Debug, Clone)]
//! struct Site {
//!     name: &'static str,
//!     value: i32,
//! }
//!
//! let mut g = PropertyGraph::<Site, f32>::new();
//! let v0 = g.add_vertex(Site { name: "v0", value: 0 });
//! let v1 = g.add_vertex(Site { name: "v1", value: 1 });
//! let v2 = g.add_vertex(Site { name: "v2", value: 2 });
//! let (e01, _) = g.add_edge(v0, v1, 10.0).unwrap();
//! let _ = g.add_edge(v1, v2, 20.0).unwrap();
//!
//! assert_eq!(g.vertex_size(), 3);
//! assert_eq!(g.edge_size(), 2);
//! assert_eq!(g.endpoints(&e01).unwrap(), (v0, v1));
//! assert!(g.find_edge(&v2, &v1).unwrap().is_some());
//! assert!(g.find_edge(&v0, &v2).unwrap().is_none());
//! for (vid, site) in g.iter_vertices() {
//!     println!("{:?} carries {:?}", vid, site);
//! }
//! ```
//!
//! The graph is a multigraph: parallel edges between the same endpoint
//! pair and self-loops are allowed.
//! [PropertyGraph::ensure_edge](property::PropertyGraph::ensure_edge) is
//! the simple-graph insertion for callers that want at most one edge per
//! pair.

pub mod error;
pub mod graph;
pub mod property;
