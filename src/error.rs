//! Error types of the property layer.
//!
//! Low-level graphs treat unknown ID's as caller bugs and only
//! `debug_assert!` on them; [PropertyGraph](crate::property::PropertyGraph)
//! is the checked surface and reports every stale or foreign ID through
//! [Error] instead of answering with empty results.

use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// What can go wrong when querying or growing a property graph.
///
/// "Removed" and "never issued" are not distinguished; both surface as the
/// same variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("vertex {0:?} is not in the graph")]
    InvalidVertex(VertexId),

    #[error("edge {0:?} is not in the graph")]
    InvalidEdge(EdgeId),
}
