use std::{ops::Deref, sync::Arc};

use crate::MeshGraph;

/// A [MeshGraph] shared between many readers and writable by none of them.
///
/// Donor shapes are loaded once and then grafted into every target of a batch. Wrapping the donor
/// in a `SharedGraph` makes that contract structural: only shared references can be obtained, and a
/// caller that needs to edit the donor must take its own copy with [SharedGraph::to_graph].
#[derive(Debug, Clone)]
pub struct SharedGraph(Arc<MeshGraph>);

impl SharedGraph {
    pub fn new(graph: MeshGraph) -> Self {
        Self(Arc::new(graph))
    }

    #[inline]
    pub fn graph(&self) -> &MeshGraph {
        &self.0
    }

    /// An owned, independently mutable copy of the shared graph.
    pub fn to_graph(&self) -> MeshGraph {
        MeshGraph::clone(&self.0)
    }
}

impl Deref for SharedGraph {
    type Target = MeshGraph;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<MeshGraph> for SharedGraph {
    fn from(graph: MeshGraph) -> Self {
        Self::new(graph)
    }
}
