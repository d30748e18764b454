use crate::VertexIndex;

/// Errors related to [MeshGraphs](crate::MeshGraph).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex table is full; cannot index more than {} vertices", VertexIndex::MAX as u64 + 1)]
    VertexTableFull,
    #[error("vertex index out of range: 0..{len} ∌ {index}")]
    VertexOutOfRange { index: VertexIndex, len: usize },
    #[error("primitive index out of range: 0..{len} ∌ {index}")]
    PrimitiveOutOfRange { index: usize, len: usize },
}
