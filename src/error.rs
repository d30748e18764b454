use nalgebra::Matrix4;
use shapedoc::{Real, VertexIndex};

type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while editing a shape.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("destination transform is not invertible: {transform:?}")]
    SingularTransform { transform: Box<Matrix4<Real>> },
    #[error("donor triangle in primitive {primitive:?} refers to vertex {donor_index}, which was never inserted")]
    UnresolvedVertexReference {
        primitive: String,
        donor_index: VertexIndex,
    },
    #[error("no detail level with distance {0}")]
    DetailLevelNotFound(Real),
    #[error("sub-object index out of range: 0..{len} ∌ {index}")]
    SubObjectNotFound { index: usize, len: usize },
    #[error("no primitive matches {0:?}")]
    PrimitiveNotFound(String),
    #[error("edit requires a donor shape, but none was supplied")]
    MissingDonor,
    #[error(transparent)]
    Document(#[from] shapedoc::Error),
    #[error("shape codec failed")]
    Codec(#[source] BoxedError),
    #[error("shape compressor failed")]
    Compressor(#[source] BoxedError),
    #[error("batch aborted while processing {shape}")]
    BatchAborted {
        shape: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn singular(transform: &Matrix4<Real>) -> Self {
        Self::SingularTransform {
            transform: Box::new(*transform),
        }
    }
}
