//! Seams for the external collaborators that turn container bytes into a [MeshGraph] and back.
//!
//! Implementations live outside this crate. The engine only relies on the contracts documented
//! here.

use crate::MeshGraph;

/// Converts between container bytes and a [MeshGraph].
///
/// `encode` must accept any graph `decode` can produce after editing, including sub-objects with
/// orphaned vertices and primitives without triangles.
pub trait ShapeCodec {
    type Error: std::error::Error + Send + Sync + 'static;

    fn decode(&self, bytes: &[u8]) -> Result<MeshGraph, Self::Error>;

    fn encode(&self, graph: &MeshGraph) -> Result<Vec<u8>, Self::Error>;
}

/// Wraps the container's compressed on-disk form.
///
/// Shape files are usually stored compressed and must be expanded before a [ShapeCodec] can read
/// them. Any error is fatal for the shape being processed.
pub trait Compressor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, Self::Error>;

    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

/// A [Compressor] for shapes stored uncompressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Uncompressed;

impl Compressor for Uncompressed {
    type Error = std::convert::Infallible;

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, Self::Error> {
        Ok(bytes.to_vec())
    }

    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, Self::Error> {
        Ok(bytes.to_vec())
    }
}
