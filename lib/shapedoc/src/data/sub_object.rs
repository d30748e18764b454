mod primitive;
pub use primitive::*;

use nalgebra::{Point2, Point3, Vector3};
use shapegraft_common::impl_index;

use crate::{Error, Real};

/// Index of a [Vertex] within its [SubObject]. Stable for the lifetime of the sub-object.
pub type VertexIndex = u32;

/// A point in a shape, with its shading attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub point: Point3<Real>,
    pub normal: Vector3<Real>,
    pub uv: Point2<Real>,
}

impl Vertex {
    #[inline]
    pub fn new(point: Point3<Real>, normal: Vector3<Real>, uv: Point2<Real>) -> Self {
        Self { point, normal, uv }
    }
}

/// A vertex table and the primitives drawing from it.
///
/// Vertices are appended and never removed, apart from undoing recent appends with
/// [truncate_vertices](Self::truncate_vertices), so a [VertexIndex] stays valid for as long as the
/// sub-object lives. Vertices no triangle refers to are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubObject {
    vertices: Vec<Vertex>,
    primitives: Vec<Primitive>,
}

impl_index!(self: SubObject -> Vertex, i: VertexIndex;
    &self.vertices[i as usize];
    &mut self.vertices[i as usize]);

impl SubObject {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertex(&self, index: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(index as usize)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate over vertices along with their indices, in table order.
    pub fn indexed_vertices(&self) -> impl Iterator<Item = (VertexIndex, &Vertex)> {
        // push_vertex guarantees every position fits in a VertexIndex
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (i as VertexIndex, v))
    }

    /// Append a vertex, returning its index.
    pub fn push_vertex(&mut self, vertex: Vertex) -> Result<VertexIndex, Error> {
        let index =
            VertexIndex::try_from(self.vertices.len()).map_err(|_| Error::VertexTableFull)?;
        self.vertices.push(vertex);
        Ok(index)
    }

    /// Append several vertices, returning the index of the first.
    ///
    /// Either all vertices are appended or, if they would not all be indexable, none are.
    pub fn extend_vertices(&mut self, vertices: Vec<Vertex>) -> Result<VertexIndex, Error> {
        let first =
            VertexIndex::try_from(self.vertices.len()).map_err(|_| Error::VertexTableFull)?;
        let end = self.vertices.len() + vertices.len();
        if end > 0 && VertexIndex::try_from(end - 1).is_err() {
            return Err(Error::VertexTableFull);
        }
        self.vertices.extend(vertices);
        Ok(first)
    }

    /// Drop every vertex from position `len` on, undoing appends made since the table had that
    /// length. Indices below `len` are unaffected.
    ///
    /// The caller must make sure no triangle still refers to a dropped vertex.
    pub fn truncate_vertices(&mut self, len: usize) {
        self.vertices.truncate(len);
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Mutable access to primitives. Primitives may be edited but not added, removed or
    /// reordered through this slice.
    #[inline]
    pub fn primitives_mut(&mut self) -> &mut [Primitive] {
        &mut self.primitives
    }

    #[inline]
    pub fn primitive(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    #[inline]
    pub fn primitive_mut(&mut self, index: usize) -> Option<&mut Primitive> {
        self.primitives.get_mut(index)
    }

    /// Append a primitive, returning its index.
    pub fn push_primitive(&mut self, primitive: Primitive) -> usize {
        self.primitives.push(primitive);
        self.primitives.len() - 1
    }

    /// Append a triangle to the primitive at `primitive`, checking that every corner refers to a
    /// vertex in this sub-object.
    pub fn insert_triangle(
        &mut self,
        primitive: usize,
        vertices: [VertexIndex; 3],
        face_normal: Vector3<Real>,
    ) -> Result<(), Error> {
        let len = self.vertices.len();
        if let Some(&index) = vertices.iter().find(|&&v| v as usize >= len) {
            return Err(Error::VertexOutOfRange { index, len });
        }
        let prim_count = self.primitives.len();
        let prim = self
            .primitives
            .get_mut(primitive)
            .ok_or(Error::PrimitiveOutOfRange {
                index: primitive,
                len: prim_count,
            })?;
        prim.push_triangle(Triangle::new(vertices, face_normal));
        Ok(())
    }

    /// Total triangles across all primitives.
    pub fn triangle_count(&self) -> usize {
        self.primitives.iter().map(Primitive::triangle_count).sum()
    }
}
