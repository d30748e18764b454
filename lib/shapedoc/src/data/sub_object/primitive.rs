use nalgebra::{Matrix4, Vector3};
use shapegraft_common::impl_index_ref;

use crate::{Real, VertexIndex};

/// Three corners within the owning [SubObject](crate::SubObject)'s vertex table, plus a face
/// normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [VertexIndex; 3],
    pub face_normal: Vector3<Real>,
}

impl Triangle {
    #[inline]
    pub fn new(vertices: [VertexIndex; 3], face_normal: Vector3<Real>) -> Self {
        Self {
            vertices,
            face_normal,
        }
    }

    /// Whether any corner of `self` is `vertex`.
    #[inline]
    pub fn references(&self, vertex: VertexIndex) -> bool {
        self.vertices.contains(&vertex)
    }
}

/// Triangles drawn with one material state, expressed in one local frame.
///
/// The frame is fixed when the primitive is created; nothing in this crate or downstream of it
/// can change it.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    state_name: String,
    transform: Matrix4<Real>,
    triangles: Vec<Triangle>,
}

impl_index_ref!(self: Primitive -> Triangle, i: usize; &self.triangles[i]);

impl Primitive {
    pub fn new(state_name: impl Into<String>, transform: Matrix4<Real>) -> Self {
        Self {
            state_name: state_name.into(),
            transform,
            triangles: Vec::new(),
        }
    }

    /// Name of the material state, as written in the container (case preserved).
    #[inline]
    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    /// Local-to-parent transform of this primitive's frame.
    #[inline]
    pub fn transform(&self) -> &Matrix4<Real> {
        &self.transform
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Append a triangle without checking its corners against a vertex table. Prefer
    /// [SubObject::insert_triangle](crate::SubObject::insert_triangle) when the indices come from
    /// outside the owning sub-object.
    #[inline]
    pub fn push_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Remove every triangle, returning how many there were.
    pub fn clear_triangles(&mut self) -> usize {
        let removed = self.triangles.len();
        self.triangles.clear();
        removed
    }

    /// Drop every triangle from position `len` on.
    pub fn truncate_triangles(&mut self, len: usize) {
        self.triangles.truncate(len);
    }

    /// Keep only triangles for which `keep` returns `true`, preserving their order. Returns the
    /// number removed.
    pub fn retain_triangles(&mut self, keep: impl FnMut(&Triangle) -> bool) -> usize {
        let before = self.triangles.len();
        self.triangles.retain(keep);
        before - self.triangles.len()
    }

    /// Distinct vertex indices referenced by this primitive's triangles, ascending.
    pub fn referenced_vertices(&self) -> Vec<VertexIndex> {
        let mut res: Vec<VertexIndex> = self
            .triangles
            .iter()
            .flat_map(|t| t.vertices)
            .collect();
        res.sort_unstable();
        res.dedup();
        res
    }
}
