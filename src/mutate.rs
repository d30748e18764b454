//! In-place removal of triangles.
//!
//! Removal only ever touches a primitive's triangle list. Vertices stay in their sub-object's
//! table even when nothing refers to them any more, since other primitives may still use them.

use std::collections::HashMap;

use nalgebra::Point3;
use shapedoc::{Primitive, Real, SubObject, VertexIndex};
use shapegraft_common::NameSet;

use crate::select::{primitive_indices_by_state, primitive_vertices};

/// Remove every triangle of `primitive`, returning how many were removed.
pub fn remove_all_triangles(primitive: &mut Primitive) -> usize {
    primitive.clear_triangles()
}

/// Remove the triangles of `primitive` with a corner at `vertex`, keeping the rest in order.
/// Returns how many were removed.
pub fn remove_triangles_connected_to(primitive: &mut Primitive, vertex: VertexIndex) -> usize {
    primitive.retain_triangles(|t| !t.references(vertex))
}

/// For each vertex used by a primitive, the positions of the triangles using it.
#[derive(Debug, Clone, Default)]
pub struct TriangleAdjacency {
    by_vertex: HashMap<VertexIndex, Vec<usize>>,
}

impl TriangleAdjacency {
    pub fn build(primitive: &Primitive) -> Self {
        let mut by_vertex: HashMap<VertexIndex, Vec<usize>> = HashMap::new();
        for (t, tri) in primitive.triangles().iter().enumerate() {
            for v in tri.vertices {
                let entry = by_vertex.entry(v).or_default();
                // degenerate triangles may repeat a corner
                if entry.last() != Some(&t) {
                    entry.push(t);
                }
            }
        }
        Self { by_vertex }
    }

    /// Positions of the triangles with a corner at `vertex`, ascending.
    pub fn triangles_of(&self, vertex: VertexIndex) -> &[usize] {
        self.by_vertex
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct vertices used.
    pub fn vertex_count(&self) -> usize {
        self.by_vertex.len()
    }
}

/// Remove the triangles of `primitive` with a corner at any of `vertices`, in a single pass.
/// Returns how many were removed.
pub fn remove_triangles_connected_to_any(
    primitive: &mut Primitive,
    vertices: impl IntoIterator<Item = VertexIndex>,
) -> usize {
    let adjacency = TriangleAdjacency::build(primitive);
    let mut doomed = vec![false; primitive.triangle_count()];
    for v in vertices {
        for &t in adjacency.triangles_of(v) {
            doomed[t] = true;
        }
    }
    let mut t = 0;
    primitive.retain_triangles(|_| {
        let keep = !doomed[t];
        t += 1;
        keep
    })
}

/// Empty every primitive of `sub_object` whose state is in `names`. Returns the number of
/// triangles removed.
pub fn strip_states(sub_object: &mut SubObject, names: &NameSet) -> usize {
    let mut removed = 0;
    for i in primitive_indices_by_state(sub_object, names) {
        let prim = &mut sub_object.primitives_mut()[i];
        let count = remove_all_triangles(prim);
        tracing::trace!(state = prim.state_name(), count, "stripped primitive");
        removed += count;
    }
    removed
}

/// In every primitive of `sub_object`, remove the triangles touching a vertex of that primitive
/// whose point satisfies `predicate`. Returns the number of triangles removed.
pub fn strip_vertices_where(
    sub_object: &mut SubObject,
    mut predicate: impl FnMut(&Point3<Real>) -> bool,
) -> usize {
    let mut removed = 0;
    for i in 0..sub_object.primitives().len() {
        let marked: Vec<VertexIndex> = primitive_vertices(sub_object, &sub_object.primitives()[i])
            .into_iter()
            .filter(|(_, v)| predicate(&v.point))
            .map(|(index, _)| index)
            .collect();
        if marked.is_empty() {
            continue;
        }
        let prim = &mut sub_object.primitives_mut()[i];
        let count = remove_triangles_connected_to_any(prim, marked);
        tracing::trace!(state = prim.state_name(), count, "stripped marked triangles");
        removed += count;
    }
    removed
}
