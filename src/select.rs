//! Read-only queries over a [MeshGraph](shapedoc::MeshGraph).
//!
//! Nothing here mutates; every function takes shared references, so queries may run while other
//! readers hold the same graph. An empty result means nothing matched and is not an error.

use nalgebra::Point3;
use shapedoc::{DetailLevel, MeshGraph, Primitive, Real, SubObject, Vertex, VertexIndex};
use shapegraft_common::NameSet;

/// Types owning [Primitives](Primitive) in a fixed order.
pub trait PrimitiveSource {
    fn primitives_in_order(&self) -> Box<dyn Iterator<Item = &Primitive> + '_>;
}

impl PrimitiveSource for SubObject {
    fn primitives_in_order(&self) -> Box<dyn Iterator<Item = &Primitive> + '_> {
        Box::new(self.primitives().iter())
    }
}

impl PrimitiveSource for DetailLevel {
    fn primitives_in_order(&self) -> Box<dyn Iterator<Item = &Primitive> + '_> {
        Box::new(self.sub_objects().iter().flat_map(|s| s.primitives()))
    }
}

impl PrimitiveSource for MeshGraph {
    fn primitives_in_order(&self) -> Box<dyn Iterator<Item = &Primitive> + '_> {
        Box::new(self.sub_objects().flat_map(|s| s.primitives()))
    }
}

/// Primitives whose state name is in `names`, compared case-insensitively, in source order.
pub fn find_primitives_by_state<'src, S: PrimitiveSource + ?Sized>(
    source: &'src S,
    names: &NameSet,
) -> Vec<&'src Primitive> {
    source
        .primitives_in_order()
        .filter(|p| names.contains(p.state_name()))
        .collect()
}

/// Like [find_primitives_by_state], but yields positions within `sub_object` so that the
/// primitives can be addressed for editing afterwards.
pub fn primitive_indices_by_state(sub_object: &SubObject, names: &NameSet) -> Vec<usize> {
    sub_object
        .primitives()
        .iter()
        .enumerate()
        .filter(|(_, p)| names.contains(p.state_name()))
        .map(|(i, _)| i)
        .collect()
}

/// Vertices of `sub_object` whose point satisfies `predicate`, in table order.
pub fn find_vertices_by_predicate<'sub>(
    sub_object: &'sub SubObject,
    mut predicate: impl FnMut(&Point3<Real>) -> bool,
) -> Vec<(VertexIndex, &'sub Vertex)> {
    sub_object
        .indexed_vertices()
        .filter(|(_, v)| predicate(&v.point))
        .collect()
}

/// The vertices `primitive` draws from `sub_object`, in table order.
///
/// Corners referring past the end of the table are skipped.
pub fn primitive_vertices<'sub>(
    sub_object: &'sub SubObject,
    primitive: &Primitive,
) -> Vec<(VertexIndex, &'sub Vertex)> {
    primitive
        .referenced_vertices()
        .into_iter()
        .filter_map(|i| sub_object.vertex(i).map(|v| (i, v)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// An exact-coordinate marker identifying authored vertices.
///
/// Some assets can only be picked apart by coordinates their author happened to use: on DB1s
/// track, for instance, the side vertices of the LZB cable all sit at exactly `y = 0.133` and its
/// top vertices at `y = 0.145`. Those values describe one asset family, not geometry in general,
/// so callers name them explicitly with a marker instead of the engine assuming them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexMarker {
    /// The coordinate on `axis` equals `value` exactly.
    AxisEquals { axis: Axis, value: Real },
}

impl VertexMarker {
    #[inline]
    pub fn axis_equals(axis: Axis, value: Real) -> Self {
        Self::AxisEquals { axis, value }
    }

    #[allow(clippy::float_cmp)]
    #[inline]
    pub fn matches(&self, p: &Point3<Real>) -> bool {
        match *self {
            VertexMarker::AxisEquals { axis, value } => p[axis.index()] == value,
        }
    }
}
