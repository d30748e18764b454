//! Copying geometry from one shape into another.
//!
//! A graft takes the triangles of a donor primitive, together with the vertices they use, and
//! appends them to a target primitive. Points and normals are moved from the donor primitive's
//! frame into the target primitive's frame on the way (see [remap](crate::remap)).
//!
//! Grafting is not idempotent: each call inserts fresh vertices and triangles, so
//! grafting the same donor twice doubles the copied geometry.

use std::{collections::HashMap, ops::AddAssign};

use nalgebra::Vector3;
use shapedoc::{Primitive, Real, SubObject, Triangle, Vertex, VertexIndex};
use shapegraft_common::NameSet;

use crate::{
    remap::CoordinateRemap,
    select::{primitive_indices_by_state, primitive_vertices},
    Error,
};

/// Settings applied to every vertex of a graft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraftOptions {
    /// Added to each point after it has been moved into the target frame.
    pub offset: Vector3<Real>,
}

impl Default for GraftOptions {
    fn default() -> Self {
        Self {
            offset: Vector3::zeros(),
        }
    }
}

impl GraftOptions {
    pub fn with_offset(offset: Vector3<Real>) -> Self {
        Self { offset }
    }
}

/// A primitive of a donor shape, together with the vertex table it draws from.
///
/// Holds only shared references; grafting never writes to the donor.
#[derive(Debug, Clone, Copy)]
pub struct DonorPrimitive<'donor> {
    sub_object: &'donor SubObject,
    primitive: &'donor Primitive,
}

impl<'donor> DonorPrimitive<'donor> {
    /// `primitive` should belong to `sub_object`; triangles referring to vertices missing from
    /// `sub_object` make the graft fail.
    pub fn new(sub_object: &'donor SubObject, primitive: &'donor Primitive) -> Self {
        Self {
            sub_object,
            primitive,
        }
    }

    /// The primitive at `index` within `sub_object`.
    pub fn at(sub_object: &'donor SubObject, index: usize) -> Option<Self> {
        sub_object
            .primitive(index)
            .map(|primitive| Self::new(sub_object, primitive))
    }

    #[inline]
    pub fn sub_object(&self) -> &'donor SubObject {
        self.sub_object
    }

    #[inline]
    pub fn primitive(&self) -> &'donor Primitive {
        self.primitive
    }
}

/// Amount of geometry inserted by a graft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraftStats {
    pub vertices: usize,
    pub triangles: usize,
}

impl AddAssign for GraftStats {
    fn add_assign(&mut self, rhs: Self) {
        self.vertices += rhs.vertices;
        self.triangles += rhs.triangles;
    }
}

/// Copy `donor` into the primitive at `target_primitive` within `target`.
///
/// Every vertex the donor primitive uses is appended to `target`'s vertex table exactly once, in
/// donor table order, and every donor triangle is appended to the target primitive in donor order,
/// rewired to the new vertices.
///
/// Nothing is written to `target` unless the whole donor primitive copies cleanly.
///
/// # Errors
///
/// * [Error::Document] if `target_primitive` is out of range, or the vertex table would overflow
/// * [Error::SingularTransform] if the target primitive's transform cannot be inverted
/// * [Error::UnresolvedVertexReference] if a donor triangle refers to a vertex outside the donor's
///   vertex table
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(donor = donor.primitive.state_name(), target = target_primitive)
)]
pub fn graft_primitive(
    target: &mut SubObject,
    target_primitive: usize,
    donor: DonorPrimitive<'_>,
    options: &GraftOptions,
) -> Result<GraftStats, Error> {
    let to = *target_primitive_of(target, target_primitive)?.transform();
    let remap = CoordinateRemap::between(donor.primitive.transform(), &to)?;

    // donor index -> index the copy will have in the target; lives for this call only
    let base = target.vertex_count();
    let mut lookup: HashMap<VertexIndex, VertexIndex> = HashMap::new();
    let mut vertices = Vec::new();
    for (donor_index, v) in primitive_vertices(donor.sub_object, donor.primitive) {
        if lookup.contains_key(&donor_index) {
            continue;
        }
        let index = VertexIndex::try_from(base + vertices.len())
            .map_err(|_| shapedoc::Error::VertexTableFull)?;
        vertices.push(Vertex {
            point: remap.point(&v.point) + options.offset,
            normal: remap.normal(&v.normal),
            uv: v.uv,
        });
        lookup.insert(donor_index, index);
        tracing::trace!(donor_index, index, "staged vertex");
    }

    let mut triangles = Vec::with_capacity(donor.primitive.triangle_count());
    for tri in donor.primitive.triangles() {
        let mut corners: [VertexIndex; 3] = [0; 3];
        for (corner, donor_index) in corners.iter_mut().zip(tri.vertices) {
            *corner = *lookup.get(&donor_index).ok_or_else(|| {
                Error::UnresolvedVertexReference {
                    primitive: donor.primitive.state_name().to_owned(),
                    donor_index,
                }
            })?;
        }
        triangles.push(Triangle::new(corners, remap.normal(&tri.face_normal)));
    }

    let stats = GraftStats {
        vertices: vertices.len(),
        triangles: triangles.len(),
    };
    target.extend_vertices(vertices)?;
    let prim = target_primitive_mut_of(target, target_primitive)?;
    for tri in triangles {
        prim.push_triangle(tri);
    }
    tracing::debug!(
        vertices = stats.vertices,
        triangles = stats.triangles,
        "grafted primitive"
    );
    Ok(stats)
}

/// Graft every primitive of `donor` whose state is in `names` into the primitive at
/// `target_primitive`, in donor order. Each donor primitive gets its own vertex lookup.
///
/// If any donor primitive fails, `target` is restored to its state before the call.
///
/// # Errors
///
/// * [Error::Document] if `target_primitive` is out of range, even when no donor primitive matches
/// * anything [graft_primitive] returns
pub fn graft_states(
    target: &mut SubObject,
    target_primitive: usize,
    donor: &SubObject,
    names: &NameSet,
    options: &GraftOptions,
) -> Result<GraftStats, Error> {
    let triangles_before = target_primitive_of(target, target_primitive)?.triangle_count();
    let vertices_before = target.vertex_count();

    let matches = primitive_indices_by_state(donor, names);
    if matches.is_empty() {
        tracing::warn!(?names, "no donor primitive matched; nothing grafted");
        return Ok(GraftStats::default());
    }

    let mut total = GraftStats::default();
    for i in matches {
        let donor_prim = DonorPrimitive::new(donor, &donor.primitives()[i]);
        match graft_primitive(target, target_primitive, donor_prim, options) {
            Ok(stats) => total += stats,
            Err(e) => {
                // earlier grafts only appended, so cutting back undoes them
                target_primitive_mut_of(target, target_primitive)?
                    .truncate_triangles(triangles_before);
                target.truncate_vertices(vertices_before);
                return Err(e);
            }
        }
    }
    Ok(total)
}

fn target_primitive_of(sub_object: &SubObject, index: usize) -> Result<&Primitive, Error> {
    let len = sub_object.primitives().len();
    sub_object
        .primitive(index)
        .ok_or(Error::Document(shapedoc::Error::PrimitiveOutOfRange { index, len }))
}

fn target_primitive_mut_of(
    sub_object: &mut SubObject,
    index: usize,
) -> Result<&mut Primitive, Error> {
    let len = sub_object.primitives().len();
    sub_object
        .primitive_mut(index)
        .ok_or(Error::Document(shapedoc::Error::PrimitiveOutOfRange { index, len }))
}
