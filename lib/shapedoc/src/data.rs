//! # Structure
//!
//! * [MeshGraph]: one decoded shape
//!   * texture table: ordered image names, referenced by slot index elsewhere in the container
//!   * [DetailLevel]s: one per viewing-distance threshold
//!     * [SubObject]s: a vertex table shared by
//!       * [Primitive]s: triangles sharing one material state, in one local frame

mod sub_object;
pub use sub_object::*;

use shapegraft_common::impl_index;

/// Floating-point type used for all geometry.
pub type Real = f64;

/// A decoded shape: texture table plus level-of-detail hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshGraph {
    textures: Vec<String>,
    detail_levels: Vec<DetailLevel>,
}

impl_index!(self: MeshGraph -> DetailLevel, i: usize;
    &self.detail_levels[i];
    &mut self.detail_levels[i]);

impl MeshGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The texture table. Order is significant; duplicates are allowed.
    #[inline]
    pub fn textures(&self) -> &[String] {
        &self.textures
    }

    /// Mutable access to texture names. Entries may be renamed but not added, removed or
    /// reordered through this slice.
    #[inline]
    pub fn textures_mut(&mut self) -> &mut [String] {
        &mut self.textures
    }

    /// Append a texture name, returning its slot.
    pub fn push_texture(&mut self, name: impl Into<String>) -> usize {
        self.textures.push(name.into());
        self.textures.len() - 1
    }

    #[inline]
    pub fn detail_levels(&self) -> &[DetailLevel] {
        &self.detail_levels
    }

    #[inline]
    pub fn detail_levels_mut(&mut self) -> &mut [DetailLevel] {
        &mut self.detail_levels
    }

    #[inline]
    pub fn detail_level(&self, index: usize) -> Option<&DetailLevel> {
        self.detail_levels.get(index)
    }

    #[inline]
    pub fn detail_level_mut(&mut self, index: usize) -> Option<&mut DetailLevel> {
        self.detail_levels.get_mut(index)
    }

    /// The first detail level whose threshold is exactly `distance`.
    pub fn detail_level_at(&self, distance: Real) -> Option<&DetailLevel> {
        self.detail_levels.iter().find(|l| l.distance == distance)
    }

    /// The first detail level whose threshold is exactly `distance`.
    pub fn detail_level_at_mut(&mut self, distance: Real) -> Option<&mut DetailLevel> {
        self.detail_levels.iter_mut().find(|l| l.distance == distance)
    }

    /// Append a detail level, returning its index.
    pub fn push_detail_level(&mut self, level: DetailLevel) -> usize {
        self.detail_levels.push(level);
        self.detail_levels.len() - 1
    }

    /// Iterate over every sub-object in every detail level.
    pub fn sub_objects(&self) -> impl Iterator<Item = &SubObject> {
        self.detail_levels.iter().flat_map(|l| l.sub_objects.iter())
    }

    /// Iterate mutably over every sub-object in every detail level.
    pub fn sub_objects_mut(&mut self) -> impl Iterator<Item = &mut SubObject> {
        self.detail_levels
            .iter_mut()
            .flat_map(|l| l.sub_objects.iter_mut())
    }

    /// Total triangles across the whole graph.
    pub fn triangle_count(&self) -> usize {
        self.sub_objects().map(SubObject::triangle_count).sum()
    }

    /// Total vertices across the whole graph, orphans included.
    pub fn vertex_count(&self) -> usize {
        self.sub_objects().map(SubObject::vertex_count).sum()
    }
}

/// One level-of-detail tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailLevel {
    distance: Real,
    sub_objects: Vec<SubObject>,
}

impl_index!(self: DetailLevel -> SubObject, i: usize;
    &self.sub_objects[i];
    &mut self.sub_objects[i]);

impl DetailLevel {
    pub fn new(distance: Real) -> Self {
        Self {
            distance,
            sub_objects: Vec::new(),
        }
    }

    /// Viewing distance up to which this level is displayed.
    #[inline]
    pub fn distance(&self) -> Real {
        self.distance
    }

    #[inline]
    pub fn sub_objects(&self) -> &[SubObject] {
        &self.sub_objects
    }

    #[inline]
    pub fn sub_objects_mut(&mut self) -> &mut [SubObject] {
        &mut self.sub_objects
    }

    #[inline]
    pub fn sub_object(&self, index: usize) -> Option<&SubObject> {
        self.sub_objects.get(index)
    }

    #[inline]
    pub fn sub_object_mut(&mut self, index: usize) -> Option<&mut SubObject> {
        self.sub_objects.get_mut(index)
    }

    /// Append a sub-object, returning its index.
    pub fn push_sub_object(&mut self, sub_object: SubObject) -> usize {
        self.sub_objects.push(sub_object);
        self.sub_objects.len() - 1
    }
}
