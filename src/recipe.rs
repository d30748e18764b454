//! Fixed sequences of edits, applied to one shape at a time.
//!
//! Each conversion in a track package boils down to the same few edits with different names:
//! swap some textures, empty some material states, cut out geometry found by a content marker, and
//! perhaps graft in geometry from a donor shape. A [Recipe] spells such a conversion out as data.

use shapedoc::{MeshGraph, Real, SharedGraph, SubObject};
use shapegraft_common::{names_eq, NameSet};

use crate::{
    graft::{graft_states, GraftOptions, GraftStats},
    mutate::{strip_states, strip_vertices_where},
    select::VertexMarker,
    texture::replace_texture,
    Error,
};

/// Address of a sub-object: the distance of its detail level, then its index within that level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubObjectLocation {
    pub distance: Real,
    pub sub_object: usize,
}

impl SubObjectLocation {
    pub fn new(distance: Real, sub_object: usize) -> Self {
        Self {
            distance,
            sub_object,
        }
    }

    pub fn resolve<'g>(&self, graph: &'g MeshGraph) -> Result<&'g SubObject, Error> {
        let level = graph
            .detail_level_at(self.distance)
            .ok_or(Error::DetailLevelNotFound(self.distance))?;
        let len = level.sub_objects().len();
        level
            .sub_object(self.sub_object)
            .ok_or(Error::SubObjectNotFound {
                index: self.sub_object,
                len,
            })
    }

    pub fn resolve_mut<'g>(&self, graph: &'g mut MeshGraph) -> Result<&'g mut SubObject, Error> {
        let level = graph
            .detail_level_at_mut(self.distance)
            .ok_or(Error::DetailLevelNotFound(self.distance))?;
        let len = level.sub_objects().len();
        level
            .sub_object_mut(self.sub_object)
            .ok_or(Error::SubObjectNotFound {
                index: self.sub_object,
                len,
            })
    }
}

/// Graft donor primitives into the first target primitive with a given state.
#[derive(Debug, Clone, PartialEq)]
pub struct GraftEdit {
    pub target: SubObjectLocation,
    pub target_state: String,
    pub donor: SubObjectLocation,
    pub donor_states: NameSet,
    pub options: GraftOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Rename a texture-table entry.
    ReplaceTexture { old: String, new: String },
    /// Empty every primitive with a matching state, in every sub-object.
    StripStates { names: NameSet },
    /// In every primitive, cut the triangles touching a vertex hit by any marker.
    StripMarkedVertices { markers: Vec<VertexMarker> },
    Graft(GraftEdit),
}

/// What applying a [Recipe] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditReport {
    pub textures_replaced: usize,
    pub triangles_removed: usize,
    pub grafted: GraftStats,
}

/// An ordered list of [Edits](Edit).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    edits: Vec<Edit>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn then(mut self, edit: Edit) -> Self {
        self.edits.push(edit);
        self
    }

    pub fn replace_texture(self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.then(Edit::ReplaceTexture {
            old: old.into(),
            new: new.into(),
        })
    }

    pub fn strip_states(self, names: impl Into<NameSet>) -> Self {
        self.then(Edit::StripStates {
            names: names.into(),
        })
    }

    pub fn strip_marked_vertices(self, markers: impl IntoIterator<Item = VertexMarker>) -> Self {
        self.then(Edit::StripMarkedVertices {
            markers: markers.into_iter().collect(),
        })
    }

    pub fn graft(self, edit: GraftEdit) -> Self {
        self.then(Edit::Graft(edit))
    }

    /// Whether any edit needs a donor shape.
    pub fn needs_donor(&self) -> bool {
        self.edits.iter().any(|e| matches!(e, Edit::Graft(_)))
    }

    /// Apply every edit to `graph`, in order. The first failing edit stops the recipe; edits
    /// before it stay applied.
    #[tracing::instrument(level = "debug", skip_all, fields(edits = self.edits.len()))]
    pub fn apply(
        &self,
        graph: &mut MeshGraph,
        donor: Option<&SharedGraph>,
    ) -> Result<EditReport, Error> {
        let mut report = EditReport::default();
        for edit in &self.edits {
            match edit {
                Edit::ReplaceTexture { old, new } => {
                    report.textures_replaced += replace_texture(graph, old, new);
                }
                Edit::StripStates { names } => {
                    for sub in graph.sub_objects_mut() {
                        report.triangles_removed += strip_states(sub, names);
                    }
                }
                Edit::StripMarkedVertices { markers } => {
                    for sub in graph.sub_objects_mut() {
                        report.triangles_removed +=
                            strip_vertices_where(sub, |p| markers.iter().any(|m| m.matches(p)));
                    }
                }
                Edit::Graft(g) => {
                    let donor = donor.ok_or(Error::MissingDonor)?;
                    report.grafted += apply_graft(g, graph, donor)?;
                }
            }
        }
        tracing::debug!(?report, "applied recipe");
        Ok(report)
    }
}

fn apply_graft(
    edit: &GraftEdit,
    graph: &mut MeshGraph,
    donor: &SharedGraph,
) -> Result<GraftStats, Error> {
    let donor_sub = edit.donor.resolve(donor.graph())?;
    let target = edit.target.resolve_mut(graph)?;
    let target_prim = target
        .primitives()
        .iter()
        .position(|p| names_eq(p.state_name(), &edit.target_state))
        .ok_or_else(|| Error::PrimitiveNotFound(edit.target_state.clone()))?;
    graft_states(
        target,
        target_prim,
        donor_sub,
        &edit.donor_states,
        &edit.options,
    )
}
