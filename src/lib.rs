//! Mesh editing engine for batch-converting rail-simulator track shapes.
//!
//! Shapes are decoded into a [MeshGraph](shapedoc::MeshGraph) by an external codec, edited here,
//! and handed back to the codec. The engine can:
//!
//! * find primitives by material state and vertices by their coordinates ([select])
//! * strip triangles from primitives ([mutate])
//! * graft geometry from a donor shape into a target shape, across local frames ([graft], [remap])
//! * rename textures ([texture])
//!
//! [recipe] strings these together into a fixed conversion, and [batch] runs conversions over many
//! shapes under an explicit failure policy.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod batch;
mod error;
pub mod graft;
pub mod mutate;
pub mod recipe;
pub mod remap;
pub mod select;
pub mod texture;

pub use error::*;

pub use shapedoc;
pub use shapegraft_common::{names_eq, NameSet};

pub use batch::{Batch, BatchReport, FailurePolicy, ShapePipeline};
pub use graft::{graft_primitive, graft_states, DonorPrimitive, GraftOptions, GraftStats};
pub use mutate::{remove_all_triangles, remove_triangles_connected_to};
pub use recipe::{Edit, EditReport, GraftEdit, Recipe, SubObjectLocation};
pub use remap::{remap_normal, remap_point, CoordinateRemap};
pub use select::{find_primitives_by_state, find_vertices_by_predicate, Axis, VertexMarker};
pub use texture::replace_texture;
