//! In-memory document model for rail-simulator shape containers.
//!
//! A [MeshGraph] is what a shape codec produces from a container file and what it consumes to
//! write one back out. This crate knows nothing about the on-disk layout; see [codec] for the
//! seam where an external codec plugs in.

pub mod codec;
mod error;
pub use error::*;
mod view;
pub use view::*;

mod data;
pub use data::*;
