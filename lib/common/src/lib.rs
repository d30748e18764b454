//! Pieces shared between the `shapedoc` document model and the `shapegraft` engine.

pub mod macros;

mod names;
pub use names::*;
