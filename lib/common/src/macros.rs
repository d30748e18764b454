//! Declarative helpers for implementing common traits on document types.
//!
//! All macros are exported at the crate root.

mod ops;
