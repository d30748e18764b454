//! Conversion of geometry between primitives' local frames.
//!
//! Every primitive carries a local-to-parent transform, and all primitives of a shape share the
//! same parent space. Moving a point from frame `from` into frame `to` therefore means going up
//! through `from` and back down through the inverse of `to`:
//!
//! ```text
//! p' = to⁻¹ · from · p
//! ```
//!
//! The composition is not symmetric; `remap_point(p, a, b)` and `remap_point(p, b, a)` are
//! inverses of each other, not equal.

use nalgebra::{Matrix4, Point3, Vector3};
use shapedoc::Real;

use crate::Error;

/// Normals shorter than this are left as they are instead of being renormalized.
const NORMAL_EPSILON: Real = 1e-12;

/// A precomputed `to⁻¹ · from` composition.
///
/// Build one per pair of frames and reuse it for every vertex moved between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateRemap {
    composed: Matrix4<Real>,
}

impl CoordinateRemap {
    /// Compose the remap from frame `from` into frame `to`.
    ///
    /// # Errors
    ///
    /// * [Error::SingularTransform] if `to` has no (finite) inverse
    pub fn between(from: &Matrix4<Real>, to: &Matrix4<Real>) -> Result<Self, Error> {
        let to_inv = to
            .try_inverse()
            .filter(|m| m.iter().all(|c| c.is_finite()))
            .ok_or_else(|| Error::singular(to))?;
        Ok(Self {
            composed: to_inv * from,
        })
    }

    /// The composed `to⁻¹ · from` matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix4<Real> {
        &self.composed
    }

    /// Move a point into the destination frame.
    #[inline]
    pub fn point(&self, p: &Point3<Real>) -> Point3<Real> {
        self.composed.transform_point(p)
    }

    /// Move a direction into the destination frame, ignoring translation, and renormalize it.
    ///
    /// A zero-length result is returned unnormalized.
    #[inline]
    pub fn normal(&self, n: &Vector3<Real>) -> Vector3<Real> {
        let v = self.composed.transform_vector(n);
        v.try_normalize(NORMAL_EPSILON).unwrap_or(v)
    }
}

/// Move `p` from frame `from` into frame `to`.
pub fn remap_point(
    p: &Point3<Real>,
    from: &Matrix4<Real>,
    to: &Matrix4<Real>,
) -> Result<Point3<Real>, Error> {
    CoordinateRemap::between(from, to).map(|r| r.point(p))
}

/// Move normal `n` from frame `from` into frame `to`. See [CoordinateRemap::normal].
pub fn remap_normal(
    n: &Vector3<Real>,
    from: &Matrix4<Real>,
    to: &Matrix4<Real>,
) -> Result<Vector3<Real>, Error> {
    CoordinateRemap::between(from, to).map(|r| r.normal(n))
}
