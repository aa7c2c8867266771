//! World-Space Transform Blending
//!
//! [`TransformBlender`] blends two sampled world matrices of a node and
//! converts the result back into the node's local space.
//!
//! # Pipeline
//!
//! ```text
//! prev_world ─┐ decompose          lerp translation
//!             ├──────────────────▶ slerp rotation   ──▶ compose ──▶ blended world
//! next_world ─┘                    lerp scale
//!
//! blended world ──▶ parent_inverse * world ──▶ decompose ──▶ LocalTransform (Euler)
//! ```
//!
//! The blender holds nothing but its [`BlendSettings`]; every call is
//! independent and it can be shared freely between threads.

use glam::{Mat3, Mat4, Vec3};

use crate::errors::Result;
use crate::rotation::RotationOrder;
use crate::settings::BlendSettings;
use crate::transform::{self, LocalTransform, Transform};
use crate::values::{Interpolatable, slerp};

/// Tween slider value: `-1` is the previous key, `1` the next key.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BlendFactor(f32);

impl BlendFactor {
    pub const PREVIOUS: Self = Self(-1.0);
    pub const MIDPOINT: Self = Self(0.0);
    pub const NEXT: Self = Self(1.0);

    #[inline]
    #[must_use]
    pub fn new(raw: f32) -> Self {
        Self(raw)
    }

    /// The factor whose [`weight`](Self::weight) is `t`.
    #[inline]
    #[must_use]
    pub fn from_weight(t: f32) -> Self {
        Self(t * 2.0 - 1.0)
    }

    #[inline]
    #[must_use]
    pub fn raw(self) -> f32 {
        self.0
    }

    /// Interpolation weight in `[0, 1]`. NaN weighs `0`.
    #[must_use]
    pub fn weight(self) -> f32 {
        let t = (self.0 + 1.0) * 0.5;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }
}

impl From<f32> for BlendFactor {
    fn from(raw: f32) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransformBlender {
    settings: BlendSettings,
}

impl TransformBlender {
    #[must_use]
    pub fn new(settings: BlendSettings) -> Self {
        Self { settings }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &BlendSettings {
        &self.settings
    }

    pub fn decompose(&self, matrix: &Mat4) -> Result<Transform> {
        transform::decompose(matrix, self.settings.degenerate_epsilon)
    }

    #[inline]
    #[must_use]
    pub fn compose(&self, transform: &Transform) -> Mat4 {
        transform::compose(transform)
    }

    /// Channel-wise blend of two decomposed transforms at weight `t`.
    #[must_use]
    pub fn blend_transforms(&self, prev: &Transform, next: &Transform, t: f32) -> Transform {
        Transform {
            translation: Vec3::interpolate_linear(prev.translation, next.translation, t),
            rotation: slerp(prev.rotation, next.rotation, t, self.settings.slerp_threshold),
            // Linear, not logarithmic.
            scale: Vec3::interpolate_linear(prev.scale, next.scale, t),
        }
    }

    /// Blends two world matrices. Fails if either cannot be decomposed.
    pub fn blend(&self, prev: &Mat4, next: &Mat4, factor: BlendFactor) -> Result<Mat4> {
        let t = factor.weight();
        let prev = self.decompose(prev)?;
        let next = self.decompose(next)?;
        Ok(self.compose(&self.blend_transforms(&prev, &next, t)))
    }

    /// Converts a world matrix into local channels under the given parent.
    pub fn world_to_local(
        &self,
        world: &Mat4,
        parent_inverse: &Mat4,
        order: RotationOrder,
    ) -> Result<LocalTransform> {
        let local = *parent_inverse * *world;
        Ok(self.decompose(&local)?.to_local(order))
    }

    /// Inverse of a parent's world matrix, or identity when it has none.
    #[must_use]
    pub fn parent_inverse(&self, parent_world: &Mat4) -> Mat4 {
        let basis = Mat3::from_mat4(*parent_world);
        match transform::check_basis(&basis, self.settings.degenerate_epsilon) {
            Ok(_) => parent_world.inverse(),
            Err(err) => {
                log::warn!("Parent matrix is not invertible ({err}), using identity");
                Mat4::IDENTITY
            }
        }
    }

    /// Plain lerp for channels that are not part of a transform.
    #[inline]
    #[must_use]
    pub fn linear_blend(&self, prev: f32, next: f32, t: f32) -> f32 {
        f32::interpolate_linear(prev, next, t)
    }
}
