//! # Keyblend Core
//!
//! Host-independent transform math for animator tools:
//!
//! - [`Transform`] decomposition and composition of affine matrices
//! - [`RotationOrder`] conversion between quaternions and per-axis Euler angles
//! - [`slerp`] along the shorter arc, with a lerp fallback for parallel inputs
//! - [`TransformBlender`] world-space blending and world-to-local conversion
//! - [`ChannelKind`] classification of animated channels
//! - [`TempPivot`] relative-matrix capture for a temporary manipulator pivot
//!
//! Matrices are glam [`Mat4`](glam::Mat4) values in column-vector convention.

pub mod blender;
pub mod channel;
pub mod errors;
pub mod pivot;
pub mod rotation;
pub mod settings;
pub mod transform;
pub mod values;

pub use blender::{BlendFactor, TransformBlender};
pub use channel::{Axis, ChannelKind, is_transform_plug};
pub use errors::{KeyBlendError, Result};
pub use pivot::{PivotTarget, TempPivot};
pub use rotation::RotationOrder;
pub use settings::BlendSettings;
pub use transform::{LocalTransform, Transform, check_basis, compose, decompose};
pub use values::{Interpolatable, slerp};
