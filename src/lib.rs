//! # Keyblend
//!
//! World-space key tweening and temporary pivot math for animation tools.
//!
//! This umbrella crate re-exports the workspace members:
//!
//! - [`math`]: transform decomposition, SLERP, [`TransformBlender`], [`TempPivot`]
//! - [`animation`]: animation curves and the two-step [`TweenCache`] session
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use keyblend::prelude::*;
//!
//! let blender = TransformBlender::default();
//! let prev = Mat4::IDENTITY;
//! let next = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
//!
//! // Slider at 0 sits halfway between the two keys
//! let world = blender.blend(&prev, &next, BlendFactor::MIDPOINT)?;
//! let local = blender.world_to_local(&world, &Mat4::IDENTITY, RotationOrder::Xyz)?;
//! assert_eq!(local.translation.x, 5.0);
//! ```

pub use keyblend_animation as animation;
pub use keyblend_core as math;

pub use keyblend_animation::{
    AnimCurve, AnimatedTarget, CurveKey, CurveSet, KeyBlendData, KeyUpdate, SampledChannel,
    TransformSampler, TweenCache,
};
pub use keyblend_core::{
    Axis, BlendFactor, BlendSettings, ChannelKind, Interpolatable, KeyBlendError, LocalTransform,
    PivotTarget, Result, RotationOrder, TempPivot, Transform, TransformBlender, compose, decompose,
    is_transform_plug, slerp,
};

pub mod prelude {
    pub use crate::animation::{AnimCurve, AnimatedTarget, CurveKey, CurveSet, TransformSampler, TweenCache};
    pub use crate::math::{
        BlendFactor, BlendSettings, ChannelKind, RotationOrder, TempPivot, Transform, TransformBlender,
    };
    pub use glam::{Mat4, Quat, Vec3};
}
