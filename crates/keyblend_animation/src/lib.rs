//! # Keyblend Animation
//!
//! World-space tweening of animation keys.
//!
//! A tween runs in two steps:
//!
//! 1. [`TweenCache::sample`] reads the scene through a [`TransformSampler`]
//!    and records, for each curve with a key at the current time, the node's
//!    world matrices at the neighboring keys.
//! 2. [`TweenCache::tween`] / [`TweenCache::apply`] blend those matrices for
//!    a slider value and write the local result back into the curves.
//!
//! ```rust,ignore
//! let cache = TweenCache::sample(&scene, &curves, &targets, now, &blender)?;
//! // on every slider drag:
//! cache.apply(&blender, slider, &mut curves)?;
//! ```

pub mod curve;
pub mod sampling;
pub mod tween;

pub use curve::{AnimCurve, CurveKey, CurveSet};
pub use sampling::{AnimatedTarget, KeyBlendData, SampledChannel, TransformSampler, TweenCache};
pub use tween::KeyUpdate;
