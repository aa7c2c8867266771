//! Tween Sampling
//!
//! The sampling step runs once when a tween starts. For every animated
//! channel with a key at the current time it records everything the tween
//! step needs, so dragging the slider never touches the scene again:
//!
//! - the indices of the current key and its neighbors
//! - the node's world matrix at the previous and next key times
//! - the inverse parent world matrix at the current key time
//! - the raw previous and next key values (for non-transform channels)
//!
//! The result is a plain [`TweenCache`] value owned by the caller.

use glam::Mat4;
use smallvec::SmallVec;

use keyblend_core::errors::{KeyBlendError, Result};
use keyblend_core::{ChannelKind, RotationOrder, TransformBlender};

use crate::curve::{CurveKey, CurveSet};

/// Read access to a scene's transforms at arbitrary times.
///
/// Implemented by whatever owns the scene graph; keyblend never walks the
/// hierarchy itself.
pub trait TransformSampler {
    type Node: Copy;

    /// World matrix of `node` with the scene evaluated at `time`.
    fn world_matrix_at(&self, node: Self::Node, time: f32) -> Mat4;

    /// World matrix of the parent of `node` at `time`, `None` for roots.
    fn parent_world_matrix_at(&self, node: Self::Node, time: f32) -> Option<Mat4>;
}

/// A node and the curves animating it.
#[derive(Debug, Clone)]
pub struct AnimatedTarget<N> {
    pub node: N,
    pub rotation_order: RotationOrder,
    pub curves: Vec<(CurveKey, ChannelKind)>,
}

impl<N> AnimatedTarget<N> {
    #[must_use]
    pub fn new(node: N, rotation_order: RotationOrder) -> Self {
        Self {
            node,
            rotation_order,
            curves: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurveKey, kind: ChannelKind) -> Self {
        self.curves.push((curve, kind));
        self
    }
}

/// Everything needed to re-blend one key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyBlendData {
    pub current_index: usize,
    pub prev_index: usize,
    pub next_index: usize,
    pub prev_world: Mat4,
    pub next_world: Mat4,
    pub parent_inverse: Mat4,
    pub prev_value: f32,
    pub next_value: f32,
}

#[derive(Debug, Clone)]
pub struct SampledChannel {
    pub curve: CurveKey,
    pub kind: ChannelKind,
    pub rotation_order: RotationOrder,
    pub keys: SmallVec<[KeyBlendData; 1]>,
}

/// Sampled state of a tween, produced by [`TweenCache::sample`].
#[derive(Debug, Clone, Default)]
pub struct TweenCache {
    time: f32,
    channels: Vec<SampledChannel>,
}

impl TweenCache {
    /// Samples every target curve that has a key at `time`.
    pub fn sample<S: TransformSampler>(
        sampler: &S,
        curves: &CurveSet,
        targets: &[AnimatedTarget<S::Node>],
        time: f32,
        blender: &TransformBlender,
    ) -> Result<Self> {
        let epsilon = blender.settings().key_time_epsilon;
        let mut channels = Vec::new();

        for target in targets {
            for &(curve_key, kind) in &target.curves {
                let curve = curves.get(curve_key).ok_or(KeyBlendError::MissingCurve)?;

                let Some(current_index) = curve.key_at(time, epsilon) else {
                    log::debug!("Curve '{}' has no key at {time}, skipping", curve.name());
                    continue;
                };
                let (prev_index, next_index) = curve.neighbors(current_index)?;

                let current_time = curve.time(current_index)?;
                let prev_time = curve.time(prev_index)?;
                let next_time = curve.time(next_index)?;

                let parent_inverse = sampler
                    .parent_world_matrix_at(target.node, current_time)
                    .map_or(Mat4::IDENTITY, |parent| blender.parent_inverse(&parent));

                let key = KeyBlendData {
                    current_index,
                    prev_index,
                    next_index,
                    prev_world: sampler.world_matrix_at(target.node, prev_time),
                    next_world: sampler.world_matrix_at(target.node, next_time),
                    parent_inverse,
                    prev_value: curve.value(prev_index)?,
                    next_value: curve.value(next_index)?,
                };

                channels.push(SampledChannel {
                    curve: curve_key,
                    kind,
                    rotation_order: target.rotation_order,
                    keys: smallvec::smallvec![key],
                });
            }
        }

        log::debug!("Tween cache sampled {} channel(s) at {time}", channels.len());

        Ok(Self { time, channels })
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn channels(&self) -> &[SampledChannel] {
        &self.channels
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn clear(&mut self) {
        self.channels.clear();
    }
}
