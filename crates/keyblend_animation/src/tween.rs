use glam::Mat4;

use keyblend_core::errors::{KeyBlendError, Result};
use keyblend_core::{BlendFactor, ChannelKind, RotationOrder, Transform, TransformBlender};

use crate::curve::{CurveKey, CurveSet};
use crate::sampling::{KeyBlendData, TweenCache};

/// New value for one key of one curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyUpdate {
    pub curve: CurveKey,
    pub index: usize,
    pub value: f32,
}

impl TweenCache {
    /// Computes the tweened value of every sampled key.
    #[must_use]
    pub fn tween(&self, blender: &TransformBlender, factor: BlendFactor) -> Vec<KeyUpdate> {
        let t = factor.weight();

        self.channels()
            .iter()
            .flat_map(|channel| {
                channel.keys.iter().map(move |key| KeyUpdate {
                    curve: channel.curve,
                    index: key.current_index,
                    value: blend_key(blender, key, channel.kind, channel.rotation_order, t),
                })
            })
            .collect()
    }

    /// Tweens and writes the results into `curves`. Returns the number of
    /// keys written.
    pub fn apply(
        &self,
        blender: &TransformBlender,
        factor: BlendFactor,
        curves: &mut CurveSet,
    ) -> Result<usize> {
        let updates = self.tween(blender, factor);
        for update in &updates {
            curves
                .get_mut(update.curve)
                .ok_or(KeyBlendError::MissingCurve)?
                .set_value(update.index, update.value)?;
        }
        Ok(updates.len())
    }
}

fn blend_key(
    blender: &TransformBlender,
    key: &KeyBlendData,
    kind: ChannelKind,
    order: RotationOrder,
    t: f32,
) -> f32 {
    if !kind.is_transform() {
        return blender.linear_blend(key.prev_value, key.next_value, t);
    }

    let prev = decompose_or_identity(blender, &key.prev_world);
    let next = decompose_or_identity(blender, &key.next_world);
    let world = blender.compose(&blender.blend_transforms(&prev, &next, t));

    let local = match blender.world_to_local(&world, &key.parent_inverse, order) {
        Ok(local) => local,
        Err(err) => {
            log::warn!("Blended local matrix is degenerate ({err}), using identity");
            Transform::IDENTITY.to_local(order)
        }
    };

    kind.pick(&local).unwrap_or_else(|| kind.rest_value())
}

fn decompose_or_identity(blender: &TransformBlender, matrix: &Mat4) -> Transform {
    blender.decompose(matrix).unwrap_or_else(|err| {
        log::warn!("Sampled world matrix is degenerate ({err}), using identity");
        Transform::IDENTITY
    })
}
