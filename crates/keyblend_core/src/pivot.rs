//! Temporary Pivot
//!
//! A temporary pivot is a throwaway transform the animator moves instead of
//! the selected objects. Each object's world matrix is captured relative to
//! the pivot; whenever the pivot moves, the objects follow:
//!
//! ```text
//! relative  = pivot_world⁻¹ * object_world      (capture)
//! new_world = pivot_world   * relative          (follow)
//! ```
//!
//! The pivot starts on the first selected object (the leader) and snaps back
//! onto it whenever time changes or curves are edited.

use glam::Mat4;

use crate::blender::TransformBlender;
use crate::channel::is_transform_plug;
use crate::errors::{KeyBlendError, Result};

#[derive(Debug, Clone)]
pub struct PivotTarget<K> {
    pub id: K,
    pub relative: Mat4,
}

#[derive(Debug, Clone)]
pub struct TempPivot<K> {
    pivot_world: Mat4,
    targets: Vec<PivotTarget<K>>,
    blender: TransformBlender,
}

impl<K: Clone> TempPivot<K> {
    /// Places a pivot at `pivot_world` and captures every target against it.
    pub fn new(pivot_world: Mat4, targets: impl IntoIterator<Item = (K, Mat4)>) -> Result<Self> {
        Self::with_blender(TransformBlender::default(), pivot_world, targets)
    }

    pub fn with_blender(
        blender: TransformBlender,
        pivot_world: Mat4,
        targets: impl IntoIterator<Item = (K, Mat4)>,
    ) -> Result<Self> {
        let pivot_inverse = blender.parent_inverse(&pivot_world);
        let targets: Vec<_> = targets
            .into_iter()
            .map(|(id, world)| PivotTarget {
                id,
                relative: pivot_inverse * world,
            })
            .collect();

        if targets.is_empty() {
            return Err(KeyBlendError::EmptySelection);
        }

        log::debug!("Temp pivot created for {} target(s)", targets.len());

        Ok(Self {
            pivot_world,
            targets,
            blender,
        })
    }

    /// Places a pivot on the first target's world matrix.
    pub fn at_leader(targets: impl IntoIterator<Item = (K, Mat4)>) -> Result<Self> {
        let targets: Vec<_> = targets.into_iter().collect();
        let pivot_world = targets
            .first()
            .map(|(_, world)| *world)
            .ok_or(KeyBlendError::EmptySelection)?;
        Self::new(pivot_world, targets)
    }

    #[inline]
    #[must_use]
    pub fn pivot_world(&self) -> Mat4 {
        self.pivot_world
    }

    #[inline]
    #[must_use]
    pub fn targets(&self) -> &[PivotTarget<K>] {
        &self.targets
    }

    /// The target the pivot snaps to.
    #[must_use]
    pub fn leader(&self) -> &K {
        // Construction rejects empty selections.
        &self.targets[0].id
    }

    /// Moves the pivot without touching the targets' relative matrices.
    pub fn set_pivot_world(&mut self, pivot_world: Mat4) {
        self.pivot_world = pivot_world;
    }

    /// World matrices the targets take under the current pivot.
    #[must_use]
    pub fn follow(&self) -> Vec<(K, Mat4)> {
        self.targets
            .iter()
            .map(|target| (target.id.clone(), self.pivot_world * target.relative))
            .collect()
    }

    /// Recomputes relative matrices against the current pivot, e.g. after
    /// the pivot itself was reset while the targets stayed in place.
    pub fn recapture(&mut self, mut world_of: impl FnMut(&K) -> Mat4) {
        let pivot_inverse = self.blender.parent_inverse(&self.pivot_world);
        for target in &mut self.targets {
            target.relative = pivot_inverse * world_of(&target.id);
        }
    }

    /// Snaps the pivot onto the leader's world matrix and recaptures.
    pub fn snap_to_leader(&mut self, mut world_of: impl FnMut(&K) -> Mat4) {
        self.pivot_world = world_of(self.leader());
        self.recapture(world_of);
    }

    /// Only edits to transform attributes move the targets.
    #[must_use]
    pub fn should_follow(attribute: &str) -> bool {
        is_transform_plug(attribute)
    }
}

impl<K: PartialEq> TempPivot<K> {
    /// The pivot stays active only while it alone is selected.
    #[must_use]
    pub fn is_pivot_selection(selection: &[K], pivot: &K) -> bool {
        matches!(selection, [only] if only == pivot)
    }
}
