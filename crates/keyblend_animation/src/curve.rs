use keyblend_core::errors::{KeyBlendError, Result};
use keyblend_core::values::Interpolatable;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct CurveKey;
}

/// Curves owned by the caller, addressed by [`CurveKey`].
pub type CurveSet = SlotMap<CurveKey, AnimCurve>;

/// A scalar animation curve: sorted key times with one value per key.
#[derive(Debug, Clone)]
pub struct AnimCurve {
    name: String,
    times: Vec<f32>,
    values: Vec<f32>,
}

impl AnimCurve {
    pub fn new(name: impl Into<String>, times: Vec<f32>, values: Vec<f32>) -> Result<Self> {
        let name = name.into();

        if times.len() != values.len() {
            return Err(KeyBlendError::CurveLengthMismatch {
                curve: name,
                times: times.len(),
                values: values.len(),
            });
        }

        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(KeyBlendError::NonFiniteKeyTime { curve: name, index });
        }

        if let Some(index) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(KeyBlendError::UnsortedKeys {
                curve: name,
                index: index + 1,
            });
        }

        Ok(Self {
            name,
            times,
            values,
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn time(&self, index: usize) -> Result<f32> {
        self.times
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn value(&self, index: usize) -> Result<f32> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn set_value(&mut self, index: usize, value: f32) -> Result<()> {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(self.out_of_bounds(index)),
        }
    }

    /// Index of the key sitting at `time`, if any.
    #[must_use]
    pub fn key_at(&self, time: f32, epsilon: f32) -> Option<usize> {
        // partition_point finds the first key after `time - epsilon`
        let idx = self.times.partition_point(|&t| t < time - epsilon);
        self.times
            .get(idx)
            .filter(|&&t| (t - time).abs() <= epsilon)
            .map(|_| idx)
    }

    /// Previous and next key indices around `index`, clamped to the ends.
    ///
    /// A first or last key is its own neighbor on the open side.
    pub fn neighbors(&self, index: usize) -> Result<(usize, usize)> {
        if index >= self.len() {
            return Err(self.out_of_bounds(index));
        }
        let prev = index.saturating_sub(1);
        let next = (index + 1).min(self.len() - 1);
        Ok((prev, next))
    }

    /// Linear sample, clamped to the first and last key.
    /// Returns `None` for an empty curve.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<f32> {
        let len = self.times.len();
        if len == 0 {
            return None;
        }

        // First key strictly after `time`
        let next_idx = self.times.partition_point(|&t| t <= time);
        if next_idx == 0 {
            return Some(self.values[0]);
        }
        if next_idx >= len {
            return Some(self.values[len - 1]);
        }

        let index = next_idx - 1;
        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        // Keys are strictly increasing, but guard against subnormal gaps
        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        Some(f32::interpolate_linear(
            self.values[index],
            self.values[next_idx],
            t,
        ))
    }

    fn out_of_bounds(&self, index: usize) -> KeyBlendError {
        KeyBlendError::KeyIndexOutOfBounds {
            curve: self.name.clone(),
            index,
        }
    }
}
