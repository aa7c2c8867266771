//! Blend Settings
//!
//! Numeric tolerances used by [`TransformBlender`](crate::TransformBlender)
//! and the tween session.
//!
//! ```rust,ignore
//! use keyblend_core::{BlendSettings, TransformBlender};
//!
//! let settings = BlendSettings {
//!     slerp_threshold: 1e-5,
//!     ..Default::default()
//! };
//! let blender = TransformBlender::new(settings);
//! ```
//!
//! Settings can also be loaded from JSON; missing fields keep their defaults:
//!
//! ```rust,ignore
//! let settings = BlendSettings::from_json(r#"{ "key_time_epsilon": 0.01 }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{KeyBlendError, Result};

/// Default tolerance below which a determinant or axis length counts as zero.
pub const DEFAULT_DEGENERATE_EPSILON: f32 = 1e-6;

/// Default `sin(theta)` below which SLERP falls back to normalized lerp.
pub const DEFAULT_SLERP_THRESHOLD: f32 = 1e-6;

/// Default tolerance when matching a key to the current time.
pub const DEFAULT_KEY_TIME_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendSettings {
    /// Determinants and basis lengths below this are treated as singular.
    pub degenerate_epsilon: f32,
    /// Quaternions closer than this (by `sin` of their angle) are lerped.
    pub slerp_threshold: f32,
    /// Maximum distance between a key's time and the sampled time.
    pub key_time_epsilon: f32,
}

impl Default for BlendSettings {
    fn default() -> Self {
        Self {
            degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
            slerp_threshold: DEFAULT_SLERP_THRESHOLD,
            key_time_epsilon: DEFAULT_KEY_TIME_EPSILON,
        }
    }
}

impl BlendSettings {
    /// Parses settings from a JSON object and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Every tolerance must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("degenerate_epsilon", self.degenerate_epsilon),
            ("slerp_threshold", self.slerp_threshold),
            ("key_time_epsilon", self.key_time_epsilon),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(KeyBlendError::InvalidSettings(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}
