//! Error Types
//!
//! This module defines the error types shared by every keyblend crate.
//!
//! # Overview
//!
//! The main error type [`KeyBlendError`] covers:
//! - Matrix decomposition failures (singular, non-affine, zero-scale axes)
//! - Animation curve validation and key indexing errors
//! - Temporary pivot setup errors
//! - Settings parsing and validation errors
//!
//! # Usage
//!
//! Fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, KeyBlendError>`.
//!
//! ```rust,ignore
//! use keyblend_core::errors::Result;
//! use keyblend_core::Transform;
//!
//! fn translation_of(matrix: &glam::Mat4) -> Result<glam::Vec3> {
//!     Ok(Transform::from_matrix(matrix)?.translation)
//! }
//! ```

use thiserror::Error;

use crate::channel::Axis;

/// The main error type for keyblend.
#[derive(Error, Debug)]
pub enum KeyBlendError {
    // ========================================================================
    // Matrix Errors
    // ========================================================================
    /// The 3x3 rotation/scale block cannot be inverted.
    #[error("Singular matrix (determinant {determinant})")]
    SingularMatrix {
        /// Determinant of the upper 3x3 block
        determinant: f32,
    },

    /// The bottom row is not `(0, 0, 0, 1)`.
    #[error("Matrix is not affine")]
    NonAffineMatrix,

    /// One basis vector has (near) zero length.
    #[error("Degenerate scale on {axis:?} axis")]
    DegenerateScale {
        /// The collapsed axis
        axis: Axis,
    },

    // ========================================================================
    // Animation Curve Errors
    // ========================================================================
    /// Key times and key values differ in length.
    #[error("Curve '{curve}' has {times} key times but {values} values")]
    CurveLengthMismatch {
        /// Curve name
        curve: String,
        /// Number of key times
        times: usize,
        /// Number of key values
        values: usize,
    },

    /// Key times are not strictly increasing.
    #[error("Curve '{curve}' has unsorted key times at index {index}")]
    UnsortedKeys {
        /// Curve name
        curve: String,
        /// First key that is not after its predecessor
        index: usize,
    },

    /// A key time is NaN or infinite.
    #[error("Curve '{curve}' has a non-finite key time at index {index}")]
    NonFiniteKeyTime {
        /// Curve name
        curve: String,
        /// Index of the offending key
        index: usize,
    },

    /// Key index out of bounds.
    #[error("Key index out of bounds: {curve} (index: {index})")]
    KeyIndexOutOfBounds {
        /// Curve name
        curve: String,
        /// The invalid index
        index: usize,
    },

    /// A target references a curve that is no longer in the curve set.
    #[error("Animation curve not found")]
    MissingCurve,

    // ========================================================================
    // Pivot Errors
    // ========================================================================
    /// A temporary pivot needs at least one target.
    #[error("Select one or more objects")]
    EmptySelection,

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("Settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Parsed settings are out of range.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Alias for `Result<T, KeyBlendError>`.
pub type Result<T> = std::result::Result<T, KeyBlendError>;
