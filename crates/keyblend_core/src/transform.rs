use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

use crate::channel::Axis;
use crate::errors::{KeyBlendError, Result};
use crate::rotation::RotationOrder;
use crate::settings::DEFAULT_DEGENERATE_EPSILON;

/// Translation / rotation / scale of a node.
///
/// Matrices follow glam's convention: column-major, column vectors,
/// translation in `w_axis`. Composition is `T * R * S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Builds a transform from per-axis channel values, as stored on keys.
    #[must_use]
    pub fn from_channels(translation: Vec3, euler: Vec3, order: RotationOrder, scale: Vec3) -> Self {
        Self::new(translation, order.to_quat(euler), scale)
    }

    /// Decomposes an affine matrix with the default tolerance.
    pub fn from_matrix(matrix: &Mat4) -> Result<Self> {
        decompose(matrix, DEFAULT_DEGENERATE_EPSILON)
    }

    #[inline]
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Rotation as per-axis Euler angles (radians).
    #[must_use]
    pub fn euler(&self, order: RotationOrder) -> Vec3 {
        order.to_euler(self.rotation)
    }

    #[must_use]
    pub fn to_local(&self, order: RotationOrder) -> LocalTransform {
        LocalTransform {
            translation: self.translation,
            rotation: self.euler(order),
            scale: self.scale,
            order,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Local transform in the per-axis form animation channels use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    pub translation: Vec3,
    /// Euler angles in radians, interpreted with `order`.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub order: RotationOrder,
}

/// Splits an affine matrix into translation, rotation and scale.
///
/// A mirrored basis (negative determinant) is folded into the X scale.
/// Shear is not representable and is lost.
pub fn decompose(matrix: &Mat4, epsilon: f32) -> Result<Transform> {
    if !matrix.row(3).abs_diff_eq(Vec4::W, epsilon) {
        return Err(KeyBlendError::NonAffineMatrix);
    }

    let basis = Mat3::from_mat4(*matrix);
    let (mut scale, determinant) = check_basis(&basis, epsilon)?;
    if determinant < 0.0 {
        scale.x = -scale.x;
    }

    let rotation = Quat::from_mat3(&Mat3::from_cols(
        basis.x_axis / scale.x,
        basis.y_axis / scale.y,
        basis.z_axis / scale.z,
    ))
    .normalize();

    Ok(Transform {
        translation: matrix.w_axis.truncate(),
        rotation,
        scale,
    })
}

/// Axis lengths and determinant of an invertible 3x3 basis.
///
/// Each axis must be at least `epsilon` long. Collinear axes are caught on
/// the determinant of the normalized basis, so a uniformly tiny scale stays
/// valid.
pub fn check_basis(basis: &Mat3, epsilon: f32) -> Result<(Vec3, f32)> {
    let lengths = Vec3::new(
        basis.x_axis.length(),
        basis.y_axis.length(),
        basis.z_axis.length(),
    );
    for axis in Axis::ALL {
        let length = axis.component(lengths);
        if !length.is_finite() || length < epsilon {
            return Err(KeyBlendError::DegenerateScale { axis });
        }
    }

    let determinant = basis.determinant();
    let normalized = determinant / lengths.element_product();
    if !normalized.is_finite() || normalized.abs() < epsilon {
        return Err(KeyBlendError::SingularMatrix { determinant });
    }

    Ok((lengths, determinant))
}

/// Inverse of [`decompose`].
#[inline]
#[must_use]
pub fn compose(transform: &Transform) -> Mat4 {
    transform.to_matrix()
}
