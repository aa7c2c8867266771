use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Euler rotation order, named by the order the axes are applied.
///
/// `Xyz` rotates about X first, then Y, then Z, so the combined rotation is
/// `Rz * Ry * Rx` with column vectors. glam names its intrinsic orders the
/// other way round, hence the reversed mapping in [`RotationOrder::euler_rot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationOrder {
    #[default]
    Xyz,
    Yzx,
    Zxy,
    Xzy,
    Yxz,
    Zyx,
}

impl RotationOrder {
    pub const ALL: [RotationOrder; 6] = [
        RotationOrder::Xyz,
        RotationOrder::Yzx,
        RotationOrder::Zxy,
        RotationOrder::Xzy,
        RotationOrder::Yxz,
        RotationOrder::Zyx,
    ];

    /// Maps a `rotateOrder` attribute value (0..=5).
    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    #[must_use]
    pub fn euler_rot(self) -> EulerRot {
        match self {
            RotationOrder::Xyz => EulerRot::ZYX,
            RotationOrder::Yzx => EulerRot::XZY,
            RotationOrder::Zxy => EulerRot::YXZ,
            RotationOrder::Xzy => EulerRot::YZX,
            RotationOrder::Yxz => EulerRot::ZXY,
            RotationOrder::Zyx => EulerRot::XYZ,
        }
    }

    /// Per-axis angles (radians) to a quaternion.
    #[must_use]
    pub fn to_quat(self, angles: Vec3) -> Quat {
        let Vec3 { x, y, z } = angles;
        let rot = self.euler_rot();
        match self {
            RotationOrder::Xyz => Quat::from_euler(rot, z, y, x),
            RotationOrder::Yzx => Quat::from_euler(rot, x, z, y),
            RotationOrder::Zxy => Quat::from_euler(rot, y, x, z),
            RotationOrder::Xzy => Quat::from_euler(rot, y, z, x),
            RotationOrder::Yxz => Quat::from_euler(rot, z, x, y),
            RotationOrder::Zyx => Quat::from_euler(rot, x, y, z),
        }
    }

    /// Quaternion to per-axis angles (radians), `(x, y, z)`.
    #[must_use]
    pub fn to_euler(self, rotation: Quat) -> Vec3 {
        let (a, b, c) = rotation.to_euler(self.euler_rot());
        match self {
            RotationOrder::Xyz => Vec3::new(c, b, a),
            RotationOrder::Yzx => Vec3::new(a, c, b),
            RotationOrder::Zxy => Vec3::new(b, a, c),
            RotationOrder::Xzy => Vec3::new(c, a, b),
            RotationOrder::Yxz => Vec3::new(b, c, a),
            RotationOrder::Zyx => Vec3::new(a, b, c),
        }
    }
}
