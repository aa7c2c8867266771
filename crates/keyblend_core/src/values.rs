use glam::{Quat, Vec3, Vec4};

use crate::settings::DEFAULT_SLERP_THRESHOLD;

pub trait Interpolatable: Copy + Clone + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        slerp(start, end, t, DEFAULT_SLERP_THRESHOLD)
    }
}

/// Spherical linear interpolation along the shorter arc.
///
/// When `sin(theta)` drops below `threshold` the quaternions are treated as
/// parallel and the components are lerped and re-normalized instead.
#[must_use]
pub fn slerp(start: Quat, end: Quat, t: f32, threshold: f32) -> Quat {
    let q0 = Vec4::from(start);
    let mut q1 = Vec4::from(end);

    let mut dot = q0.dot(q1);
    if dot < 0.0 {
        q1 = -q1;
        dot = -dot;
    }
    let dot = dot.clamp(-1.0, 1.0);

    let theta = dot.acos();
    let sin_theta = theta.sin();

    if sin_theta < threshold {
        let lerped = q0.lerp(q1, t);
        let len = lerped.length();
        return if len > threshold {
            Quat::from_vec4(lerped / len)
        } else {
            Quat::from_vec4(lerped)
        };
    }

    let w0 = ((1.0 - t) * theta).sin() / sin_theta;
    let w1 = (t * theta).sin() / sin_theta;

    Quat::from_vec4(q0 * w0 + q1 * w1)
}
