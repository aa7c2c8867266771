//! World-Space Blend Tests
//!
//! Tests for:
//! - Blend factor remapping and endpoint exactness
//! - Blending a matrix with itself
//! - SLERP: shortest path, monotonic angle, parallel fallback
//! - Linear translation and scale blending
//! - world_to_local with identity and real parents

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::{Mat4, Quat, Vec3};
use keyblend::{BlendFactor, BlendSettings, RotationOrder, Transform, TransformBlender, slerp};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn mat4_approx(a: Mat4, b: Mat4) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

fn quat_approx(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - EPSILON
}

fn trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale, rotation, translation)
}

fn prev_matrix() -> Mat4 {
    trs(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_z(0.4), Vec3::new(1.0, 2.0, 1.0))
}

fn next_matrix() -> Mat4 {
    trs(
        Vec3::new(-4.0, 0.0, 9.0),
        Quat::from_euler(glam::EulerRot::XYZ, 0.5, 1.0, -0.3),
        Vec3::new(3.0, 1.0, 0.5),
    )
}

// ============================================================================
// Endpoints & Identity
// ============================================================================

#[test]
fn blend_endpoints_are_exact() {
    let blender = TransformBlender::default();
    let (a, b) = (prev_matrix(), next_matrix());

    assert!(mat4_approx(blender.blend(&a, &b, BlendFactor::new(-1.0)).unwrap(), a));
    assert!(mat4_approx(blender.blend(&a, &b, BlendFactor::new(1.0)).unwrap(), b));
}

#[test]
fn blend_clamps_out_of_range_factor() {
    let blender = TransformBlender::default();
    let (a, b) = (prev_matrix(), next_matrix());

    assert!(mat4_approx(blender.blend(&a, &b, BlendFactor::new(-5.0)).unwrap(), a));
    assert!(mat4_approx(blender.blend(&a, &b, BlendFactor::new(42.0)).unwrap(), b));
}

#[test]
fn blend_with_self_is_identity_operation() {
    let blender = TransformBlender::default();
    let m = next_matrix();
    for raw in [-1.0, -0.6, 0.0, 0.3, 1.0] {
        let blended = blender.blend(&m, &m, BlendFactor::new(raw)).unwrap();
        assert!(mat4_approx(blended, m), "raw {raw}: {blended:?}");
    }
}

#[test]
fn blend_fails_on_degenerate_input() {
    let blender = TransformBlender::default();
    let flat = Mat4::from_scale(Vec3::new(0.0, 1.0, 1.0));
    assert!(blender.blend(&flat, &Mat4::IDENTITY, BlendFactor::MIDPOINT).is_err());
    assert!(blender.blend(&Mat4::IDENTITY, &flat, BlendFactor::MIDPOINT).is_err());
}

// ============================================================================
// Translation & Scale
// ============================================================================

#[test]
fn translation_midpoint_scenario() {
    let blender = TransformBlender::default();
    let prev = Mat4::from_translation(Vec3::ZERO);
    let next = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));

    let blended = blender.blend(&prev, &next, BlendFactor::new(0.0)).unwrap();
    let t = Transform::from_matrix(&blended).unwrap();
    assert!(vec3_approx(t.translation, Vec3::new(5.0, 0.0, 0.0)));
}

#[test]
fn scale_blends_linearly() {
    let blender = TransformBlender::default();
    let prev = Mat4::from_scale(Vec3::splat(1.0));
    let next = Mat4::from_scale(Vec3::splat(4.0));

    let blended = blender.blend(&prev, &next, BlendFactor::from_weight(0.5)).unwrap();
    let t = Transform::from_matrix(&blended).unwrap();
    // Linear midpoint, not the geometric mean (2.0)
    assert!(vec3_approx(t.scale, Vec3::splat(2.5)));
}

// ============================================================================
// Rotation (SLERP)
// ============================================================================

#[test]
fn rotation_half_way_about_y() {
    let blender = TransformBlender::default();
    let prev = Mat4::IDENTITY;
    let next = Mat4::from_rotation_y(FRAC_PI_2);

    let blended = blender.blend(&prev, &next, BlendFactor::MIDPOINT).unwrap();
    let t = Transform::from_matrix(&blended).unwrap();
    assert!(quat_approx(t.rotation, Quat::from_rotation_y(FRAC_PI_4)));
}

#[test]
fn slerp_takes_shorter_arc() {
    let a = Quat::from_rotation_z(0.2);
    let b = Quat::from_rotation_z(1.4);
    let b_negated = -b;
    assert!(a.dot(b_negated) < 0.0);

    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let direct = slerp(a, b, t, 1e-6);
        let flipped = slerp(a, b_negated, t, 1e-6);
        assert!(quat_approx(direct, flipped), "t = {t}");
        assert!(approx_eq(direct.dot(flipped), 1.0), "t = {t}: sign differs");
    }
}

#[test]
fn slerp_angle_grows_monotonically() {
    let start = Quat::from_rotation_x(0.1);
    let end = Quat::from_euler(glam::EulerRot::XYZ, 1.2, -0.8, 2.0);

    let mut last = -1.0;
    for step in 0..=20 {
        let t = step as f32 / 20.0;
        let angle = slerp(start, end, t, 1e-6).angle_between(start);
        assert!(angle >= last - 1e-5, "t = {t}: {angle} < {last}");
        last = angle;
    }
    assert!(approx_eq(last, end.angle_between(start)));
}

#[test]
fn slerp_constant_angular_velocity() {
    let start = Quat::IDENTITY;
    let end = Quat::from_rotation_y(PI * 0.9);
    let total = end.angle_between(start);

    for t in [0.1, 0.3, 0.6, 0.9] {
        let angle = slerp(start, end, t, 1e-6).angle_between(start);
        assert!(approx_eq(angle, total * t), "t = {t}: {angle}");
    }
}

#[test]
fn slerp_parallel_inputs_fall_back_to_lerp() {
    let q = Quat::from_rotation_x(0.7);
    let nudged = Quat::from_rotation_x(0.700_001);
    let out = slerp(q, nudged, 0.5, 1e-2);
    assert!(approx_eq(out.length(), 1.0));
    assert!(quat_approx(out, q));
}

#[test]
fn slerp_threshold_comes_from_settings() {
    let blender = TransformBlender::new(BlendSettings {
        slerp_threshold: 0.5,
        ..Default::default()
    });
    let prev = Transform::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE);
    let next = Transform::new(Vec3::ZERO, Quat::from_rotation_y(0.4), Vec3::ONE);

    // sin(0.2) < 0.5, so the normalized-lerp branch runs; for a single
    // axis that still lands on the half angle.
    let mid = blender.blend_transforms(&prev, &next, 0.5);
    assert!(quat_approx(mid.rotation, Quat::from_rotation_y(0.2)));
}

// ============================================================================
// World To Local
// ============================================================================

#[test]
fn identity_parent_matches_direct_decomposition() {
    let blender = TransformBlender::default();
    let world = next_matrix();

    let local = blender.world_to_local(&world, &Mat4::IDENTITY, RotationOrder::Xyz).unwrap();
    let direct = Transform::from_matrix(&world).unwrap().to_local(RotationOrder::Xyz);

    assert!(vec3_approx(local.translation, direct.translation));
    assert!(vec3_approx(local.rotation, direct.rotation));
    assert!(vec3_approx(local.scale, direct.scale));
}

#[test]
fn parent_inverse_recovers_local_channels() {
    let blender = TransformBlender::default();
    let parent = trs(Vec3::new(0.0, 5.0, 0.0), Quat::from_rotation_y(FRAC_PI_2), Vec3::splat(2.0));
    let local = Transform::from_channels(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.1, 0.2, 0.3),
        RotationOrder::Yzx,
        Vec3::new(1.0, 1.5, 1.0),
    );
    let world = parent * local.to_matrix();

    let recovered = blender
        .world_to_local(&world, &blender.parent_inverse(&parent), RotationOrder::Yzx)
        .unwrap();

    assert!(vec3_approx(recovered.translation, local.translation));
    assert!(vec3_approx(recovered.rotation, Vec3::new(0.1, 0.2, 0.3)));
    assert!(vec3_approx(recovered.scale, local.scale));
}

#[test]
fn world_space_blend_under_moving_parent() {
    // Child sits at the parent's origin; the parent slides along X between
    // keys. Halfway through, the child's world position is halfway too,
    // expressed in the parent's space at the current key.
    let blender = TransformBlender::default();
    let prev_world = Mat4::from_translation(Vec3::new(0.0, 0.0, 0.0));
    let next_world = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
    let current_parent = Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0));

    let world = blender.blend(&prev_world, &next_world, BlendFactor::new(0.0)).unwrap();
    let local = blender
        .world_to_local(&world, &blender.parent_inverse(&current_parent), RotationOrder::Xyz)
        .unwrap();

    assert!(vec3_approx(local.translation, Vec3::new(3.0, 0.0, 0.0)));
}

#[test]
fn small_scale_parent_is_inverted() {
    // Unit conversion parents (cm to m and below) must not fall back to identity.
    let blender = TransformBlender::default();
    let parent = trs(Vec3::new(3.0, 0.0, 0.0), Quat::IDENTITY, Vec3::splat(0.005));
    let world = parent * Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));

    let local = blender
        .world_to_local(&world, &blender.parent_inverse(&parent), RotationOrder::Xyz)
        .unwrap();

    assert!((local.translation.x - 10.0).abs() < 1e-3, "got {}", local.translation.x);
    assert!(vec3_approx(local.scale, Vec3::ONE));
}

#[test]
fn linear_blend_for_plain_channels() {
    let blender = TransformBlender::default();
    assert!(approx_eq(blender.linear_blend(0.0, 1.0, 0.5), 0.5));
    assert!(approx_eq(blender.linear_blend(-2.0, 2.0, 0.75), 1.0));
    assert!(approx_eq(
        blender.linear_blend(3.0, 9.0, BlendFactor::PREVIOUS.weight()),
        3.0
    ));
}
