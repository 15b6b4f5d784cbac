//! Deterministic per-object oscillation.
//!
//! Every pose is a closed-form function of elapsed seconds, so a frame
//! rendered at time `t` is fully reproducible. The per-shape frequency and
//! phase constants are deliberately all different; the scene never settles
//! into a visible beat.

use bevy::prelude::*;

use constants::animation::{GROUP_MOTION, SpinAxis};
use constants::sections::SECTION_MAP;

use crate::engine::scene::sections::{
    BoxShape, CylinderShape, IcosahedronShape, SectionGroup, SphereShape, TorusShape,
};

pub fn animate_sphere(time: Res<Time>, mut query: Query<&mut Transform, With<SphereShape>>) {
    let t = time.elapsed_secs();
    for mut transform in &mut query {
        let (rotation, y) = sphere_pose(t);
        transform.rotation = rotation;
        transform.translation.y = y;
    }
}

pub fn animate_torus(time: Res<Time>, mut query: Query<&mut Transform, With<TorusShape>>) {
    let t = time.elapsed_secs();
    for mut transform in &mut query {
        let (rotation, x) = torus_pose(t);
        transform.rotation = rotation;
        transform.translation.x = x;
    }
}

pub fn animate_boxes(time: Res<Time>, mut query: Query<(&BoxShape, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (shape, mut transform) in &mut query {
        let (rotation, z) = box_pose(t, shape.index);
        transform.rotation = rotation;
        transform.translation.z = z;
    }
}

pub fn animate_cylinder(time: Res<Time>, mut query: Query<&mut Transform, With<CylinderShape>>) {
    let t = time.elapsed_secs();
    for mut transform in &mut query {
        let (rotation, y) = cylinder_pose(t);
        transform.rotation = rotation;
        transform.translation.y = y;
    }
}

pub fn animate_icosahedron(
    time: Res<Time>,
    mut query: Query<&mut Transform, With<IcosahedronShape>>,
) {
    let t = time.elapsed_secs();
    for mut transform in &mut query {
        transform.rotation = icosahedron_spin(t);
    }
}

/// Slow float and drift of whole groups around their fixed vertical slots.
pub fn float_section_groups(
    time: Res<Time>,
    mut query: Query<(&SectionGroup, &mut Transform)>,
) {
    let t = time.elapsed_secs();
    for (group, mut transform) in &mut query {
        let (y, rotation) = group_pose(t, group.index);
        transform.translation.y = y;
        transform.rotation = rotation;
    }
}

pub fn sphere_pose(t: f32) -> (Quat, f32) {
    let rotation = Quat::from_euler(EulerRot::XYZ, t * 0.5, t * 0.3, 0.0);
    (rotation, t.sin() * 0.5)
}

pub fn torus_pose(t: f32) -> (Quat, f32) {
    let rotation = Quat::from_euler(EulerRot::XYZ, t * 0.3, 0.0, t * 0.5);
    (rotation, 2.0 + (t * 0.5).cos() * 0.5)
}

pub fn box_pose(t: f32, index: usize) -> (Quat, f32) {
    let phase = index as f32;
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        0.0,
        t * 0.4 + phase * 0.1,
        t * 0.2 + phase * 0.05,
    );
    (rotation, (t * 0.3 + phase).sin() * 0.5)
}

pub fn cylinder_pose(t: f32) -> (Quat, f32) {
    let rotation = Quat::from_rotation_x(t * 0.6);
    (rotation, (t * 0.4).cos() * 0.5)
}

pub fn icosahedron_spin(t: f32) -> Quat {
    Quat::from_euler(EulerRot::XYZ, t * 0.2, t * 0.3, t * 0.1)
}

/// Vertical float around the group's base offset plus a slow single-axis
/// spin, looked up from the motion table.
pub fn group_pose(t: f32, index: usize) -> (f32, Quat) {
    let motion = &GROUP_MOTION[index % GROUP_MOTION.len()];
    let base_offset = SECTION_MAP[index % SECTION_MAP.len()].base_offset;
    let y = base_offset + (t * motion.float_frequency).sin() * motion.float_amplitude;
    let angle = t * motion.spin_rate;
    let rotation = match motion.spin_axis {
        SpinAxis::X => Quat::from_rotation_x(angle),
        SpinAxis::Y => Quat::from_rotation_y(angle),
        SpinAxis::Z => Quat::from_rotation_z(angle),
    };
    (y, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn everything_is_at_rest_at_time_zero() {
        let (rotation, y) = sphere_pose(0.0);
        assert!(rotation.abs_diff_eq(Quat::IDENTITY, EPS));
        assert!(y.abs() < EPS);

        let (rotation, x) = torus_pose(0.0);
        assert!(rotation.abs_diff_eq(Quat::IDENTITY, EPS));
        assert!((x - 2.5).abs() < EPS); // cos(0) pushes the torus to its outermost slide

        let (rotation, y) = cylinder_pose(0.0);
        assert!(rotation.abs_diff_eq(Quat::IDENTITY, EPS));
        assert!((y - 0.5).abs() < EPS);

        assert!(icosahedron_spin(0.0).abs_diff_eq(Quat::IDENTITY, EPS));
    }

    #[test]
    fn sphere_pose_matches_closed_form() {
        let t = 1.25;
        let (rotation, y) = sphere_pose(t);
        let expected = Quat::from_euler(EulerRot::XYZ, 0.625, 0.375, 0.0);
        assert!(rotation.abs_diff_eq(expected, EPS));
        assert!((y - t.sin() * 0.5).abs() < EPS);
    }

    #[test]
    fn boxes_carry_a_per_index_phase() {
        let t = 2.0;
        let (rot_a, z_a) = box_pose(t, 0);
        let (rot_b, z_b) = box_pose(t, 3);
        assert!(!rot_a.abs_diff_eq(rot_b, EPS));
        assert!((z_a - (t * 0.3).sin() * 0.5).abs() < EPS);
        assert!((z_b - (t * 0.3 + 3.0).sin() * 0.5).abs() < EPS);
    }

    #[test]
    fn groups_float_around_their_base_offsets() {
        let t = 3.5;
        for (index, info) in SECTION_MAP.iter().enumerate() {
            let (y, _) = group_pose(t, index);
            let motion = &GROUP_MOTION[index];
            let expected = info.base_offset + (t * motion.float_frequency).sin() * motion.float_amplitude;
            assert!((y - expected).abs() < EPS);
            assert!((y - info.base_offset).abs() <= motion.float_amplitude + EPS);
        }
    }

    #[test]
    fn group_spin_uses_the_configured_axis() {
        let t = 1.0;
        let (_, rotation) = group_pose(t, 3);
        assert!(rotation.abs_diff_eq(Quat::from_rotation_x(0.05), EPS));
        let (_, rotation) = group_pose(t, 1);
        assert!(rotation.abs_diff_eq(Quat::from_rotation_z(0.05), EPS));
    }

    #[test]
    fn oscillation_is_deterministic() {
        for &t in &[0.0_f32, 0.1, 1.0, 12.75, 600.0] {
            assert_eq!(sphere_pose(t), sphere_pose(t));
            assert_eq!(torus_pose(t), torus_pose(t));
            assert_eq!(box_pose(t, 2), box_pose(t, 2));
            assert_eq!(cylinder_pose(t), cylinder_pose(t));
            assert_eq!(group_pose(t, 4), group_pose(t, 4));
        }
    }
}
