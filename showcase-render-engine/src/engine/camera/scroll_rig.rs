//! Scroll-driven camera rig.
//!
//! The camera pose is a pure function of scroll progress: it sways on a sine
//! across the full range, descends with the sections, and breathes in depth
//! on a half-period cosine, always aimed at the section axis.

use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use constants::animation::{
    CAMERA_BASE_DEPTH, CAMERA_BASE_HEIGHT, CAMERA_DEPTH_AMPLITUDE, CAMERA_SWAY_AMPLITUDE,
    CAMERA_TRAVEL,
};

use crate::engine::systems::scroll_state::ScrollState;

pub fn spawn_scroll_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, CAMERA_BASE_DEPTH).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Camera position and look-at target for a scroll progress in [0, 1].
pub fn camera_pose(progress: f32) -> (Vec3, Vec3) {
    let position = Vec3::new(
        (progress * TAU).sin() * CAMERA_SWAY_AMPLITUDE,
        progress * CAMERA_TRAVEL + CAMERA_BASE_HEIGHT,
        CAMERA_BASE_DEPTH + (progress * PI).cos() * CAMERA_DEPTH_AMPLITUDE,
    );
    let target = Vec3::new(0.0, progress * CAMERA_TRAVEL, 0.0);
    (position, target)
}

pub fn drive_scroll_camera(
    scroll_state: Res<ScrollState>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };
    let (position, target) = camera_pose(scroll_state.progress());
    *transform = Transform::from_translation(position).looking_at(target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_pose_matches_the_first_section() {
        let (position, target) = camera_pose(0.0);
        assert!((position - Vec3::new(0.0, 2.0, 7.0)).length() < 1e-6);
        assert!((target - Vec3::ZERO).length() < 1e-6);
    }

    #[test]
    fn midpoint_pose() {
        let (position, target) = camera_pose(0.5);
        assert!(position.x.abs() < 1e-5);
        assert!((position.y - -3.0).abs() < 1e-6);
        assert!((position.z - 5.0).abs() < 1e-5);
        assert!((target - Vec3::new(0.0, -5.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn full_scroll_returns_to_centerline() {
        let (position, target) = camera_pose(1.0);
        assert!(position.x.abs() < 1e-5);
        assert!((position.y - -8.0).abs() < 1e-6);
        assert!((position.z - 3.0).abs() < 1e-5);
        assert!((target - Vec3::new(0.0, -10.0, 0.0)).length() < 1e-6);
    }
}
