use bevy::pbr::wireframe::Wireframe;
use bevy::prelude::*;
use bevy::render::mesh::MeshBuilder;
use std::f32::consts::TAU;

use constants::palette::{LABEL_COLOR, section_color};
use constants::sections::{BOX_CLUSTER_SIZE, SECTION_MAP, SectionInfo};

/// Parent entity of one showcase section. `index` doubles as the palette and
/// motion-table key.
#[derive(Component)]
pub struct SectionGroup {
    pub index: usize,
}

#[derive(Component)]
pub struct SphereShape;

#[derive(Component)]
pub struct TorusShape;

#[derive(Component)]
pub struct BoxShape {
    pub index: usize,
}

#[derive(Component)]
pub struct CylinderShape;

#[derive(Component)]
pub struct IcosahedronShape;

/// Placeholder geometry standing in for rendered section text.
#[derive(Component)]
pub struct SectionLabel {
    pub word: &'static str,
}

pub fn spawn_section_groups(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_sphere_section(&mut commands, &mut meshes, &mut materials);
    spawn_torus_section(&mut commands, &mut meshes, &mut materials);
    spawn_box_cluster_section(&mut commands, &mut meshes, &mut materials);
    spawn_cylinder_section(&mut commands, &mut meshes, &mut materials);
    spawn_icosahedron_section(&mut commands, &mut meshes, &mut materials);
}

/// Local position of one cuboid in the cluster, on a closed curve that
/// weaves through all three axes.
pub fn cluster_position(index: usize) -> Vec3 {
    let angle = index as f32 / BOX_CLUSTER_SIZE as f32 * TAU;
    Vec3::new(
        angle.cos() * 3.0,
        angle.sin() * 2.0,
        (angle * 2.0).sin(),
    )
}

fn spawn_sphere_section(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let info = &SECTION_MAP[0];
    let mesh = meshes.add(Sphere::new(1.5).mesh().uv(64, 64));
    let material = materials.add(section_material(info));
    let label = label_parts(meshes, materials, info);

    commands
        .spawn(group_parts(info))
        .with_children(|group| {
            group.spawn((
                SphereShape,
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::default(),
            ));
            group.spawn(label);
        });
}

fn spawn_torus_section(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let info = &SECTION_MAP[1];
    let mesh = meshes.add(
        Torus {
            minor_radius: 0.4,
            major_radius: 1.2,
        }
        .mesh()
        .minor_resolution(16)
        .major_resolution(100)
        .build(),
    );
    let material = materials.add(section_material(info));
    let label = label_parts(meshes, materials, info);

    commands
        .spawn(group_parts(info))
        .with_children(|group| {
            group.spawn((
                TorusShape,
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_xyz(2.0, 0.0, 0.0),
            ));
            group.spawn(label);
        });
}

fn spawn_box_cluster_section(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let info = &SECTION_MAP[2];
    let mesh = meshes.add(Cuboid::new(0.8, 0.8, 0.8));
    let material = materials.add(section_material(info));
    let label = label_parts(meshes, materials, info);

    commands
        .spawn(group_parts(info))
        .with_children(|group| {
            for index in 0..BOX_CLUSTER_SIZE {
                group.spawn((
                    BoxShape { index },
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(cluster_position(index)),
                ));
            }
            group.spawn(label);
        });
}

fn spawn_cylinder_section(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let info = &SECTION_MAP[3];
    let mesh = meshes.add(
        ConicalFrustum {
            radius_top: 1.0,
            radius_bottom: 1.5,
            height: 3.0,
        }
        .mesh()
        .resolution(32)
        .build(),
    );
    let material = materials.add(section_material(info));
    let label = label_parts(meshes, materials, info);

    commands
        .spawn(group_parts(info))
        .with_children(|group| {
            group.spawn((
                CylinderShape,
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::default(),
            ));
            group.spawn(label);
        });
}

fn spawn_icosahedron_section(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let info = &SECTION_MAP[4];
    let mesh = meshes.add(
        Sphere::new(2.0)
            .mesh()
            .ico(1)
            .expect("icosphere subdivision count is valid"),
    );
    let material = materials.add(section_material(info));
    let label = label_parts(meshes, materials, info);

    commands
        .spawn(group_parts(info))
        .with_children(|group| {
            let mut primary = group.spawn((
                IcosahedronShape,
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::default(),
            ));
            if info.wireframe {
                primary.insert(Wireframe);
            }
            group.spawn(label);
        });
}

fn group_parts(info: &SectionInfo) -> (SectionGroup, Transform, Visibility) {
    (
        SectionGroup { index: info.index },
        Transform::from_xyz(0.0, info.base_offset, 0.0),
        Visibility::default(),
    )
}

fn section_material(info: &SectionInfo) -> StandardMaterial {
    StandardMaterial {
        base_color: section_color(info.index),
        perceptual_roughness: info.roughness,
        metallic: info.metalness,
        ..default()
    }
}

fn label_parts(
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    info: &'static SectionInfo,
) -> (
    SectionLabel,
    Mesh3d,
    MeshMaterial3d<StandardMaterial>,
    Transform,
) {
    let [r, g, b] = LABEL_COLOR;
    (
        SectionLabel { word: info.label },
        Mesh3d(meshes.add(Cuboid::new(0.1, 0.1, 0.1))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(r, g, b),
            ..default()
        })),
        Transform::from_translation(info.label_offset),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_positions_follow_the_curve() {
        let first = cluster_position(0);
        assert!((first.x - 3.0).abs() < 1e-6);
        assert!(first.y.abs() < 1e-6);
        assert!(first.z.abs() < 1e-6);

        for index in 0..BOX_CLUSTER_SIZE {
            let angle = index as f32 / BOX_CLUSTER_SIZE as f32 * TAU;
            let position = cluster_position(index);
            assert!((position.x - angle.cos() * 3.0).abs() < 1e-6);
            assert!((position.y - angle.sin() * 2.0).abs() < 1e-6);
            assert!((position.z - (angle * 2.0).sin()).abs() < 1e-6);
        }
    }

    #[test]
    fn cluster_positions_stay_bounded() {
        for index in 0..BOX_CLUSTER_SIZE {
            let position = cluster_position(index);
            assert!(position.x.abs() <= 3.0);
            assert!(position.y.abs() <= 2.0);
            assert!(position.z.abs() <= 1.0);
        }
    }
}
