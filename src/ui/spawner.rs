//! Systems for spawning visual entities from simulation state

use bevy::prelude::*;

use super::components::{BinFill, BinLink, EntityMappings, SimSynced, SimWorldResource};
use crate::simulation::BinId;

/// Width and depth of a bin visual in world units
pub const BIN_SIZE: f32 = 2.4;
/// Height of a completely full bin visual
pub const BIN_HEIGHT: f32 = 4.0;
/// Distance between bin centers
pub const BIN_SPACING: f32 = 4.5;

/// System to create initial visual entities from simulation state
pub fn spawn_initial_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim_world: Res<SimWorldResource>,
    mut mappings: ResMut<EntityMappings>,
) {
    let world = &sim_world.0;
    let bin_count = world.depot.bin_count();

    for (index, _bin) in world.depot.bins().iter().enumerate() {
        let x = (index as f32 - (bin_count as f32 - 1.0) / 2.0) * BIN_SPACING;
        spawn_bin_visual(
            &mut commands,
            &mut meshes,
            &mut materials,
            BinId(index),
            x,
            &mut mappings,
        );
    }

    spawn_truck_visual(&mut commands, &mut meshes, &mut materials);
}

/// Spawn a single bin visual: base platform, capacity rim, and fill cuboid
fn spawn_bin_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    id: BinId,
    x: f32,
    mappings: &mut ResMut<EntityMappings>,
) {
    const BASE_HEIGHT: f32 = 0.1;
    const RIM_HEIGHT: f32 = 0.08;
    let base_color = Color::srgb(0.35, 0.35, 0.35);
    let rim_color = Color::srgb(0.6, 0.6, 0.6);
    let empty_fill_color = Color::srgb(0.5, 0.5, 0.5);

    // Base platform the grain pile sits on
    let base = commands
        .spawn((
            SimSynced,
            BinLink(id),
            Mesh3d(meshes.add(Cuboid::new(BIN_SIZE, BASE_HEIGHT, BIN_SIZE))),
            MeshMaterial3d(materials.add(base_color)),
            Transform::from_translation(Vec3::new(x, BASE_HEIGHT / 2.0, 0.0)),
        ))
        .id();
    mappings.bins.insert(id, base);

    // Rim hovering at the bin's capacity height
    commands.spawn((
        SimSynced,
        Mesh3d(meshes.add(Cuboid::new(BIN_SIZE, RIM_HEIGHT, BIN_SIZE))),
        MeshMaterial3d(materials.add(rim_color)),
        Transform::from_translation(Vec3::new(x, BASE_HEIGHT + BIN_HEIGHT, 0.0)),
    ));

    // Fill cuboid, unit height; sync scales it with the bin's fill fraction
    let fill = commands
        .spawn((
            SimSynced,
            BinFill(id),
            Mesh3d(meshes.add(Cuboid::new(BIN_SIZE * 0.9, 1.0, BIN_SIZE * 0.9))),
            MeshMaterial3d(materials.add(empty_fill_color)),
            Transform::from_translation(Vec3::new(x, BASE_HEIGHT, 0.0)).with_scale(Vec3::new(
                1.0, 0.001, 1.0,
            )),
        ))
        .id();
    mappings.fills.insert(id, fill);
}

/// Spawn the delivery truck parked in front of the bins
fn spawn_truck_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let body_color = Color::srgb(0.8, 0.1, 0.1);
    let cabin_color = Color::srgb(0.4, 0.05, 0.05);

    commands.spawn((
        SimSynced,
        Mesh3d(meshes.add(Cuboid::new(2.2, 0.8, 1.0))),
        MeshMaterial3d(materials.add(body_color)),
        Transform::from_translation(Vec3::new(0.0, 0.5, 5.0)),
    ));
    commands.spawn((
        SimSynced,
        Mesh3d(meshes.add(Cuboid::new(0.6, 0.6, 1.0))),
        MeshMaterial3d(materials.add(cabin_color)),
        Transform::from_translation(Vec3::new(1.4, 0.4, 5.0)),
    ));
}
