//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{BinFill, SimWorldResource};
use super::spawner::BIN_HEIGHT;
use crate::simulation::GrainKind;

/// Grain colors, matching the classic granary palette
pub fn kind_color(kind: GrainKind) -> Color {
    match kind {
        GrainKind::Wheat => Color::srgb(0.86, 0.71, 0.0),
        GrainKind::Maize => Color::srgb(0.71, 0.47, 0.0),
        GrainKind::Barley => Color::srgb(0.39, 0.31, 0.2),
    }
}

/// System to grow each bin's fill cuboid to its current fill fraction
pub fn sync_bin_fills(
    sim_world: Res<SimWorldResource>,
    mut fill_query: Query<(&BinFill, &mut Transform)>,
) {
    const BASE_HEIGHT: f32 = 0.1;

    for (fill, mut transform) in fill_query.iter_mut() {
        if let Some(bin) = sim_world.0.depot.bin(fill.0) {
            // Zero-height scaling makes the cuboid degenerate; keep a sliver
            let height = (bin.fill_fraction() * BIN_HEIGHT).max(0.001);
            transform.scale.y = height;
            transform.translation.y = BASE_HEIGHT + height / 2.0;
        }
    }
}

/// System to color each fill cuboid by the kind its bin is locked to
pub fn sync_bin_colors(
    sim_world: Res<SimWorldResource>,
    fill_query: Query<(&BinFill, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let unassigned_color = Color::srgb(0.5, 0.5, 0.5);

    for (fill, material_handle) in fill_query.iter() {
        if let Some(bin) = sim_world.0.depot.bin(fill.0) {
            if let Some(material) = materials.get_mut(&material_handle.0) {
                material.base_color = match bin.assigned_kind() {
                    Some(kind) => kind_color(kind),
                    None => unassigned_color,
                };
            }
        }
    }
}
