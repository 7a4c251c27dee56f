//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;
use std::collections::HashMap;

use crate::simulation::{BinId, SimWorld};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

impl Default for SimWorldResource {
    fn default() -> Self {
        Self(SimWorld::create_pooled_world())
    }
}

/// Marker component for ground plane
#[derive(Component)]
pub struct Ground;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for entities synced from simulation
#[derive(Component)]
pub struct SimSynced;

/// Links a Bevy entity to a simulation bin
#[derive(Component)]
pub struct BinLink(pub BinId);

/// Marks the fill cuboid rendered inside a bin
#[derive(Component)]
pub struct BinFill(pub BinId);

/// Resource to track Bevy entities mapped to simulation bins
#[derive(Resource, Default)]
pub struct EntityMappings {
    pub bins: HashMap<BinId, Entity>,
    pub fills: HashMap<BinId, Entity>,
}

/// Marker for HUD text elements
#[derive(Component)]
pub enum HudText {
    /// Outcome of the most recent delivery
    Status,
    /// Granary total vs. the binding capacity
    Total,
    /// Attempt/accept/reject counters
    Stats,
}

/// Marker for the per-bin HUD line
#[derive(Component)]
pub struct HudBinText(pub BinId);
