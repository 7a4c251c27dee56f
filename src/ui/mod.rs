//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all allocation logic is in the
//! `simulation` module. The UI reads state from `SimWorld` and renders it
//! using Bevy's 3D graphics.

mod components;
mod hud;
mod input;
pub mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{EntityMappings, SimWorldResource};

use hud::{setup_hud, update_hud_text};
use input::handle_input;
use spawner::spawn_initial_visuals;
use sync::{sync_bin_colors, sync_bin_fills};
use world::setup_world;

/// Plugin to register all UI systems
pub struct GranarySimUIPlugin;

impl Plugin for GranarySimUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimWorldResource>()
            .init_resource::<EntityMappings>()
            .add_systems(
                Startup,
                (
                    setup_world,
                    spawn_initial_visuals.after(setup_world),
                    setup_hud,
                ),
            )
            .add_systems(
                Update,
                (handle_input, sync_bin_fills, sync_bin_colors, update_hud_text),
            );
    }
}
