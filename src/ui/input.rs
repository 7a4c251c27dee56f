//! Input handling systems

use bevy::prelude::*;
use log::{debug, warn};

use super::components::SimWorldResource;
use crate::simulation::GrainKind;

/// Handle keyboard input: number keys trigger unloads, Escape exits
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
        return;
    }

    let triggers = [
        (KeyCode::Digit1, GrainKind::Wheat),
        (KeyCode::Digit2, GrainKind::Maize),
        (KeyCode::Digit3, GrainKind::Barley),
    ];

    for (key, kind) in triggers {
        if keyboard.just_pressed(key) {
            match sim_world.0.unload(kind) {
                Ok(outcome) => debug!("unload {} -> {:?}", kind, outcome),
                Err(err) => warn!("unload {} failed: {:#}", kind, err),
            }
        }
    }
}
