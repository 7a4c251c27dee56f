//! HUD panels showing depot totals, per-bin levels, and delivery status

use bevy::prelude::*;

use super::components::{HudBinText, HudText, SimWorldResource};
use crate::simulation::{AmountRule, BinId, GrainKind};

/// System to setup the HUD text panels
pub fn setup_hud(mut commands: Commands, sim_world: Res<SimWorldResource>) {
    let world = &sim_world.0;

    // Depot panel at top-left
    commands
        .spawn((
            Node {
                width: Val::Auto,
                height: Val::Auto,
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(5.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Granary total: 0T"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.2, 1.0, 0.2)),
                HudText::Total,
            ));

            for index in 0..world.depot.bin_count() {
                parent.spawn((
                    Text::new(format!("Bin {}: -", index)),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                    HudBinText(BinId(index)),
                ));
            }

            parent.spawn((
                Text::new("Attempts: 0"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                HudText::Stats,
            ));
        });

    // Status banner and key help at the bottom
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Auto,
                position_type: PositionType::Absolute,
                bottom: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(5.0),
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Press 1/2/3 to unload grain"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 0.5)),
                HudText::Status,
            ));

            parent.spawn((
                Text::new(key_help_line(world.rules())),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Build the "1: WHEAT (5T) | ..." help line from the configured rules
fn key_help_line(rules: &[(GrainKind, AmountRule)]) -> String {
    let entries: Vec<String> = rules
        .iter()
        .enumerate()
        .map(|(index, (kind, rule))| {
            let amounts = match rule {
                AmountRule::Fixed(amount) => format!("{}T", amount),
                AmountRule::OneOf(menu) => {
                    let entries: Vec<String> =
                        menu.iter().map(|amount| amount.to_string()).collect();
                    format!("{}T", entries.join("/"))
                }
            };
            format!("{}: {} ({})", index + 1, kind, amounts)
        })
        .collect();
    entries.join("  |  ")
}

/// System to refresh the HUD from simulation state
pub fn update_hud_text(
    sim_world: Res<SimWorldResource>,
    mut text_query: Query<(&HudText, &mut Text)>,
    mut bin_text_query: Query<(&HudBinText, &mut Text), Without<HudText>>,
) {
    let world = &sim_world.0;

    for (hud_text, mut text) in text_query.iter_mut() {
        match hud_text {
            HudText::Total => {
                **text = format!(
                    "Granary total: {}/{}T",
                    world.depot.total_quantity(),
                    world.depot.effective_capacity()
                );
            }
            HudText::Stats => {
                **text = world.stats.summary();
            }
            HudText::Status => {
                if let Some(status) = world.last_status() {
                    **text = status.message.clone();
                }
            }
        }
    }

    for (bin_text, mut text) in bin_text_query.iter_mut() {
        if let Some(bin) = world.depot.bin(bin_text.0) {
            let kind = match bin.assigned_kind() {
                Some(kind) => kind.to_string(),
                None => "(unassigned)".to_string(),
            };
            **text = format!(
                "Bin {}: {} {}/{}T{}",
                bin_text.0 .0,
                kind,
                bin.quantity(),
                bin.capacity_max(),
                if bin.is_full() { " [FULL]" } else { "" }
            );
        }
    }
}
