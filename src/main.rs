mod simulation;

#[cfg(feature = "ui")]
mod ui;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use simulation::{
    AmountRule, DeliveryOutcome, GrainKind, SimBin, SimDepot, SimWorld, DEDICATED_AMOUNT_MENU,
    POOLED_AMOUNTS,
};

#[derive(Parser)]
#[command(name = "granary_sim")]
#[command(about = "Grain delivery simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Depot layout to simulate
    #[arg(long, value_enum, default_value = "pooled")]
    layout: Layout,

    /// Number of random unload events to run in headless mode
    #[arg(long, default_value = "30")]
    events: u32,

    /// Override the depot-wide capacity ceiling in tons
    #[arg(long)]
    cap: Option<u32>,

    /// RNG seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

/// Which of the granary layouts to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Layout {
    /// Open-assignment bins sharing a depot cap
    Pooled,
    /// One bin per grain kind
    Dedicated,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui();
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else if let Err(err) = run_headless(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

/// Build the world the CLI asked for
///
/// Without a cap override the presets are used as-is; with one, the same
/// layout is rebuilt around the requested depot ceiling.
fn build_world(layout: Layout, cap: Option<u32>, seed: Option<u64>) -> Result<SimWorld> {
    if cap.is_none() {
        let world = match (layout, seed) {
            (Layout::Pooled, None) => SimWorld::create_pooled_world(),
            (Layout::Pooled, Some(seed)) => SimWorld::create_pooled_world_with_seed(seed),
            (Layout::Dedicated, None) => SimWorld::create_dedicated_world(),
            (Layout::Dedicated, Some(seed)) => SimWorld::create_dedicated_world_with_seed(seed),
        };
        return Ok(world);
    }

    let bins: Vec<SimBin> = match layout {
        Layout::Pooled => vec![SimBin::open(10), SimBin::open(20), SimBin::open(10)],
        Layout::Dedicated => GrainKind::ALL
            .iter()
            .map(|kind| SimBin::dedicated(50, *kind))
            .collect(),
    };
    let rules: Vec<(GrainKind, AmountRule)> = match layout {
        Layout::Pooled => GrainKind::ALL
            .iter()
            .zip(POOLED_AMOUNTS)
            .map(|(kind, amount)| (*kind, AmountRule::Fixed(amount)))
            .collect(),
        Layout::Dedicated => GrainKind::ALL
            .iter()
            .map(|kind| (*kind, AmountRule::OneOf(DEDICATED_AMOUNT_MENU.to_vec())))
            .collect(),
    };

    let depot = SimDepot::new(bins, cap)?;
    match seed {
        Some(seed) => SimWorld::new_with_seed(depot, rules, seed),
        None => SimWorld::new(depot, rules),
    }
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    println!("Running granary simulation in headless mode...");
    println!("Layout: {:?}, Events: {}", cli.layout, cli.events);
    println!();

    let mut world = build_world(cli.layout, cli.cap, cli.seed)?;

    println!("Initial state:");
    world.print_summary();
    world.draw_bins();
    println!();

    for event in 1..=cli.events {
        let (kind, outcome) = world.unload_random()?;
        match outcome {
            DeliveryOutcome::Accepted { bin, amount } => {
                println!("[{:>3}] {} {}T -> bin {}", event, kind, amount, bin.0);
            }
            DeliveryOutcome::RejectedSystemFull => {
                println!("[{:>3}] {} rejected: granary full", event, kind);
            }
            DeliveryOutcome::RejectedNoBin { kind } => {
                println!("[{:>3}] {} rejected: no bin available", event, kind);
            }
        }

        if event % 10 == 0 {
            println!("--- After event {} ---", event);
            world.draw_bins();
            println!();
        }
    }

    println!("=== Final State ===");
    world.print_summary();
    world.draw_bins();
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui() {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Granary Sim UI...");
    println!();
    println!("Controls:");
    println!("  1  - Unload wheat");
    println!("  2  - Unload maize");
    println!("  3  - Unload barley");
    println!("  ESC - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,granary_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Granary Sim - Grain Delivery".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(ui::GranarySimUIPlugin)
        .run();
}
