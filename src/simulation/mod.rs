//! Standalone granary simulation module
//!
//! This module contains all the core storage allocation logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod bin;
mod depot;
mod stats;
mod types;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use bin::{BinAssignment, SimBin};
#[allow(unused_imports)]
pub use depot::{DeliveryOutcome, DeliveryStatus, SimDepot};
#[allow(unused_imports)]
pub use stats::DeliveryStats;
#[allow(unused_imports)]
pub use types::{AmountRule, BinId, GrainKind, DEDICATED_AMOUNT_MENU, POOLED_AMOUNTS};
pub use world::SimWorld;
