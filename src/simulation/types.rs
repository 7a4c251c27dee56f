//! Core types for the granary simulation
//!
//! These are standalone types that don't depend on Bevy.

use anyhow::Result;
use std::fmt;

/// The kind of grain being delivered
///
/// A closed set of commodities. Nothing outside this enum should assume how
/// many kinds exist; routing and storage only ever compare kinds for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrainKind {
    Wheat,
    Maize,
    Barley,
}

impl GrainKind {
    /// All kinds, in the order the input triggers are numbered
    pub const ALL: [GrainKind; 3] = [GrainKind::Wheat, GrainKind::Maize, GrainKind::Barley];
}

impl fmt::Display for GrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GrainKind::Wheat => "WHEAT",
            GrainKind::Maize => "MAIZE",
            GrainKind::Barley => "BARLEY",
        };
        write!(f, "{}", name)
    }
}

/// A wrapper type for bin indices
///
/// Identifies a bin by its position in the depot's ordered bin list, which is
/// also its routing priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinId(pub usize);

/// How a delivery quantity is chosen when an unload is triggered
///
/// Injected into the world so tests can use fixed amounts while interactive
/// runs draw from a small menu.
#[derive(Debug, Clone)]
pub enum AmountRule {
    /// Always deliver the same tonnage
    Fixed(u32),
    /// Draw one entry from a fixed menu of tonnages
    OneOf(Vec<u32>),
}

impl AmountRule {
    /// Check the rule at construction time
    ///
    /// Amounts are positive by contract; an empty menu could never resolve.
    pub fn validate(&self) -> Result<()> {
        match self {
            AmountRule::Fixed(amount) => {
                if *amount == 0 {
                    anyhow::bail!("amount rule requires a positive tonnage");
                }
            }
            AmountRule::OneOf(menu) => {
                if menu.is_empty() {
                    anyhow::bail!("amount menu must have at least one entry");
                }
                if menu.iter().any(|amount| *amount == 0) {
                    anyhow::bail!("amount menu entries must be positive tonnages");
                }
            }
        }
        Ok(())
    }
}

/// Tonnage delivered per unload in the pooled preset (wheat, maize, barley)
pub const POOLED_AMOUNTS: [u32; 3] = [5, 8, 7];

/// Menu of tonnages used by the dedicated preset
pub const DEDICATED_AMOUNT_MENU: [u32; 2] = [10, 20];
