//! Storage bin logic for the granary simulation
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::types::GrainKind;

/// Assignment policy for a storage bin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinAssignment {
    /// Accepts any kind as its first delivery, then locks to that kind
    Open,
    /// Fixed to one kind at construction, never changes
    Dedicated(GrainKind),
}

/// A capacity-bounded storage bin
///
/// Tracks one grain kind's accumulated quantity. Quantity only ever grows;
/// there is no withdrawal operation in this system.
#[derive(Debug, Clone)]
pub struct SimBin {
    capacity_max: u32,
    assignment: BinAssignment,
    /// Locked kind. `None` only while an open bin is still empty.
    assigned_kind: Option<GrainKind>,
    quantity: u32,
}

impl SimBin {
    /// Create an open-assignment bin (locks on first delivery)
    pub fn open(capacity_max: u32) -> Self {
        Self {
            capacity_max,
            assignment: BinAssignment::Open,
            assigned_kind: None,
            quantity: 0,
        }
    }

    /// Create a bin dedicated to a single kind
    pub fn dedicated(capacity_max: u32, kind: GrainKind) -> Self {
        Self {
            capacity_max,
            assignment: BinAssignment::Dedicated(kind),
            assigned_kind: Some(kind),
            quantity: 0,
        }
    }

    /// Check whether a delivery would fit this bin
    ///
    /// An unlocked open bin takes any kind that fits its capacity. Once a
    /// kind is locked (at construction for dedicated bins, on first delivery
    /// for open ones) only that kind is accepted, and only while it fits.
    pub fn can_accept(&self, kind: GrainKind, amount: u32) -> bool {
        match self.assigned_kind {
            None => amount <= self.capacity_max,
            Some(assigned) => assigned == kind && self.quantity + amount <= self.capacity_max,
        }
    }

    /// Apply a delivery. Returns false (and mutates nothing) if it doesn't fit.
    pub fn accept(&mut self, kind: GrainKind, amount: u32) -> bool {
        if !self.can_accept(kind, amount) {
            return false;
        }
        self.assigned_kind = Some(kind);
        self.quantity += amount;
        true
    }

    pub fn capacity_max(&self) -> u32 {
        self.capacity_max
    }

    pub fn assignment(&self) -> BinAssignment {
        self.assignment
    }

    /// The kind this bin is locked to, if any
    pub fn assigned_kind(&self) -> Option<GrainKind> {
        self.assigned_kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Room left before the bin is full
    pub fn remaining(&self) -> u32 {
        self.capacity_max - self.quantity
    }

    pub fn is_full(&self) -> bool {
        self.quantity == self.capacity_max
    }

    /// Fill level in [0, 1], for rendering
    pub fn fill_fraction(&self) -> f32 {
        self.quantity as f32 / self.capacity_max as f32
    }
}
