//! Delivery statistics for the granary simulation
//!
//! Tracks what happened across a run so the console driver and UI can report
//! progress without walking the bins.

use std::collections::HashMap;

use super::types::GrainKind;

/// Counters accumulated over every unload attempt
#[derive(Debug, Clone, Default)]
pub struct DeliveryStats {
    /// Total unload attempts
    pub attempted: usize,
    /// Attempts that landed in a bin
    pub accepted: usize,
    /// Attempts rejected by the depot-wide cap
    pub rejected_system_full: usize,
    /// Attempts no bin could take
    pub rejected_no_bin: usize,
    /// Accepted tonnage per kind
    pub tonnage_by_kind: HashMap<GrainKind, u32>,
}

impl DeliveryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an accepted delivery
    pub fn record_accepted(&mut self, kind: GrainKind, amount: u32) {
        self.attempted += 1;
        self.accepted += 1;
        *self.tonnage_by_kind.entry(kind).or_insert(0) += amount;
    }

    /// Record a rejection by the depot-wide cap
    pub fn record_system_full(&mut self) {
        self.attempted += 1;
        self.rejected_system_full += 1;
    }

    /// Record a rejection because no bin could take the delivery
    pub fn record_no_bin(&mut self) {
        self.attempted += 1;
        self.rejected_no_bin += 1;
    }

    pub fn rejected(&self) -> usize {
        self.rejected_system_full + self.rejected_no_bin
    }

    /// Fraction of attempts that were accepted, as a percentage
    pub fn success_rate(&self) -> f32 {
        if self.attempted == 0 {
            return 100.0;
        }
        self.accepted as f32 / self.attempted as f32 * 100.0
    }

    /// Total accepted tonnage across all kinds
    pub fn total_tonnage(&self) -> u32 {
        self.tonnage_by_kind.values().sum()
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Attempts: {} | Accepted: {} | Rejected: {} (full: {}, no bin: {}) | Success rate: {:.1}%",
            self.attempted,
            self.accepted,
            self.rejected(),
            self.rejected_system_full,
            self.rejected_no_bin,
            self.success_rate()
        )
    }
}
