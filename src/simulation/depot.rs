//! Depot routing and depot-wide capacity policy
//!
//! The depot owns the ordered bin list and decides where a delivery goes.

use anyhow::Result;
use log::warn;

use super::bin::SimBin;
use super::types::{BinId, GrainKind};

/// Result of a single delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The delivery was applied to the bin at this index
    Accepted { bin: BinId, amount: u32 },
    /// The depot-wide cap would be exceeded; no bin was examined
    RejectedSystemFull,
    /// No bin in routing order could take the delivery
    RejectedNoBin { kind: GrainKind },
}

impl DeliveryOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DeliveryOutcome::Accepted { .. })
    }
}

/// Human-readable record of the most recent delivery attempt
///
/// Overwritten on every attempt. Display artifact only; correctness state
/// lives in the bins.
#[derive(Debug, Clone)]
pub struct DeliveryStatus {
    pub success: bool,
    pub message: String,
}

/// An ordered collection of bins plus depot-wide capacity policy
///
/// Bin membership and order are fixed at construction; order is routing
/// priority.
#[derive(Debug, Clone)]
pub struct SimDepot {
    bins: Vec<SimBin>,
    /// Ceiling on the sum of bin quantities. `None` means the sum of the
    /// individual bin capacities is the only ceiling.
    system_capacity_max: Option<u32>,
    last_status: Option<DeliveryStatus>,
}

impl SimDepot {
    /// Build a depot, rejecting misconfiguration eagerly
    pub fn new(bins: Vec<SimBin>, system_capacity_max: Option<u32>) -> Result<Self> {
        if bins.is_empty() {
            anyhow::bail!("depot needs at least one bin");
        }
        if let Some(position) = bins.iter().position(|bin| bin.capacity_max() == 0) {
            anyhow::bail!("bin {} has zero capacity", position);
        }
        if system_capacity_max == Some(0) {
            anyhow::bail!("depot capacity ceiling must be positive");
        }
        Ok(Self {
            bins,
            system_capacity_max,
            last_status: None,
        })
    }

    /// Attempt to place a delivery, first-fit over the bins in order
    ///
    /// The depot-wide cap is checked before any bin is scanned; a delivery
    /// either lands fully in one bin or not at all. `amount` is positive by
    /// caller contract.
    pub fn deliver(&mut self, kind: GrainKind, amount: u32) -> DeliveryOutcome {
        debug_assert!(amount > 0, "delivery amounts are positive by contract");

        if let Some(cap) = self.system_capacity_max {
            if self.total_quantity() + amount > cap {
                warn!("granary full: {}T of {} doesn't fit under cap {}T", amount, kind, cap);
                self.last_status = Some(DeliveryStatus {
                    success: false,
                    message: format!("No space in the granary for {}T of {}", amount, kind),
                });
                return DeliveryOutcome::RejectedSystemFull;
            }
        }

        for (index, bin) in self.bins.iter_mut().enumerate() {
            if bin.accept(kind, amount) {
                self.last_status = Some(DeliveryStatus {
                    success: true,
                    message: format!("Unloaded {}T of {} into bin {}", amount, kind, index),
                });
                return DeliveryOutcome::Accepted {
                    bin: BinId(index),
                    amount,
                };
            }
        }

        warn!("no bin available for {}T of {}", amount, kind);
        self.last_status = Some(DeliveryStatus {
            success: false,
            message: format!("No bin available for {}T of {}", amount, kind),
        });
        DeliveryOutcome::RejectedNoBin { kind }
    }

    /// Sum of all bin quantities
    pub fn total_quantity(&self) -> u32 {
        self.bins.iter().map(|bin| bin.quantity()).sum()
    }

    /// Sum of the individual bin capacities
    pub fn capacity_sum(&self) -> u32 {
        self.bins.iter().map(|bin| bin.capacity_max()).sum()
    }

    /// The ceiling that actually binds: the depot cap if one is set and
    /// tighter than the capacity sum
    pub fn effective_capacity(&self) -> u32 {
        match self.system_capacity_max {
            Some(cap) => cap.min(self.capacity_sum()),
            None => self.capacity_sum(),
        }
    }

    pub fn system_capacity_max(&self) -> Option<u32> {
        self.system_capacity_max
    }

    pub fn bins(&self) -> &[SimBin] {
        &self.bins
    }

    pub fn bin(&self, id: BinId) -> Option<&SimBin> {
        self.bins.get(id.0)
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub fn last_status(&self) -> Option<&DeliveryStatus> {
        self.last_status.as_ref()
    }
}
