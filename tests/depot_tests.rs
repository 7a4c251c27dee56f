//! Storage allocation contract tests
//!
//! These tests validate the bin and depot rules: capacity bounds,
//! assignment locking, first-fit routing, and the depot-wide cap.

use granary_sim::simulation::{
    BinAssignment, BinId, DeliveryOutcome, GrainKind, SimBin, SimDepot,
};

#[test]
fn test_open_bin_accepts_first_kind_and_locks() {
    let mut bin = SimBin::open(10);
    assert_eq!(bin.assignment(), BinAssignment::Open);
    assert_eq!(bin.assigned_kind(), None);

    // Empty open bin takes any kind that fits
    assert!(bin.can_accept(GrainKind::Wheat, 10));
    assert!(bin.can_accept(GrainKind::Barley, 10));
    assert!(!bin.can_accept(GrainKind::Wheat, 11));

    assert!(bin.accept(GrainKind::Wheat, 4));
    assert_eq!(bin.assigned_kind(), Some(GrainKind::Wheat));
    assert_eq!(bin.quantity(), 4);

    // Locked now: other kinds are refused regardless of room
    assert!(!bin.can_accept(GrainKind::Maize, 1));
    assert!(!bin.accept(GrainKind::Maize, 1));
    assert_eq!(bin.quantity(), 4);

    // Same kind still fits up to capacity
    assert!(bin.accept(GrainKind::Wheat, 6));
    assert_eq!(bin.quantity(), 10);
    assert!(bin.is_full());
    assert!(!bin.can_accept(GrainKind::Wheat, 1));
}

#[test]
fn test_dedicated_bin_rejects_other_kinds_even_when_empty() {
    let mut bin = SimBin::dedicated(50, GrainKind::Maize);
    assert_eq!(bin.assigned_kind(), Some(GrainKind::Maize));

    assert!(!bin.can_accept(GrainKind::Wheat, 1));
    assert!(!bin.accept(GrainKind::Wheat, 1));
    assert_eq!(bin.quantity(), 0);

    assert!(bin.accept(GrainKind::Maize, 20));
    assert_eq!(bin.quantity(), 20);
    assert_eq!(bin.remaining(), 30);
}

#[test]
fn test_failed_accept_has_no_side_effects() {
    let mut bin = SimBin::dedicated(10, GrainKind::Barley);
    assert!(bin.accept(GrainKind::Barley, 8));

    // Doesn't fit: 8 + 3 > 10
    assert!(!bin.accept(GrainKind::Barley, 3));
    assert_eq!(bin.quantity(), 8);
    assert_eq!(bin.assigned_kind(), Some(GrainKind::Barley));
}

#[test]
fn test_depot_construction_rejects_misconfiguration() {
    assert!(SimDepot::new(vec![], None).is_err());
    assert!(SimDepot::new(vec![SimBin::open(0)], None).is_err());
    assert!(SimDepot::new(vec![SimBin::open(10)], Some(0)).is_err());
    assert!(SimDepot::new(vec![SimBin::open(10)], Some(50)).is_ok());
}

#[test]
fn test_first_fit_prefers_earlier_bin() {
    // Two open bins, both eligible: the earlier one wins
    let mut depot = SimDepot::new(vec![SimBin::open(20), SimBin::open(20)], None).unwrap();
    let outcome = depot.deliver(GrainKind::Wheat, 5);
    assert_eq!(
        outcome,
        DeliveryOutcome::Accepted {
            bin: BinId(0),
            amount: 5
        }
    );

    // Two dedicated bins of the same kind behave as overflow storage
    let mut depot = SimDepot::new(
        vec![
            SimBin::dedicated(10, GrainKind::Maize),
            SimBin::dedicated(10, GrainKind::Maize),
        ],
        None,
    )
    .unwrap();
    assert_eq!(
        depot.deliver(GrainKind::Maize, 10),
        DeliveryOutcome::Accepted {
            bin: BinId(0),
            amount: 10
        }
    );
    // First bin full, delivery spills to the second
    assert_eq!(
        depot.deliver(GrainKind::Maize, 4),
        DeliveryOutcome::Accepted {
            bin: BinId(1),
            amount: 4
        }
    );
}

#[test]
fn test_delivery_never_splits_across_bins() {
    let mut depot = SimDepot::new(vec![SimBin::open(10), SimBin::open(10)], None).unwrap();
    assert!(depot.deliver(GrainKind::Wheat, 7).is_accepted());

    // 7 + 6 > 10 in bin 0, but bin 1 is empty and open: the whole delivery
    // routes there instead of being split
    assert_eq!(
        depot.deliver(GrainKind::Wheat, 6),
        DeliveryOutcome::Accepted {
            bin: BinId(1),
            amount: 6
        }
    );
    assert_eq!(depot.bin(BinId(0)).unwrap().quantity(), 7);
    assert_eq!(depot.bin(BinId(1)).unwrap().quantity(), 6);
}

#[test]
fn test_total_quantity_accounting() {
    let mut depot = SimDepot::new(
        vec![SimBin::open(10), SimBin::open(20), SimBin::open(10)],
        Some(50),
    )
    .unwrap();

    let deliveries = [
        (GrainKind::Wheat, 5),
        (GrainKind::Maize, 8),
        (GrainKind::Barley, 7),
        (GrainKind::Wheat, 5),
        (GrainKind::Maize, 8),
    ];

    for (kind, amount) in deliveries {
        let before = depot.total_quantity();
        let outcome = depot.deliver(kind, amount);
        let after = depot.total_quantity();
        if outcome.is_accepted() {
            assert_eq!(after, before + amount);
        } else {
            assert_eq!(after, before);
        }
        // Bin invariant holds after every delivery
        for bin in depot.bins() {
            assert!(bin.quantity() <= bin.capacity_max());
        }
    }
}

#[test]
fn test_capped_depot_rejects_before_scanning_bins() {
    let mut depot = SimDepot::new(vec![SimBin::open(30), SimBin::open(30)], Some(20)).unwrap();
    assert!(depot.deliver(GrainKind::Wheat, 15).is_accepted());

    // Both bins have room for 10 more, but 15 + 10 > 20
    let outcome = depot.deliver(GrainKind::Wheat, 10);
    assert_eq!(outcome, DeliveryOutcome::RejectedSystemFull);
    assert_eq!(depot.total_quantity(), 15);
    assert_eq!(depot.bin(BinId(0)).unwrap().quantity(), 15);
    assert_eq!(depot.bin(BinId(1)).unwrap().quantity(), 0);
    // Even an unassigned bin stays untouched by a cap rejection
    assert_eq!(depot.bin(BinId(1)).unwrap().assigned_kind(), None);

    // Exactly reaching the cap is allowed
    assert!(depot.deliver(GrainKind::Wheat, 5).is_accepted());
    assert_eq!(depot.total_quantity(), 20);
    assert_eq!(depot.deliver(GrainKind::Wheat, 1), DeliveryOutcome::RejectedSystemFull);
}

#[test]
fn test_cap_check_and_bin_check_are_independent() {
    // Under the cap but no bin fits: bin-level rejection
    let mut depot = SimDepot::new(vec![SimBin::dedicated(10, GrainKind::Wheat)], Some(100)).unwrap();
    assert_eq!(
        depot.deliver(GrainKind::Maize, 5),
        DeliveryOutcome::RejectedNoBin {
            kind: GrainKind::Maize
        }
    );
}

#[test]
fn test_pooled_scenario_classic_layout() {
    // Three open bins 10/20/10 under a 50 ton cap
    let mut depot = SimDepot::new(
        vec![SimBin::open(10), SimBin::open(20), SimBin::open(10)],
        Some(50),
    )
    .unwrap();

    assert_eq!(
        depot.deliver(GrainKind::Wheat, 5),
        DeliveryOutcome::Accepted {
            bin: BinId(0),
            amount: 5
        }
    );
    assert_eq!(
        depot.deliver(GrainKind::Wheat, 5),
        DeliveryOutcome::Accepted {
            bin: BinId(0),
            amount: 5
        }
    );
    assert_eq!(depot.total_quantity(), 10);
    assert!(depot.bin(BinId(0)).unwrap().is_full());

    // Lock the remaining bins to other kinds
    assert_eq!(
        depot.deliver(GrainKind::Maize, 8),
        DeliveryOutcome::Accepted {
            bin: BinId(1),
            amount: 8
        }
    );
    assert_eq!(
        depot.deliver(GrainKind::Barley, 7),
        DeliveryOutcome::Accepted {
            bin: BinId(2),
            amount: 7
        }
    );

    // Wheat's bin is full and every other bin is locked to another kind
    assert_eq!(
        depot.deliver(GrainKind::Wheat, 1),
        DeliveryOutcome::RejectedNoBin {
            kind: GrainKind::Wheat
        }
    );
    assert_eq!(depot.total_quantity(), 25);
}

#[test]
fn test_dedicated_scenario_three_bins_of_fifty() {
    let mut depot = SimDepot::new(
        vec![
            SimBin::dedicated(50, GrainKind::Wheat),
            SimBin::dedicated(50, GrainKind::Maize),
            SimBin::dedicated(50, GrainKind::Barley),
        ],
        None,
    )
    .unwrap();

    assert_eq!(
        depot.deliver(GrainKind::Maize, 20),
        DeliveryOutcome::Accepted {
            bin: BinId(1),
            amount: 20
        }
    );

    // 20 + 40 > 50 and no other bin takes maize
    assert_eq!(
        depot.deliver(GrainKind::Maize, 40),
        DeliveryOutcome::RejectedNoBin {
            kind: GrainKind::Maize
        }
    );
    assert_eq!(depot.bin(BinId(1)).unwrap().quantity(), 20);

    // Barley never consults the maize bin, routes to its own
    assert_eq!(
        depot.deliver(GrainKind::Barley, 10),
        DeliveryOutcome::Accepted {
            bin: BinId(2),
            amount: 10
        }
    );
}

#[test]
fn test_mixed_open_and_dedicated_bins() {
    let mut depot = SimDepot::new(
        vec![SimBin::dedicated(20, GrainKind::Wheat), SimBin::open(20)],
        None,
    )
    .unwrap();

    // Maize skips the wheat-only bin and claims the open one
    assert_eq!(
        depot.deliver(GrainKind::Maize, 10),
        DeliveryOutcome::Accepted {
            bin: BinId(1),
            amount: 10
        }
    );
    // Wheat still routes to its dedicated bin
    assert_eq!(
        depot.deliver(GrainKind::Wheat, 10),
        DeliveryOutcome::Accepted {
            bin: BinId(0),
            amount: 10
        }
    );
    // The open bin is now locked to maize
    assert_eq!(
        depot.bin(BinId(1)).unwrap().assigned_kind(),
        Some(GrainKind::Maize)
    );
}

#[test]
fn test_last_status_tracks_every_attempt() {
    let mut depot = SimDepot::new(vec![SimBin::open(10)], Some(10)).unwrap();
    assert!(depot.last_status().is_none());

    depot.deliver(GrainKind::Wheat, 5);
    let status = depot.last_status().unwrap();
    assert!(status.success);
    assert!(status.message.contains("WHEAT"));
    assert!(status.message.contains("bin 0"));

    depot.deliver(GrainKind::Wheat, 6);
    let status = depot.last_status().unwrap();
    assert!(!status.success);
    assert!(status.message.contains("No space in the granary"));

    depot.deliver(GrainKind::Maize, 2);
    let status = depot.last_status().unwrap();
    assert!(!status.success);
    assert!(status.message.contains("No bin available"));
}

#[test]
fn test_effective_capacity() {
    let depot = SimDepot::new(vec![SimBin::open(10), SimBin::open(20)], Some(50)).unwrap();
    // Cap is looser than the bins; the capacity sum binds
    assert_eq!(depot.capacity_sum(), 30);
    assert_eq!(depot.effective_capacity(), 30);

    let depot = SimDepot::new(vec![SimBin::open(10), SimBin::open(20)], Some(25)).unwrap();
    assert_eq!(depot.effective_capacity(), 25);

    let depot = SimDepot::new(vec![SimBin::open(10), SimBin::open(20)], None).unwrap();
    assert_eq!(depot.system_capacity_max(), None);
    assert_eq!(depot.effective_capacity(), 30);
}
