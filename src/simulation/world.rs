//! Main simulation world that ties everything together
//!
//! This is the entry point for driving the granary simulation
//! without any Bevy dependencies.

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::bin::SimBin;
use super::depot::{DeliveryOutcome, DeliveryStatus, SimDepot};
use super::stats::DeliveryStats;
use super::types::{AmountRule, GrainKind, DEDICATED_AMOUNT_MENU, POOLED_AMOUNTS};

/// The main simulation world
///
/// Owns the depot plus the pieces the presentation layer needs but the depot
/// should not know about: the per-kind amount rules, the RNG they draw from,
/// run statistics, and the delivery history.
pub struct SimWorld {
    /// The depot holding all bins
    pub depot: SimDepot,

    /// Ordered (kind, amount rule) pairs; the input triggers map onto these
    rules: Vec<(GrainKind, AmountRule)>,

    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,

    /// Statistics accumulated over every unload attempt
    pub stats: DeliveryStats,

    /// Human-readable log of successful unloads
    history: Vec<String>,
}

impl SimWorld {
    fn new_internal(
        depot: SimDepot,
        rules: Vec<(GrainKind, AmountRule)>,
        rng: Option<StdRng>,
    ) -> Result<Self> {
        for (kind, rule) in &rules {
            rule.validate()
                .with_context(|| format!("invalid amount rule for {}", kind))?;
        }
        for (index, (kind, _)) in rules.iter().enumerate() {
            if rules[..index].iter().any(|(earlier, _)| earlier == kind) {
                anyhow::bail!("duplicate amount rule for {}", kind);
            }
        }
        Ok(Self {
            depot,
            rules,
            rng,
            stats: DeliveryStats::new(),
            history: Vec::new(),
        })
    }

    pub fn new(depot: SimDepot, rules: Vec<(GrainKind, AmountRule)>) -> Result<Self> {
        Self::new_internal(depot, rules, None)
    }

    /// Create a world with a seeded RNG for reproducible simulations
    pub fn new_with_seed(
        depot: SimDepot,
        rules: Vec<(GrainKind, AmountRule)>,
        seed: u64,
    ) -> Result<Self> {
        Self::new_internal(depot, rules, Some(StdRng::seed_from_u64(seed)))
    }

    /// Choose a random element from a slice, using seeded RNG if available
    fn choose_random<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    /// Resolve the tonnage for one unload of the given rule
    fn resolve_amount(&mut self, rule: &AmountRule) -> u32 {
        match rule {
            AmountRule::Fixed(amount) => *amount,
            // Validation guarantees a non-empty menu
            AmountRule::OneOf(menu) => *self.choose_random(menu).unwrap_or(&menu[0]),
        }
    }

    /// Trigger an unload of the given kind, amount chosen by its rule
    ///
    /// Errors only on a configuration bug (no rule for the kind); every
    /// delivery-level result is an ordinary `DeliveryOutcome`.
    pub fn unload(&mut self, kind: GrainKind) -> Result<DeliveryOutcome> {
        let rule = self
            .rules
            .iter()
            .find(|(rule_kind, _)| *rule_kind == kind)
            .map(|(_, rule)| rule.clone())
            .with_context(|| format!("no amount rule configured for {}", kind))?;

        let amount = self.resolve_amount(&rule);
        Ok(self.unload_amount(kind, amount))
    }

    /// Trigger an unload with an explicit tonnage
    pub fn unload_amount(&mut self, kind: GrainKind, amount: u32) -> DeliveryOutcome {
        let outcome = self.depot.deliver(kind, amount);
        match outcome {
            DeliveryOutcome::Accepted { bin, amount } => {
                info!("unloaded {}T of {} into bin {}", amount, kind, bin.0);
                self.stats.record_accepted(kind, amount);
                self.history.push(format!("{}: {}T -> bin {}", kind, amount, bin.0));
            }
            DeliveryOutcome::RejectedSystemFull => {
                self.stats.record_system_full();
            }
            DeliveryOutcome::RejectedNoBin { .. } => {
                self.stats.record_no_bin();
            }
        }
        outcome
    }

    /// Trigger an unload of a randomly chosen configured kind
    ///
    /// Used by the headless driver to stand in for key presses.
    pub fn unload_random(&mut self) -> Result<(GrainKind, DeliveryOutcome)> {
        let kinds: Vec<GrainKind> = self.rules.iter().map(|(kind, _)| *kind).collect();
        let kind = *self
            .choose_random(&kinds)
            .context("world has no amount rules configured")?;
        let outcome = self.unload(kind)?;
        Ok((kind, outcome))
    }

    /// The configured (kind, amount rule) pairs, in trigger order
    pub fn rules(&self) -> &[(GrainKind, AmountRule)] {
        &self.rules
    }

    /// Human-readable log of successful unloads, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_status(&self) -> Option<&DeliveryStatus> {
        self.depot.last_status()
    }

    /// Create the pooled-bin world from the classic granary layout:
    /// three open bins of 10/20/10 tons under a 50 ton depot cap, with
    /// fixed unload amounts per kind.
    pub fn create_pooled_world() -> Self {
        Self::build_pooled_world(None)
    }

    /// Pooled world with a seeded RNG for reproducible simulations
    pub fn create_pooled_world_with_seed(seed: u64) -> Self {
        Self::build_pooled_world(Some(seed))
    }

    fn build_pooled_world(seed: Option<u64>) -> Self {
        let bins = vec![SimBin::open(10), SimBin::open(20), SimBin::open(10)];
        let depot = SimDepot::new(bins, Some(50)).expect("pooled preset is a valid depot");
        let rules = GrainKind::ALL
            .iter()
            .zip(POOLED_AMOUNTS)
            .map(|(kind, amount)| (*kind, AmountRule::Fixed(amount)))
            .collect();
        let world = match seed {
            Some(seed) => Self::new_with_seed(depot, rules, seed),
            None => Self::new(depot, rules),
        };
        world.expect("pooled preset is a valid world")
    }

    /// Create the dedicated-bin world: one 50 ton bin per kind, no depot
    /// cap, unload amounts drawn from a small menu.
    pub fn create_dedicated_world() -> Self {
        Self::build_dedicated_world(None)
    }

    /// Dedicated world with a seeded RNG for reproducible simulations
    pub fn create_dedicated_world_with_seed(seed: u64) -> Self {
        Self::build_dedicated_world(Some(seed))
    }

    fn build_dedicated_world(seed: Option<u64>) -> Self {
        let bins = GrainKind::ALL
            .iter()
            .map(|kind| SimBin::dedicated(50, *kind))
            .collect();
        let depot = SimDepot::new(bins, None).expect("dedicated preset is a valid depot");
        let rules = GrainKind::ALL
            .iter()
            .map(|kind| (*kind, AmountRule::OneOf(DEDICATED_AMOUNT_MENU.to_vec())))
            .collect();
        let world = match seed {
            Some(seed) => Self::new_with_seed(depot, rules, seed),
            None => Self::new(depot, rules),
        };
        world.expect("dedicated preset is a valid world")
    }

    pub fn print_summary(&self) {
        println!("=== Granary Simulation Summary ===");
        println!(
            "Bins: {}, Granary total: {}/{}T",
            self.depot.bin_count(),
            self.depot.total_quantity(),
            self.depot.effective_capacity()
        );
        if let Some(cap) = self.depot.system_capacity_max() {
            println!("Depot cap: {}T (bin capacities sum to {}T)", cap, self.depot.capacity_sum());
        }
        println!();

        println!("--- Bins ---");
        for (index, bin) in self.depot.bins().iter().enumerate() {
            let kind = match bin.assigned_kind() {
                Some(kind) => kind.to_string(),
                None => "(unassigned)".to_string(),
            };
            println!(
                "  Bin {}: {} {}/{}T{}",
                index,
                kind,
                bin.quantity(),
                bin.capacity_max(),
                if bin.is_full() { " [FULL]" } else { "" }
            );
        }
        println!();

        println!("{}", self.stats.summary());
        if let Some(status) = self.last_status() {
            println!(
                "Last delivery: {} {}",
                if status.success { "OK -" } else { "REJECTED -" },
                status.message
            );
        }
    }

    /// Draw the bin fill levels in the terminal
    pub fn draw_bins(&self) {
        const BAR_WIDTH: usize = 20;

        for (index, bin) in self.depot.bins().iter().enumerate() {
            let filled = (bin.fill_fraction() * BAR_WIDTH as f32).round() as usize;
            let filled = filled.min(BAR_WIDTH);
            let bar: String = std::iter::repeat('#')
                .take(filled)
                .chain(std::iter::repeat('.').take(BAR_WIDTH - filled))
                .collect();
            let label = match bin.assigned_kind() {
                Some(kind) => kind.to_string(),
                None => "-".to_string(),
            };
            println!(
                "  Bin {} [{}] {:>3}/{}T {}",
                index,
                bar,
                bin.quantity(),
                bin.capacity_max(),
                label
            );
        }
    }
}
