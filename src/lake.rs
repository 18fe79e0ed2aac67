//! The lake registry and world clock.
//!
//! Holds the bounded set of fishable slots, the seed bytes all cast
//! randomness derives from, and the block/season clock. Slot iteration is
//! insertion-ordered so reports stay deterministic across runs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{MAX_SLOTS, SEASON_BLOCKS};
use crate::mixer::base_seed_from_bytes;
use crate::species::{FishSpecies, ALL_SPECIES};

/// A named fishing spot bound to one species and a maximum weight.
/// Immutable once enlisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchSlot {
    pub id: String,
    pub species: FishSpecies,
    pub max_weight_grams: u32,
    pub enlisted_block: u64,
    pub filled: bool,
}

impl CatchSlot {
    /// A filled slot capped at the species' own maximum weight.
    pub fn for_species(id: String, species: FishSpecies, enlisted_block: u64) -> Self {
        Self {
            id,
            species,
            max_weight_grams: species.max_weight_grams(),
            enlisted_block,
            filled: true,
        }
    }
}

/// The bounded slot collection plus the global clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lake {
    slots: HashMap<String, CatchSlot>,
    slot_order: Vec<String>,
    catch_seed: Vec<u8>,
    block: u64,
    season: u64,
}

impl Lake {
    pub fn new(genesis_block: u64, catch_seed: &[u8]) -> Self {
        Self {
            slots: HashMap::new(),
            slot_order: Vec::new(),
            catch_seed: catch_seed.to_vec(),
            block: genesis_block,
            season: genesis_block / SEASON_BLOCKS,
        }
    }

    /// The default starter lake: 18 slots named `catch_{index}_{slug}` —
    /// one per species in ordinal order, then the first six species again.
    pub fn default_slots(genesis_block: u64) -> Vec<CatchSlot> {
        let mut slots = Vec::with_capacity(18);
        for (index, species) in ALL_SPECIES.iter().chain(ALL_SPECIES[..6].iter()).enumerate() {
            slots.push(CatchSlot::for_species(
                format!("catch_{}_{}", index, species.slug()),
                *species,
                genesis_block,
            ));
        }
        slots
    }

    /// Adds a slot to the lake. Rejected (returning `false`, mutating
    /// nothing) when the slot is unfilled, the id already exists, or the
    /// lake is at capacity.
    pub fn enlist_slot(&mut self, slot: CatchSlot) -> bool {
        if !slot.filled {
            warn!(slot = %slot.id, "rejected enlistment: slot not filled");
            return false;
        }
        if self.slots.contains_key(&slot.id) {
            warn!(slot = %slot.id, "rejected enlistment: duplicate id");
            return false;
        }
        if self.slots.len() >= MAX_SLOTS {
            warn!(slot = %slot.id, "rejected enlistment: lake at capacity");
            return false;
        }
        self.slot_order.push(slot.id.clone());
        self.slots.insert(slot.id.clone(), slot);
        true
    }

    pub fn slot(&self, id: &str) -> Option<&CatchSlot> {
        self.slots.get(id)
    }

    /// Slot ids in enlistment order.
    pub fn slot_ids(&self) -> &[String] {
        &self.slot_order
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// 64-bit mixer seed derived from the stored seed bytes.
    pub fn base_seed(&self) -> u64 {
        base_seed_from_bytes(&self.catch_seed)
    }

    pub fn current_block(&self) -> u64 {
        self.block
    }

    pub fn current_season(&self) -> u64 {
        self.season
    }

    /// Advances the block counter by `n` and re-derives the season.
    ///
    /// The season is the max of its current value and `block / SEASON_BLOCKS`:
    /// it never moves backward, so a manual `advance_season` is never undone
    /// by a later block-derived recompute.
    pub fn advance_blocks(&mut self, n: u64) {
        self.block += n;
        let derived = self.block / SEASON_BLOCKS;
        if derived > self.season {
            info!(season = derived, block = self.block, "season rollover");
            self.season = derived;
        }
    }

    /// Forces the season forward by one, independent of the block counter.
    pub fn advance_season(&mut self) {
        self.season += 1;
        info!(season = self.season, block = self.block, "season forced forward");
    }
}
