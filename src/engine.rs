//! The engine orchestrator: wires the lake, the anglers and the resolution
//! pipeline into a single `cast_line` operation plus side-effect-free read
//! queries and leaderboards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::angler::Angler;
use crate::catch_generation::resolve_catch;
use crate::conditions::{TackleType, WeatherCondition};
use crate::fish::CatchRecord;
use crate::lake::{CatchSlot, Lake};
use crate::species::FishSpecies;

/// Recoverable cast failures. Both are expected outcomes, not exceptional
/// conditions; the caller may retry with different input or after time
/// advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CastError {
    /// The slot id is unknown or the slot is not filled.
    #[error("slot is empty or unknown")]
    SlotEmpty,
    /// The angler is cooling down or has exhausted the seasonal claim cap.
    #[error("cooldown active or seasonal cap reached")]
    CooldownOrCap,
}

/// Result of a successful cast.
#[derive(Debug, Clone, PartialEq)]
pub struct CastSuccess {
    pub record: CatchRecord,
    /// Credits actually awarded, post per-cast cap.
    pub bait_credits: u64,
}

/// The whole fishery world: lake, anglers, running totals.
///
/// Single-threaded and synchronous. Embedders in concurrent hosts must wrap
/// each `cast_line` call in one exclusive-access section; the operation
/// reads then writes angler state, global counters and the clock as one
/// consistent snapshot and must not be interleaved with another cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engine {
    lake: Lake,
    anglers: HashMap<String, Angler>,
    angler_order: Vec<String>,
    total_casts: u64,
    total_bait_claimed: u64,
}

impl Engine {
    /// Builds an engine with the default 18-slot starter lake.
    pub fn new(genesis_block: u64, catch_seed: &[u8]) -> Self {
        Self::with_slots(genesis_block, catch_seed, Lake::default_slots(genesis_block))
    }

    /// Builds an engine with a caller-supplied starter slot set.
    pub fn with_slots(genesis_block: u64, catch_seed: &[u8], slots: Vec<CatchSlot>) -> Self {
        let mut lake = Lake::new(genesis_block, catch_seed);
        for slot in slots {
            lake.enlist_slot(slot);
        }
        Self {
            lake,
            anglers: HashMap::new(),
            angler_order: Vec::new(),
            total_casts: 0,
            total_bait_claimed: 0,
        }
    }

    /// Casts a line for `angler_address` into `slot_id`.
    ///
    /// On success every side effect lands together: the angler's ledger and
    /// history, the global totals, and a one-block clock advance (a cast
    /// consumes one block). On failure nothing changes beyond the season
    /// rollover folded into the eligibility check.
    pub fn cast_line(
        &mut self,
        angler_address: &str,
        slot_id: &str,
        weather: WeatherCondition,
        tackle: TackleType,
    ) -> Result<CastSuccess, CastError> {
        let block = self.lake.current_block();
        let season = self.lake.current_season();

        let angler = self.angler_entry(angler_address);
        if !angler.check_eligibility(block, season) {
            debug!(angler = angler_address, slot = slot_id, block, "cast rejected: rate limit");
            return Err(CastError::CooldownOrCap);
        }

        let slot = match self.lake.slot(slot_id) {
            Some(slot) if slot.filled => slot,
            _ => {
                debug!(angler = angler_address, slot = slot_id, "cast rejected: empty slot");
                return Err(CastError::SlotEmpty);
            }
        };

        let resolved = resolve_catch(
            self.lake.base_seed(),
            block,
            angler_address,
            slot,
            season,
            weather,
            tackle,
        );
        let record = CatchRecord {
            block,
            slot_id: slot.id.clone(),
            fish: resolved.fish,
            bait_credits: resolved.bait_credits,
            weather,
            tackle,
        };
        debug!(
            angler = angler_address,
            slot = slot_id,
            block,
            species = record.fish.species().display_name(),
            grams = record.fish.weight_grams(),
            credits = record.bait_credits,
            "cast resolved"
        );

        self.angler_entry(angler_address).record_catch(record.clone());
        self.total_casts += 1;
        self.total_bait_claimed += resolved.bait_credits;
        self.lake.advance_blocks(1);

        Ok(CastSuccess {
            record,
            bait_credits: resolved.bait_credits,
        })
    }

    fn angler_entry(&mut self, address: &str) -> &mut Angler {
        let order = &mut self.angler_order;
        self.anglers.entry(address.to_string()).or_insert_with(|| {
            order.push(address.to_string());
            Angler::new(address)
        })
    }

    // ---- time control ----

    pub fn advance_blocks(&mut self, n: u64) {
        self.lake.advance_blocks(n);
    }

    pub fn advance_season(&mut self) {
        self.lake.advance_season();
    }

    // ---- read queries (side-effect free) ----

    pub fn current_block(&self) -> u64 {
        self.lake.current_block()
    }

    pub fn current_season(&self) -> u64 {
        self.lake.current_season()
    }

    pub fn total_casts(&self) -> u64 {
        self.total_casts
    }

    pub fn total_bait_claimed(&self) -> u64 {
        self.total_bait_claimed
    }

    pub fn lake(&self) -> &Lake {
        &self.lake
    }

    /// Adds a slot to the lake after genesis. Same rejection rules as the
    /// registry: unfilled, duplicate or over-capacity slots report `false`.
    pub fn enlist_slot(&mut self, slot: CatchSlot) -> bool {
        self.lake.enlist_slot(slot)
    }

    pub fn angler(&self, address: &str) -> Option<&Angler> {
        self.anglers.get(address)
    }

    pub fn angler_balance(&self, address: &str) -> u64 {
        self.anglers.get(address).map_or(0, Angler::bait_balance)
    }

    pub fn angler_history(&self, address: &str) -> &[CatchRecord] {
        self.anglers.get(address).map_or(&[], Angler::history)
    }

    pub fn angler_species_breakdown(&self, address: &str) -> Vec<(FishSpecies, u64)> {
        self.anglers
            .get(address)
            .map_or_else(Vec::new, Angler::species_breakdown)
    }

    pub fn angler_total_weight_grams(&self, address: &str) -> u64 {
        self.anglers
            .get(address)
            .map_or(0, Angler::total_weight_grams)
    }

    /// Top `n` anglers by bait balance: descending balance, ties broken by
    /// ascending address so the ordering is fully deterministic.
    pub fn top_by_balance(&self, n: usize) -> Vec<(String, u64)> {
        self.ranked(n, Angler::bait_balance)
    }

    /// Top `n` anglers by total landed weight, same tie-break rule.
    pub fn top_by_weight(&self, n: usize) -> Vec<(String, u64)> {
        self.ranked(n, Angler::total_weight_grams)
    }

    fn ranked(&self, n: usize, key: impl Fn(&Angler) -> u64) -> Vec<(String, u64)> {
        let mut rows: Vec<(String, u64)> = self
            .angler_order
            .iter()
            .filter_map(|address| self.anglers.get(address))
            .map(|angler| (angler.address().to_string(), key(angler)))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows.truncate(n);
        rows
    }
}
