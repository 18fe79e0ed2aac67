//! Per-angler ledger state and the cast rate-limiter.
//!
//! Eligibility is a small state machine derived from three stored fields:
//! the last cast block (cooldown), the last season seen (rollover), and the
//! claim units consumed this season (seasonal cap). There is no terminal
//! state; an angler lives for the life of the world and cycles through
//! season rollovers indefinitely.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{COOLDOWN_BLOCKS, PER_CATCH_CLAIM, SEASON_CAP};
use crate::fish::CatchRecord;
use crate::species::{FishSpecies, ALL_SPECIES};

/// A player identity with a bait balance, cooldown state and catch history.
///
/// Created lazily on first reference; `None` season/block fields mean the
/// angler has never advanced a season or cast a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Angler {
    address: String,
    bait_balance: u64,
    last_cast_block: Option<u64>,
    last_season_index: Option<u64>,
    claimed_this_season: u64,
    history: Vec<CatchRecord>,
}

impl Angler {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            bait_balance: 0,
            last_cast_block: None,
            last_season_index: None,
            claimed_this_season: 0,
            history: Vec::new(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn bait_balance(&self) -> u64 {
        self.bait_balance
    }

    pub fn last_cast_block(&self) -> Option<u64> {
        self.last_cast_block
    }

    pub fn claimed_this_season(&self) -> u64 {
        self.claimed_this_season
    }

    pub fn history(&self) -> &[CatchRecord] {
        &self.history
    }

    /// Checks whether a cast may proceed at `(current_block, current_season)`.
    ///
    /// Always applies the season rollover first, even when the check then
    /// fails: entering a new season resets the claim counter exactly once.
    /// A freshly created angler has no season on record and rolls over
    /// immediately on first use. Calling this repeatedly at the same season
    /// never resets the counter twice.
    pub fn check_eligibility(&mut self, current_block: u64, current_season: u64) -> bool {
        self.roll_season(current_season);

        if let Some(last) = self.last_cast_block {
            if current_block < last + COOLDOWN_BLOCKS {
                return false;
            }
        }

        self.claimed_this_season + PER_CATCH_CLAIM <= SEASON_CAP
    }

    fn roll_season(&mut self, current_season: u64) {
        let stale = match self.last_season_index {
            None => true,
            Some(last) => current_season > last,
        };
        if stale {
            debug!(
                angler = %self.address,
                season = current_season,
                "season rollover, claim counter reset"
            );
            self.last_season_index = Some(current_season);
            self.claimed_this_season = 0;
        }
    }

    /// Books a successful cast: bumps the cooldown marker, consumes one claim
    /// unit, credits the (already capped) bait amount and appends the record.
    pub fn record_catch(&mut self, record: CatchRecord) {
        self.last_cast_block = Some(record.block);
        self.claimed_this_season += PER_CATCH_CLAIM;
        self.bait_balance += record.bait_credits;
        self.history.push(record);
    }

    /// Number of catches per species, in ordinal order, zero rows skipped.
    pub fn species_breakdown(&self) -> Vec<(FishSpecies, u64)> {
        let mut counts = [0u64; ALL_SPECIES.len()];
        for record in &self.history {
            counts[record.fish.species().index()] += 1;
        }
        ALL_SPECIES
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(species, count)| (*species, count))
            .collect()
    }

    /// Total weight of everything this angler has landed, in grams.
    pub fn total_weight_grams(&self) -> u64 {
        self.history
            .iter()
            .map(|record| record.fish.weight_grams() as u64)
            .sum()
    }
}
