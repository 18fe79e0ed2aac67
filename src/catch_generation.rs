//! Cast resolution: turns a slot plus the current conditions into a
//! finalized fish and its awarded bait credits.
//!
//! The pipeline order is fixed: weight-bucket draw, multiplier composition,
//! species-bound clamp, rarity draw, per-cast cap. The two mixer draws
//! (weight first, rarity second) are part of the reproducibility contract;
//! reordering them changes every outcome for a given seed.

use crate::conditions::{TackleType, WeatherCondition};
use crate::constants::{PER_CAST_CAP, RARITY_BASE, RARITY_SPREAD};
use crate::fish::Fish;
use crate::lake::CatchSlot;
use crate::mixer::CastMixer;
use crate::seasons::SeasonPhase;

/// Outcome of one resolution run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCatch {
    pub fish: Fish,
    /// Credits to award, already clamped to the per-cast cap.
    pub bait_credits: u64,
}

/// Resolves a cast deterministically.
///
/// A fresh mixer is seeded from the lake's base seed and mixed exactly once
/// with the cast's identity; that single mix is what makes the draws depend
/// on who cast where and when, rather than on the base seed alone.
pub fn resolve_catch(
    base_seed: u64,
    block: u64,
    angler: &str,
    slot: &CatchSlot,
    season_index: u64,
    weather: WeatherCondition,
    tackle: TackleType,
) -> ResolvedCatch {
    let mut mixer = CastMixer::new(base_seed);
    mixer.mix(block, &slot.id, angler, slot.species.index() as u64);

    // Draw 1: bucketed weight against the slot's ceiling, then a safety
    // clamp into the species bounds (the bucket already respects the slot).
    let drawn_grams = mixer.weight_bucket(slot.max_weight_grams).clamp(
        slot.species.min_weight_grams(),
        slot.species.max_weight_grams(),
    );

    let season_bonus = SeasonPhase::from_season_index(season_index).species_bonus(slot.species);
    let adjusted_grams =
        (drawn_grams as f64 * season_bonus * weather.multiplier() * tackle.multiplier()).floor()
            as u32;

    // Draw 2: rarity in [0.85, 1.15), independent of weight.
    let rarity = RARITY_BASE + mixer.next_double() * RARITY_SPREAD;

    // Construction re-clamps weight and rarity.
    let fish = Fish::new(slot.species, adjusted_grams, rarity);

    // The formula can exceed the cap for large rare fish; the cap is
    // authoritative for ledger purposes and the excess is discarded.
    let bait_credits = fish.bait_credits().min(PER_CAST_CAP);

    ResolvedCatch { fish, bait_credits }
}
