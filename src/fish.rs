//! Caught fish value objects and the immutable catch ledger entry.

use serde::{Deserialize, Serialize};

use crate::conditions::{TackleType, WeatherCondition};
use crate::constants::{BAIT_CREDIT_BASE, RARITY_MAX, RARITY_MIN};
use crate::species::FishSpecies;

/// A resolved catch. Immutable once built; construction clamps weight into
/// the species bounds and rarity into `[0.5, 1.5]` so no out-of-range value
/// can enter a ledger regardless of what resolution arithmetic produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    species: FishSpecies,
    weight_grams: u32,
    rarity: f64,
}

impl Fish {
    pub fn new(species: FishSpecies, weight_grams: u32, rarity: f64) -> Self {
        Self {
            species,
            weight_grams: weight_grams
                .clamp(species.min_weight_grams(), species.max_weight_grams()),
            rarity: rarity.clamp(RARITY_MIN, RARITY_MAX),
        }
    }

    pub fn species(&self) -> FishSpecies {
        self.species
    }

    pub fn weight_grams(&self) -> u32 {
        self.weight_grams
    }

    pub fn rarity(&self) -> f64 {
        self.rarity
    }

    /// Raw bait credits earned by this fish:
    /// `floor(75 * (weight / species max) * rarity)`.
    ///
    /// Uncapped; the orchestrator clamps the awarded amount to the per-cast
    /// cap before it touches any ledger.
    pub fn bait_credits(&self) -> u64 {
        let weight_share = self.weight_grams as f64 / self.species.max_weight_grams() as f64;
        (BAIT_CREDIT_BASE as f64 * weight_share * self.rarity).floor() as u64
    }
}

/// Append-only record of one successful cast. Created by resolution, owned by
/// the angler's history, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchRecord {
    pub block: u64,
    pub slot_id: String,
    pub fish: Fish,
    /// Credits actually awarded, post per-cast cap.
    pub bait_credits: u64,
    pub weather: WeatherCondition,
    pub tackle: TackleType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_clamped_into_species_bounds() {
        let low = Fish::new(FishSpecies::Bass, 10, 1.0);
        assert_eq!(low.weight_grams(), 800);

        let high = Fish::new(FishSpecies::Bass, 1_000_000, 1.0);
        assert_eq!(high.weight_grams(), 5200);

        let mid = Fish::new(FishSpecies::Bass, 3000, 1.0);
        assert_eq!(mid.weight_grams(), 3000);
    }

    #[test]
    fn test_rarity_clamped() {
        assert_eq!(Fish::new(FishSpecies::Cod, 2000, 0.1).rarity(), 0.5);
        assert_eq!(Fish::new(FishSpecies::Cod, 2000, 9.0).rarity(), 1.5);
        assert_eq!(Fish::new(FishSpecies::Cod, 2000, 1.15).rarity(), 1.15);
    }

    #[test]
    fn test_bait_credit_formula() {
        // Max-weight bass at rarity 1.0 earns exactly the base.
        let fish = Fish::new(FishSpecies::Bass, 5200, 1.0);
        assert_eq!(fish.bait_credits(), 75);

        // Half weight, neutral rarity: floor(75 * 0.5) = 37.
        let fish = Fish::new(FishSpecies::Bass, 2600, 1.0);
        assert_eq!(fish.bait_credits(), 37);

        // Large rare fish can exceed the base; the cap is applied elsewhere.
        let fish = Fish::new(FishSpecies::Bass, 5200, 1.5);
        assert_eq!(fish.bait_credits(), 112);
    }
}
