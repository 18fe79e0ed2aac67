//! Season phases and the per-species season bonus matrix.
//!
//! The world clock derives a season index from the block counter; the phase
//! is `season_index % 4`. Each phase carries a 12-entry bonus row, one
//! integer percent per species, applied as `value / 100.0` during resolution.

use serde::{Deserialize, Serialize};

use crate::constants::SPECIES_COUNT;
use crate::species::FishSpecies;

/// One of the four repeating season phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonPhase {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Per-phase, per-species catch bonus in integer percent.
///
/// Rows follow `SeasonPhase` order, columns follow species ordinal order.
const SEASON_BONUS_PERCENT: [[u32; SPECIES_COUNT]; 4] = [
    // Spring: spawn runs favor bass, carp and trout
    [112, 108, 104, 110, 106, 95, 102, 88, 96, 104, 100, 90],
    // Summer: warm-water feeders peak, salmon slow down
    [105, 96, 98, 108, 110, 90, 112, 106, 92, 108, 96, 110],
    // Autumn: salmon and pike runs
    [98, 110, 108, 100, 102, 115, 104, 98, 105, 96, 108, 95],
    // Winter: cod is the only species that likes the cold
    [85, 95, 102, 88, 90, 108, 86, 92, 112, 82, 95, 85],
];

impl SeasonPhase {
    /// Maps a monotonically increasing season index onto the 4-phase cycle.
    pub const fn from_season_index(season_index: u64) -> Self {
        match season_index % 4 {
            0 => SeasonPhase::Spring,
            1 => SeasonPhase::Summer,
            2 => SeasonPhase::Autumn,
            _ => SeasonPhase::Winter,
        }
    }

    /// Multiplicative catch bonus for a species during this phase.
    pub fn species_bonus(self, species: FishSpecies) -> f64 {
        SEASON_BONUS_PERCENT[self as usize][species.index()] as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::ALL_SPECIES;

    #[test]
    fn test_phase_cycle_repeats_every_four_seasons() {
        assert_eq!(SeasonPhase::from_season_index(0), SeasonPhase::Spring);
        assert_eq!(SeasonPhase::from_season_index(1), SeasonPhase::Summer);
        assert_eq!(SeasonPhase::from_season_index(2), SeasonPhase::Autumn);
        assert_eq!(SeasonPhase::from_season_index(3), SeasonPhase::Winter);
        assert_eq!(SeasonPhase::from_season_index(4), SeasonPhase::Spring);
        assert_eq!(SeasonPhase::from_season_index(513), SeasonPhase::Summer);
    }

    #[test]
    fn test_bonus_rows_cover_every_species() {
        let phases = [
            SeasonPhase::Spring,
            SeasonPhase::Summer,
            SeasonPhase::Autumn,
            SeasonPhase::Winter,
        ];
        for phase in phases {
            for species in ALL_SPECIES {
                let bonus = phase.species_bonus(species);
                assert!(
                    (0.5..=1.5).contains(&bonus),
                    "{:?}/{:?} bonus {} outside sane range",
                    phase,
                    species,
                    bonus
                );
            }
        }
    }

    #[test]
    fn test_winter_favors_cod() {
        let winter = SeasonPhase::Winter;
        assert!(winter.species_bonus(FishSpecies::Cod) > 1.0);
        assert!(winter.species_bonus(FishSpecies::Bass) < 1.0);
    }
}
