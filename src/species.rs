//! The fixed fish species catalog.
//!
//! Twelve species with dense ordinal indices `0..12`. The ordinal doubles as
//! the row index into the season bonus matrix, so the catalog must stay
//! contiguous if it is ever extended.

use serde::{Deserialize, Serialize};

use crate::constants::SPECIES_COUNT;

/// A catchable fish species with fixed weight bounds in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FishSpecies {
    Bass,
    Trout,
    Pike,
    Carp,
    Perch,
    Salmon,
    Catfish,
    Tuna,
    Cod,
    Eel,
    Sturgeon,
    Marlin,
}

/// All species in ordinal order.
pub const ALL_SPECIES: [FishSpecies; SPECIES_COUNT] = [
    FishSpecies::Bass,
    FishSpecies::Trout,
    FishSpecies::Pike,
    FishSpecies::Carp,
    FishSpecies::Perch,
    FishSpecies::Salmon,
    FishSpecies::Catfish,
    FishSpecies::Tuna,
    FishSpecies::Cod,
    FishSpecies::Eel,
    FishSpecies::Sturgeon,
    FishSpecies::Marlin,
];

impl FishSpecies {
    /// Dense ordinal index, `0..12`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display name for reports and logs.
    pub const fn display_name(self) -> &'static str {
        match self {
            FishSpecies::Bass => "Largemouth Bass",
            FishSpecies::Trout => "Rainbow Trout",
            FishSpecies::Pike => "Northern Pike",
            FishSpecies::Carp => "Common Carp",
            FishSpecies::Perch => "Yellow Perch",
            FishSpecies::Salmon => "Atlantic Salmon",
            FishSpecies::Catfish => "Channel Catfish",
            FishSpecies::Tuna => "Bluefin Tuna",
            FishSpecies::Cod => "Atlantic Cod",
            FishSpecies::Eel => "American Eel",
            FishSpecies::Sturgeon => "Lake Sturgeon",
            FishSpecies::Marlin => "Blue Marlin",
        }
    }

    /// Short lowercase identifier used in slot ids (e.g. `catch_0_bass`).
    pub const fn slug(self) -> &'static str {
        match self {
            FishSpecies::Bass => "bass",
            FishSpecies::Trout => "trout",
            FishSpecies::Pike => "pike",
            FishSpecies::Carp => "carp",
            FishSpecies::Perch => "perch",
            FishSpecies::Salmon => "salmon",
            FishSpecies::Catfish => "catfish",
            FishSpecies::Tuna => "tuna",
            FishSpecies::Cod => "cod",
            FishSpecies::Eel => "eel",
            FishSpecies::Sturgeon => "sturgeon",
            FishSpecies::Marlin => "marlin",
        }
    }

    /// Minimum plausible weight in grams.
    pub const fn min_weight_grams(self) -> u32 {
        match self {
            FishSpecies::Bass => 800,
            FishSpecies::Trout => 400,
            FishSpecies::Pike => 1200,
            FishSpecies::Carp => 1500,
            FishSpecies::Perch => 200,
            FishSpecies::Salmon => 2000,
            FishSpecies::Catfish => 1000,
            FishSpecies::Tuna => 8000,
            FishSpecies::Cod => 1500,
            FishSpecies::Eel => 300,
            FishSpecies::Sturgeon => 5000,
            FishSpecies::Marlin => 9000,
        }
    }

    /// Maximum plausible weight in grams.
    pub const fn max_weight_grams(self) -> u32 {
        match self {
            FishSpecies::Bass => 5200,
            FishSpecies::Trout => 3800,
            FishSpecies::Pike => 7200,
            FishSpecies::Carp => 9500,
            FishSpecies::Perch => 2200,
            FishSpecies::Salmon => 5500,
            FishSpecies::Catfish => 6800,
            FishSpecies::Tuna => 22000,
            FishSpecies::Cod => 4500,
            FishSpecies::Eel => 2800,
            FishSpecies::Sturgeon => 18000,
            FishSpecies::Marlin => 26000,
        }
    }
}
