// World clock constants
pub const SEASON_BLOCKS: u64 = 512; // blocks per season
pub const COOLDOWN_BLOCKS: u64 = 48; // minimum blocks between casts per angler

// Bait credit constants
pub const BAIT_CREDIT_BASE: u64 = 75; // base of the bait-credit formula
pub const PER_CAST_CAP: u64 = 75; // hard ceiling on credits awarded per cast
pub const PER_CATCH_CLAIM: u64 = 75; // claim units reserved per cast against the seasonal cap
pub const SEASON_CAP: u64 = 750; // claim units available per angler per season (10 casts)

// Lake registry constants
pub const MAX_SLOTS: usize = 96;
pub const SPECIES_COUNT: usize = 12;

// Rarity draw range: 0.85 + unit_draw * 0.30 => [0.85, 1.15)
pub const RARITY_BASE: f64 = 0.85;
pub const RARITY_SPREAD: f64 = 0.30;

// Defensive clamp bounds applied at Fish construction
pub const RARITY_MIN: f64 = 0.5;
pub const RARITY_MAX: f64 = 1.5;
