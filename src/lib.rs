//! Baitline — deterministic fishery ledger simulation engine.
//!
//! Anglers cast lines into named slots on a shared lake; a seeded mixing
//! function resolves species, weight and rarity; the result is converted
//! into a capped per-season bait credit. All randomness is reproducible:
//! the same seed, clock and cast identity always land the same fish.
//!
//! The crate is the engine only. Persistence, transports and presentation
//! belong to embedders, which drive [`Engine::cast_line`] and read immutable
//! [`fish::CatchRecord`]s back out.

pub mod angler;
pub mod catch_generation;
pub mod conditions;
pub mod constants;
pub mod engine;
pub mod fish;
pub mod lake;
pub mod mixer;
pub mod seasons;
pub mod species;

pub use angler::Angler;
pub use conditions::{TackleType, WeatherCondition};
pub use engine::{CastError, CastSuccess, Engine};
pub use fish::{CatchRecord, Fish};
pub use lake::{CatchSlot, Lake};
pub use seasons::SeasonPhase;
pub use species::FishSpecies;
