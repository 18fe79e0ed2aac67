//! Deterministic per-cast mixer.
//!
//! Not cryptographic. The engine needs reproducible, well-distributed draws:
//! the same `(base seed, block, slot, angler, species)` tuple must always
//! produce the same catch, across runs and platforms. A fresh mixer is built
//! for every cast from the lake's base seed, then `mix` folds the cast's
//! identity into the state exactly once before any draw.
//!
//! The constants and the draw order are part of the compatibility contract.
//! Changing either silently changes every resolved catch for a given seed.

use sha2::{Digest, Sha256};

/// Large odd multiplier folding the block number into the state.
const BLOCK_MULT: u64 = 0x9E37_79B9_7F4A_7C15;
/// Multiplier folding the species ordinal into the state.
const SPECIES_MULT: u64 = 0xC2B2_AE3D_27D4_EB4F;
/// Linear-congruential step constants (Knuth MMIX).
const LCG_MULT: u64 = 6364136223846793005;
const LCG_INC: u64 = 1442695040888963407;

/// Weight-bucket percentile thresholds and the integer percent of the slot
/// maximum each bucket yields. Deliberately skewed: most catches are small,
/// a fifth land near the slot's ceiling. Integer math keeps the mapping
/// exact; `max * 0.97` in floats can floor one gram short.
const WEIGHT_BUCKETS: [(u64, u64); 4] = [(15, 25), (45, 55), (80, 82), (100, 97)];

/// Seeded pseudo-random source for a single cast.
#[derive(Debug, Clone, Copy)]
pub struct CastMixer {
    state: u64,
}

impl CastMixer {
    /// Creates a mixer from the lake's 64-bit base seed.
    pub const fn new(base_seed: u64) -> Self {
        Self { state: base_seed }
    }

    /// Folds a cast's identity into the state.
    ///
    /// Pure with respect to its inputs: the same five values always yield the
    /// same state. The avalanche finalizer diffuses single-bit input changes
    /// across all 64 bits, so adjacent blocks or similarly named slots still
    /// draw unrelated catches.
    pub fn mix(&mut self, block: u64, slot_id: &str, angler: &str, species_index: u64) {
        let mut s = self.state;
        s = s.wrapping_add(block.wrapping_mul(BLOCK_MULT));
        s ^= hash_str(slot_id);
        s ^= hash_str(angler);
        s = s.wrapping_add(species_index.wrapping_mul(SPECIES_MULT));
        self.state = avalanche(s);
    }

    fn step(&mut self) {
        self.state = self.state.wrapping_mul(LCG_MULT).wrapping_add(LCG_INC);
    }

    /// Advances the state and returns a value in `[0, bound)`.
    ///
    /// A zero bound returns zero rather than panicking; the caller-facing
    /// contract is that this never raises. The state still advances so the
    /// draw sequence stays aligned.
    pub fn next_int(&mut self, bound: u64) -> u64 {
        self.step();
        if bound == 0 {
            return 0;
        }
        (self.state >> 33) % bound
    }

    /// Advances the state and returns a value in `[0, 1)` built from the top
    /// 53 bits of state (full f64 mantissa width).
    pub fn next_double(&mut self) -> f64 {
        self.step();
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Draws a weight in grams as a bucketed fraction of `max_grams`.
    ///
    /// Percentile buckets: `<15 → 25%`, `<45 → 55%`, `<80 → 82%`,
    /// otherwise `97%` of the maximum.
    pub fn weight_bucket(&mut self, max_grams: u32) -> u32 {
        let percentile = self.next_int(100);
        let percent = WEIGHT_BUCKETS
            .iter()
            .find(|(threshold, _)| percentile < *threshold)
            .map(|(_, percent)| *percent)
            .unwrap_or(97);
        (max_grams as u64 * percent / 100) as u32
    }
}

/// Derives a 64-bit base seed from raw seed bytes: first 8 bytes, big-endian,
/// zero-padded when the buffer is shorter.
pub fn base_seed_from_bytes(seed: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    for (dst, src) in buf.iter_mut().zip(seed.iter()) {
        *dst = *src;
    }
    u64::from_be_bytes(buf)
}

/// Stable 64-bit string hash: SHA-256 truncated to its first 8 bytes,
/// big-endian. Stability across runs matters here, `std`'s `DefaultHasher`
/// makes no such promise.
fn hash_str(s: &str) -> u64 {
    let digest = Sha256::digest(s.as_bytes());
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(buf)
}

/// SplitMix64 finalizer: xor-shift / multiply avalanche.
fn avalanche(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
