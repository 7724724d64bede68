//! # Noise Context
//!
//! Everything random about a generation run lives here: the lattice
//! permutation table and the seed that every per-row random stream derives
//! from. A context is built once, then shared read-only by all fill workers.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`Seed`], a context produces **exactly** the same
//! permutation table and the same per-row random streams, no matter how
//! many threads consume them or in which order.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{NoiseError, NoiseResult};

/// Purpose tag for the permutation shuffle stream.
const PERMUTATION_STREAM: u64 = 0x7065_726D;
/// Purpose tag for the per-row pixel streams.
const ROW_STREAM: u64 = 0x726F_7773;

/// Run seed for deterministic generation.
///
/// All randomness in a run derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Draws a seed from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy().next_u64())
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose.
    ///
    /// Uses a hash function to create independent streams from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

/// Lattice permutation table.
///
/// Entries `0..256` are a permutation of `0..=255`; entries `256..512`
/// repeat them so that `perm[i + perm[j]]` never needs a second wrap.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    /// Shuffles `0..=255` uniformly with `rng` and doubles the result.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut half = [0u8; 256];
        for (slot, value) in half.iter_mut().zip(0..=255u8) {
            *slot = value;
        }
        half.shuffle(rng);
        Self::doubled(&half)
    }

    /// Builds the table for a seed.
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.derive(PERMUTATION_STREAM).value());
        Self::from_rng(&mut rng)
    }

    /// Builds the table from an explicit permutation.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidPermutation`] if some value in
    /// `0..=255` is missing or repeated.
    pub fn from_permutation(half: [u8; 256]) -> NoiseResult<Self> {
        let mut seen = [false; 256];
        for &value in &half {
            let slot = &mut seen[usize::from(value)];
            if *slot {
                return Err(NoiseError::InvalidPermutation);
            }
            *slot = true;
        }
        Ok(Self::doubled(&half))
    }

    /// The identity permutation, `perm[i] == i`.
    #[must_use]
    pub fn identity() -> Self {
        let mut half = [0u8; 256];
        for (slot, value) in half.iter_mut().zip(0..=255u8) {
            *slot = value;
        }
        Self::doubled(&half)
    }

    fn doubled(half: &[u8; 256]) -> Self {
        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(half);
        perm[256..].copy_from_slice(half);
        Self { perm }
    }

    /// Gets a permutation value (with automatic wrapping).
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    /// Hashes a lattice corner to a gradient index in `0..12`.
    ///
    /// `ii` and `jj` are the cell coordinates already wrapped to `0..256`.
    #[inline]
    #[must_use]
    pub fn gradient_index(&self, ii: usize, jj: usize) -> usize {
        usize::from(self.get(ii + usize::from(self.get(jj)))) % 12
    }

    /// All 512 entries.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

/// Shared state for one generation run.
///
/// Replaces process-wide random state: the permutation table and the seed
/// travel explicitly into every fill and every lattice evaluation.
#[derive(Clone, Debug)]
pub struct NoiseContext {
    seed: Seed,
    permutation: PermutationTable,
}

impl NoiseContext {
    /// Creates a deterministic context.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let seed = Seed::new(seed);
        Self {
            seed,
            permutation: PermutationTable::from_seed(seed),
        }
    }

    /// Creates a context seeded from operating system entropy.
    ///
    /// Output differs between runs, like a process that reshuffles its
    /// table on every start.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(Seed::from_entropy().value())
    }

    /// Creates a context around an injected table.
    ///
    /// `seed` still drives the per-row pixel streams.
    #[must_use]
    pub fn with_permutation(permutation: PermutationTable, seed: u64) -> Self {
        Self {
            seed: Seed::new(seed),
            permutation,
        }
    }

    /// The run seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// The lattice permutation table.
    #[inline]
    #[must_use]
    pub const fn permutation(&self) -> &PermutationTable {
        &self.permutation
    }

    /// Independent random stream for one image row.
    ///
    /// Each row gets its own ChaCha stream, so rows can be filled on any
    /// thread in any order without sharing a generator.
    #[must_use]
    pub fn row_rng(&self, row: usize) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.derive(ROW_STREAM).value());
        rng.set_stream(row as u64);
        rng
    }
}
