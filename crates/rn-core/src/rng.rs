//! Explicitly threaded RNG for fixture generation.
//!
//! There is no process-wide random state: every generation call takes a
//! `&mut GenRng`.  A run is reproducible from its seed, which is kept on the
//! handle so binaries can log it even when it was drawn from entropy.
//!
//! Per-profile streams are derived with [`GenRng::child`] so that generating
//! one profile never shifts the random sequence of another.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded generator RNG.
///
/// Used only in single-threaded contexts.
pub struct GenRng {
    rng:  SmallRng,
    seed: u64,
}

impl GenRng {
    pub fn new(seed: u64) -> Self {
        GenRng { rng: SmallRng::seed_from_u64(seed), seed }
    }

    /// Draw a fresh seed from the OS and build a generator from it.
    /// The seed stays readable through [`GenRng::seed`].
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this generator was created from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent child stream keyed by `offset`.
    ///
    /// The child seed depends only on the root seed and `offset`, not on how
    /// many values the parent has already produced.
    pub fn child(&self, offset: u64) -> GenRng {
        let child_seed = self.seed ^ offset.wrapping_add(1).wrapping_mul(MIXING_CONSTANT);
        GenRng::new(child_seed)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`WeightedIndex`, `Uniform`, …).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.rng.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.rng)
    }
}
