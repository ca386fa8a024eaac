//! Random source abstraction over the OS entropy generator.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform choice and shuffling, injected into the composer so unit tests
/// can substitute a deterministic source.
pub trait RandomSource {
    /// Pick one byte uniformly from a non-empty pool.
    fn choose(&mut self, pool: &[u8]) -> u8;

    /// Shuffle in place, every permutation equally likely.
    fn shuffle(&mut self, items: &mut [u8]);
}

/// Production source backed by the operating system CSPRNG.
pub struct OsSource;

impl RandomSource for OsSource {
    fn choose(&mut self, pool: &[u8]) -> u8 {
        pool[OsRng.gen_range(0..pool.len())]
    }

    fn shuffle(&mut self, items: &mut [u8]) {
        items.shuffle(&mut OsRng);
    }
}
