//! Randomness used by the game model.
//!
//! Transitions are deterministic apart from identity generation and the
//! phrase shuffle; both are routed through [`Entropy`] so tests and replays
//! can pin them down.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use ulid::Ulid;

pub trait Entropy {
    /// A fresh identity, unique for the lifetime of the process
    fn next_id(&mut self) -> String;

    /// Uniformly permute `items` in place
    fn shuffle<T>(&mut self, items: &mut [T]);
}

/// ULIDs and the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn next_id(&mut self) -> String {
        Ulid::new().to_string()
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut rand::rng());
    }
}

/// Reproducible entropy: same seed, same ids, same shuffles
#[derive(Debug, Clone)]
pub struct SeededEntropy {
    rng: StdRng,
    tick: u64,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            tick: 0,
        }
    }
}

impl Entropy for SeededEntropy {
    fn next_id(&mut self) -> String {
        // Monotonic timestamp part keeps ids unique even on a random collision
        self.tick += 1;
        Ulid::from_parts(self.tick, self.rng.random::<u128>()).to_string()
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
