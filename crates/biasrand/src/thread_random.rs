use crate::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is cryptographically secure (ChaCha-based), seeded from the
/// operating system and automatically reseeded periodically, so clients of
/// the service cannot predict or seed the numbers they receive.
///
/// Each OS thread has its own RNG instance, so calls from concurrent requests
/// never contend or interfere. This type does **not** store the RNG itself; it
/// is a zero-sized handle that accesses the thread-local generator on each
/// call, which makes it `Send + Sync` and free to clone.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u32> for ThreadRandom {
    fn rand(&self) -> u32 {
        rng().random()
    }
}

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
