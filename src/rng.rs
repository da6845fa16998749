use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

/// The single process-global source of randomness, made explicit as an
/// injectable handle instead of a hidden global (design note: "the one
/// genuinely process-global entity is the PRNG — inject it as a
/// seedable handle into the few call-sites that sample").
///
/// Every call site that draws randomness — affine generation, pool
/// warm-up, per-step map choice, the `julia` variation's τ ∈ {0, π} —
/// takes `&mut PrngHandle` rather than reaching for a thread-local.
pub struct PrngHandle(StdRng);

impl PrngHandle {
    /// Seeds from OS entropy, mirroring the original's `srand(time(0))`
    /// without the wall-clock-collision weakness of seeding from the
    /// second.
    pub fn from_entropy() -> Self {
        PrngHandle(StdRng::from_entropy())
    }

    /// Deterministic seeding for tests.
    pub fn from_seed(seed: u64) -> Self {
        PrngHandle(StdRng::seed_from_u64(seed))
    }

    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.gen_range(lo..hi)
    }

    pub fn index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }

    pub fn byte(&mut self) -> u8 {
        self.0.gen()
    }

    pub fn bool(&mut self) -> bool {
        self.0.gen()
    }
}
