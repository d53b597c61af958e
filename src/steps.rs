use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest value a single draw can take, inclusive.
pub const STEP_MAX: u8 = 9;

/// Source of the per-car random draws. Every call is one independent
/// uniform draw in `[0, STEP_MAX]`.
pub trait StepSource {
    fn draw(&mut self) -> u8;
}

#[derive(Debug)]
pub struct RandomSteps {
    rng: StdRng,
}

impl RandomSteps {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source for replaying a race.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSteps {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSource for RandomSteps {
    fn draw(&mut self) -> u8 {
        self.rng.gen_range(0..=STEP_MAX)
    }
}
