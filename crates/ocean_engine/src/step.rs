use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of per-tick percentage increments for processing jobs.
pub trait ProgressStep: Send {
    /// Next increment, always at least 1.
    fn next_step(&mut self) -> u8;
}

/// Uniform increments in `1..=max_step`.
#[derive(Debug, Clone)]
pub struct RandomStep {
    rng: StdRng,
    max_step: u8,
}

impl RandomStep {
    pub fn new(max_step: u8) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_step: max_step.max(1),
        }
    }

    pub fn seeded(seed: u64, max_step: u8) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_step: max_step.max(1),
        }
    }
}

impl ProgressStep for RandomStep {
    fn next_step(&mut self) -> u8 {
        self.rng.gen_range(1..=self.max_step)
    }
}

/// Same increment on every tick.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep(pub u8);

impl ProgressStep for FixedStep {
    fn next_step(&mut self) -> u8 {
        self.0.max(1)
    }
}
