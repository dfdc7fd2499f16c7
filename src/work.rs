use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

use crate::config::WorkConfig;

/// Result of a single simulated work draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkOutcome {
    /// How long the handler should sleep, in seconds
    pub duration_seconds: f64,
    /// Whether the injected failure branch was taken
    pub failed: bool,
}

/// Chaos source for the /simulate-work endpoint
///
/// Draws a uniform delay from the configured range and decides whether to
/// inject a failure. Seedable so tests can pin the sequence.
pub struct WorkSimulator {
    min_delay: f64,
    max_delay: f64,
    error_rate: f64,
    rng: Mutex<StdRng>,
}

impl WorkSimulator {
    pub fn new(cfg: &WorkConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            min_delay: cfg.min_delay_seconds,
            max_delay: cfg.max_delay_seconds,
            error_rate: cfg.error_rate,
            rng: Mutex::new(rng),
        }
    }

    /// Draw the next outcome
    ///
    /// The lock is held only for the two RNG samples, never across an await.
    pub fn draw(&self) -> WorkOutcome {
        let mut rng = self.rng.lock().expect("work simulator rng poisoned");

        let duration_seconds = rng.gen_range(self.min_delay..=self.max_delay);
        let failed = rng.gen::<f64>() < self.error_rate;

        WorkOutcome {
            duration_seconds,
            failed,
        }
    }
}
