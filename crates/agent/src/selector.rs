//! Response selectors

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use concierge_core::ResponseSelector;

/// Uniform random choice, each call independent of the previous ones
pub struct RandomSelector {
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of choices
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector for RandomSelector {
    fn select<'a>(&self, responses: &'a [String]) -> Option<&'a str> {
        let mut rng = self.rng.lock();
        responses.choose(&mut *rng).map(String::as_str)
    }
}

/// Always the first response
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstResponseSelector;

impl ResponseSelector for FirstResponseSelector {
    fn select<'a>(&self, responses: &'a [String]) -> Option<&'a str> {
        responses.first().map(String::as_str)
    }
}
