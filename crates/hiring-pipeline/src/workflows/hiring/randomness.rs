use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of equally likely outcomes drawn for one contact attempt.
pub const CONTACT_OUTCOMES: u32 = 3;
/// The single outcome out of [`CONTACT_OUTCOMES`] that counts as a reached candidate.
pub const CONTACT_SUCCESS_OUTCOME: u32 = 1;

/// Source of every random draw a run consumes.
pub trait RandomSource {
    /// Draws a value uniformly from `[low, high)`. Callers guarantee `low < high`
    /// and a finite `high - low`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draws an integer uniformly from `0..outcomes`. Callers guarantee `outcomes > 0`.
    fn discrete(&mut self, outcomes: u32) -> u32;
}

/// One contact attempt: a draw from `{0, 1, 2}` that succeeds only on `1`.
pub fn contact_attempt_succeeds<R>(rng: &mut R) -> bool
where
    R: RandomSource + ?Sized,
{
    rng.discrete(CONTACT_OUTCOMES) == CONTACT_SUCCESS_OUTCOME
}

/// Production source backed by a [`StdRng`].
#[derive(Debug, Clone)]
pub struct EntropySource {
    rng: StdRng,
    seed: Option<u64>,
}

impl EntropySource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for EntropySource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.random_range(low..high)
    }

    fn discrete(&mut self, outcomes: u32) -> u32 {
        self.rng.random_range(0..outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat_their_sequence() {
        let mut a = EntropySource::seeded(42);
        let mut b = EntropySource::seeded(42);
        for _ in 0..50 {
            assert_eq!(a.uniform(1800.0, 2200.0), b.uniform(1800.0, 2200.0));
            assert_eq!(a.discrete(3), b.discrete(3));
        }
        assert_eq!(a.seed(), Some(42));
        assert_eq!(EntropySource::from_entropy().seed(), None);
    }

    #[test]
    fn draws_stay_inside_their_ranges() {
        let mut rng = EntropySource::seeded(7);
        for _ in 0..1_000 {
            let value = rng.uniform(1800.0, 2200.0);
            assert!((1800.0..2200.0).contains(&value));
            assert!(rng.discrete(CONTACT_OUTCOMES) < CONTACT_OUTCOMES);
        }
    }

    #[test]
    fn contact_success_rate_is_near_one_third() {
        let mut rng = EntropySource::seeded(2024);
        let trials = 30_000;
        let successes = (0..trials)
            .filter(|_| contact_attempt_succeeds(&mut rng))
            .count();
        let rate = successes as f64 / trials as f64;
        assert!((0.30..0.36).contains(&rate), "observed rate {rate}");
    }
}
