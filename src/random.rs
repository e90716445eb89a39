use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for particle emission
///
/// Wraps a `StdRng` so hosts can seed the system for reproducible effects.
#[derive(Debug, Clone)]
pub struct ParticleRng {
    rng: StdRng,
}

impl ParticleRng {
    /// Create a generator seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform float in `[min, max)`. An empty range yields `min`.
    pub fn random_float(&mut self, min: f32, max: f32) -> f32 {
        if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Uniform integer in `[min, max]`. An inverted range yields `min`.
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if min < max {
            self.rng.gen_range(min..=max)
        } else {
            min
        }
    }
}

impl Default for ParticleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_float_bounds() {
        let mut rng = ParticleRng::seeded(7);
        for _ in 0..10_000 {
            let v = rng.random_float(0.3, 3.0);
            assert!((0.3..3.0).contains(&v), "{} out of range", v);
        }
    }

    #[test]
    fn test_random_int_is_inclusive() {
        let mut rng = ParticleRng::seeded(11);
        let mut seen = [false; 5];
        for _ in 0..10_000 {
            let v = rng.random_int(4, 8);
            assert!((4..=8).contains(&v));
            seen[(v - 4) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every value in [4, 8] should appear");
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = ParticleRng::seeded(3);
        assert_eq!(rng.random_float(0.02, 0.02), 0.02);
        assert_eq!(rng.random_int(5, 5), 5);
        assert_eq!(rng.random_int(9, 2), 9);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = ParticleRng::seeded(42);
        let mut b = ParticleRng::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.random_float(-1.0, 1.0), b.random_float(-1.0, 1.0));
        }
    }
}
