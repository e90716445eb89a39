use crate::random::ParticleRng;

/// Emission angles for a burst of `count` particles
///
/// With `random_spacing` every angle is drawn uniformly from `[min, max)`.
/// Otherwise the angles run evenly from `min` to `max` inclusive; a single
/// particle is placed at `min`.
pub fn emission_angles(
    rng: &mut ParticleRng,
    count: usize,
    min: f32,
    max: f32,
    random_spacing: bool,
) -> Vec<f32> {
    if random_spacing {
        return (0..count).map(|_| rng.random_float(min, max)).collect();
    }

    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let last = (count - 1) as f32;
            (0..count)
                .map(|i| min + (max - min) * (i as f32 / last))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_spacing_is_arithmetic() {
        let mut rng = ParticleRng::seeded(1);
        for count in 2..40 {
            let angles = emission_angles(&mut rng, count, 0.5, 3.5, false);
            assert_eq!(angles.len(), count);

            let step = 3.0 / (count - 1) as f32;
            for (i, angle) in angles.iter().enumerate() {
                let expected = 0.5 + step * i as f32;
                assert!((angle - expected).abs() < 1e-5, "count {} index {}", count, i);
            }
            assert!((angles[count - 1] - 3.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_single_even_particle_sits_at_min() {
        let mut rng = ParticleRng::seeded(1);
        assert_eq!(emission_angles(&mut rng, 1, 1.25, 2.0, false), vec![1.25]);
        assert!(emission_angles(&mut rng, 0, 1.25, 2.0, false).is_empty());
    }

    #[test]
    fn test_random_spacing_within_range() {
        let mut rng = ParticleRng::seeded(99);
        for count in 1..50 {
            let angles = emission_angles(&mut rng, count, -1.0, 1.0, true);
            assert_eq!(angles.len(), count);
            assert!(angles.iter().all(|a| (-1.0..1.0).contains(a)));
        }
    }
}
