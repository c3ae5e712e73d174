//! Ready-made particle sets for the visualizer and the benchmark

use crate::particle::Particle;
use rand::Rng;

/// Particle count used by the benchmark scenario
pub const BENCHMARK_PARTICLES: usize = 100;

/// Interval passed to a single benchmark `evolve`
pub const BENCHMARK_INTERVAL: f64 = 0.1;

/// Interval evolved per animation frame
pub const FRAME_INTERVAL: f64 = 0.01;

/// Three particles orbiting at different radii, speeds and directions
pub fn demo_particles() -> Vec<Particle> {
    vec![
        Particle::new(0.3, 0.5, 1.0),
        Particle::new(0.0, -0.5, -1.0),
        Particle::new(-0.1, -0.4, 3.0),
    ]
}

/// `count` particles with coordinates and angular velocity drawn from `[-1, 1]`
///
/// A draw that lands exactly on the origin is repeated.
pub fn random_particles<R: Rng>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| loop {
            let x = rng.random_range(-1.0..=1.0);
            let y = rng.random_range(-1.0..=1.0);
            if x != 0.0 || y != 0.0 {
                break Particle::new(x, y, rng.random_range(-1.0..=1.0));
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_particles() {
        let particles = demo_particles();
        assert_eq!(particles.len(), 3);
        assert!(particles.iter().all(|p| p.radius() > 0.0));
        assert_eq!(particles[1].angular_velocity, -1.0);
    }

    #[test]
    fn test_random_particles_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let particles = random_particles(BENCHMARK_PARTICLES, &mut rng);
        assert_eq!(particles.len(), BENCHMARK_PARTICLES);
        for p in &particles {
            assert!((-1.0..=1.0).contains(&p.x()));
            assert!((-1.0..=1.0).contains(&p.y()));
            assert!((-1.0..=1.0).contains(&p.angular_velocity));
            assert!(p.radius() > 0.0);
        }
    }

    #[test]
    fn test_random_particles_seeded() {
        let a = random_particles(10, &mut StdRng::seed_from_u64(7));
        let b = random_particles(10, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
