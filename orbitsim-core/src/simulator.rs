use crate::error::Result;
use crate::integrator::{advance, step_count, TIMESTEP};
use crate::particle::Particle;

/// Owns a set of particles and evolves them through time
///
/// The collection is fixed at construction; `evolve` only moves particles,
/// it never adds or removes them.
#[derive(Debug, Clone)]
pub struct Simulator {
    particles: Vec<Particle>,
    elapsed_steps: u64,
}

impl Simulator {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            elapsed_steps: 0,
        }
    }

    /// Advance every particle by `total_time`
    ///
    /// The interval is split into `floor(total_time / TIMESTEP)` sub-steps and
    /// any remainder is not simulated. A finite interval `<= 0` is a no-op.
    /// Returns the number of sub-steps applied.
    ///
    /// # Errors
    ///
    /// - `SimError::NonFiniteInterval` if `total_time` is NaN or infinite
    /// - `SimError::DegenerateParticle` if a particle is at the origin when a
    ///   sub-step starts; the call stops there
    pub fn evolve(&mut self, total_time: f64) -> Result<usize> {
        let steps = step_count(total_time)?;
        log::debug!(
            "evolving {} particles for {} ({} sub-steps)",
            self.particles.len(),
            total_time,
            steps
        );
        advance(&mut self.particles, steps)?;
        self.elapsed_steps += steps as u64;
        Ok(steps)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Simulated time applied by successful `evolve` calls
    ///
    /// Dropped remainders are not counted.
    pub fn elapsed(&self) -> f64 {
        self.elapsed_steps as f64 * TIMESTEP
    }

    pub fn into_particles(self) -> Vec<Particle> {
        self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn test_evolve_returns_step_count() {
        let mut sim = Simulator::new(vec![Particle::new(0.3, 0.5, 1.0)]);
        assert_eq!(sim.evolve(0.1).unwrap(), 10_000);
        assert_eq!(sim.evolve(0.0).unwrap(), 0);
    }

    #[test]
    fn test_elapsed_tracks_applied_steps() {
        let mut sim = Simulator::new(vec![Particle::new(1.0, 0.0, 1.0)]);
        sim.evolve(0.00003).unwrap();
        sim.evolve(0.000025).unwrap();
        assert!((sim.elapsed() - 0.00005).abs() < 1e-15);
    }

    #[test]
    fn test_failed_evolve_does_not_count_time() {
        let mut sim = Simulator::new(vec![Particle::new(0.0, 0.0, 1.0)]);
        let err = sim.evolve(0.1).unwrap_err();
        assert_eq!(err, SimError::DegenerateParticle { index: 0, step: 0 });
        assert_eq!(sim.elapsed(), 0.0);
    }

    #[test]
    fn test_empty_simulator() {
        let mut sim = Simulator::new(Vec::new());
        assert!(sim.is_empty());
        assert_eq!(sim.evolve(0.1).unwrap(), 10_000);
        assert_eq!(sim.len(), 0);
    }

    #[test]
    fn test_into_particles_keeps_order() {
        let particles = vec![Particle::new(1.0, 0.0, 1.0), Particle::new(0.0, 1.0, -1.0)];
        let sim = Simulator::new(particles.clone());
        assert_eq!(sim.into_particles(), particles);
    }
}
