//! Test helper utilities for orbit simulator tests

use crate::particle::Particle;
use crate::simulator::Simulator;
use crate::error::Result;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check that two particle sets match position-by-position within tolerance
pub fn positions_approx_equal(a: &[Particle], b: &[Particle], tol: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .all(|(pa, pb)| approx_eq(pa.x(), pb.x(), tol) && approx_eq(pa.y(), pb.y(), tol))
}

/// Check that two particle sets have bit-identical positions
pub fn positions_bit_equal(a: &[Particle], b: &[Particle]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(pa, pb)| {
            pa.x().to_bits() == pb.x().to_bits() && pa.y().to_bits() == pb.y().to_bits()
        })
}

/// Evolve a fresh simulator over `particles` once and return the final state
pub fn evolve_once(particles: Vec<Particle>, total_time: f64) -> Result<Vec<Particle>> {
    let mut sim = Simulator::new(particles);
    sim.evolve(total_time)?;
    Ok(sim.into_particles())
}
