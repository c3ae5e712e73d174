//! Fixed-step integration of circular motion
//!
//! Each sub-step moves a particle along the tangent of its current circle
//! (explicit first-order Euler). The straight-line step slowly pushes
//! particles outward; that drift is part of the expected output.

use crate::error::{Result, SimError};
use crate::particle::Particle;
use glam::DVec2;

/// Duration of a single sub-step, in the same units as the evolve interval
pub const TIMESTEP: f64 = 0.00001;

/// Number of whole sub-steps that fit in `total_time`
///
/// The count is truncated, so any remainder shorter than `TIMESTEP` is
/// dropped. Finite non-positive intervals yield 0.
pub fn step_count(total_time: f64) -> Result<usize> {
    if !total_time.is_finite() {
        return Err(SimError::NonFiniteInterval(total_time));
    }
    if total_time <= 0.0 {
        return Ok(0);
    }
    Ok((total_time / TIMESTEP) as usize)
}

/// Displacement of one particle over a sub-step of length `dt`
///
/// Returns `None` when the particle sits at the origin.
pub fn tangent_step(particle: &Particle, dt: f64) -> Option<DVec2> {
    let radius = particle.radius();
    if radius == 0.0 {
        return None;
    }
    let direction = DVec2::new(-particle.pos.y / radius, particle.pos.x / radius);
    Some(dt * particle.angular_velocity * direction)
}

/// Advance every particle by one sub-step
///
/// Stops at the first particle found at the origin; particles before it
/// have already moved.
#[cfg(not(feature = "parallel"))]
pub fn step(particles: &mut [Particle], dt: f64, step_index: usize) -> Result<()> {
    for (index, particle) in particles.iter_mut().enumerate() {
        let displacement = tangent_step(particle, dt).ok_or(SimError::DegenerateParticle {
            index,
            step: step_index,
        })?;
        particle.pos += displacement;
    }
    Ok(())
}

/// Advance every particle by one sub-step, spread across the rayon pool
///
/// With more than one particle at the origin, which index is reported is
/// not deterministic.
#[cfg(feature = "parallel")]
pub fn step(particles: &mut [Particle], dt: f64, step_index: usize) -> Result<()> {
    use rayon::prelude::*;

    particles
        .par_iter_mut()
        .enumerate()
        .try_for_each(|(index, particle)| {
            let displacement = tangent_step(particle, dt).ok_or(SimError::DegenerateParticle {
                index,
                step: step_index,
            })?;
            particle.pos += displacement;
            Ok(())
        })
}

/// Apply `steps` sub-steps of `TIMESTEP` in order
///
/// Each sub-step finishes for all particles before the next begins.
pub fn advance(particles: &mut [Particle], steps: usize) -> Result<()> {
    for k in 0..steps {
        step(particles, TIMESTEP, k)?;
    }
    Ok(())
}
