//! Error types for the orbit simulator
//!
//! The core never recovers from or logs these; every failure is handed
//! back to whoever called `Simulator::evolve`.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while evolving particles
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A particle sits exactly at the origin, so its tangential direction is undefined
    #[error("particle {index} is at the origin at sub-step {step}; tangential direction is undefined")]
    DegenerateParticle { index: usize, step: usize },

    /// The requested interval is NaN or infinite
    #[error("evolution interval must be finite, got {0}")]
    NonFiniteInterval(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_particle_message() {
        let err = SimError::DegenerateParticle { index: 2, step: 0 };
        let msg = err.to_string();
        assert!(msg.contains("particle 2"));
        assert!(msg.contains("origin"));
    }

    #[test]
    fn test_non_finite_interval_message() {
        let msg = SimError::NonFiniteInterval(f64::INFINITY).to_string();
        assert!(msg.contains("finite"));
        assert!(msg.contains("inf"));
    }
}
