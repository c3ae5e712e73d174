pub mod error;
pub mod integrator;
pub mod particle;
pub mod scenario;
pub mod simulator;

pub use error::{Result, SimError};
pub use integrator::{step_count, TIMESTEP};
pub use particle::Particle;
pub use scenario::{demo_particles, random_particles};
pub use simulator::Simulator;

// Test helpers module (public for integration tests)
pub mod tests;
