//! Timing runs over a random particle set

use orbitsim_core::{random_particles, Particle, Result, Simulator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Settings shared by `benchmark` and `profile`
#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    pub particles: usize,
    pub time: f64,
    pub seed: Option<u64>,
}

/// Outcome of one benchmark run
#[derive(Debug, Clone)]
pub struct BenchRun {
    pub steps: usize,
    pub particles: usize,
    pub setup: Duration,
    pub evolve: Duration,
}

impl BenchRun {
    /// Mean cost of advancing one particle by one sub-step
    pub fn nanos_per_update(&self) -> f64 {
        let updates = self.steps as f64 * self.particles as f64;
        if updates == 0.0 {
            return 0.0;
        }
        self.evolve.as_nanos() as f64 / updates
    }
}

fn build_particles(config: &BenchConfig) -> Vec<Particle> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    random_particles(config.particles, &mut rng)
}

/// Build a random particle set and evolve it once
pub fn run_once(config: &BenchConfig) -> Result<BenchRun> {
    let started = Instant::now();
    let mut sim = Simulator::new(build_particles(config));
    let setup = started.elapsed();

    let started = Instant::now();
    let steps = sim.evolve(config.time)?;
    let evolve = started.elapsed();

    Ok(BenchRun {
        steps,
        particles: sim.len(),
        setup,
        evolve,
    })
}

/// Summary over several benchmark runs
#[derive(Debug, Clone)]
pub struct Profile {
    pub runs: Vec<BenchRun>,
}

impl Profile {
    pub fn min_evolve(&self) -> Duration {
        self.runs.iter().map(|r| r.evolve).min().unwrap_or_default()
    }

    pub fn max_evolve(&self) -> Duration {
        self.runs.iter().map(|r| r.evolve).max().unwrap_or_default()
    }

    pub fn mean_evolve(&self) -> Duration {
        mean(self.runs.iter().map(|r| r.evolve))
    }

    pub fn mean_setup(&self) -> Duration {
        mean(self.runs.iter().map(|r| r.setup))
    }

    pub fn mean_nanos_per_update(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(BenchRun::nanos_per_update).sum::<f64>() / self.runs.len() as f64
    }
}

fn mean(durations: impl ExactSizeIterator<Item = Duration>) -> Duration {
    let n = durations.len() as u32;
    if n == 0 {
        return Duration::ZERO;
    }
    durations.sum::<Duration>() / n
}

/// Repeat the benchmark `runs` times
///
/// With a fixed seed every run sees the same particles.
pub fn profile(config: &BenchConfig, runs: usize) -> Result<Profile> {
    let runs = (0..runs)
        .map(|i| {
            let run = run_once(config)?;
            log::debug!("run {}: evolve took {:?}", i, run.evolve);
            Ok(run)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Profile { runs })
}
