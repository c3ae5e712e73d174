use clap::{Parser, Subcommand};
use orbitsim_core::scenario::{BENCHMARK_INTERVAL, BENCHMARK_PARTICLES, FRAME_INTERVAL};
use orbitsim_core::{demo_particles, random_particles};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod bench;
mod viz_app;

use bench::BenchConfig;

#[derive(Parser)]
#[command(name = "orbitsim")]
#[command(about = "Particles on circular orbits, integrated in small fixed steps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate particles in a window
    Visualize {
        /// Time evolved per frame
        #[arg(long, default_value_t = FRAME_INTERVAL)]
        interval: f64,
        /// Use N random particles instead of the three-particle demo
        #[arg(long, value_name = "N")]
        random: Option<usize>,
        /// Seed for --random
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evolve random particles once and report the wall time
    Benchmark {
        #[arg(long, default_value_t = BENCHMARK_PARTICLES)]
        particles: usize,
        /// Interval passed to evolve
        #[arg(long, default_value_t = BENCHMARK_INTERVAL)]
        time: f64,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Repeat the benchmark and print a timing breakdown
    Profile {
        #[arg(long, default_value_t = BENCHMARK_PARTICLES)]
        particles: usize,
        #[arg(long, default_value_t = BENCHMARK_INTERVAL)]
        time: f64,
        #[arg(long, default_value_t = 5)]
        runs: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Visualize {
            interval,
            random,
            seed,
        } => visualize(interval, random, seed),
        Commands::Benchmark {
            particles,
            time,
            seed,
        } => benchmark(BenchConfig {
            particles,
            time,
            seed,
        }),
        Commands::Profile {
            particles,
            time,
            runs,
            seed,
        } => profile(
            BenchConfig {
                particles,
                time,
                seed,
            },
            runs,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn visualize(
    interval: f64,
    random: Option<usize>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let particles = match random {
        Some(count) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            random_particles(count, &mut rng)
        }
        None => demo_particles(),
    };
    log::info!("Animating {} particles, {} per frame", particles.len(), interval);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 680.0]),
        ..Default::default()
    };
    eframe::run_native(
        "orbitsim",
        options,
        Box::new(move |cc| Ok(Box::new(viz_app::VizApp::new(particles, interval, cc)))),
    )?;
    Ok(())
}

fn benchmark(config: BenchConfig) -> Result<(), Box<dyn std::error::Error>> {
    let run = bench::run_once(&config)?;

    println!("particles = {}", run.particles);
    println!("sub-steps = {}", run.steps);
    println!("evolve    = {:?}", run.evolve);
    println!("per update = {:.2} ns", run.nanos_per_update());
    Ok(())
}

fn profile(config: BenchConfig, runs: usize) -> Result<(), Box<dyn std::error::Error>> {
    log::info!(
        "Profiling {} runs of {} particles over {}",
        runs,
        config.particles,
        config.time
    );
    let profile = bench::profile(&config, runs)?;

    println!("{:>4} {:>14} {:>14} {:>12}", "run", "setup", "evolve", "ns/update");
    for (i, run) in profile.runs.iter().enumerate() {
        println!(
            "{:>4} {:>14} {:>14} {:>12.2}",
            i,
            format!("{:?}", run.setup),
            format!("{:?}", run.evolve),
            run.nanos_per_update()
        );
    }
    println!();
    println!("setup  mean = {:?}", profile.mean_setup());
    println!(
        "evolve min = {:?}  mean = {:?}  max = {:?}",
        profile.min_evolve(),
        profile.mean_evolve(),
        profile.max_evolve()
    );
    println!("mean per update = {:.2} ns", profile.mean_nanos_per_update());
    Ok(())
}
