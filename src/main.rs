use std::path::PathBuf;

use anyhow::{bail, Context};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use structopt::StructOpt;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use phase_separation::energy::total_energy;
use phase_separation::render::save_heat_map;
use phase_separation::{phase_separate, EnergyBaseline, LatticeGenerator, SimConfig};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "phase_separation",
    about = "Monte Carlo phase separation of a binary lattice"
)]
struct Args {
    /// lattice rows
    #[structopt(long, default_value = "50")]
    rows: usize,
    /// lattice columns
    #[structopt(long, default_value = "50")]
    cols: usize,
    /// percentage of cells in state 1 (random pattern only)
    #[structopt(long, default_value = "50")]
    percentage: f64,
    /// seed of the generator shared by lattice construction and simulation
    #[structopt(long, default_value = "123")]
    seed: u64,
    /// temperature in kelvin; omit to disable thermal acceptance
    #[structopt(long)]
    temperature: Option<f64>,
    /// number of Monte Carlo iterations
    #[structopt(long, default_value = "100000", allow_hyphen_values = true)]
    iterations: i64,
    /// initial pattern: random or checkerboard
    #[structopt(long, default_value = "random")]
    pattern: String,
    /// energy baseline: coordination or distinct
    #[structopt(long, default_value = "coordination")]
    baseline: String,
    /// output directory for heat maps and the trajectory table
    #[structopt(short, long, parse(from_os_str), default_value = "results")]
    output: PathBuf,
    /// heat map pixels per cell side
    #[structopt(long, default_value = "8")]
    cell_px: u32,
    /// debug logging
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::from_args();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let baseline = EnergyBaseline::try_from(args.baseline.as_str()).map_err(anyhow::Error::msg)?;
    let config = SimConfig::new(args.temperature, args.iterations)?.with_baseline(baseline);

    let mut rng = Xoshiro256StarStar::seed_from_u64(args.seed);
    let mut lattice = match args.pattern.as_str() {
        "random" => LatticeGenerator::random_with(&mut rng, args.rows, args.cols, args.percentage)?,
        "checkerboard" => LatticeGenerator::checkerboard(args.rows, args.cols)?,
        other => bail!("unknown pattern '{other}', expected 'random' or 'checkerboard'"),
    };

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    save_heat_map(args.output.join("initial.png"), &lattice, args.cell_px)?;
    let initial_energy = total_energy(&lattice, baseline);
    info!(
        rows = lattice.rows(),
        cols = lattice.cols(),
        composition = lattice.composition(),
        energy = initial_energy,
        "initial lattice"
    );

    let result = {
        measure_time::info_time!("phase separation");
        phase_separate(&mut lattice, &config, &mut rng)?
    };

    save_heat_map(args.output.join("final.png"), &lattice, args.cell_px)?;
    let table = args.output.join("trajectory.csv");
    result
        .trajectory
        .save_csv(&table)
        .with_context(|| format!("writing {}", table.display()))?;

    info!(
        initial_energy,
        final_energy = ?result.total_energy,
        acceptance_rate = ?result.trajectory.acceptance_rate(),
        output = %args.output.display(),
        "done"
    );

    Ok(())
}
