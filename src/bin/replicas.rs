use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use phase_separation::render::save_heat_map;
use phase_separation::runner::run_replicas;
use phase_separation::{EnergyBaseline, LatticeGenerator, SimConfig};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "replicas",
    about = "Independent phase separation runs from one initial lattice"
)]
struct Args {
    /// lattice rows
    #[structopt(long, default_value = "50")]
    rows: usize,
    /// lattice columns
    #[structopt(long, default_value = "50")]
    cols: usize,
    /// percentage of cells in state 1
    #[structopt(long, default_value = "50")]
    percentage: f64,
    /// seed of the initial lattice
    #[structopt(long, default_value = "123")]
    seed: u64,
    /// temperature in kelvin; omit to disable thermal acceptance
    #[structopt(long)]
    temperature: Option<f64>,
    /// iterations per replica
    #[structopt(long, default_value = "100000", allow_hyphen_values = true)]
    iterations: i64,
    /// number of replicas
    #[structopt(long, default_value = "8")]
    replicas: u64,
    /// first simulation seed; replica i uses base_seed + i
    #[structopt(long, default_value = "0")]
    base_seed: u64,
    /// energy baseline: coordination or distinct
    #[structopt(long, default_value = "coordination")]
    baseline: String,
    /// write the lowest-energy lattice as a heat map into this directory
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
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
    let initial = LatticeGenerator::random(args.rows, args.cols, args.percentage, args.seed)?;

    let seeds: Vec<u64> = (0..args.replicas).map(|i| args.base_seed + i).collect();
    let outcomes = run_replicas(&initial, &config, &seeds)?;

    for o in &outcomes {
        info!(
            seed = o.seed,
            energy = ?o.final_energy(),
            acceptance_rate = ?o.result.trajectory.acceptance_rate(),
            "replica"
        );
    }

    if let (Some(dir), Some(best)) = (&args.output, outcomes.first()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        let path = dir.join(format!("best_seed_{}.png", best.seed));
        save_heat_map(&path, &best.lattice, 8)?;
        info!(path = %path.display(), "saved lowest-energy lattice");
    }

    Ok(())
}
