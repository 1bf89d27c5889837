use anyhow::{Context, Result};
use clap::Parser;
use heredity::pedigree::{
    common::{interface::ScenarioMaker, logging::init_logging},
    inference::Inferencer,
    model::{Evidence, ProbabilityTables},
    scenarios::random_family::RandomPedigree,
};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Times exact inference on random pedigrees", long_about = None)]
struct Args {
    /// Family sizes to benchmark (comma-separated)
    #[arg(long, default_value = "2,4,6,8,10")]
    sizes: String,

    /// Seed for the generated pedigrees
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Fraction of people whose trait is observed
    #[arg(long, default_value_t = 0.5)]
    observed_fraction: f64,
}

fn benchmark_size(size: usize, args: &Args, tables: &ProbabilityTables) -> Result<()> {
    let mut scenario = RandomPedigree::new(size, args.seed);
    scenario.observed_fraction = args.observed_fraction;
    let family = scenario.build_family()?;

    let start = Instant::now();
    let (_, stats) = Inferencer::new(tables)
        .with_max_individuals(size)
        .run_with_evidence(&family, &Evidence::new())?;
    let elapsed = start.elapsed();

    println!(
        "{:>4} people | {:>14} candidate | {:>14} consistent | {:>10.3} ms",
        size,
        stats.candidate_worlds,
        stats.consistent_worlds,
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

fn main() -> Result<()> {
    init_logging("warn");
    let args = Args::parse();
    let sizes: Vec<usize> = args
        .sizes
        .split(',')
        .map(|s| s.trim().parse::<usize>())
        .collect::<std::result::Result<_, _>>()
        .context("sizes must be a comma-separated list of integers")?;

    let tables = ProbabilityTables::default();
    println!("========== EXACT INFERENCE BENCHMARK (seed {}) ==========", args.seed);
    for size in sizes {
        benchmark_size(size, &args, &tables)?;
    }
    Ok(())
}
