//! Gillespie cell-division simulator CLI
//!
//! Runs an ensemble of birth-process trials and prints the run time, the
//! analytic mean and the empirical mean.

use clap::Parser;
use gillespie_division::{run_and_report, BirthParameters, EnsembleConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gillespie-simulate")]
#[command(about = "Gillespie simulation of pure-birth cell division")]
#[command(version)]
struct Cli {
    /// Division rate per cell
    #[arg(long, default_value = "2.0")]
    birth_rate: f64,

    /// Number of cells at t = 0
    #[arg(long, default_value = "1")]
    initial_population: u64,

    /// Simulated time at which each trial is recorded
    #[arg(long, default_value = "3.0")]
    horizon: f64,

    /// Number of independent trials
    #[arg(short = 'n', long, default_value = "10000")]
    trials: usize,

    /// Base RNG seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Abort a trial after this many events
    #[arg(long)]
    max_events: Option<u64>,

    /// Run trials on one thread from a single RNG stream
    #[arg(long)]
    sequential: bool,

    /// Rayon worker threads (defaults to RAYON_NUM_THREADS or the CPU count)
    #[arg(long)]
    threads: Option<usize>,

    /// Print every trial's final population
    #[arg(long)]
    print_populations: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(num_threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()?;
    }

    let params = BirthParameters::new(cli.birth_rate, cli.initial_population, cli.horizon)?;
    let mut config = EnsembleConfig::new(cli.trials)?.with_seed(cli.seed);
    if let Some(limit) = cli.max_events {
        config = config.with_max_events(limit);
    }
    if cli.sequential {
        config = config.sequential();
    }

    let report = run_and_report(&params, &config)?;

    println!("Run time = {:.6} s", report.run_time_seconds);
    println!("Analytic mean  = {:.4}", report.analytic_mean);
    println!("Empirical mean = {:.4}", report.empirical_mean);

    if let Some(summary) = report.result.summary() {
        println!(
            "Std dev = {:.4}, std error = {:.4} (analytic std dev = {:.4})",
            summary.std_dev,
            summary.std_error,
            params.analytic_variance().sqrt()
        );
        println!(
            "Min = {}, median = {}, max = {}",
            summary.min, summary.median, summary.max
        );
    }

    if cli.print_populations {
        println!("{:?}", report.result.populations());
    }

    Ok(())
}
