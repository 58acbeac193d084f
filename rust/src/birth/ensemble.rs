//! Ensemble driver: many independent trials to build the final-state
//! distribution, plus the timed report comparing it to the analytic mean.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use super::gillespie::BirthSimulator;
use super::params::{BirthParameters, EnsembleConfig, ExecutionMode};
use super::statistics::{empirical_mean, EnsembleSummary};
use crate::error::Result;

/// Final populations, indexed by trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnsembleResult {
    populations: Vec<u64>,
}

impl EnsembleResult {
    pub fn populations(&self) -> &[u64] {
        &self.populations
    }

    pub fn into_populations(self) -> Vec<u64> {
        self.populations
    }

    pub fn len(&self) -> usize {
        self.populations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.populations.is_empty()
    }

    pub fn empirical_mean(&self) -> f64 {
        empirical_mean(&self.populations)
    }

    pub fn summary(&self) -> Option<EnsembleSummary> {
        EnsembleSummary::from_populations(&self.populations)
    }
}

/// Outcome of a timed ensemble run.
#[derive(Clone, Debug)]
pub struct EnsembleReport {
    /// Wall-clock time spent simulating, in seconds.
    pub run_time_seconds: f64,
    /// x0 · exp(λ · horizon).
    pub analytic_mean: f64,
    pub empirical_mean: f64,
    pub result: EnsembleResult,
}

fn simulator_for(params: &BirthParameters, config: &EnsembleConfig) -> BirthSimulator {
    let simulator = BirthSimulator::new(*params);
    match config.max_events {
        Some(limit) => simulator.with_max_events(limit),
        None => simulator,
    }
}

/// Run `config.trial_count()` independent trials.
///
/// Parallel mode seeds trial `i` with `config.seed + i`, so results do not
/// depend on thread count or scheduling. Sequential mode draws every trial
/// from a single stream seeded with `config.seed`.
pub fn run_ensemble(params: &BirthParameters, config: &EnsembleConfig) -> Result<EnsembleResult> {
    match config.mode {
        ExecutionMode::Parallel => {
            let simulator = simulator_for(params, config);
            let seed = config.seed;

            let populations = (0..config.trial_count())
                .into_par_iter()
                .map(|i| {
                    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                    simulator.run_trial(&mut rng)
                })
                .collect::<Result<Vec<u64>>>()?;

            Ok(EnsembleResult { populations })
        }
        ExecutionMode::Sequential => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            run_ensemble_with_rng(params, config, &mut rng)
        }
    }
}

/// Run all trials in order from a caller-supplied random source.
///
/// `config.seed` and `config.mode` are ignored.
pub fn run_ensemble_with_rng<R: Rng + ?Sized>(
    params: &BirthParameters,
    config: &EnsembleConfig,
    rng: &mut R,
) -> Result<EnsembleResult> {
    let simulator = simulator_for(params, config);
    let populations = (0..config.trial_count())
        .map(|_| simulator.run_trial(&mut *rng))
        .collect::<Result<Vec<u64>>>()?;

    Ok(EnsembleResult { populations })
}

/// Run the ensemble, time it, and compare against the analytic mean.
pub fn run_and_report(params: &BirthParameters, config: &EnsembleConfig) -> Result<EnsembleReport> {
    info!(
        birth_rate = params.birth_rate(),
        initial_population = params.initial_population(),
        horizon = params.horizon(),
        trials = config.trial_count(),
        seed = config.seed,
        mode = ?config.mode,
        "Starting ensemble"
    );

    let start = Instant::now();
    let result = run_ensemble(params, config)?;
    let run_time_seconds = start.elapsed().as_secs_f64();

    let analytic_mean = params.analytic_mean();
    let empirical_mean = result.empirical_mean();

    if let Some(summary) = result.summary() {
        debug!(
            std_dev = summary.std_dev,
            std_error = summary.std_error,
            min = summary.min,
            max = summary.max,
            median = summary.median,
            "Ensemble distribution"
        );
    }
    info!(run_time_seconds, analytic_mean, empirical_mean, "Ensemble complete");

    Ok(EnsembleReport {
        run_time_seconds,
        analytic_mean,
        empirical_mean,
        result,
    })
}
