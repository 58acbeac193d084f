//! Pure-birth (cell division) process simulated with the Gillespie algorithm.
//!
//! This module provides:
//! - BirthParameters / EnsembleConfig: Validated inputs
//! - BirthSimulator: Exact single-trial simulation
//! - Trajectory: Recorded (population, time) path of one trial
//! - run_ensemble: Independent trials, parallel via Rayon or sequential
//! - Statistics: Analytic moments and empirical summaries

pub mod params;
pub mod trajectory;
pub mod gillespie;
pub mod ensemble;
pub mod statistics;

pub use params::{BirthParameters, EnsembleConfig, ExecutionMode};
pub use trajectory::{Trajectory, TrialEvent};
pub use gillespie::{BirthSimulator, sample_waiting_time};
pub use ensemble::{
    EnsembleReport,
    EnsembleResult,
    run_and_report,
    run_ensemble,
    run_ensemble_with_rng,
};
pub use statistics::{analytic_mean, analytic_variance, empirical_mean, EnsembleSummary};
