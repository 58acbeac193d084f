//! Stochastic simulation of cell division.
//!
//! Runs ensembles of Gillespie trajectories for a pure-birth process and
//! compares the empirical mean population with the solution of
//! dx/dt = λ x. The `python` feature builds the extension module.

pub mod birth;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use birth::{
    analytic_mean, empirical_mean, run_and_report, run_ensemble, run_ensemble_with_rng,
    BirthParameters, BirthSimulator, EnsembleConfig, EnsembleReport, EnsembleResult,
    EnsembleSummary, ExecutionMode, Trajectory,
};
pub use error::{Result, SimulationError};
