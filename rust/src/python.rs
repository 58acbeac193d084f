use numpy::PyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3::wrap_pyfunction;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::birth::{self, BirthParameters, BirthSimulator, EnsembleConfig};
use crate::error::SimulationError;

fn to_py_err(err: SimulationError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Simulate an ensemble of cell-division trajectories.
///
/// # Arguments
/// * `birth_rate` - Division rate λ per cell
/// * `initial_population` - Cells at t = 0
/// * `horizon` - Simulated time at which each trial is recorded
/// * `n_trials` - Number of independent trials
/// * `seed` - Base RNG seed (trial i uses seed + i unless sequential)
/// * `sequential` - Run all trials from one RNG stream on the calling thread
///
/// # Returns
/// * Dict with `run_time_seconds`, `analytic_mean`, `empirical_mean` and
///   `populations` (NumPy array, one entry per trial)
#[pyfunction]
#[pyo3(signature = (birth_rate=2.0, initial_population=1, horizon=3.0, n_trials=10000, seed=42, sequential=false))]
fn simulate_cell_division<'py>(
    py: Python<'py>,
    birth_rate: f64,
    initial_population: u64,
    horizon: f64,
    n_trials: usize,
    seed: u64,
    sequential: bool,
) -> PyResult<&'py PyDict> {
    let params =
        BirthParameters::new(birth_rate, initial_population, horizon).map_err(to_py_err)?;
    let mut config = EnsembleConfig::new(n_trials).map_err(to_py_err)?.with_seed(seed);
    if sequential {
        config = config.sequential();
    }

    // Release the GIL while Rayon workers run
    let report = py
        .allow_threads(|| birth::run_and_report(&params, &config))
        .map_err(to_py_err)?;

    let result = PyDict::new(py);
    result.set_item("run_time_seconds", report.run_time_seconds)?;
    result.set_item("analytic_mean", report.analytic_mean)?;
    result.set_item("empirical_mean", report.empirical_mean)?;
    result.set_item(
        "populations",
        PyArray1::from_vec(py, report.result.into_populations()),
    )?;
    Ok(result)
}

/// Record a single trajectory.
///
/// # Returns
/// * (populations, elapsed_times) arrays, one entry per birth event
#[pyfunction]
#[pyo3(signature = (birth_rate, initial_population, horizon, seed=42))]
fn simulate_trajectory<'py>(
    py: Python<'py>,
    birth_rate: f64,
    initial_population: u64,
    horizon: f64,
    seed: u64,
) -> PyResult<(&'py PyArray1<u64>, &'py PyArray1<f64>)> {
    let params =
        BirthParameters::new(birth_rate, initial_population, horizon).map_err(to_py_err)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let trajectory = BirthSimulator::new(params)
        .simulate_trajectory(&mut rng)
        .map_err(to_py_err)?;

    let (populations, times): (Vec<u64>, Vec<f64>) = trajectory.states().unzip();
    Ok((
        PyArray1::from_vec(py, populations),
        PyArray1::from_vec(py, times),
    ))
}

/// Closed-form mean x0 · exp(λ · horizon).
#[pyfunction]
fn analytic_mean(birth_rate: f64, initial_population: u64, horizon: f64) -> f64 {
    birth::analytic_mean(birth_rate, initial_population, horizon)
}

/// Python module definition
#[pymodule]
fn gillespie_division(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate_cell_division, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_trajectory, m)?)?;
    m.add_function(wrap_pyfunction!(analytic_mean, m)?)?;
    Ok(())
}
