//! Parameters for the pure-birth process and for ensemble runs.
//!
//! Both types validate on construction so the simulator never sees a
//! non-positive propensity.

use crate::error::{Result, SimulationError};

/// Rate, starting population and time horizon of a birth process.
///
/// Rate equation:
///     dx/dt = λ x
///
/// Where:
///     λ - `birth_rate`, per-cell division rate
///     x(0) - `initial_population`
///     t ∈ [0, horizon]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BirthParameters {
    birth_rate: f64,
    initial_population: u64,
    horizon: f64,
}

impl BirthParameters {
    /// Validate and build a parameter set.
    ///
    /// A zero horizon is accepted and yields trials that never fire an event.
    pub fn new(birth_rate: f64, initial_population: u64, horizon: f64) -> Result<Self> {
        if !birth_rate.is_finite() || birth_rate <= 0.0 {
            return Err(SimulationError::invalid(
                "birth_rate",
                birth_rate,
                "must be finite and > 0",
            ));
        }
        if initial_population == 0 {
            return Err(SimulationError::invalid(
                "initial_population",
                initial_population,
                "must be >= 1",
            ));
        }
        if !horizon.is_finite() || horizon < 0.0 {
            return Err(SimulationError::invalid(
                "horizon",
                horizon,
                "must be finite and >= 0",
            ));
        }

        Ok(Self {
            birth_rate,
            initial_population,
            horizon,
        })
    }

    pub fn birth_rate(&self) -> f64 {
        self.birth_rate
    }

    pub fn initial_population(&self) -> u64 {
        self.initial_population
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Propensity of the single birth channel at `population`.
    #[inline]
    pub fn propensity(&self, population: u64) -> f64 {
        population as f64 * self.birth_rate
    }
}

impl Default for BirthParameters {
    /// λ = 2.0, x0 = 1, horizon = 3.0.
    fn default() -> Self {
        Self {
            birth_rate: 2.0,
            initial_population: 1,
            horizon: 3.0,
        }
    }
}

/// How trials of an ensemble are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Rayon over trials, one seeded RNG per trial.
    #[default]
    Parallel,
    /// One RNG seeded from the base seed, trials in index order.
    Sequential,
}

/// Configuration for an ensemble of independent trials.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleConfig {
    trial_count: usize,
    /// Base RNG seed. In parallel mode trial `i` uses `seed + i`.
    pub seed: u64,
    /// Optional cap on events per trial.
    pub max_events: Option<u64>,
    pub mode: ExecutionMode,
}

impl EnsembleConfig {
    /// Create a configuration for `trial_count` trials.
    pub fn new(trial_count: usize) -> Result<Self> {
        if trial_count == 0 {
            return Err(SimulationError::invalid(
                "trial_count",
                trial_count,
                "must be >= 1",
            ));
        }

        Ok(Self {
            trial_count,
            seed: 42,
            max_events: None,
            mode: ExecutionMode::default(),
        })
    }

    /// Set the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Abort a trial with an error once it has fired `limit` events.
    pub fn with_max_events(mut self, limit: u64) -> Self {
        self.max_events = Some(limit);
        self
    }

    /// Run trials one after another from a single stream.
    pub fn sequential(mut self) -> Self {
        self.mode = ExecutionMode::Sequential;
        self
    }

    pub fn trial_count(&self) -> usize {
        self.trial_count
    }
}
