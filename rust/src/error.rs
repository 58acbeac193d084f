//! Error types for birth-process simulation.
//!
//! Configuration is validated up front, so the only runtime failure is an
//! explicitly configured event cap being hit.

/// Errors produced by parameter validation and trial execution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// A parameter was rejected before any simulation work started.
    #[error("invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// Constraint the value violated.
        reason: &'static str,
    },

    /// A trial hit the configured event cap before reaching the horizon.
    #[error("event limit of {limit} reached at t = {elapsed_time} before the horizon")]
    EventLimitExceeded {
        /// Configured maximum number of events per trial.
        limit: u64,
        /// Simulated time when the cap was hit.
        elapsed_time: f64,
    },
}

impl SimulationError {
    pub(crate) fn invalid(
        parameter: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        SimulationError::InvalidConfiguration {
            parameter,
            value: value.to_string(),
            reason,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;
