//! Analytic moments of the birth process and ensemble statistics.
//!
//! The deterministic rate equation dx/dt = λ x gives
//!     E[x(t)] = x0 · exp(λ t)
//! and the stochastic (Yule) process has
//!     Var[x(t)] = x0 · exp(λ t) · (exp(λ t) − 1)

use super::params::BirthParameters;

/// Closed-form mean population at `horizon`.
pub fn analytic_mean(birth_rate: f64, initial_population: u64, horizon: f64) -> f64 {
    initial_population as f64 * (birth_rate * horizon).exp()
}

/// Variance of the Yule process population at `horizon`.
pub fn analytic_variance(birth_rate: f64, initial_population: u64, horizon: f64) -> f64 {
    let growth = (birth_rate * horizon).exp();
    initial_population as f64 * growth * (growth - 1.0)
}

/// Arithmetic mean of final populations. NaN for an empty slice.
pub fn empirical_mean(populations: &[u64]) -> f64 {
    let sum: f64 = populations.iter().map(|&p| p as f64).sum();
    sum / populations.len() as f64
}

impl BirthParameters {
    pub fn analytic_mean(&self) -> f64 {
        analytic_mean(self.birth_rate(), self.initial_population(), self.horizon())
    }

    pub fn analytic_variance(&self) -> f64 {
        analytic_variance(self.birth_rate(), self.initial_population(), self.horizon())
    }
}

/// Distribution summary of an ensemble's final populations.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleSummary {
    pub n_trials: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    pub min: u64,
    pub max: u64,
    pub median: u64,
}

impl EnsembleSummary {
    /// Summarise a non-empty set of final populations.
    pub fn from_populations(populations: &[u64]) -> Option<Self> {
        let n_trials = populations.len();
        if n_trials == 0 {
            return None;
        }

        let mean = empirical_mean(populations);
        let variance: f64 = populations
            .iter()
            .map(|&p| (p as f64 - mean).powi(2))
            .sum::<f64>()
            / n_trials as f64;
        let std_dev = variance.sqrt();

        let mut sorted = populations.to_vec();
        sorted.sort_unstable();

        Some(Self {
            n_trials,
            mean,
            std_dev,
            std_error: std_dev / (n_trials as f64).sqrt(),
            min: sorted[0],
            max: sorted[n_trials - 1],
            median: sorted[n_trials / 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytic_mean() {
        let mean = analytic_mean(2.0, 1, 3.0);
        assert!((mean - 403.428_793).abs() < 1e-5);
        assert_eq!(analytic_mean(1.0, 5, 0.0), 5.0);

        let params = BirthParameters::new(0.5, 10, 2.0).unwrap();
        assert!((params.analytic_mean() - 10.0 * 1f64.exp()).abs() < 1e-12);
    }

    #[test]
    fn test_analytic_variance() {
        assert_eq!(analytic_variance(1.0, 5, 0.0), 0.0);
        let e = 1f64.exp();
        assert!((analytic_variance(1.0, 2, 1.0) - 2.0 * e * (e - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_empirical_mean() {
        assert_eq!(empirical_mean(&[1, 2, 3, 6]), 3.0);
        assert!(empirical_mean(&[]).is_nan());
    }

    #[test]
    fn test_summary() {
        let summary = EnsembleSummary::from_populations(&[4, 2, 8, 6]).unwrap();
        assert_eq!(summary.n_trials, 4);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.min, 2);
        assert_eq!(summary.max, 8);
        assert_eq!(summary.median, 6);
        assert!((summary.std_dev - 5f64.sqrt()).abs() < 1e-12);
        assert!((summary.std_error - 5f64.sqrt() / 2.0).abs() < 1e-12);

        assert!(EnsembleSummary::from_populations(&[]).is_none());
    }
}
