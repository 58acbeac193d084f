//! Gillespie simulator for the pure-birth CTMC.
//!
//! Simulates stochastic dynamics:
//! - State = (population, elapsed_time)
//! - Events = one birth, population → population + 1
//! - Rate = population × λ
//!
//! Waiting times are sampled exactly (inverse transform of the exponential),
//! so no time discretisation is involved.
//!
//! Termination: the propensity only grows with the population, so expected
//! waiting times shrink and the horizon is crossed after finitely many events
//! with probability 1. `max_events` caps pathological configurations.

use rand::distributions::Open01;
use rand::Rng;
use tracing::warn;

use super::params::BirthParameters;
use super::trajectory::Trajectory;
use crate::error::{Result, SimulationError};

/// Draw an exponential waiting time with rate `propensity`.
///
/// `u` is drawn from the open interval (0, 1), so the result is strictly
/// positive and finite for any finite positive propensity.
#[inline]
pub fn sample_waiting_time<R: Rng + ?Sized>(propensity: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.sample(Open01);
    -u.ln() / propensity
}

/// Gillespie simulator for a single birth channel.
#[derive(Clone, Debug)]
pub struct BirthSimulator {
    params: BirthParameters,
    max_events: Option<u64>,
}

impl BirthSimulator {
    /// Create a new simulator.
    pub fn new(params: BirthParameters) -> Self {
        Self {
            params,
            max_events: None,
        }
    }

    /// Fail a trial once it has fired `limit` events without reaching the horizon.
    pub fn with_max_events(mut self, limit: u64) -> Self {
        self.max_events = Some(limit);
        self
    }

    pub fn params(&self) -> &BirthParameters {
        &self.params
    }

    /// Run a single trial and return its final population.
    ///
    /// The event whose waiting time pushes `elapsed_time` past the horizon is
    /// still counted (no clamping at the horizon).
    pub fn run_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<u64> {
        self.run(rng, |_, _, _| {})
    }

    /// Run a single trial and record every event.
    pub fn simulate_trajectory<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Trajectory> {
        let mut trajectory = Trajectory::new(self.params.initial_population());
        self.run(rng, |population, elapsed_time, waiting_time| {
            trajectory.record(population, elapsed_time, waiting_time)
        })?;
        Ok(trajectory)
    }

    fn run<R, F>(&self, rng: &mut R, mut on_event: F) -> Result<u64>
    where
        R: Rng + ?Sized,
        F: FnMut(u64, f64, f64),
    {
        let horizon = self.params.horizon();
        let mut population = self.params.initial_population();
        let mut elapsed_time = 0.0;
        let mut n_events: u64 = 0;

        while elapsed_time < horizon {
            if let Some(limit) = self.max_events {
                if n_events >= limit {
                    warn!(limit, elapsed_time, horizon, "Trial hit event limit");
                    return Err(SimulationError::EventLimitExceeded {
                        limit,
                        elapsed_time,
                    });
                }
            }

            let propensity = self.params.propensity(population);
            let tau = sample_waiting_time(propensity, rng);

            population += 1;
            elapsed_time += tau;
            n_events += 1;

            on_event(population, elapsed_time, tau);
        }

        Ok(population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn simulator(birth_rate: f64, initial_population: u64, horizon: f64) -> BirthSimulator {
        BirthSimulator::new(BirthParameters::new(birth_rate, initial_population, horizon).unwrap())
    }

    #[test]
    fn test_zero_horizon_returns_initial_population() {
        let sim = simulator(1.0, 5, 0.0);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            assert_eq!(sim.run_trial(&mut rng).unwrap(), 5);
        }
        let traj = sim.simulate_trajectory(&mut rng).unwrap();
        assert_eq!(traj.n_events(), 0);
    }

    #[test]
    fn test_single_trajectory() {
        let sim = simulator(2.0, 1, 3.0);
        let mut rng = StdRng::seed_from_u64(42);

        let traj = sim.simulate_trajectory(&mut rng).unwrap();
        assert!(traj.n_events() >= 1);
        assert!(traj.final_time() >= 3.0);
        assert_eq!(traj.final_population(), 1 + traj.n_events() as u64);

        // Every event before the last one happened strictly inside the horizon.
        let (last, earlier) = traj.events.split_last().unwrap();
        assert!(last.elapsed_time >= 3.0);
        assert!(earlier.iter().all(|e| e.elapsed_time < 3.0));
    }

    #[test]
    fn test_trajectory_matches_run_trial() {
        let sim = simulator(1.5, 3, 2.0);

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let final_population = sim.run_trial(&mut rng_a).unwrap();
        let traj = sim.simulate_trajectory(&mut rng_b).unwrap();

        assert_eq!(final_population, traj.final_population());
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let sim = simulator(2.0, 1, 3.0);

        let a = sim.simulate_trajectory(&mut StdRng::seed_from_u64(123)).unwrap();
        let b = sim.simulate_trajectory(&mut StdRng::seed_from_u64(123)).unwrap();
        assert_eq!(a, b);

        let c = sim.simulate_trajectory(&mut StdRng::seed_from_u64(124)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_waiting_times_positive_and_time_increasing() {
        let sim = simulator(2.0, 1, 3.0);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..20 {
            let traj = sim.simulate_trajectory(&mut rng).unwrap();
            assert!(traj.waiting_times().all(|tau| tau > 0.0));
            let times: Vec<f64> = traj.states().map(|(_, t)| t).collect();
            assert!(times.windows(2).all(|w| w[0] < w[1]));
            let pops: Vec<u64> = traj.states().map(|(p, _)| p).collect();
            assert!(pops.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }

    #[test]
    fn test_waiting_time_mean() {
        let mut rng = StdRng::seed_from_u64(2024);
        let propensity = 4.0;
        let n = 200_000;

        let mean: f64 =
            (0..n).map(|_| sample_waiting_time(propensity, &mut rng)).sum::<f64>() / n as f64;

        assert!((mean - 0.25).abs() < 0.0025, "mean waiting time {mean}");
    }

    #[test]
    fn test_event_limit() {
        let sim = simulator(2.0, 1, 50.0).with_max_events(3);
        let mut rng = StdRng::seed_from_u64(42);

        let err = sim.run_trial(&mut rng).unwrap_err();
        assert!(matches!(err, SimulationError::EventLimitExceeded { limit: 3, .. }));
    }

    #[test]
    fn test_event_limit_not_hit() {
        let sim = simulator(1.0, 1, 0.0).with_max_events(0);
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(sim.run_trial(&mut rng).unwrap(), 1);
    }
}
