//! Recorded path of a single birth-process trial.

/// State right after one birth event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialEvent {
    /// Population after the birth.
    pub population: u64,
    /// Simulated time after adding the waiting time of this event.
    pub elapsed_time: f64,
    /// Exponential waiting time drawn for this event.
    pub waiting_time: f64,
}

/// Full record of one trial, starting state plus every event.
///
/// The last event is the one whose waiting time carried `elapsed_time` to or
/// past the horizon; its birth is still counted.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub initial_population: u64,
    pub events: Vec<TrialEvent>,
}

impl Trajectory {
    /// Create an empty trajectory at t = 0.
    pub fn new(initial_population: u64) -> Self {
        Self {
            initial_population,
            events: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, population: u64, elapsed_time: f64, waiting_time: f64) {
        self.events.push(TrialEvent {
            population,
            elapsed_time,
            waiting_time,
        });
    }

    /// Population recorded as the trial's result.
    pub fn final_population(&self) -> u64 {
        self.events
            .last()
            .map(|e| e.population)
            .unwrap_or(self.initial_population)
    }

    /// Elapsed time when the trial stopped (0 if no event fired).
    pub fn final_time(&self) -> f64 {
        self.events.last().map(|e| e.elapsed_time).unwrap_or(0.0)
    }

    pub fn n_events(&self) -> usize {
        self.events.len()
    }

    /// `(population, elapsed_time)` pairs in event order.
    pub fn states(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.events.iter().map(|e| (e.population, e.elapsed_time))
    }

    pub fn waiting_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.events.iter().map(|e| e.waiting_time)
    }
}
