// ---------------------------------------------------------------------------
// Energy-drift bookkeeping
// ---------------------------------------------------------------------------

/// Tracks total energy against a baseline to characterize a scheme's
/// long-horizon behavior: bounded oscillation for the symplectic pair,
/// secular growth for explicit Euler.
#[derive(Debug, Clone)]
pub struct EnergyMonitor {
    baseline: f64,
    history: Vec<f64>,
}

impl EnergyMonitor {
    pub fn new(baseline: f64) -> Self {
        Self {
            baseline,
            history: Vec::new(),
        }
    }

    /// Seed the baseline from the first entry and record the full series.
    ///
    /// Returns `None` for an empty series.
    pub fn from_energies(energies: &[f64]) -> Option<Self> {
        let (&first, _) = energies.split_first()?;
        let mut monitor = Self::new(first);
        for &e in energies {
            monitor.record(e);
        }
        Some(monitor)
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn record(&mut self, energy: f64) {
        self.history.push(energy);
    }

    /// Error of `energy` relative to the baseline. Falls back to the
    /// absolute error when the baseline is numerically zero.
    pub fn relative_error(&self, energy: f64) -> f64 {
        let delta = (energy - self.baseline).abs();
        if self.baseline.abs() > 1e-12 {
            delta / self.baseline.abs()
        } else {
            delta
        }
    }

    /// Largest relative error over everything recorded so far.
    pub fn max_relative_error(&self) -> f64 {
        self.history
            .iter()
            .map(|&e| self.relative_error(e))
            .fold(0.0, f64::max)
    }

    /// Signed end-to-end drift: `(E_last - E_0) / |E_0|`, zero when nothing
    /// has been recorded.
    pub fn drift(&self) -> f64 {
        let last = match self.history.last() {
            Some(&e) => e,
            None => return 0.0,
        };
        let delta = last - self.baseline;
        if self.baseline.abs() > 1e-12 {
            delta / self.baseline.abs()
        } else {
            delta
        }
    }

    /// True when every recorded energy stays within `tol` relative error
    /// of the baseline.
    pub fn is_bounded(&self, tol: f64) -> bool {
        self.max_relative_error() <= tol
    }

    /// Fraction of consecutive recorded pairs that increased. Close to 1
    /// for a secular upward drift, near 0.5 for a bounded oscillation.
    /// Zero when fewer than two records exist.
    pub fn monotone_fraction(&self) -> f64 {
        if self.history.len() < 2 {
            return 0.0;
        }
        let rising = self
            .history
            .windows(2)
            .filter(|pair| pair[1] > pair[0])
            .count();
        rising as f64 / (self.history.len() - 1) as f64
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
