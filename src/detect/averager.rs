// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Windowed averaging of frequency samples.

use tracing::debug;

/// Default number of samples averaged per window
pub const DEFAULT_SAMPLE_WINDOW: usize = 50;

/// Averages positive frequency samples over fixed-size windows
#[derive(Debug, Clone)]
pub struct FrequencyAverager {
    /// Samples per window
    window: usize,
    /// Sum of samples in the current window
    sum: f64,
    /// Samples collected in the current window
    count: usize,
}

impl FrequencyAverager {
    /// Create a new averager; a window of 0 is treated as 1
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            sum: 0.0,
            count: 0,
        }
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Get the number of samples collected in the current window
    pub fn pending(&self) -> usize {
        self.count
    }

    /// Add a sample, returning the window mean once the window fills.
    ///
    /// Estimators report silence as zero or negative pitch; such samples,
    /// and non-finite ones, are ignored.
    pub fn push(&mut self, frequency_hz: f64) -> Option<f64> {
        if !(frequency_hz > 0.0) || !frequency_hz.is_finite() {
            return None;
        }

        self.sum += frequency_hz;
        self.count += 1;

        if self.count < self.window {
            return None;
        }

        let mean = self.sum / self.count as f64;
        debug!(mean, window = self.window, "frequency window complete");
        self.reset();
        Some(mean)
    }

    /// Discard the partially collected window
    pub fn reset(&mut self) {
        self.sum = 0.0;
        self.count = 0;
    }
}

impl Default for FrequencyAverager {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_window() {
        let mut averager = FrequencyAverager::new(4);
        assert_eq!(averager.push(438.0), None);
        assert_eq!(averager.push(442.0), None);
        assert_eq!(averager.push(439.0), None);
        assert_eq!(averager.push(441.0), Some(440.0));
        assert_eq!(averager.pending(), 0);
    }

    #[test]
    fn test_ignores_silence() {
        let mut averager = FrequencyAverager::new(2);
        assert_eq!(averager.push(-1.0), None);
        assert_eq!(averager.push(0.0), None);
        assert_eq!(averager.push(f64::NAN), None);
        assert_eq!(averager.push(f64::INFINITY), None);
        assert_eq!(averager.pending(), 0);

        assert_eq!(averager.push(100.0), None);
        assert_eq!(averager.push(-1.0), None);
        assert_eq!(averager.push(200.0), Some(150.0));
    }

    #[test]
    fn test_windows_restart() {
        let mut averager = FrequencyAverager::new(2);
        assert_eq!(averager.push(100.0), None);
        assert_eq!(averager.push(100.0), Some(100.0));
        assert_eq!(averager.push(300.0), None);
        assert_eq!(averager.push(500.0), Some(400.0));
    }

    #[test]
    fn test_zero_window() {
        let mut averager = FrequencyAverager::new(0);
        assert_eq!(averager.window(), 1);
        assert_eq!(averager.push(220.0), Some(220.0));
    }

    #[test]
    fn test_reset() {
        let mut averager = FrequencyAverager::default();
        assert_eq!(averager.window(), DEFAULT_SAMPLE_WINDOW);
        averager.push(440.0);
        averager.push(440.0);
        assert_eq!(averager.pending(), 2);
        averager.reset();
        assert_eq!(averager.pending(), 0);
    }
}
