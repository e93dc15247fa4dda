// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch tracking: averaged frequency to pitch class.

use std::fmt;

use tracing::debug;

use super::averager::FrequencyAverager;
use crate::music::pitch::{
    classify_frequency, NoteSpelling, NO_PITCH_DETECTED, TWELVE_TET_PITCH_FREQUENCIES,
};

/// Result of one completed averaging window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Mean frequency of the window in Hz
    pub frequency: f64,
    /// Pitch class of the mean, if it lies inside the pitch table
    pub pitch_class: Option<&'static str>,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} Hz: {}",
            self.frequency,
            self.pitch_class.unwrap_or(NO_PITCH_DETECTED)
        )
    }
}

/// Turns a stream of frequency samples into pitch-class detections
#[derive(Debug, Clone)]
pub struct PitchTracker {
    averager: FrequencyAverager,
    spelling: NoteSpelling,
    table: &'static [f64],
    last: Option<Detection>,
}

impl PitchTracker {
    /// Create a tracker over the 12-TET table
    pub fn new(window: usize, spelling: NoteSpelling) -> Self {
        Self::with_table(window, spelling, &TWELVE_TET_PITCH_FREQUENCIES)
    }

    /// Create a tracker over a custom ascending frequency table
    pub fn with_table(window: usize, spelling: NoteSpelling, table: &'static [f64]) -> Self {
        Self {
            averager: FrequencyAverager::new(window),
            spelling,
            table,
            last: None,
        }
    }

    /// Feed one sample; returns a detection when a window completes
    pub fn process(&mut self, frequency_hz: f64) -> Option<Detection> {
        let frequency = self.averager.push(frequency_hz)?;
        let detection = Detection {
            frequency,
            pitch_class: classify_frequency(frequency, self.table, self.spelling),
        };
        debug!(frequency, pitch_class = ?detection.pitch_class, "pitch detected");
        self.last = Some(detection);
        Some(detection)
    }

    /// Get the most recent detection
    pub fn last(&self) -> Option<Detection> {
        self.last
    }

    /// Get the note spelling
    pub fn spelling(&self) -> NoteSpelling {
        self.spelling
    }

    /// Forget the partial window and the last detection
    pub fn reset(&mut self) {
        self.averager.reset();
        self.last = None;
    }
}
