// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class lookup from frequency.
//!
//! Maps a detected fundamental frequency onto the 12-TET pitch class it
//! falls in, using a fixed table of equal-tempered frequencies (A4 = 440 Hz).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sharp sign
pub const SHARP: &str = "\u{266F}";

/// Flat sign
pub const FLAT: &str = "\u{266D}";

/// Text shown when a frequency falls outside the pitch table
pub const NO_PITCH_DETECTED: &str = "No pitch detected";

/// Pitch classes spelled with sharps, starting at A
pub const NOTES: [&str; 12] = [
    "A", "A\u{266F}", "B", "C", "C\u{266F}", "D", "D\u{266F}", "E", "F", "F\u{266F}", "G",
    "G\u{266F}",
];

/// Pitch classes spelled with flats, starting at A
pub const FLAT_NOTES: [&str; 12] = [
    "A", "B\u{266D}", "B", "C", "D\u{266D}", "D", "E\u{266D}", "E", "F", "G\u{266D}", "G",
    "A\u{266D}",
];

/// Equal-tempered frequencies in Hz from A0 (27.5 Hz) to C8 (4186.01 Hz).
///
/// A4 (A above middle C) is 440 Hz at index 48.
pub const TWELVE_TET_PITCH_FREQUENCIES: [f64; 88] = [
    27.5000, 29.1352, 30.8677, 32.7032, 34.6478, 36.7081, 38.8909, 41.2034, 43.6535,
    46.2493, 48.9994, 51.9131, 55.0000, 58.2705, 61.7354, 65.4064, 69.2957, 73.4162,
    77.7817, 82.4069, 87.3071, 92.4986, 97.9989, 103.826, 110.000, 116.541, 123.471,
    130.813, 138.591, 146.832, 155.563, 164.814, 174.614, 184.997, 195.998, 207.652,
    220.000, 233.082, 246.942, 261.626, 277.183, 293.665, 311.127, 329.628, 349.228,
    369.994, 391.995, 415.305, 440.000, 466.164, 493.883, 523.251, 554.365, 587.330,
    622.254, 659.255, 698.456, 739.989, 783.991, 830.609, 880.000, 932.328, 987.767,
    1046.50, 1108.73, 1174.66, 1244.51, 1318.51, 1396.91, 1479.98, 1567.98, 1661.22,
    1760.00, 1864.66, 1975.53, 2093.00, 2217.46, 2349.32, 2489.02, 2637.02, 2793.83,
    2959.96, 3135.96, 3322.44, 3520.00, 3729.31, 3951.07, 4186.01,
];

/// How accidentals are written in pitch-class names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteSpelling {
    #[default]
    Sharps,
    Flats,
}

impl NoteSpelling {
    /// Get the 12 pitch-class names for this spelling
    pub fn names(self) -> &'static [&'static str; 12] {
        match self {
            NoteSpelling::Sharps => &NOTES,
            NoteSpelling::Flats => &FLAT_NOTES,
        }
    }

    /// Get the name for a semitone index counted from A (wraps every octave)
    pub fn name(self, index: usize) -> &'static str {
        self.names()[index % 12]
    }
}

impl fmt::Display for NoteSpelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSpelling::Sharps => write!(f, "sharps"),
            NoteSpelling::Flats => write!(f, "flats"),
        }
    }
}

/// Find the table index `j` with `table[j] <= frequency < table[j + 1]`
pub fn find_table_index(frequency_hz: f64, table: &[f64]) -> Option<usize> {
    table
        .windows(2)
        .position(|pair| pair[0] <= frequency_hz && frequency_hz < pair[1])
}

/// Classify a frequency into a pitch-class name with the given spelling.
///
/// Returns `None` when the frequency lies outside the half-open range
/// covered by the table (or the table has fewer than two entries).
pub fn classify_frequency(
    frequency_hz: f64,
    table: &[f64],
    spelling: NoteSpelling,
) -> Option<&'static str> {
    find_table_index(frequency_hz, table).map(|index| spelling.name(index))
}

/// Classify a frequency into a sharp-spelled pitch-class name
pub fn parse_pitch_class_from_frequency(frequency_hz: f64, table: &[f64]) -> Option<&'static str> {
    classify_frequency(frequency_hz, table, NoteSpelling::Sharps)
}
