// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities for PitchBender.
//!
//! This module provides interval conversions between ratios, decimals,
//! and cents, Scala file parsing, equal-temperament selection, and
//! pitch-class lookup from frequency. Every function is pure.

pub mod interval;
pub mod pitch;
pub mod scala;
pub mod tet;

pub use interval::{
    approximate_ratio, convert_cents_to_decimal, convert_decimal_to_cents,
    convert_decimal_to_ratio, convert_ratio_to_cents, convert_ratio_to_decimal, is_ratio, Ratio,
};
pub use pitch::{
    classify_frequency, parse_pitch_class_from_frequency, NoteSpelling, NOTES,
    NO_PITCH_DETECTED, TWELVE_TET_PITCH_FREQUENCIES,
};
pub use scala::{parse_decimal_from_scala_line, ScalaScale};
pub use tet::{is_integer, parse_tet, step_cents, step_decimal};
