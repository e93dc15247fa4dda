// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Consumer side of a pitch-detection stream.
//!
//! An external estimator produces instantaneous frequency samples in Hz.
//! This module smooths them over fixed windows and classifies each
//! window's mean into a pitch class.

pub mod averager;
pub mod tracker;

pub use averager::FrequencyAverager;
pub use tracker::{Detection, PitchTracker};
