// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! PitchBender: interval math for microtonal tuning.
//!
//! Converts musical intervals between frequency ratios, decimals, and
//! cents, reads Scala scale files, and maps detected frequencies to
//! 12-TET pitch classes.

pub mod config;
pub mod detect;
pub mod error;
pub mod music;

pub use config::Config;
pub use detect::{Detection, FrequencyAverager, PitchTracker};
pub use error::{MusicError, Result};
