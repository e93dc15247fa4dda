// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for interval math.

use thiserror::Error;

/// Errors raised by the conversion and parsing functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MusicError {
    /// Text could not be read as the expected kind of value
    #[error("cannot parse '{input}' as {expected}")]
    Parse {
        input: String,
        expected: &'static str,
    },

    /// The requested operation has no finite result for this value
    #[error("{operation} is undefined for {value}")]
    UndefinedArithmetic {
        operation: &'static str,
        value: f64,
    },

    /// A Scala file lists a different number of notes than it declares
    #[error("scale declares {expected} notes but lists {found}")]
    ScaleLength { expected: usize, found: usize },

    /// Equal temperaments need at least one division per octave
    #[error("invalid number of octave divisions: {0}")]
    InvalidDivisions(i32),
}

impl MusicError {
    pub(crate) fn parse(input: &str, expected: &'static str) -> Self {
        MusicError::Parse {
            input: input.to_string(),
            expected,
        }
    }

    pub(crate) fn undefined(operation: &'static str, value: f64) -> Self {
        MusicError::UndefinedArithmetic { operation, value }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, MusicError>;
