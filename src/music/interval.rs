// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval conversions between ratios, decimals, and cents.
//!
//! An interval between two frequencies can be written three ways:
//! as a whole-number ratio ("3/2"), as the decimal value of that ratio
//! (1.5), or logarithmically in cents (701.955). Twelve-tone equal
//! temperament divides the octave (2/1) into 12 semitones of 100 cents.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{MusicError, Result};

/// Separator between numerator and denominator in ratio strings
pub const RATIO_SEPARATOR: char = '/';

/// Relative tolerance used when approximating a decimal by a ratio
pub const RATIO_TOLERANCE: f64 = 1.0e-6;

/// Cents in one octave (ratio 2/1)
pub const CENTS_PER_OCTAVE: f64 = 1200.0;

/// Upper bound on continued-fraction terms
const MAX_EXPANSION_TERMS: usize = 64;

/// A whole-number frequency ratio such as 3/2.
///
/// The sign of the interval lives on the numerator; the denominator is
/// always non-zero. Ratios are not reduced to lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numerator: i64,
    denominator: u64,
}

impl Ratio {
    /// Create a new ratio, rejecting a zero denominator
    pub fn new(numerator: i64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(MusicError::undefined("division by zero", numerator as f64));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Get the numerator
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Get the denominator
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Get the decimal value of this ratio
    pub fn to_decimal(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Get the size of this interval in cents
    pub fn cents(&self) -> Result<f64> {
        convert_decimal_to_cents(self.to_decimal())
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.numerator, RATIO_SEPARATOR, self.denominator)
    }
}

impl FromStr for Ratio {
    type Err = MusicError;

    /// Parse "m/n" or a bare integer "m" (read as m/1)
    fn from_str(s: &str) -> Result<Self> {
        let (num, den) = s.split_once(RATIO_SEPARATOR).unwrap_or((s, "1"));
        let numerator = num
            .trim()
            .parse::<i64>()
            .map_err(|_| MusicError::parse(s, "a whole-number ratio"))?;
        let denominator = den
            .trim()
            .parse::<u64>()
            .map_err(|_| MusicError::parse(s, "a whole-number ratio"))?;
        Ratio::new(numerator, denominator)
    }
}

/// Approximate a decimal by the best low-denominator ratio within the
/// default tolerance of one part per million.
pub fn convert_decimal_to_ratio(decimal: f64) -> Result<Ratio> {
    approximate_ratio(decimal, RATIO_TOLERANCE)
}

/// Approximate a decimal by a ratio using its continued-fraction expansion.
///
/// Expansion stops at the first convergent `m/n` with
/// `|decimal - m/n| <= |decimal| * tolerance`. Negative input yields a
/// negative numerator; integers (including zero) return `n/1` directly.
pub fn approximate_ratio(decimal: f64, tolerance: f64) -> Result<Ratio> {
    if !decimal.is_finite() {
        return Err(MusicError::undefined("ratio approximation", decimal));
    }
    if decimal < 0.0 {
        let ratio = approximate_ratio(-decimal, tolerance)?;
        return Ok(Ratio {
            numerator: -ratio.numerator,
            ..ratio
        });
    }
    if decimal >= i64::MAX as f64 {
        return Err(MusicError::undefined("ratio approximation", decimal));
    }
    if decimal.fract() == 0.0 {
        return Ok(Ratio {
            numerator: decimal as i64,
            denominator: 1,
        });
    }

    // Convergents m1/n1 (current) and m2/n2 (previous)
    let (mut m1, mut m2) = (1.0_f64, 0.0_f64);
    let (mut n1, mut n2) = (0.0_f64, 1.0_f64);
    let mut b = decimal;

    for term in 0..MAX_EXPANSION_TERMS {
        let a = b.floor();
        (m1, m2) = (a * m1 + m2, m1);
        (n1, n2) = (a * n1 + n2, n1);

        if (decimal - m1 / n1).abs() <= decimal * tolerance {
            debug!(decimal, term, numerator = m1, denominator = n1, "ratio converged");
            break;
        }

        let remainder = b - a;
        if remainder <= f64::EPSILON {
            break;
        }
        b = 1.0 / remainder;
    }

    // Inputs below f64 resolution stop on a 0/1 convergent
    let converged = (decimal - m1 / n1).abs() <= decimal * tolerance;
    if !converged || m1 >= i64::MAX as f64 || n1 >= u64::MAX as f64 || n1 < 1.0 {
        return Err(MusicError::undefined("ratio approximation", decimal));
    }

    Ok(Ratio {
        numerator: m1 as i64,
        denominator: n1 as u64,
    })
}

/// Convert a ratio string ("m/n") or plain number to its decimal value.
///
/// Both parts may be real numbers ("1.5/1"). A zero denominator is an
/// error rather than an infinite result.
pub fn convert_ratio_to_decimal(ratio: &str) -> Result<f64> {
    match ratio.split_once(RATIO_SEPARATOR) {
        Some((num, den)) => {
            let numerator = parse_real(num)?;
            let denominator = parse_real(den)?;
            if denominator == 0.0 {
                return Err(MusicError::undefined("division by zero", numerator));
            }
            Ok(numerator / denominator)
        }
        None => parse_real(ratio),
    }
}

/// Check whether a string is written as a ratio
pub fn is_ratio(s: &str) -> bool {
    s.contains(RATIO_SEPARATOR)
}

/// Convert a ratio string to cents: `1200 * log2(m/n)`
pub fn convert_ratio_to_cents(ratio: &str) -> Result<f64> {
    convert_decimal_to_cents(convert_ratio_to_decimal(ratio)?)
}

/// Convert a decimal interval to cents, rejecting non-positive values
pub fn convert_decimal_to_cents(decimal: f64) -> Result<f64> {
    if !(decimal > 0.0) || !decimal.is_finite() {
        return Err(MusicError::undefined("logarithm", decimal));
    }
    Ok(CENTS_PER_OCTAVE * decimal.log2())
}

/// Convert cents to a decimal interval: `2 ^ (cents / 1200)`
pub fn convert_cents_to_decimal(cents: f64) -> f64 {
    2.0_f64.powf(cents / CENTS_PER_OCTAVE)
}

fn parse_real(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MusicError::parse(text, "a number"))
}
