// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scala (.scl) scale files.
//!
//! A .scl file is plain text: `!` starts a comment line, the first
//! remaining line is a description, the second is the number of notes,
//! and each following line is one interval above the tonic written either
//! in cents (contains a `.`) or as a ratio (contains a `/`). Anything after
//! the value on a line is ignored.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use crate::error::{MusicError, Result};
use crate::music::interval::{
    convert_cents_to_decimal, convert_decimal_to_cents, convert_ratio_to_decimal, is_ratio,
};
use crate::music::tet::is_integer;

/// Comment marker in Scala files
pub const COMMENT: char = '!';

/// Parse one interval line of a Scala file into a decimal ratio.
///
/// Returns `Ok(None)` when the line holds neither a cents value nor a
/// ratio (blank lines, comments, bare integers). A value that looks like
/// cents or a ratio but does not parse is an error.
pub fn parse_decimal_from_scala_line(line: &str) -> Result<Option<f64>> {
    let token = interval_token(line);

    if token.contains('.') {
        let cents = token
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite())
            .ok_or_else(|| MusicError::parse(token, "an interval in cents"))?;
        Ok(Some(convert_cents_to_decimal(cents)))
    } else if is_ratio(token) {
        convert_ratio_to_decimal(token).map(Some)
    } else {
        Ok(None)
    }
}

/// Strip surrounding whitespace and any trailing text or comment
fn interval_token(line: &str) -> &str {
    let line = line.trim();
    if let Some(end) = line.find(' ') {
        &line[..end]
    } else if let Some(end) = line.find(COMMENT) {
        &line[..end]
    } else {
        line
    }
}

/// Read a full .scl interval line; bare integers such as `2` mean n/1
fn parse_scale_interval(line: &str) -> Result<Option<f64>> {
    if let Some(interval) = parse_decimal_from_scala_line(line)? {
        return Ok(Some(interval));
    }
    let token = interval_token(line);
    if is_integer(token) {
        let whole = token
            .trim()
            .parse::<i64>()
            .map_err(|_| MusicError::parse(token, "a whole-number interval"))?;
        return Ok(Some(whole as f64));
    }
    Ok(None)
}

/// A scale read from a Scala file
#[derive(Debug, Clone, PartialEq)]
pub struct ScalaScale {
    description: String,
    intervals: Vec<f64>,
}

impl ScalaScale {
    /// Load a scale from a .scl file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read scale file: {:?}", path.as_ref()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse scale file: {:?}", path.as_ref()))
    }

    /// Parse the full text of a .scl file
    pub fn parse(text: &str) -> Result<Self> {
        let first_line = text.lines().next().unwrap_or_default();
        let mut lines = text
            .lines()
            .filter(|line| !line.trim_start().starts_with(COMMENT));

        let description = lines
            .next()
            .map(|line| line.trim().to_string())
            .ok_or_else(|| MusicError::parse(first_line, "a Scala scale description"))?;

        let count_line = lines
            .next()
            .ok_or_else(|| MusicError::parse(first_line, "a Scala note count"))?;
        let expected = count_line
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<usize>().ok())
            .ok_or_else(|| MusicError::parse(count_line, "a Scala note count"))?;

        let mut intervals = Vec::with_capacity(expected);
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            match parse_scale_interval(line)? {
                Some(interval) => intervals.push(interval),
                None => warn!(line, "skipping unrecognized Scala interval"),
            }
        }

        if intervals.len() != expected {
            return Err(MusicError::ScaleLength {
                expected,
                found: intervals.len(),
            });
        }

        debug!(%description, notes = expected, "parsed Scala scale");
        Ok(Self {
            description,
            intervals,
        })
    }

    /// Get the description line
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the intervals above the tonic as decimal ratios
    pub fn intervals(&self) -> &[f64] {
        &self.intervals
    }

    /// Get the number of notes
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Check if the scale lists no notes
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Get the intervals above the tonic in cents
    pub fn cents(&self) -> Result<Vec<f64>> {
        self.intervals
            .iter()
            .map(|&interval| convert_decimal_to_cents(interval))
            .collect()
    }
}
