// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Equal-temperament (TET) selections.
//!
//! Users pick one or more equal divisions of the octave as text,
//! e.g. "12" or "12,19,31".

use crate::error::{MusicError, Result};
use crate::music::interval::{convert_cents_to_decimal, CENTS_PER_OCTAVE};

/// Separator between values in a multi-TET string
pub const TET_SEPARATOR: char = ',';

/// Check whether a string is an optionally negative run of ASCII digits
pub fn is_integer(s: &str) -> bool {
    let s = s.trim();
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse "12" or "12,19,31" into division counts, keeping their order
pub fn parse_tet(tet: &str) -> Result<Vec<i32>> {
    tet.split(TET_SEPARATOR)
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| MusicError::parse(part, "an integer"))
        })
        .collect()
}

/// Size in cents of one step of an equal division of the octave
pub fn step_cents(divisions: i32) -> Result<f64> {
    if divisions <= 0 {
        return Err(MusicError::InvalidDivisions(divisions));
    }
    Ok(CENTS_PER_OCTAVE / divisions as f64)
}

/// Decimal ratio of one step of an equal division of the octave
pub fn step_decimal(divisions: i32) -> Result<f64> {
    step_cents(divisions).map(convert_cents_to_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_integer() {
        assert!(is_integer("42"));
        assert!(is_integer("-7"));
        assert!(is_integer("  12 "));
        assert!(!is_integer("-"));
        assert!(!is_integer("4.2"));
        assert!(!is_integer(""));
        assert!(!is_integer("   "));
        assert!(!is_integer("+5"));
        assert!(!is_integer("1-2"));
        assert!(!is_integer("١٢"));
    }

    #[test]
    fn test_parse_tet() {
        assert_eq!(parse_tet("12").unwrap(), vec![12]);
        assert_eq!(parse_tet("12,19,31").unwrap(), vec![12, 19, 31]);
        assert_eq!(parse_tet("31, 12").unwrap(), vec![31, 12]);
    }

    #[test]
    fn test_parse_tet_errors() {
        assert!(matches!(parse_tet("twelve"), Err(MusicError::Parse { .. })));
        assert!(matches!(parse_tet("12,,19"), Err(MusicError::Parse { .. })));
        assert!(matches!(parse_tet("12,x"), Err(MusicError::Parse { .. })));
        assert!(parse_tet("").is_err());
    }

    #[test]
    fn test_step_sizes() {
        assert_eq!(step_cents(12).unwrap(), 100.0);
        assert_eq!(step_cents(24).unwrap(), 50.0);
        let semitone = step_decimal(12).unwrap();
        assert!((semitone - 1.059_463_094).abs() < 1e-9);
        assert_eq!(step_cents(0), Err(MusicError::InvalidDivisions(0)));
        assert!(step_decimal(-5).is_err());
    }
}
