// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for conversion operations.

use crate::scales::TimeStandard;

/// Result type for conversion operations.
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;

/// Error type for conversion operations.
///
/// Every variant is a client error: the request itself was wrong or asked
/// for something the embedded tables cannot answer.  Nothing here is
/// transient, so nothing is worth retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Unsupported conversion: '{0}' (expected 'utc2bjd' or 'hjd2bjd')")]
    UnsupportedConversion(String),

    #[error("Instant JD({standard}) {jd} is outside the valid range [{valid_from}, {valid_to}]")]
    OutOfRangeInstant {
        standard: TimeStandard,
        jd: f64,
        valid_from: f64,
        valid_to: f64,
    },

    #[error("Invalid {name}: {value} ({reason})")]
    InvalidCoordinate {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl ConversionError {
    /// Stable machine-readable name of the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedConversion(_) => "unsupported_conversion",
            Self::OutOfRangeInstant { .. } => "out_of_range_instant",
            Self::InvalidCoordinate { .. } => "invalid_coordinate",
            Self::MalformedInput(_) => "malformed_input",
        }
    }

    /// HTTP-style status a service layer should answer with.
    pub const fn status_code(&self) -> u16 {
        400
    }

    pub(crate) fn out_of_range(
        standard: TimeStandard,
        jd: f64,
        (valid_from, valid_to): (f64, f64),
    ) -> Self {
        Self::OutOfRangeInstant {
            standard,
            jd,
            valid_from,
            valid_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(
            ConversionError::UnsupportedConversion("bogus".into()).kind(),
            "unsupported_conversion"
        );
        assert_eq!(
            ConversionError::out_of_range(TimeStandard::Utc, 1.0, (2.0, 3.0)).kind(),
            "out_of_range_instant"
        );
        assert_eq!(
            ConversionError::InvalidCoordinate {
                name: "declination",
                value: 91.0,
                reason: "must lie in [-90, 90]"
            }
            .kind(),
            "invalid_coordinate"
        );
        assert_eq!(ConversionError::MalformedInput("missing".into()).kind(), "malformed_input");
    }

    #[test]
    fn every_kind_is_a_client_error() {
        let errors = [
            ConversionError::UnsupportedConversion("x".into()),
            ConversionError::out_of_range(TimeStandard::Tdb, 0.0, (1.0, 2.0)),
            ConversionError::MalformedInput("x".into()),
        ];
        for e in errors {
            assert_eq!(e.status_code(), 400);
        }
    }

    #[test]
    fn messages_are_human_readable() {
        let e = ConversionError::UnsupportedConversion("bogus".into());
        assert!(e.to_string().contains("'bogus'"));

        let e = ConversionError::out_of_range(TimeStandard::Utc, 2_400_000.0, (2_436_934.5, 2_461_402.5));
        let msg = e.to_string();
        assert!(msg.contains("JD(UTC) 2400000"), "{msg}");
        assert!(msg.contains("2436934.5"), "{msg}");
    }
}
