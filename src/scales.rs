// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-standard marker types.
//!
//! Each zero-sized type tags a [`Time`](super::instant::Time) with the
//! time standard its Julian Date is counted in.
//!
//! | Marker | Standard | Notes |
//! |--------|----------|-------|
//! | [`UTC`] | Coordinated Universal Time | civil time, steps with leap seconds |
//! | [`TT`]  | Terrestrial Time | `TT = TAI + 32.184 s` |
//! | [`TDB`] | Barycentric Dynamical Time | `TT` plus a ≈1.7 ms periodic term |
//!
//! Moving between standards is **not** a constant offset (leap seconds,
//! the TDB periodic series), so it always goes through a
//! [`TimeConverter`](crate::TimeConverter) and is fallible.

use super::instant::TimeScale;

/// Runtime tag for the time standard a Julian Date is counted in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeStandard {
    Utc,
    Tt,
    Tdb,
}

impl TimeStandard {
    /// Short label (`"UTC"`, `"TT"`, `"TDB"`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utc => UTC::LABEL,
            Self::Tt => TT::LABEL,
            Self::Tdb => TDB::LABEL,
        }
    }
}

impl std::fmt::Display for TimeStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Markers
// ---------------------------------------------------------------------------

/// Coordinated Universal Time.
///
/// A `Time<UTC>` holds a Julian Date counted on the UTC axis, which is the
/// form observation logs and HJD values are reported in.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UTC;

impl TimeScale for UTC {
    const LABEL: &'static str = "UTC";
    const STANDARD: TimeStandard = TimeStandard::Utc;
}

/// Terrestrial Time.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "TT";
    const STANDARD: TimeStandard = TimeStandard::Tt;
}

/// Barycentric Dynamical Time.
///
/// The argument of the embedded ephemeris, and the standard BJD_TDB
/// results are expressed in.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TDB;

impl TimeScale for TDB {
    const LABEL: &'static str = "TDB";
    const STANDARD: TimeStandard = TimeStandard::Tdb;
}
