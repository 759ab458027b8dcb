// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Barycentric Julian Date conversion
//!
//! This crate converts observation time stamps to **BJD_TDB**, the Julian
//! date in Barycentric Dynamical Time at which the light would have
//! reached the solar-system barycenter.
//!
//! # Conversions
//!
//! | Input | Function | Observer |
//! |-------|----------|----------|
//! | UTC Julian date | [`utc2bjd`] / [`BarycentricConverter::utc_to_bjd`] | geodetic site or geocenter |
//! | Heliocentric Julian date (HJD, UTC) | [`hjd2bjd`] / [`BarycentricConverter::hjd_to_bjd`] | geocenter |
//!
//! Results of the raw-argument functions and of [`ConversionRequest`] are
//! truncated (never rounded) to six decimals, see [`precision`].
//!
//! # Core types
//!
//! - [`Time<S>`]: an instant on a [`TimeScale`] ([`UTC`], [`TT`], [`TDB`]).
//! - [`TimeConverter`]: UTC → TT → TDB over a [`TimeStandardProvider`].
//! - [`EphemerisProvider`]: Earth positions relative to the barycenter or
//!   the Sun; [`Vsop87Ephemeris`] is the embedded one.
//! - [`SkyDirection`] / [`ObserverLocation`]: validated target and site.
//! - [`BarycentricConverter`]: batch conversion over both providers.
//!
//! # Example
//!
//! ```
//! use baryjd::{BarycentricConverter, ObserverLocation, SkyDirection, Time, UTC};
//!
//! let converter = BarycentricConverter::embedded();
//! let target = SkyDirection::new(277.80575, 52.78542)?;
//! let site = ObserverLocation::new(50.0, 30.0, 95.0)?;
//!
//! let bjd = converter.utc_to_bjd_single(Time::<UTC>::new(2459430.28565), &target, &site)?;
//! assert_eq!(baryjd::precision::truncate_value(bjd.value(), 6), 2459430.287784);
//! # Ok::<(), baryjd::ConversionError>(())
//! ```

mod config;
mod convert;
mod coordinates;
pub mod ephemeris;
mod error;
pub mod frames;
pub(crate) mod instant;
mod julian_date_ext;
pub mod leap_seconds;
pub mod light_time;
pub mod precision;
mod request;
pub(crate) mod scales;
mod time_standard;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use config::ConversionConfig;
pub use convert::{default_converter, hjd2bjd, utc2bjd, BarycentricConverter};
pub use coordinates::{ObserverLocation, SkyDirection};
pub use ephemeris::{EphemerisProvider, ReferencePoint, Vsop87Ephemeris};
pub use error::{ConversionError, Result};
pub use instant::{Time, TimeScale};
pub use light_time::{CorrectionKind, LightTimeCorrection};
pub use request::{ConversionKind, ConversionRequest, ConversionResponse};
pub use scales::{TimeStandard, TDB, TT, UTC};
pub use time_standard::{
    EmbeddedTimeStandard, TimeConverter, TimeStandardProvider, ToTdb, TT_MINUS_TAI,
};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian date on the UTC axis, the input of [`utc2bjd`].
pub type UtcJulianDate = Time<UTC>;

/// Barycentric Julian date in TDB.
pub type BarycentricJulianDate = Time<TDB>;
