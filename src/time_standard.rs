// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! UTC → TT → TDB conversion.
//!
//! The numbers that change over time (leap seconds) and the choice of
//! TDB − TT series sit behind [`TimeStandardProvider`].  [`TimeConverter`]
//! only adds the offsets the provider hands back:
//!
//! ```text
//! TT  = UTC + (TAI − UTC) + 32.184 s
//! TDB = TT  + (TDB − TT)(TT)
//! ```

use qtty::*;

use crate::error::{ConversionError, Result};
use crate::instant::{Time, TimeScale};
use crate::leap_seconds::{self, TABLE_EXPIRY, TABLE_START};
use crate::scales::{TimeStandard, TDB, TT, UTC};

/// `TT − TAI`, fixed by definition.
pub const TT_MINUS_TAI: Seconds = Seconds::new(32.184);

// ═══════════════════════════════════════════════════════════════════════════
// Provider trait
// ═══════════════════════════════════════════════════════════════════════════

/// Source of the epoch-dependent offsets between time standards.
pub trait TimeStandardProvider: Send + Sync {
    /// `TAI − UTC` at a UTC instant.
    ///
    /// Fails with [`ConversionError::OutOfRangeInstant`] when the instant is
    /// outside the provider's table.
    fn leap_second_offset(&self, instant: &Time<UTC>) -> Result<Seconds>;

    /// `TDB − TT` at a TT instant.
    fn tdb_minus_tt(&self, instant: &Time<TT>) -> Seconds;
}

impl<P: TimeStandardProvider + ?Sized> TimeStandardProvider for &P {
    fn leap_second_offset(&self, instant: &Time<UTC>) -> Result<Seconds> {
        (**self).leap_second_offset(instant)
    }

    fn tdb_minus_tt(&self, instant: &Time<TT>) -> Seconds {
        (**self).tdb_minus_tt(instant)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Embedded provider
// ═══════════════════════════════════════════════════════════════════════════

/// Compiled-in leap-second table plus the USNO Circular 179 TDB − TT
/// series.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EmbeddedTimeStandard {
    expiry: Time<UTC>,
}

impl EmbeddedTimeStandard {
    /// Provider valid up to the compiled-in table expiry.
    pub const fn new() -> Self {
        Self {
            expiry: TABLE_EXPIRY,
        }
    }

    /// Provider trusting the table up to `expiry`.
    ///
    /// Use this once a newer Bulletin C has confirmed no leap second was
    /// inserted after 2017-01-01.
    pub const fn with_expiry(expiry: Time<UTC>) -> Self {
        Self { expiry }
    }

    /// `(first, last)` UTC instants the leap-second table answers for.
    pub const fn validity(&self) -> (Time<UTC>, Time<UTC>) {
        (TABLE_START, self.expiry)
    }
}

impl Default for EmbeddedTimeStandard {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeStandardProvider for EmbeddedTimeStandard {
    fn leap_second_offset(&self, instant: &Time<UTC>) -> Result<Seconds> {
        leap_seconds::tai_minus_utc(instant, self.expiry).ok_or_else(|| {
            ConversionError::out_of_range(
                TimeStandard::Utc,
                instant.value(),
                (TABLE_START.value(), self.expiry.value()),
            )
        })
    }

    /// USNO Circular 179, eq. 2.6 (Fairhead & Bretagnon 1990 leading
    /// terms).  Error below 10 μs over 1600–2200.
    fn tdb_minus_tt(&self, instant: &Time<TT>) -> Seconds {
        let t = instant.julian_centuries().value();

        let dt_sec = 0.001_657 * (628.307_6 * t + 6.240_1).sin()
            + 0.000_022 * (575.338_5 * t + 4.297_0).sin()
            + 0.000_014 * (1_256.615_2 * t + 6.196_9).sin()
            + 0.000_005 * (606.977_7 * t + 4.021_2).sin()
            + 0.000_005 * (52.969_1 * t + 0.444_4).sin()
            + 0.000_002 * (21.329_9 * t + 5.543_1).sin()
            + 0.000_010 * t * (628.307_6 * t + 4.249_0).sin();

        Seconds::new(dt_sec)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Converter
// ═══════════════════════════════════════════════════════════════════════════

/// Standards a [`TimeConverter`] can bring to TDB.
pub trait ToTdb: TimeScale {
    #[doc(hidden)]
    fn to_tdb_with<P: TimeStandardProvider>(
        converter: &TimeConverter<P>,
        instant: &Time<Self>,
    ) -> Result<Time<TDB>>;
}

impl ToTdb for UTC {
    fn to_tdb_with<P: TimeStandardProvider>(
        converter: &TimeConverter<P>,
        instant: &Time<Self>,
    ) -> Result<Time<TDB>> {
        let tt = converter.utc_to_tt(instant)?;
        Ok(converter.tt_to_tdb(&tt))
    }
}

impl ToTdb for TT {
    fn to_tdb_with<P: TimeStandardProvider>(
        converter: &TimeConverter<P>,
        instant: &Time<Self>,
    ) -> Result<Time<TDB>> {
        Ok(converter.tt_to_tdb(instant))
    }
}

/// Moves instants between UTC, TT and TDB using a [`TimeStandardProvider`].
#[derive(Debug, Clone, Default)]
pub struct TimeConverter<P = EmbeddedTimeStandard> {
    provider: P,
}

impl<P: TimeStandardProvider> TimeConverter<P> {
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// UTC → TT.
    pub fn utc_to_tt(&self, utc: &Time<UTC>) -> Result<Time<TT>> {
        let dat = self.provider.leap_second_offset(utc)?;
        let offset = (dat + TT_MINUS_TAI).to::<Day>();
        Ok(Time::from_days(utc.quantity() + offset))
    }

    /// TT → TDB.
    pub fn tt_to_tdb(&self, tt: &Time<TT>) -> Time<TDB> {
        let offset = self.provider.tdb_minus_tt(tt).to::<Day>();
        Time::from_days(tt.quantity() + offset)
    }

    /// UTC or TT → TDB.
    #[inline]
    pub fn to_tdb<S: ToTdb>(&self, instant: &Time<S>) -> Result<Time<TDB>> {
        S::to_tdb_with(self, instant)
    }
}
