// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! TAI − UTC table.
//!
//! Between 1960 and 1972 UTC was steered with fractional steps and a
//! continuous rate offset, so each row carries a drift term:
//!
//! ```text
//! TAI − UTC = offset + (MJD − mjd_ref) × rate      [s]
//! ```
//!
//! From 1972-01-01 onward the rate is zero and `offset` is the integer
//! leap-second count.  Source: IERS Bulletin C / USNO `tai-utc.dat`.

use qtty::Seconds;

use crate::instant::Time;
use crate::scales::UTC;

/// One step of the TAI − UTC history, effective from `jd` (UTC, 0h).
#[derive(Debug, Copy, Clone, PartialEq)]
struct Step {
    jd: f64,
    offset: f64,
    mjd_ref: f64,
    rate: f64,
}

const fn drift(jd: f64, offset: f64, mjd_ref: f64, rate: f64) -> Step {
    Step {
        jd,
        offset,
        mjd_ref,
        rate,
    }
}

const fn leap(jd: f64, offset: f64) -> Step {
    Step {
        jd,
        offset,
        mjd_ref: 0.0,
        rate: 0.0,
    }
}

const STEPS: [Step; 42] = [
    drift(2_436_934.5, 1.417_818_0, 37_300.0, 0.001_296), // 1960-01-01
    drift(2_437_300.5, 1.422_818_0, 37_300.0, 0.001_296), // 1961-01-01
    drift(2_437_512.5, 1.372_818_0, 37_300.0, 0.001_296), // 1961-08-01
    drift(2_437_665.5, 1.845_858_0, 37_665.0, 0.001_123_2), // 1962-01-01
    drift(2_438_334.5, 1.945_858_0, 37_665.0, 0.001_123_2), // 1963-11-01
    drift(2_438_395.5, 3.240_130_0, 38_761.0, 0.001_296), // 1964-01-01
    drift(2_438_486.5, 3.340_130_0, 38_761.0, 0.001_296), // 1964-04-01
    drift(2_438_639.5, 3.440_130_0, 38_761.0, 0.001_296), // 1964-09-01
    drift(2_438_761.5, 3.540_130_0, 38_761.0, 0.001_296), // 1965-01-01
    drift(2_438_820.5, 3.640_130_0, 38_761.0, 0.001_296), // 1965-03-01
    drift(2_438_942.5, 3.740_130_0, 38_761.0, 0.001_296), // 1965-07-01
    drift(2_439_004.5, 3.840_130_0, 38_761.0, 0.001_296), // 1965-09-01
    drift(2_439_126.5, 4.313_170_0, 39_126.0, 0.002_592), // 1966-01-01
    drift(2_439_887.5, 4.213_170_0, 39_126.0, 0.002_592), // 1968-02-01
    leap(2_441_317.5, 10.0), // 1972-01-01
    leap(2_441_499.5, 11.0), // 1972-07-01
    leap(2_441_683.5, 12.0), // 1973-01-01
    leap(2_442_048.5, 13.0), // 1974-01-01
    leap(2_442_413.5, 14.0), // 1975-01-01
    leap(2_442_778.5, 15.0), // 1976-01-01
    leap(2_443_144.5, 16.0), // 1977-01-01
    leap(2_443_509.5, 17.0), // 1978-01-01
    leap(2_443_874.5, 18.0), // 1979-01-01
    leap(2_444_239.5, 19.0), // 1980-01-01
    leap(2_444_786.5, 20.0), // 1981-07-01
    leap(2_445_151.5, 21.0), // 1982-07-01
    leap(2_445_516.5, 22.0), // 1983-07-01
    leap(2_446_247.5, 23.0), // 1985-07-01
    leap(2_447_161.5, 24.0), // 1988-01-01
    leap(2_447_892.5, 25.0), // 1990-01-01
    leap(2_448_257.5, 26.0), // 1991-01-01
    leap(2_448_804.5, 27.0), // 1992-07-01
    leap(2_449_169.5, 28.0), // 1993-07-01
    leap(2_449_534.5, 29.0), // 1994-07-01
    leap(2_450_083.5, 30.0), // 1996-01-01
    leap(2_450_630.5, 31.0), // 1997-07-01
    leap(2_451_179.5, 32.0), // 1999-01-01
    leap(2_453_736.5, 33.0), // 2006-01-01
    leap(2_454_832.5, 34.0), // 2009-01-01
    leap(2_456_109.5, 35.0), // 2012-07-01
    leap(2_457_204.5, 36.0), // 2015-07-01
    leap(2_457_754.5, 37.0), // 2017-01-01
];

/// First UTC instant the table covers (1960-01-01).
pub const TABLE_START: Time<UTC> = Time::new(2_436_934.5);

/// Last UTC instant the table is known to be complete for (2026-12-28,
/// IERS Bulletin C 71).
pub const TABLE_EXPIRY: Time<UTC> = Time::new(2_461_402.5);

/// TAI − UTC at a UTC instant, or `None` when the instant lies before
/// [`TABLE_START`] or after `expiry`.
pub fn tai_minus_utc(utc: &Time<UTC>, expiry: Time<UTC>) -> Option<Seconds> {
    let jd = utc.value();
    if !(TABLE_START.value()..=expiry.value()).contains(&jd) {
        return None;
    }

    // Binary search for the last step <= jd
    let idx = STEPS.partition_point(|step| step.jd <= jd);
    let step = STEPS.get(idx.checked_sub(1)?)?;
    let mjd = utc.mjd().value();
    Some(Seconds::new(
        step.offset + (mjd - step.mjd_ref) * step.rate,
    ))
}
