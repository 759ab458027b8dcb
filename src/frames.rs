// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Frame rotations between the ecliptic, the equator of date, the J2000
//! equator, and the rotating Earth.
//!
//! All matrices are **active** rotations built with
//! [`Rotation3::from_axis_angle`], so `R * v` re-expresses `v` in the
//! target frame.  Every position vector leaving this crate's ephemeris is
//! expressed on J2000 equatorial axes (ICRS to within the 1976 frame bias,
//! i.e. ≈ 20 mas, far below the light-time budget).

use nalgebra::{Rotation3, Vector3};
use qtty::*;

use crate::instant::Time;
use crate::scales::UTC;

/// Mean obliquity of the ecliptic at J2000.0, as used to rotate the
/// J2000 ecliptic planetary elements onto the equator.
pub const J2000_OBLIQUITY: Arcseconds = Arcseconds::new(84_381.406);

#[inline]
fn rot_x(angle: Radians) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle.value())
}

#[inline]
fn rot_y(angle: Radians) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle.value())
}

#[inline]
fn rot_z(angle: Radians) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle.value())
}

#[inline]
fn arcsec(value: f64) -> Radians {
    Arcseconds::new(value).to::<Radian>()
}

/// IAU 1976 mean obliquity of the ecliptic of date.
pub fn mean_obliquity(t: Centuries) -> Radians {
    let t = t.value();
    arcsec(84_381.448 + t * (-46.815_0 + t * (-0.000_59 + t * 0.001_813)))
}

/// Ecliptic of date → mean equator of date.
pub fn ecliptic_to_equator_of_date(t: Centuries) -> Rotation3<f64> {
    rot_x(mean_obliquity(t))
}

/// J2000 ecliptic → J2000 equator.
pub fn ecliptic_to_equator_j2000() -> Rotation3<f64> {
    rot_x(J2000_OBLIQUITY.to::<Radian>())
}

/// Mean equator of date → J2000 equator (IAU 1976 precession, inverted).
///
/// `t` is measured in Julian centuries from J2000.0.
pub fn precession_to_j2000(t: Centuries) -> Rotation3<f64> {
    let t = t.value();
    let zeta = arcsec(t * (2_306.218_1 + t * (0.301_88 + t * 0.017_998)));
    let z = arcsec(t * (2_306.218_1 + t * (1.094_68 + t * 0.018_203)));
    let theta = arcsec(t * (2_004.310_9 + t * (-0.426_65 - t * 0.041_833)));

    rot_z(-zeta) * rot_y(theta) * rot_z(-z)
}

/// Greenwich mean sidereal time (IAU 1982), taking UTC as UT1.
///
/// |UT1 − UTC| < 0.9 s shifts the sidereal angle by < 4″, which moves an
/// observer on the surface by < 150 m, i.e. under a nanosecond of light
/// time.
pub fn gmst(utc: &Time<UTC>) -> Radians {
    // GMST at 0h UT1, seconds
    const C0: f64 = 24_110.548_41;
    const C1: f64 = 8_640_184.812_866;
    const C2: f64 = 9.310_4e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.002_737_909_34;

    let mjd = utc.mjd().value();
    let midnight = mjd.floor();
    let t = (midnight - 51_544.5) / 36_525.0;

    let gmst0 = Seconds::new(((C3 * t + C2) * t + C1) * t + C0);
    let turn = std::f64::consts::TAU;
    let angle = gmst0.to::<Day>().value() * turn + (mjd - midnight) * turn * RAP;

    Radians::new(angle).wrap_pos()
}
