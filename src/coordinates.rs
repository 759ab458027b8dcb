// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Target direction and observer site.
//!
//! Both types validate at construction, so every value that reaches the
//! light-time corrector is known to lie in its domain.
//!
//! # Conventions
//!
//! - **Right ascension / declination**: ICRS (J2000) degrees.
//! - **Latitude**: geodetic, WGS84, north positive.
//! - **Longitude**: east positive; both `[-180, 180]` and `[0, 360)` are
//!   accepted.
//! - **Elevation**: metres above the WGS84 ellipsoid.

use nalgebra::Vector3;
use qtty::*;

use crate::error::{ConversionError, Result};
use crate::frames;
use crate::instant::Time;
use crate::scales::UTC;

/// WGS84 equatorial radius.
const WGS84_A: Meters = Meters::new(6_378_137.0);
/// WGS84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// Lowest accepted elevation (Dead Sea shore, with margin).
const MIN_ELEVATION: Meters = Meters::new(-500.0);

fn check(name: &'static str, value: f64, ok: bool, reason: &'static str) -> Result<()> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidCoordinate {
            name,
            value,
            reason: "must be finite",
        });
    }
    if !ok {
        return Err(ConversionError::InvalidCoordinate {
            name,
            value,
            reason,
        });
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SkyDirection
// ═══════════════════════════════════════════════════════════════════════════

/// Direction to the target on the celestial sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SkyDirection {
    ra: Degrees,
    dec: Degrees,
}

impl SkyDirection {
    /// Build from right ascension `[0, 360)` and declination `[-90, 90]`,
    /// both in degrees.
    pub fn new(ra_deg: f64, dec_deg: f64) -> Result<Self> {
        check(
            "right ascension",
            ra_deg,
            (0.0..360.0).contains(&ra_deg),
            "must lie in [0, 360) degrees",
        )?;
        check(
            "declination",
            dec_deg,
            (-90.0..=90.0).contains(&dec_deg),
            "must lie in [-90, 90] degrees",
        )?;
        Ok(Self {
            ra: Degrees::new(ra_deg),
            dec: Degrees::new(dec_deg),
        })
    }

    pub fn ra(&self) -> Degrees {
        self.ra
    }

    pub fn dec(&self) -> Degrees {
        self.dec
    }

    /// Unit vector `(cos δ cos α, cos δ sin α, sin δ)` on J2000 equatorial
    /// axes.
    pub fn unit_vector(&self) -> Vector3<f64> {
        let (sin_ra, cos_ra) = self.ra.sin_cos();
        let (sin_dec, cos_dec) = self.dec.sin_cos();
        Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ObserverLocation
// ═══════════════════════════════════════════════════════════════════════════

/// Geodetic site of the observer.
///
/// [`ObserverLocation::GEOCENTER`] (the [`Default`]) stands for an
/// observation referred to Earth's center; its offset vector is zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ObserverLocation {
    latitude: Degrees,
    longitude: Degrees,
    elevation: Meters,
}

impl Default for ObserverLocation {
    fn default() -> Self {
        Self::GEOCENTER
    }
}

impl ObserverLocation {
    /// Earth's center: latitude, longitude and elevation all zero.
    pub const GEOCENTER: Self = Self {
        latitude: Degrees::new(0.0),
        longitude: Degrees::new(0.0),
        elevation: Meters::new(0.0),
    };

    /// Build from geodetic latitude and longitude (degrees) and elevation
    /// (metres).
    pub fn new(lat_deg: f64, lon_deg: f64, elevation_m: f64) -> Result<Self> {
        check(
            "latitude",
            lat_deg,
            (-90.0..=90.0).contains(&lat_deg),
            "must lie in [-90, 90] degrees",
        )?;
        check(
            "longitude",
            lon_deg,
            (-180.0..360.0).contains(&lon_deg),
            "must lie in [-180, 180] or [0, 360) degrees",
        )?;
        check(
            "elevation",
            elevation_m,
            elevation_m >= MIN_ELEVATION.value(),
            "must be at least -500 m",
        )?;
        Ok(Self {
            latitude: Degrees::new(lat_deg),
            longitude: Degrees::new(lon_deg),
            elevation: Meters::new(elevation_m),
        })
    }

    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    pub fn longitude(&self) -> Degrees {
        self.longitude
    }

    pub fn elevation(&self) -> Meters {
        self.elevation
    }

    /// `true` for the all-zero location.
    ///
    /// The all-zero triple is the documented geocenter convention, not a
    /// point on the Gulf of Guinea.
    pub fn is_geocenter(&self) -> bool {
        *self == Self::GEOCENTER
    }

    /// Earth-fixed (ITRS) position of the site, metres.
    fn earth_fixed(&self) -> Vector3<f64> {
        let e2 = WGS84_F * (2.0 - WGS84_F);
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let a = WGS84_A.value();
        let h = self.elevation.value();

        // Prime-vertical radius of curvature
        let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        Vector3::new(
            (n + h) * cos_lat * cos_lon,
            (n + h) * cos_lat * sin_lon,
            (n * (1.0 - e2) + h) * sin_lat,
        )
    }

    /// Geocentric position of the site at `utc`, AU, on J2000 equatorial
    /// axes.
    ///
    /// Earth rotation uses GMST; nutation and polar motion are neglected
    /// (< 0.3 m on the site, far below a nanosecond of light time).
    pub fn geocentric_offset(&self, utc: &Time<UTC>) -> Vector3<f64> {
        if self.is_geocenter() {
            return Vector3::zeros();
        }
        let to_au = Meters::new(1.0).to::<AstronomicalUnit>().value();
        let itrs = self.earth_fixed() * to_au;

        let spin = nalgebra::Rotation3::from_axis_angle(
            &Vector3::z_axis(),
            frames::gmst(utc).value(),
        );
        frames::precession_to_j2000(utc.julian_centuries()) * (spin * itrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_direction_boundaries_are_accepted() {
        assert!(SkyDirection::new(0.0, 90.0).is_ok());
        assert!(SkyDirection::new(0.0, -90.0).is_ok());
        assert!(SkyDirection::new(359.999_999_999, 0.0).is_ok());
    }

    #[test]
    fn sky_direction_rejects_out_of_domain() {
        for (ra, dec) in [
            (360.0, 0.0),
            (-0.1, 0.0),
            (10.0, 90.000_1),
            (10.0, -91.0),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ] {
            let err = SkyDirection::new(ra, dec).unwrap_err();
            assert_eq!(err.kind(), "invalid_coordinate", "ra={ra} dec={dec}");
        }
    }

    #[test]
    fn invalid_coordinate_names_the_field() {
        match SkyDirection::new(10.0, 95.0) {
            Err(ConversionError::InvalidCoordinate { name, value, .. }) => {
                assert_eq!(name, "declination");
                assert_eq!(value, 95.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unit_vector_is_normalised() {
        let cases = [(0.0, 0.0), (90.0, 0.0), (277.805_75, 52.785_42), (12.3, -90.0)];
        for (ra, dec) in cases {
            let n = SkyDirection::new(ra, dec).unwrap().unit_vector();
            assert!((n.norm() - 1.0).abs() < 1e-15);
        }
        let pole = SkyDirection::new(123.0, 90.0).unwrap().unit_vector();
        assert!((pole.z - 1.0).abs() < 1e-15);
        let vernal = SkyDirection::new(0.0, 0.0).unwrap().unit_vector();
        assert!((vernal - Vector3::x()).norm() < 1e-15);
    }

    #[test]
    fn observer_location_domain() {
        assert!(ObserverLocation::new(50.0, 30.0, 95.0).is_ok());
        assert!(ObserverLocation::new(-90.0, -180.0, 0.0).is_ok());
        assert!(ObserverLocation::new(90.0, 359.9, -500.0).is_ok());

        assert!(ObserverLocation::new(90.1, 0.0, 0.0).is_err());
        assert!(ObserverLocation::new(0.0, -180.1, 0.0).is_err());
        assert!(ObserverLocation::new(0.0, 360.1, 0.0).is_err());
        assert!(ObserverLocation::new(0.0, 180.0, 0.0).is_ok());
        assert!(ObserverLocation::new(0.0, 359.999_999, 0.0).is_ok());
        assert!(ObserverLocation::new(0.0, 0.0, -501.0).is_err());
        assert!(ObserverLocation::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn longitude_of_360_is_rejected() {
        match ObserverLocation::new(10.0, 360.0, 0.0) {
            Err(ConversionError::InvalidCoordinate { name, value, .. }) => {
                assert_eq!(name, "longitude");
                assert_eq!(value, 360.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn geocenter_is_default_and_zero() {
        let geo = ObserverLocation::default();
        assert!(geo.is_geocenter());
        assert_eq!(geo, ObserverLocation::new(0.0, 0.0, 0.0).unwrap());
        let offset = geo.geocentric_offset(&Time::new(2_459_430.285_65));
        assert_eq!(offset, Vector3::zeros());
    }

    #[test]
    fn surface_offset_has_earth_radius() {
        let site = ObserverLocation::new(50.0, 30.0, 95.0).unwrap();
        let offset = site.geocentric_offset(&Time::new(2_459_430.285_65));
        let metres = offset.norm() / Meters::new(1.0).to::<AstronomicalUnit>().value();
        // Geocentric radius at 50° N is ≈ 6365.6 km
        assert!((metres - 6_365_700.0).abs() < 2_000.0, "{metres}");
    }

    #[test]
    fn pole_site_lies_on_the_celestial_pole() {
        // Earth rotation does not move a polar site; only precession does.
        let site = ObserverLocation::new(90.0, 0.0, 0.0).unwrap();
        let offset = site.geocentric_offset(&Time::new(2_451_545.0));
        let dir = offset.normalize();
        assert!((dir.z - 1.0).abs() < 1e-12, "{dir}");
    }

    #[test]
    fn equatorial_site_rotates_with_sidereal_time() {
        let site = ObserverLocation::new(0.0, 0.0, 0.0001).unwrap();
        let t0 = Time::<UTC>::new(2_451_545.0);
        let quarter = Time::<UTC>::new(2_451_545.0 + 0.25 / 1.002_737_909_34);
        let a = site.geocentric_offset(&t0).normalize();
        let b = site.geocentric_offset(&quarter).normalize();
        assert!((a.dot(&b)).abs() < 1e-6, "{}", a.dot(&b));
    }
}
