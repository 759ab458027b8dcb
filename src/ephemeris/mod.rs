// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Earth positions relative to the solar-system barycenter and the Sun.
//!
//! The light-time corrector only needs one thing from an ephemeris: where
//! the geocenter is, relative to a reference point, at a TDB instant.
//! [`EphemerisProvider`] captures exactly that, so a high-accuracy source
//! (e.g. a JPL DE file reader) can replace the embedded one.
//!
//! The embedded [`Vsop87Ephemeris`] combines:
//!
//! - [`vsop87`]: heliocentric Earth from truncated VSOP87D series;
//! - [`planets`]: the Sun's barycentric offset from Keplerian planets.
//!
//! | Quantity | Accuracy (1800–2050) |
//! |----------|----------------------|
//! | Heliocentric Earth | ≈ 1e-6 AU (≈ 0.5 ms light time) |
//! | Barycentric Earth | ≈ 2e-5 AU (≈ 10 ms light time) |

pub mod planets;
pub mod vsop87;

use nalgebra::Vector3;

use crate::error::{ConversionError, Result};
use crate::instant::Time;
use crate::scales::{TimeStandard, TDB};

/// Origin an Earth position is measured from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ReferencePoint {
    /// Solar-system barycenter.
    Barycenter,
    /// Center of the Sun.
    Heliocenter,
}

/// Source of Earth positions.
pub trait EphemerisProvider: Send + Sync {
    /// Geocenter position relative to `reference`, in AU on ICRS/J2000
    /// equatorial axes.
    ///
    /// Fails with [`ConversionError::OutOfRangeInstant`] outside
    /// [`validity`](Self::validity).
    fn position_relative_to(
        &self,
        instant: &Time<TDB>,
        reference: ReferencePoint,
    ) -> Result<Vector3<f64>>;

    /// `(first, last)` TDB instants the provider answers for.
    fn validity(&self) -> (Time<TDB>, Time<TDB>);
}

impl<E: EphemerisProvider + ?Sized> EphemerisProvider for &E {
    fn position_relative_to(
        &self,
        instant: &Time<TDB>,
        reference: ReferencePoint,
    ) -> Result<Vector3<f64>> {
        (**self).position_relative_to(instant, reference)
    }

    fn validity(&self) -> (Time<TDB>, Time<TDB>) {
        (**self).validity()
    }
}

/// Embedded analytic ephemeris (VSOP87D Earth + Keplerian planets).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Vsop87Ephemeris;

impl Vsop87Ephemeris {
    /// 1800-01-01, start of the planetary elements' fit interval.
    pub const VALID_FROM: Time<TDB> = Time::new(2_378_496.5);
    /// 2050-01-01, end of the planetary elements' fit interval.
    pub const VALID_TO: Time<TDB> = Time::new(2_469_807.5);

    pub const fn new() -> Self {
        Self
    }
}

impl EphemerisProvider for Vsop87Ephemeris {
    fn position_relative_to(
        &self,
        instant: &Time<TDB>,
        reference: ReferencePoint,
    ) -> Result<Vector3<f64>> {
        let (from, to) = self.validity();
        if !(from.value()..=to.value()).contains(&instant.value()) {
            return Err(ConversionError::out_of_range(
                TimeStandard::Tdb,
                instant.value(),
                (from.value(), to.value()),
            ));
        }

        let heliocentric = vsop87::heliocentric_position(instant);
        Ok(match reference {
            ReferencePoint::Heliocenter => heliocentric,
            ReferencePoint::Barycenter => heliocentric + planets::sun_barycentric_position(instant),
        })
    }

    fn validity(&self) -> (Time<TDB>, Time<TDB>) {
        (Self::VALID_FROM, Self::VALID_TO)
    }
}
