// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Light-travel-time (Rømer) correction.
//!
//! For a distant source in direction `n̂`, a wavefront reaches an observer
//! at `r` (relative to a reference point) earlier than the reference point
//! by
//!
//! ```text
//! Δt = (r · n̂) / c
//! ```
//!
//! Adding `Δt` to the observer's time stamp gives the arrival time at the
//! reference point.  A positive `Δt` means the observer lies on the
//! source's side of the reference point.

use nalgebra::Vector3;
use qtty::*;

use crate::coordinates::{ObserverLocation, SkyDirection};
use crate::ephemeris::{EphemerisProvider, ReferencePoint};
use crate::error::Result;
use crate::instant::Time;
use crate::scales::{TDB, UTC};

/// Speed of light in AU per day (IAU 2012 au, 86 400 s day).
pub const SPEED_OF_LIGHT_AU_PER_DAY: f64 = 299_792.458 * 86_400.0 / 149_597_870.7;

/// Which reference point a correction refers the arrival time to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CorrectionKind {
    /// Center of the Sun (HJD).
    Heliocentric,
    /// Solar-system barycenter (BJD).
    Barycentric,
}

impl CorrectionKind {
    pub const fn reference_point(self) -> ReferencePoint {
        match self {
            Self::Heliocentric => ReferencePoint::Heliocenter,
            Self::Barycentric => ReferencePoint::Barycenter,
        }
    }
}

/// A signed light-time delay tied to the instant it was evaluated at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightTimeCorrection {
    pub kind: CorrectionKind,
    /// Instant the observer position was evaluated at.
    pub reference: Time<TDB>,
    pub delay: Days,
}

impl LightTimeCorrection {
    /// The delay in seconds.
    pub fn seconds(&self) -> Seconds {
        self.delay.to::<Second>()
    }
}

/// Light-time correction for an observer at `position` (AU, relative to
/// the reference point of `kind`) looking toward `target`.
pub fn correction(
    position: &Vector3<f64>,
    target: &SkyDirection,
    kind: CorrectionKind,
    reference: Time<TDB>,
) -> LightTimeCorrection {
    let projected = position.dot(&target.unit_vector());
    LightTimeCorrection {
        kind,
        reference,
        delay: Days::new(projected / SPEED_OF_LIGHT_AU_PER_DAY),
    }
}

/// Observer position relative to the reference point of `kind`, AU.
///
/// Sums the ephemeris geocenter vector at `tdb` and the site's geocentric
/// offset at `utc` (the same instant on the UTC axis, which drives Earth
/// rotation).
pub fn observer_position<E: EphemerisProvider + ?Sized>(
    ephemeris: &E,
    tdb: &Time<TDB>,
    utc: &Time<UTC>,
    location: &ObserverLocation,
    kind: CorrectionKind,
) -> Result<Vector3<f64>> {
    let earth = ephemeris.position_relative_to(tdb, kind.reference_point())?;
    Ok(earth + location.geocentric_offset(utc))
}
