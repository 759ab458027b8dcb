// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epoch constants and J2000-relative time arguments shared by every
//! time standard.

use qtty::*;

use super::instant::{Time, TimeScale};

/// Offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
pub(crate) const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl<S: TimeScale> Time<S> {
    /// J2000.0 epoch on this standard's axis (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// One Julian millennium expressed in days.
    pub const JULIAN_MILLENNIUM: Days = Days::new(365_250.0);

    /// Julian millennia since J2000.0 (the VSOP87 time argument).
    #[inline]
    pub fn julian_millennias(&self) -> Millennia {
        Millennia::new(
            ((*self - Self::J2000) / Self::JULIAN_MILLENNIUM)
                .simplify()
                .value(),
        )
    }

    /// Julian centuries since J2000.0 (precession, sidereal time, TDB−TT).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Modified Julian Date on the same axis.
    #[inline]
    pub fn mjd(&self) -> Days {
        self.quantity() - MJD_EPOCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{TDB, TT, UTC};

    #[test]
    fn centuries_and_millennia_from_j2000() {
        let t = Time::<TT>::J2000 + Days::new(365_250.0);
        assert!((t.julian_millennias() - Millennia::new(1.0)).abs() < Millennia::new(1e-12));
        assert!((t.julian_centuries() - Centuries::new(10.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn j2000_is_zero() {
        assert_eq!(Time::<TDB>::J2000.julian_centuries(), Centuries::new(0.0));
    }

    #[test]
    fn mjd_offset() {
        let t = Time::<UTC>::new(2_451_545.0);
        assert_eq!(t.mjd(), Days::new(51_544.5));
    }
}
