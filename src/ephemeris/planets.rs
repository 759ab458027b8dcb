// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Barycentric offset of the Sun from mean Keplerian planetary orbits.
//!
//! The Sun's position relative to the solar-system barycenter follows from
//! the planets' heliocentric positions and masses:
//!
//! ```text
//! r☉ = − Σ mᵢ rᵢ / (1 + Σ mᵢ)        (masses in solar units)
//! ```
//!
//! Positions come from E. M. Standish's approximate Keplerian elements
//! ("Keplerian Elements for Approximate Positions of the Major Planets",
//! JPL SSD, table 1, valid 1800–2050).  Their error, up to a few hundred
//! arcseconds for the outer planets, costs < 1e-5 AU on the Sun's offset.

use nalgebra::Vector3;
use qtty::*;

use crate::frames;
use crate::instant::Time;
use crate::scales::TDB;

/// Mean orbital elements at J2000 and their rates per Julian century.
///
/// Angles in degrees, `a` in AU, referred to the J2000 ecliptic and
/// equinox.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Elements {
    a: f64,
    e: f64,
    inclination: f64,
    mean_longitude: f64,
    perihelion_longitude: f64,
    node_longitude: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Planet {
    epoch: Elements,
    rate: Elements,
    /// Sun mass / planet mass (planet plus satellites).
    inverse_mass: f64,
}

const fn elements(a: f64, e: f64, i: f64, l: f64, varpi: f64, node: f64) -> Elements {
    Elements {
        a,
        e,
        inclination: i,
        mean_longitude: l,
        perihelion_longitude: varpi,
        node_longitude: node,
    }
}

const PLANETS: [Planet; 8] = [
    // Mercury
    Planet {
        epoch: elements(0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93),
        rate: elements(0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81),
        inverse_mass: 6_023_600.0,
    },
    // Venus
    Planet {
        epoch: elements(0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55),
        rate: elements(0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18),
        inverse_mass: 408_523.71,
    },
    // Earth-Moon barycenter
    Planet {
        epoch: elements(1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0),
        rate: elements(0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0),
        inverse_mass: 328_900.56,
    },
    // Mars
    Planet {
        epoch: elements(1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91),
        rate: elements(0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43),
        inverse_mass: 3_098_708.0,
    },
    // Jupiter
    Planet {
        epoch: elements(5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09),
        rate: elements(-0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68, 0.204_691_06),
        inverse_mass: 1_047.348_6,
    },
    // Saturn
    Planet {
        epoch: elements(9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48),
        rate: elements(-0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94),
        inverse_mass: 3_497.898,
    },
    // Uranus
    Planet {
        epoch: elements(19.189_164_64, 0.047_257_44, 0.772_637_83, 313.238_104_51, 170.954_276_30, 74.016_925_03),
        rate: elements(-0.001_961_76, -0.000_043_97, -0.002_429_39, 428.482_027_85, 0.408_052_81, 0.042_405_89),
        inverse_mass: 22_902.98,
    },
    // Neptune
    Planet {
        epoch: elements(30.069_922_76, 0.008_590_48, 1.770_043_47, -55.120_029_69, 44.964_762_27, 131.784_225_74),
        rate: elements(0.000_262_91, 0.000_051_05, 0.000_353_72, 218.459_453_25, -0.322_414_64, -0.005_086_64),
        inverse_mass: 19_412.24,
    },
];

/// Solve Kepler's equation `M = E − e sin E` by Newton iteration.
fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..10 {
        let delta = (mean_anomaly - (ecc - e * ecc.sin())) / (1.0 - e * ecc.cos());
        ecc += delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    ecc
}

impl Planet {
    /// Heliocentric position on J2000 ecliptic axes, AU.
    fn heliocentric_ecliptic(&self, t: f64) -> Vector3<f64> {
        let el = |epoch: f64, rate: f64| epoch + rate * t;
        let a = el(self.epoch.a, self.rate.a);
        let e = el(self.epoch.e, self.rate.e);
        let inclination = Degrees::new(el(self.epoch.inclination, self.rate.inclination));
        let mean_longitude = el(self.epoch.mean_longitude, self.rate.mean_longitude);
        let varpi = el(self.epoch.perihelion_longitude, self.rate.perihelion_longitude);
        let node = Degrees::new(el(self.epoch.node_longitude, self.rate.node_longitude));

        let perihelion_argument = Degrees::new(varpi) - node;
        let mean_anomaly = Degrees::new(mean_longitude - varpi)
            .wrap_signed()
            .to::<Radian>()
            .value();
        let ecc = eccentric_anomaly(mean_anomaly, e);

        // Orbital plane, x toward perihelion
        let in_plane = Vector3::new(
            a * (ecc.cos() - e),
            a * (1.0 - e * e).sqrt() * ecc.sin(),
            0.0,
        );

        let rot = |axis: nalgebra::Unit<Vector3<f64>>, angle: Degrees| {
            nalgebra::Rotation3::from_axis_angle(&axis, angle.to::<Radian>().value())
        };
        rot(Vector3::z_axis(), node)
            * rot(Vector3::x_axis(), inclination)
            * rot(Vector3::z_axis(), perihelion_argument)
            * in_plane
    }
}

/// Position of the Sun relative to the solar-system barycenter, AU, on
/// J2000 equatorial axes.
pub fn sun_barycentric_position(tdb: &Time<TDB>) -> Vector3<f64> {
    let t = tdb.julian_centuries().value();
    let mut weighted = Vector3::zeros();
    let mut total_mass = 1.0;
    for planet in &PLANETS {
        let mass = 1.0 / planet.inverse_mass;
        weighted += planet.heliocentric_ecliptic(t) * mass;
        total_mass += mass;
    }
    frames::ecliptic_to_equator_j2000() * (-weighted / total_mass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_solver_converges() {
        for &e in &[0.0, 0.016, 0.2, 0.6] {
            for i in 0..36 {
                let m = -3.1 + i as f64 * 0.17;
                let ecc = eccentric_anomaly(m, e);
                assert!((ecc - e * ecc.sin() - m).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn earth_moon_barycenter_near_one_au() {
        let emb = &PLANETS[2];
        let r = emb.heliocentric_ecliptic(0.0).norm();
        assert!((0.98..1.02).contains(&r), "{r}");
    }

    #[test]
    fn sun_offset_stays_within_a_few_solar_radii() {
        // Sun−SSB distance never exceeds ≈ 2.2 solar radii (≈ 0.0102 AU).
        for i in 0..60 {
            let tdb = Time::<TDB>::new(2_378_496.5 + i as f64 * 1_520.0);
            let r = sun_barycentric_position(&tdb).norm();
            assert!(r < 0.0115, "{r}");
        }
    }

    #[test]
    fn sun_offset_matches_sofa_epv00() {
        // SOFA reference barycentric minus heliocentric Earth at
        // 2400000.5 + 53411.52501161
        let sun = sun_barycentric_position(&Time::<TDB>::new(2_400_000.5 + 53_411.525_011_61));
        let expected = Vector3::new(0.004_313_436_9, 0.000_035_982, -0.000_100_221_9);
        assert!((sun - expected).norm() < 2e-5, "{}", (sun - expected).norm());
    }
}
