// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent geocentric longitude of the Sun.
//!
//! Low-precision solution of Meeus, *Astronomical Algorithms* (2nd ed.)
//! ch. 25: geometric mean longitude plus a three-term equation of center,
//! corrected for aberration and for nutation through the longitude of the
//! Moon's ascending node. Error is below 0.01° within ±50 years of J2000,
//! well inside what an elongation-based phase needs.

use qtty::{Centuries, Degrees};

use crate::angle::{self, normalize};

/// Constant of aberration folded into the apparent longitude.
const ABERRATION: Degrees = Degrees::new(-0.005_69);

/// Amplitude of the dominant nutation-in-longitude term, ≈ −17.2″.
const NUTATION_AMPLITUDE: f64 = -0.004_78;

/// Longitude of the ascending node of the Moon's mean orbit, Ω.
#[inline]
pub fn ascending_node(t: Centuries) -> Degrees {
    normalize(Degrees::new(125.04 - 1_934.136 * t.value()))
}

/// Nutation in longitude, Δψ, truncated to its dominant `sin Ω` term.
#[inline]
pub fn nutation_in_longitude(t: Centuries) -> Degrees {
    Degrees::new(NUTATION_AMPLITUDE * angle::sin(ascending_node(t)))
}

/// Geometric mean longitude of the Sun, L₀.
#[inline]
pub fn mean_longitude(t: Centuries) -> Degrees {
    let t = t.value();
    normalize(Degrees::new(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t))
}

/// Mean anomaly of the Sun, M.
#[inline]
pub fn mean_anomaly(t: Centuries) -> Degrees {
    let t = t.value();
    normalize(Degrees::new(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t))
}

/// Equation of center, C.
pub fn equation_of_center(t: Centuries) -> Degrees {
    let m = mean_anomaly(t).value().to_radians();
    let t = t.value();
    Degrees::new(
        (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
            + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
            + 0.000_289 * (3.0 * m).sin(),
    )
}

/// Apparent ecliptic longitude of the Sun, in `[0°, 360°)`.
pub fn apparent_longitude(t: Centuries) -> Degrees {
    let true_longitude = mean_longitude(t) + equation_of_center(t);
    normalize(true_longitude + ABERRATION + nutation_in_longitude(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JulianDate, Time, JD};

    #[test]
    fn meeus_example_25a() {
        // 1992-10-13 0h TD, JDE 2448908.5: apparent λ = 199.90895°.
        let t = JulianDate::new(2_448_908.5).julian_centuries();
        let lambda = apparent_longitude(t);
        assert!(
            (lambda - Degrees::new(199.908_95)).abs() < Degrees::new(0.001),
            "λ☉ = {lambda}"
        );
    }

    #[test]
    fn equation_of_center_is_bounded() {
        for k in 0..200 {
            let t = Time::<JD>::new(2_451_545.0 + k as f64 * 17.3).julian_centuries();
            assert!(equation_of_center(t).abs() < Degrees::new(1.92));
        }
    }

    #[test]
    fn nutation_is_at_most_17_arcseconds() {
        for k in 0..50 {
            let t = Centuries::new(k as f64 * 0.01);
            assert!(nutation_in_longitude(t).abs() <= Degrees::new(0.004_78));
        }
    }

    #[test]
    fn longitude_is_normalized() {
        for k in -50..50 {
            let lambda = apparent_longitude(Centuries::new(k as f64 * 0.137));
            assert!(lambda >= Degrees::new(0.0) && lambda < Degrees::new(360.0));
        }
    }
}
