// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Apparent geocentric longitude of the Moon
//!
//! Truncated ELP-2000/82 solution as given by Meeus, *Astronomical
//! Algorithms* (2nd ed.) ch. 47:
//!
//! ```text
//! λ = L′ + Σl / 10⁶ + Δψ
//! Σl = Σ coef · E^|m| · sin(d·D + m·M + m′·M′ + f·F)  + additive terms
//! ```
//!
//! The 59 principal periodic terms of Table 47.A carry more than 99.9 % of
//! the perturbation amplitude; the omitted tail is below 10″, which is
//! invisible at phase, tithi or illumination resolution. This is a display
//! grade ephemeris, not a substitute for a numerical one.
//!
//! Terms whose solar-anomaly multiplier `m` is ±1 are scaled by the
//! eccentricity factor `E = 1 − 0.002516 T − 0.0000074 T²`, terms with ±2
//! by `E²`.

use qtty::{Centuries, Degrees};

use crate::angle::{self, normalize};
use crate::solar::nutation_in_longitude;

/// One row of the periodic longitude series.
///
/// The argument is `d·D + m·M + m_prime·M′ + f·F`; `coefficient` is in
/// millionths of a degree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicTerm {
    pub d: i8,
    pub m: i8,
    pub m_prime: i8,
    pub f: i8,
    pub coefficient: f64,
}

const fn term(d: i8, m: i8, m_prime: i8, f: i8, coefficient: f64) -> PeriodicTerm {
    PeriodicTerm {
        d,
        m,
        m_prime,
        f,
        coefficient,
    }
}

/// Number of periodic terms in [`LONGITUDE_TERMS`].
pub const TERMS: usize = 59;

/// Meeus Table 47.A, longitude column, ordered by decreasing amplitude.
#[rustfmt::skip]
pub const LONGITUDE_TERMS: [PeriodicTerm; TERMS] = [
    term(0,  0,  1,  0, 6_288_774.0), term(2,  0, -1,  0, 1_274_027.0),
    term(2,  0,  0,  0,   658_314.0), term(0,  0,  2,  0,   213_618.0),
    term(0,  1,  0,  0,  -185_116.0), term(0,  0,  0,  2,  -114_332.0),
    term(2,  0, -2,  0,    58_793.0), term(2, -1, -1,  0,    57_066.0),
    term(2,  0,  1,  0,    53_322.0), term(2, -1,  0,  0,    45_758.0),
    term(0,  1, -1,  0,   -40_923.0), term(1,  0,  0,  0,   -34_720.0),
    term(0,  1,  1,  0,   -30_383.0), term(2,  0,  0, -2,    15_327.0),
    term(0,  0,  1,  2,   -12_528.0), term(0,  0,  1, -2,    10_980.0),
    term(4,  0, -1,  0,    10_675.0), term(0,  0,  3,  0,    10_034.0),
    term(4,  0, -2,  0,     8_548.0), term(2,  1, -1,  0,    -7_888.0),
    term(2,  1,  0,  0,    -6_766.0), term(1,  0, -1,  0,    -5_163.0),
    term(1,  1,  0,  0,     4_987.0), term(2, -1,  1,  0,     4_036.0),
    term(2,  0,  2,  0,     3_994.0), term(4,  0,  0,  0,     3_861.0),
    term(2,  0, -3,  0,     3_665.0), term(0,  1, -2,  0,    -2_689.0),
    term(2,  0, -1,  2,    -2_602.0), term(2, -1, -2,  0,     2_390.0),
    term(1,  0,  1,  0,    -2_348.0), term(2, -2,  0,  0,     2_236.0),
    term(0,  1,  2,  0,    -2_120.0), term(0,  2,  0,  0,    -2_069.0),
    term(2, -2, -1,  0,     2_048.0), term(2,  0,  1, -2,    -1_773.0),
    term(2,  0,  0,  2,    -1_595.0), term(4, -1, -1,  0,     1_215.0),
    term(0,  0,  2,  2,    -1_110.0), term(3,  0, -1,  0,      -892.0),
    term(2,  1,  1,  0,      -810.0), term(4, -1, -2,  0,       759.0),
    term(0,  2, -1,  0,      -713.0), term(2,  2, -1,  0,      -700.0),
    term(2,  1, -2,  0,       691.0), term(2, -1,  0, -2,       596.0),
    term(4,  0,  1,  0,       549.0), term(0,  0,  4,  0,       537.0),
    term(4, -1,  0,  0,       520.0), term(1,  0, -2,  0,      -487.0),
    term(2,  1,  0, -2,      -399.0), term(0,  0,  2, -2,      -381.0),
    term(1,  1,  1,  0,       351.0), term(3,  0, -2,  0,      -340.0),
    term(4,  0, -3,  0,       330.0), term(2, -1,  2,  0,       327.0),
    term(0,  2,  1,  0,      -323.0), term(1,  1, -1,  0,       299.0),
    term(2,  0,  3,  0,       294.0),
];

/// Fundamental arguments of the lunar theory at one instant, in degrees
/// normalized to `[0°, 360°)`, plus the eccentricity factor `E`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    /// Mean longitude of the Moon, L′.
    pub mean_longitude: Degrees,
    /// Mean elongation of the Moon from the Sun, D.
    pub mean_elongation: Degrees,
    /// Mean anomaly of the Sun, M.
    pub sun_anomaly: Degrees,
    /// Mean anomaly of the Moon, M′.
    pub moon_anomaly: Degrees,
    /// Argument of latitude of the Moon, F.
    pub latitude_argument: Degrees,
    /// Eccentricity factor of Earth's orbit, E.
    pub eccentricity: f64,
    /// Venus perturbation argument, A₁.
    pub venus: Degrees,
    /// Jupiter perturbation argument, A₂.
    pub jupiter: Degrees,
}

/// `c0 + c1·T + c2·T² + c3·T³ + c4·T⁴`, normalized.
#[inline]
fn quartic(t: f64, [c0, c1, c2, c3, c4]: [f64; 5]) -> Degrees {
    normalize(Degrees::new(c0 + t * (c1 + t * (c2 + t * (c3 + t * c4)))))
}

impl FundamentalArguments {
    /// Evaluates Meeus eqs. 47.1–47.5 and the eccentricity factor at `t`.
    pub fn at(t: Centuries) -> Self {
        let t = t.value();
        Self {
            mean_longitude: quartic(
                t,
                [
                    218.316_447_7,
                    481_267.881_234_21,
                    -0.001_578_6,
                    1.0 / 538_841.0,
                    -1.0 / 65_194_000.0,
                ],
            ),
            mean_elongation: quartic(
                t,
                [
                    297.850_192_1,
                    445_267.111_403_4,
                    -0.001_881_9,
                    1.0 / 545_868.0,
                    -1.0 / 113_065_000.0,
                ],
            ),
            sun_anomaly: quartic(
                t,
                [
                    357.529_109_2,
                    35_999.050_290_9,
                    -0.000_153_6,
                    1.0 / 24_490_000.0,
                    0.0,
                ],
            ),
            moon_anomaly: quartic(
                t,
                [
                    134.963_396_4,
                    477_198.867_631_3,
                    0.008_997_0,
                    1.0 / 69_699.0,
                    -1.0 / 14_712_000.0,
                ],
            ),
            latitude_argument: quartic(
                t,
                [
                    93.272_095_0,
                    483_202.017_523_3,
                    -0.003_653_9,
                    -1.0 / 3_526_000.0,
                    1.0 / 863_310_000.0,
                ],
            ),
            eccentricity: 1.0 - 0.002_516 * t - 0.000_007_4 * t * t,
            venus: normalize(Degrees::new(119.75 + 131.849 * t)),
            jupiter: normalize(Degrees::new(53.09 + 479_264.290 * t)),
        }
    }

    /// Eccentricity scaling for a term with solar-anomaly multiplier `m`.
    #[inline]
    pub fn eccentricity_scale(&self, m: i8) -> f64 {
        match m.unsigned_abs() {
            0 => 1.0,
            1 => self.eccentricity,
            _ => self.eccentricity * self.eccentricity,
        }
    }
}

impl PeriodicTerm {
    /// Composite argument `d·D + m·M + m′·M′ + f·F`.
    #[inline]
    pub fn argument(&self, args: &FundamentalArguments) -> Degrees {
        args.mean_elongation * f64::from(self.d)
            + args.sun_anomaly * f64::from(self.m)
            + args.moon_anomaly * f64::from(self.m_prime)
            + args.latitude_argument * f64::from(self.f)
    }

    /// This term's contribution in millionths of a degree.
    #[inline]
    pub fn contribution(&self, args: &FundamentalArguments) -> f64 {
        self.coefficient * args.eccentricity_scale(self.m) * angle::sin(self.argument(args))
    }
}

/// Σl in millionths of a degree: the periodic series plus the additive
/// Venus, Jupiter and Earth-flattening terms.
pub fn perturbation_sum(args: &FundamentalArguments) -> f64 {
    let periodic: f64 = LONGITUDE_TERMS
        .iter()
        .map(|term| term.contribution(args))
        .sum();

    let additive = 3_958.0 * angle::sin(args.venus)
        + 1_962.0 * angle::sin(args.mean_longitude - args.latitude_argument)
        + 318.0 * angle::sin(args.jupiter);

    periodic + additive
}

/// Geometric ecliptic longitude of the Moon (mean equinox of date).
pub fn geometric_longitude(t: Centuries) -> Degrees {
    let args = FundamentalArguments::at(t);
    normalize(args.mean_longitude + Degrees::new(perturbation_sum(&args) / 1.0e6))
}

/// Apparent ecliptic longitude of the Moon, in `[0°, 360°)`.
///
/// Uses the same nutation approximation as
/// [`solar::apparent_longitude`](crate::solar::apparent_longitude), so
/// nutation cancels exactly in the Sun–Moon elongation.
pub fn apparent_longitude(t: Centuries) -> Degrees {
    normalize(geometric_longitude(t) + nutation_in_longitude(t))
}
