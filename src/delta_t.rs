// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ΔT = TT − UT.
//!
//! Piecewise polynomials of Espenak & Meeus (2006), the expressions used by
//! NASA's *Five Millennium Canon of Solar Eclipses* (TP-2006-214141). They
//! cover the years −500 to +2150; outside that window the long-term
//! parabola `−20 + 32 u²` of Morrison & Stephenson (2004) takes over.
//!
//! The [`UT`](super::UT) marker applies the correction whenever a `Time<UT>`
//! is converted to [`JD`](super::JD), so the lunar and solar series always
//! see Terrestrial Time. Today ΔT is about 70 s, worth roughly 0.01° of
//! lunar motion; the uncertainty grows to hours in antiquity.

use super::instant::Time;
use super::scales::UT;
use qtty::Seconds;

/// JD of 2000-01-01T12:00 on the UT axis; origin of the decimal-year count.
const JD_YEAR_2000: f64 = 2_451_545.0;
const DAYS_PER_YEAR: f64 = 365.25;

/// Evaluates `c[0] + c[1]·t + c[2]·t² + …` by Horner's rule.
#[inline]
fn horner(t: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Long-term parabola (Morrison & Stephenson 2004).
#[inline]
fn delta_t_long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// **Years −500 … 1600**: two sextic fits to the historical record.
#[inline]
fn delta_t_historical(year: f64) -> f64 {
    if year < 500.0 {
        horner(
            year / 100.0,
            &[
                10_583.6,
                -1_014.41,
                33.783_11,
                -5.952_053,
                -0.179_845_2,
                0.022_174_192,
                0.009_031_652_1,
            ],
        )
    } else {
        horner(
            (year - 1000.0) / 100.0,
            &[
                1_574.2,
                -556.01,
                71.234_72,
                0.319_781,
                -0.850_346_3,
                -0.005_050_998,
                0.008_357_207_3,
            ],
        )
    }
}

/// **Years 1600 … 1900**: telescopic era.
#[inline]
fn delta_t_telescopic(year: f64) -> f64 {
    match year {
        y if y < 1700.0 => horner(y - 1600.0, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0]),
        y if y < 1800.0 => horner(
            y - 1700.0,
            &[8.83, 0.1603, -0.005_928_5, 0.000_133_36, -1.0 / 1_174_000.0],
        ),
        y if y < 1860.0 => horner(
            y - 1800.0,
            &[
                13.72,
                -0.332_447,
                0.006_861_2,
                0.004_111_6,
                -0.000_374_36,
                0.000_012_127_2,
                -0.000_000_169_9,
                0.000_000_000_875,
            ],
        ),
        y => horner(
            y - 1860.0,
            &[
                7.62,
                0.5737,
                -0.251_754,
                0.016_806_68,
                -0.000_447_362_4,
                1.0 / 233_174.0,
            ],
        ),
    }
}

/// **Years 1900 … 2005**: modern observations.
#[inline]
fn delta_t_modern(year: f64) -> f64 {
    match year {
        y if y < 1920.0 => horner(
            y - 1900.0,
            &[-2.79, 1.494_119, -0.059_893_9, 0.006_196_6, -0.000_197],
        ),
        y if y < 1941.0 => horner(y - 1920.0, &[21.20, 0.844_93, -0.076_100, 0.002_093_6]),
        y if y < 1961.0 => horner(y - 1950.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]),
        y if y < 1986.0 => horner(y - 1975.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]),
        y => horner(
            y - 2000.0,
            &[
                63.86,
                0.3345,
                -0.060_374,
                0.001_727_5,
                0.000_651_814,
                0.000_023_735_99,
            ],
        ),
    }
}

/// **Years 2005 … 2150**: extrapolation joined onto the long-term parabola.
#[inline]
fn delta_t_extrapolated(year: f64) -> f64 {
    if year < 2050.0 {
        horner(year - 2000.0, &[62.92, 0.322_17, 0.005_589])
    } else {
        delta_t_long_term(year) - 0.5628 * (2150.0 - year)
    }
}

/// Decimal Gregorian year of a UT Julian Day.
#[inline]
fn decimal_year(jd_ut: Time<UT>) -> f64 {
    2000.0 + (jd_ut.value() - JD_YEAR_2000) / DAYS_PER_YEAR
}

/// ΔT in seconds at a Julian Day on the UT axis.
#[inline]
pub(crate) fn delta_t_seconds_from_ut(jd_ut: Time<UT>) -> Seconds {
    let seconds = match decimal_year(jd_ut) {
        y if y < -500.0 => delta_t_long_term(y),
        y if y < 1600.0 => delta_t_historical(y),
        y if y < 1900.0 => delta_t_telescopic(y),
        y if y < 2005.0 => delta_t_modern(y),
        y if y < 2150.0 => delta_t_extrapolated(y),
        y => delta_t_long_term(y),
    };
    Seconds::new(seconds)
}

impl Time<UT> {
    /// TT − UT at this instant, as added by `.to::<JD>()`.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_seconds_from_ut(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_year(year: f64) -> Time<UT> {
        Time::<UT>::new(JD_YEAR_2000 + (year - 2000.0) * DAYS_PER_YEAR)
    }

    fn assert_close(actual: Seconds, expected: f64, tolerance: f64) {
        assert!(
            (actual - Seconds::new(expected)).abs() < Seconds::new(tolerance),
            "ΔT = {actual}, expected {expected} ± {tolerance}"
        );
    }

    #[test]
    fn delta_t_2000() {
        assert_close(Time::<UT>::new(JD_YEAR_2000).delta_t(), 63.86, 1e-9);
    }

    #[test]
    fn delta_t_1900_is_small_and_negative() {
        assert_close(delta_t_seconds_from_ut(at_year(1900.0)), -2.79, 1e-6);
    }

    #[test]
    fn delta_t_1700_and_1000() {
        assert_close(delta_t_seconds_from_ut(at_year(1700.0)), 8.83, 1e-6);
        assert_close(delta_t_seconds_from_ut(at_year(1000.0)), 1_574.2, 1e-6);
    }

    #[test]
    fn delta_t_2020_extrapolation() {
        // Observed ΔT in 2020 was ≈ 69.4 s; the 2006 extrapolation gives ≈ 71.6 s.
        assert_close(delta_t_seconds_from_ut(at_year(2020.0)), 71.6, 0.1);
    }

    #[test]
    fn delta_t_is_continuous_at_2150() {
        let below = delta_t_seconds_from_ut(at_year(2149.999_9));
        let above = delta_t_seconds_from_ut(at_year(2150.000_1));
        assert!((below - above).abs() < Seconds::new(0.01));
    }

    #[test]
    fn delta_t_ancient_uses_parabola() {
        // u = (−1000 − 1820) / 100 = −28.2 → −20 + 32·795.24
        assert_close(delta_t_seconds_from_ut(at_year(-1000.0)), 25_427.68, 1e-6);
    }

    #[test]
    fn horner_evaluates_in_ascending_order() {
        assert_eq!(horner(2.0, &[1.0, 3.0, 5.0]), 1.0 + 6.0 + 20.0);
        assert_eq!(horner(2.0, &[]), 0.0);
    }
}
