// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The moon-phase pipeline.
//!
//! ```text
//! instant ─► UTC ─► JD(UT) ─ΔT─► JD(TT) ─► T ─┬─► λ☉ ─┐
//!                                             └─► λ☾ ─┴─► elongation
//!
//! elongation ─┬─► illumination
//!             ├─► age ─► cycle events
//!             ├─► phase
//!             └─► tithi, paksha
//! ```
//!
//! Every stage is a pure function; [`MoonPhaseCalculator`] only carries the
//! rounding and naive-timestamp settings.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use qtty::{Centuries, Days, Degrees};

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::angle::{self, FULL_TURN};
use crate::clock::Clock;
use crate::config::{CalculatorConfig, Precision};
use crate::cycle::{CycleEvents, SYNODIC_MONTH};
use crate::error::NormalizeError;
use crate::normalize::to_utc;
use crate::phase::Phase;
use crate::tithi::{Paksha, Tithi};
use crate::{lunar, solar, JulianDate};

/// Distance from J2000 within which the position models have been checked.
/// Instants further away are still computed, with a debug log.
pub const VALIDATED_CENTURIES: Centuries = Centuries::new(5.0);

/// Computes [`MoonPhaseResult`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoonPhaseCalculator {
    config: CalculatorConfig,
}

impl MoonPhaseCalculator {
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Moon phase at a UTC instant.
    pub fn at_utc(&self, instant: DateTime<Utc>) -> MoonPhaseResult {
        let jd = JulianDate::from_utc(instant);
        let t = jd.julian_centuries();
        if t.abs() > VALIDATED_CENTURIES {
            log::debug!("{instant} is {t} from J2000; lunar model accuracy is unverified there");
        }

        let sun = solar::apparent_longitude(t);
        let moon = lunar::apparent_longitude(t);
        let elongation = angle::separation(moon, sun);
        log::trace!("{instant}: {jd}, λ☉ = {sun}, λ☾ = {moon}, elongation = {elongation}");

        self.classify(elongation)
    }

    /// Moon phase at a zoned instant.
    pub fn at<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> MoonPhaseResult {
        self.at_utc(to_utc(instant))
    }

    /// Moon phase at a naive wall-clock reading, placed on the UTC axis by
    /// the configured [`NaivePolicy`](crate::NaivePolicy).
    pub fn at_naive(&self, reading: NaiveDateTime) -> Result<MoonPhaseResult, NormalizeError> {
        let instant = self.config.naive_policy.resolve(reading)?;
        Ok(self.at_utc(instant))
    }

    /// Moon phase at the instant reported by `clock`.
    pub fn now(&self, clock: &impl Clock) -> MoonPhaseResult {
        self.at_utc(clock.now())
    }

    /// Derives every reported quantity from one elongation.
    ///
    /// Classification uses the exact elongation; rounding is applied last.
    fn classify(&self, elongation: Degrees) -> MoonPhaseResult {
        let precision = self.config.precision;

        let illumination = (1.0 - angle::cos(elongation)) / 2.0 * 100.0;
        let phase = Phase::from_elongation(elongation);
        let tithi = Tithi::from_elongation(elongation);

        let mut age = Precision::round(
            (SYNODIC_MONTH * (elongation.value() / FULL_TURN.value())).value(),
            precision.age,
        );
        if age >= SYNODIC_MONTH.value() {
            age = 0.0;
        }
        let events = CycleEvents::from_age(Days::new(age));

        let mut rounded_elongation = Precision::round(elongation.value(), precision.elongation);
        if rounded_elongation >= FULL_TURN.value() {
            rounded_elongation = 0.0;
        }

        let days = |d: Days| Days::new(Precision::round(d.value(), precision.days));
        MoonPhaseResult {
            phase,
            illumination: Precision::round(illumination, precision.illumination).clamp(0.0, 100.0),
            age: Days::new(age),
            since_new_moon: days(events.since_new_moon),
            until_new_moon: days(events.until_new_moon),
            since_full_moon: days(events.since_full_moon),
            until_full_moon: days(events.until_full_moon),
            tithi,
            elongation: Degrees::new(rounded_elongation),
        }
    }
}

/// Moon phase at a UTC instant with the default configuration.
pub fn moon_phase(instant: DateTime<Utc>) -> MoonPhaseResult {
    MoonPhaseCalculator::default().at_utc(instant)
}

/// Everything known about the Moon at one instant.
///
/// Numeric fields are rounded according to the calculator's [`Precision`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhaseResult {
    phase: Phase,
    illumination: f64,
    age: Days,
    since_new_moon: Days,
    until_new_moon: Days,
    since_full_moon: Days,
    until_full_moon: Days,
    tithi: Tithi,
    elongation: Degrees,
}

impl MoonPhaseResult {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_name(&self) -> &'static str {
        self.phase.name()
    }

    pub fn icon(&self) -> &'static str {
        self.phase.icon()
    }

    /// Illuminated fraction of the disc, in percent.
    pub fn illumination(&self) -> f64 {
        self.illumination
    }

    /// Days since the last new moon, in `[0, SYNODIC_MONTH)`.
    pub fn age(&self) -> Days {
        self.age
    }

    pub fn days_since_new_moon(&self) -> Days {
        self.since_new_moon
    }

    pub fn days_until_new_moon(&self) -> Days {
        self.until_new_moon
    }

    pub fn days_since_full_moon(&self) -> Days {
        self.since_full_moon
    }

    pub fn days_until_full_moon(&self) -> Days {
        self.until_full_moon
    }

    pub fn tithi(&self) -> Tithi {
        self.tithi
    }

    pub fn tithi_number(&self) -> u8 {
        self.tithi.number()
    }

    pub fn tithi_name(&self) -> &'static str {
        self.tithi.name()
    }

    pub fn paksha(&self) -> Paksha {
        self.tithi.paksha()
    }

    /// Apparent Sun–Moon elongation, in `[0°, 360°)`.
    pub fn elongation(&self) -> Degrees {
        self.elongation
    }
}

impl std::fmt::Display for MoonPhaseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({:.1}% illuminated, age {:.2} d), {}",
            self.icon(),
            self.phase_name(),
            self.illumination,
            self.age.value(),
            self.tithi
        )
    }
}

#[cfg(feature = "serde")]
impl Serialize for MoonPhaseResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("MoonPhaseResult", 12)?;
        s.serialize_field("phase", self.phase_name())?;
        s.serialize_field("icon", self.icon())?;
        s.serialize_field("illumination", &self.illumination)?;
        s.serialize_field("age_days", &self.age.value())?;
        s.serialize_field("days_since_new_moon", &self.since_new_moon.value())?;
        s.serialize_field("days_until_new_moon", &self.until_new_moon.value())?;
        s.serialize_field("days_since_full_moon", &self.since_full_moon.value())?;
        s.serialize_field("days_until_full_moon", &self.until_full_moon.value())?;
        s.serialize_field("tithi_number", &self.tithi_number())?;
        s.serialize_field("tithi_name", self.tithi_name())?;
        s.serialize_field("paksha", self.paksha().name())?;
        s.serialize_field("elongation", &self.elongation.value())?;
        s.end()
    }
}
