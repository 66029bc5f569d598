// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day counts tagged with the axis they are measured on.
//!
//! A civil timestamp and an ephemeris argument are both "Julian Days", but
//! they sit on different axes: the calendar formula yields a day count on
//! [`UT`](super::UT), Earth-rotation time, while the Meeus series must be
//! evaluated on [`JD`](super::JD), uniform Terrestrial Time. Mixing them up
//! shifts the Moon by roughly half a degree per minute of ΔT, so the axis is
//! part of the type.
//!
//! Every scale converts through JD(TT); a new scale only needs its own pair
//! of conversion functions.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An axis on which Julian Day counts are measured.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix printed before the day count.
    const LABEL: &'static str;

    /// Maps a day count on this axis to a Julian Day in TT.
    fn to_jd_tt(value: Days) -> Days;

    /// Maps a Julian Day in TT to a day count on this axis.
    fn from_jd_tt(jd_tt: Days) -> Days;
}

/// A day count on the axis `S`.
///
/// Same size as an `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    days: Days,
    _axis: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            days,
            _axis: PhantomData,
        }
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.days
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.days.value()
    }

    /// Re-expresses this instant on the axis `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        let jd_tt = S::to_jd_tt(self.days);
        Time::from_days(T::from_jd_tt(jd_tt))
    }

    /// The instant of a UTC timestamp on this axis.
    ///
    /// The calendar formula places the timestamp on
    /// [`UT`](super::UT); converting to `S` adds ΔT when `S` is a TT axis.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        use super::scales::UT;
        Time::<UT>::from_gregorian(&datetime).to()
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.days)
    }
}

// Serialized as the bare day count; the axis is carried by the type.

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.value().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Days) -> Self {
        Self::from_days(self.days + offset)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;

    #[inline]
    fn sub(self, offset: Days) -> Self {
        Self::from_days(self.days - offset)
    }
}

/// Elapsed days between two instants on the same axis.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;

    #[inline]
    fn sub(self, earlier: Self) -> Days {
        self.days - earlier.days
    }
}

#[cfg(test)]
mod tests {
    use super::super::scales::{JD, UT};
    use super::*;
    use chrono::TimeZone;

    fn noon_2000_01_01() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn accessors_agree() {
        let t = Time::<UT>::new(2_460_310.5);
        assert_eq!(t.value(), 2_460_310.5);
        assert_eq!(Time::<UT>::from_days(t.quantity()), t);
    }

    #[test]
    fn utc_timestamp_lands_on_both_axes() {
        let ut = Time::<UT>::from_utc(noon_2000_01_01());
        assert_eq!(ut.value(), 2_451_545.0);

        let tt = Time::<JD>::from_utc(noon_2000_01_01());
        let delta_t = (tt.quantity() - ut.quantity()).to::<Second>();
        assert!(
            (delta_t - Seconds::new(63.86)).abs() < Seconds::new(0.5),
            "TT − UT at J2000 = {delta_t}"
        );
    }

    #[test]
    fn day_offsets() {
        let start = Time::<JD>::new(2_460_000.0);
        let end = start + Days::new(29.5);
        assert_eq!(end.value(), 2_460_029.5);
        assert_eq!(end - start, Days::new(29.5));
        assert_eq!(end - Days::new(29.5), start);
        assert!(start < end);
    }

    #[test]
    fn display_names_the_axis() {
        assert_eq!(
            Time::<UT>::new(1.5).to_string(),
            format!("UT {}", Days::new(1.5))
        );
        assert!(Time::<JD>::new(1.5).to_string().starts_with("Julian Day:"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_number() {
        let t = Time::<JD>::new(2_451_545.25);
        assert_eq!(serde_json::to_string(&t).unwrap(), "2451545.25");
        let back: Time<JD> = serde_json::from_str("2451545.25").unwrap();
        assert_eq!(back, t);
    }
}
