// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time normalization: any chrono timestamp → UTC → Julian Day.
//!
//! Two steps, each an explicit function:
//!
//! 1. **UTC normalization.** Zoned timestamps carry their own offset and
//!    are converted with [`to_utc`]. Naive timestamps have no offset, so the
//!    caller picks a [`NaivePolicy`] and [`naive_to_utc`] applies it.
//! 2. **Calendar → day count.** [`Time::<UT>::from_gregorian`] evaluates the
//!    Gregorian-to-Julian-Day formula (Meeus, *Astronomical Algorithms*,
//!    ch. 7) with the sub-day fraction kept in real arithmetic down to the
//!    nanosecond.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDateTime, TimeZone, Timelike, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::instant::Time;
use crate::scales::UT;

const SECONDS_PER_DAY: f64 = 86_400.0;
const NANOS_PER_DAY: f64 = 86_400.0e9;

/// How a naive (offset-less) wall-clock reading is placed on the UTC axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NaivePolicy {
    /// The reading already is UTC.
    #[default]
    Utc,
    /// The reading is in the host's local zone. A reading inside a DST fold
    /// resolves to the earlier instant; one inside a DST gap is rejected.
    Local,
    /// The reading is at a fixed offset east of Greenwich.
    FixedOffset { seconds_east: i32 },
}

impl NaivePolicy {
    /// Applies this policy to `naive`.
    pub fn resolve(self, naive: NaiveDateTime) -> Result<DateTime<Utc>, NormalizeError> {
        match self {
            Self::Utc => Ok(naive.and_utc()),
            Self::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| to_utc(&local))
                .ok_or(NormalizeError::NonexistentLocalTime(naive)),
            Self::FixedOffset { seconds_east } => {
                let offset = FixedOffset::east_opt(seconds_east)
                    .ok_or(NormalizeError::InvalidOffset { seconds_east })?;
                offset
                    .from_local_datetime(&naive)
                    .single()
                    .map(|fixed| to_utc(&fixed))
                    .ok_or(NormalizeError::NonexistentLocalTime(naive))
            }
        }
    }
}

/// Converts a zoned timestamp to UTC.
#[inline]
pub fn to_utc<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DateTime<Utc> {
    datetime.with_timezone(&Utc)
}

/// Converts a naive timestamp to UTC under `policy`.
#[inline]
pub fn naive_to_utc(
    naive: NaiveDateTime,
    policy: NaivePolicy,
) -> Result<DateTime<Utc>, NormalizeError> {
    policy.resolve(naive)
}

impl Time<UT> {
    /// Julian Day of a UTC instant by the Gregorian calendar formula.
    ///
    /// `⌊365.25(Y + 4716)⌋ + ⌊30.6001(M + 1)⌋ + D + B − 1524.5`, where January
    /// and February count as months 13 and 14 of the previous year and
    /// `B = 2 − A + ⌊A/4⌋` with `A = ⌊Y/100⌋`. Only those four terms are
    /// floored; the fractional day is never truncated.
    pub fn from_gregorian(instant: &DateTime<Utc>) -> Self {
        let (mut year, mut month) = (instant.year() as i64, instant.month() as i64);
        if month <= 2 {
            year -= 1;
            month += 12;
        }

        let century = year.div_euclid(100);
        let gregorian = 2 - century + century.div_euclid(4);

        let seconds_of_day = instant.num_seconds_from_midnight() as f64;
        let day = instant.day() as f64
            + seconds_of_day / SECONDS_PER_DAY
            + instant.nanosecond() as f64 / NANOS_PER_DAY;

        let jd = (365.25 * (year + 4716) as f64).floor()
            + (30.6001 * (month + 1) as f64).floor()
            + day
            + gregorian as f64
            - 1524.5;
        Self::new(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Duration};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn jd(instant: DateTime<Utc>) -> f64 {
        Time::<UT>::from_gregorian(&instant).value()
    }

    #[test]
    fn j2000_noon() {
        assert_eq!(jd(utc(2000, 1, 1, 12, 0, 0)), 2_451_545.0);
    }

    #[test]
    fn meeus_reference_dates() {
        // Meeus example 7.a: 1957-10-04.81 (Sputnik 1).
        let sputnik = utc(1957, 10, 4, 19, 26, 24);
        assert!((jd(sputnik) - 2_436_116.31).abs() < 1e-8);
        // First day of the Gregorian calendar.
        assert_eq!(jd(utc(1582, 10, 15, 0, 0, 0)), 2_299_160.5);
        // January shifts into the previous year.
        assert_eq!(jd(utc(1988, 1, 27, 0, 0, 0)), 2_447_187.5);
        assert_eq!(jd(utc(1988, 6, 19, 12, 0, 0)), 2_447_332.0);
    }

    #[test]
    fn fractional_day_is_not_truncated() {
        let base = utc(2024, 3, 1, 0, 0, 0);
        let later = base + Duration::hours(7) + Duration::minutes(13) + Duration::seconds(29);
        let expected = (7.0 * 3600.0 + 13.0 * 60.0 + 29.0) / SECONDS_PER_DAY;
        assert!((jd(later) - jd(base) - expected).abs() < 1e-9);
    }

    #[test]
    fn sub_second_precision() {
        let base = utc(2024, 3, 1, 6, 0, 0);
        let later = base + Duration::milliseconds(500);
        let step = jd(later) - jd(base);
        assert!((step - 0.5 / SECONDS_PER_DAY).abs() < 1e-9);
        assert!(step > 0.0);
    }

    #[test]
    fn agrees_with_unix_epoch_arithmetic() {
        const UNIX_EPOCH_JD: f64 = 2_440_587.5;
        for seconds in [
            -6_000_000_000_i64,
            0,
            946_728_000,
            1_700_000_123,
            4_102_444_800,
        ] {
            let instant = DateTime::from_timestamp(seconds, 250_000_000).unwrap();
            let by_epoch = UNIX_EPOCH_JD + (seconds as f64 + 0.25) / SECONDS_PER_DAY;
            let by_calendar = jd(instant);
            assert!(
                (by_calendar - by_epoch).abs() * SECONDS_PER_DAY < 1e-3,
                "{instant}: calendar {by_calendar} vs epoch {by_epoch}"
            );
        }
    }

    #[test]
    fn proleptic_negative_year_uses_floor_division() {
        // 1 January −4712 (astronomical year numbering) noon is JD 38 in the
        // proleptic Gregorian calendar.
        let instant = Utc.with_ymd_and_hms(-4712, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(jd(instant), 38.0);
    }

    #[test]
    fn zoned_input_is_converted() {
        let kathmandu = FixedOffset::east_opt(5 * 3600 + 45 * 60).unwrap();
        let local = kathmandu.with_ymd_and_hms(2024, 1, 1, 5, 45, 0).unwrap();
        assert_eq!(to_utc(&local), utc(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn naive_policy_utc_is_identity() {
        let reading = naive(2024, 1, 1, 0, 0);
        assert_eq!(
            naive_to_utc(reading, NaivePolicy::Utc),
            Ok(utc(2024, 1, 1, 0, 0, 0))
        );
        assert_eq!(NaivePolicy::default(), NaivePolicy::Utc);
    }

    #[test]
    fn naive_policy_fixed_offset() {
        let reading = naive(2024, 1, 1, 5, 45);
        let policy = NaivePolicy::FixedOffset {
            seconds_east: 5 * 3600 + 45 * 60,
        };
        assert_eq!(
            naive_to_utc(reading, policy),
            Ok(utc(2024, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn naive_policy_rejects_out_of_range_offset() {
        let policy = NaivePolicy::FixedOffset {
            seconds_east: 90_000,
        };
        assert_eq!(
            naive_to_utc(naive(2024, 1, 1, 0, 0), policy),
            Err(NormalizeError::InvalidOffset {
                seconds_east: 90_000
            })
        );
    }

    #[test]
    fn naive_policy_local_matches_host_zone() {
        let reading = naive(2024, 1, 15, 12, 0);
        let expected = Local
            .from_local_datetime(&reading)
            .earliest()
            .map(|local| local.with_timezone(&Utc));
        assert_eq!(naive_to_utc(reading, NaivePolicy::Local).ok(), expected);
    }
}
