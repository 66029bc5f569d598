// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! | Marker | Description | Axis |
//! |--------|-------------|------|
//! | [`JD`] | Julian Day, the argument of the ephemeris series | TT |
//! | [`UT`] | Julian Day of a civil UTC reading | UT |

use super::delta_t::delta_t_seconds_from_ut;
use super::instant::{Time, TimeScale};
use qtty::{Day, Days};

/// Julian Day on the Terrestrial Time axis; conversions are the identity.
///
/// This is the "JDE" the Meeus lunar and solar series expect.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Universal Time: a Julian Day read off a civil UTC clock.
///
/// Conversion to [`JD`] adds **ΔT = TT − UT**; the inverse solves
/// `ut + ΔT(ut) = tt` by fixed-point iteration. ΔT changes by a few
/// milliseconds per day, so three iterations are exact to well below a
/// microsecond.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "UT";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        let dt = delta_t_seconds_from_ut(Time::<UT>::from_days(ut_value));
        ut_value + dt.to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        let mut ut = jd_tt;
        for _ in 0..3 {
            let dt = delta_t_seconds_from_ut(Time::<UT>::from_days(ut));
            ut = jd_tt - dt.to::<Day>();
        }
        ut
    }
}

impl From<Time<UT>> for Time<JD> {
    #[inline]
    fn from(t: Time<UT>) -> Self {
        t.to::<JD>()
    }
}

impl From<Time<JD>> for Time<UT> {
    #[inline]
    fn from(t: Time<JD>) -> Self {
        t.to::<UT>()
    }
}
