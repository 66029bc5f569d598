// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The J2000 epoch and the century argument of the ephemeris polynomials.

use qtty::*;

use super::instant::Time;
use super::scales::JD;

impl Time<JD> {
    /// 2000-01-01 12:00 TT.
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Days in a Julian century.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// `T`, Julian centuries of TT elapsed since [`J2000`](Self::J2000).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        let ratio = (*self - Self::J2000) / Self::JULIAN_CENTURY;
        Centuries::new(ratio.simplify().value())
    }
}

impl From<Time<JD>> for Centuries {
    #[inline]
    fn from(jd: Time<JD>) -> Self {
        jd.julian_centuries()
    }
}
