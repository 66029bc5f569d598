// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sources of "now".
//!
//! The calculator never reads the system time itself; callers hand it a
//! [`Clock`]. Applications that keep a server-corrected time wrap their
//! clock in an [`OffsetClock`] and update the offset whenever they learn a
//! better one.

use chrono::{DateTime, Duration, Utc};

/// A synchronous source of the current UTC instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The host's wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A stopped clock that always reads the same instant.
impl Clock for DateTime<Utc> {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        *self
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// A clock shifted by a correction learned from a reference time server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetClock<C> {
    inner: C,
    offset: Duration,
}

impl<C: Clock> OffsetClock<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            offset: Duration::zero(),
        }
    }

    /// Current correction added to the inner clock.
    #[inline]
    pub fn offset(&self) -> Duration {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Duration) {
        self.offset = offset;
    }

    /// Derives the offset from one request/response exchange.
    ///
    /// `server_time` was reported by the server for a request sent at `sent`
    /// and answered at `received`, both read from the inner clock. The server
    /// is assumed to have stamped the midpoint of the round trip.
    pub fn calibrate(
        &mut self,
        server_time: DateTime<Utc>,
        sent: DateTime<Utc>,
        received: DateTime<Utc>,
    ) -> Duration {
        let midpoint = sent + (received - sent) / 2;
        self.offset = server_time - midpoint;
        log::debug!(
            "clock offset calibrated to {} ms (round trip {} ms)",
            self.offset.num_milliseconds(),
            (received - sent).num_milliseconds()
        );
        self.offset
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.inner.now() + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, h, m, s).unwrap()
    }

    #[test]
    fn stopped_clock() {
        let t = instant(12, 0, 0);
        assert_eq!(t.now(), t);
        assert_eq!((&t).now(), t);
    }

    #[test]
    fn system_clock_advances() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }

    #[test]
    fn offset_is_applied() {
        let mut clock = OffsetClock::new(instant(12, 0, 0));
        assert_eq!(clock.offset(), Duration::zero());
        assert_eq!(clock.now(), instant(12, 0, 0));

        clock.set_offset(Duration::seconds(-90));
        assert_eq!(clock.now(), instant(11, 58, 30));
        assert_eq!(*clock.inner(), instant(12, 0, 0));
    }

    #[test]
    fn calibrate_uses_round_trip_midpoint() {
        let mut clock = OffsetClock::new(instant(12, 0, 0));
        let offset = clock.calibrate(instant(12, 0, 10), instant(11, 59, 58), instant(12, 0, 2));
        assert_eq!(offset, Duration::seconds(10));
        assert_eq!(clock.offset(), Duration::seconds(10));
        assert_eq!(clock.now(), instant(12, 0, 10));
    }
}
