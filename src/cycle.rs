// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Position within the mean synodic cycle.

use qtty::Days;

/// Mean synodic month: new moon to new moon.
pub const SYNODIC_MONTH: Days = Days::new(29.530_587_705_76);

/// Days since and until the nearest new and full moons, estimated from the
/// Moon's age along a mean synodic month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleEvents {
    pub since_new_moon: Days,
    pub until_new_moon: Days,
    pub since_full_moon: Days,
    pub until_full_moon: Days,
}

impl CycleEvents {
    /// `age` is days since the last new moon, in `[0, SYNODIC_MONTH)`.
    pub fn from_age(age: Days) -> Self {
        let half = SYNODIC_MONTH * 0.5;
        let (since_full_moon, until_full_moon) = if age >= half {
            (age - half, SYNODIC_MONTH - age + half)
        } else {
            (age + half, half - age)
        };
        Self {
            since_new_moon: age,
            until_new_moon: SYNODIC_MONTH - age,
            since_full_moon,
            until_full_moon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: Days = Days::new(1e-9);

    #[test]
    fn new_and_full_intervals_each_span_a_month() {
        for step in 0..100 {
            let age = SYNODIC_MONTH * (step as f64 / 100.0);
            let events = CycleEvents::from_age(age);
            assert!((events.since_new_moon + events.until_new_moon - SYNODIC_MONTH).abs() < EPS);
            assert!(
                (events.since_full_moon + events.until_full_moon - SYNODIC_MONTH).abs() < EPS
            );
        }
    }

    #[test]
    fn waxing_half() {
        let events = CycleEvents::from_age(Days::new(5.0));
        let half = SYNODIC_MONTH * 0.5;
        assert_eq!(events.since_new_moon, Days::new(5.0));
        assert!((events.until_full_moon - (half - Days::new(5.0))).abs() < EPS);
        assert!((events.since_full_moon - (half + Days::new(5.0))).abs() < EPS);
    }

    #[test]
    fn waning_half() {
        let events = CycleEvents::from_age(Days::new(20.0));
        let half = SYNODIC_MONTH * 0.5;
        assert!((events.since_full_moon - (Days::new(20.0) - half)).abs() < EPS);
        assert!((events.until_new_moon - Days::new(9.530_587_705_76)).abs() < EPS);
    }

    #[test]
    fn at_full_moon() {
        let events = CycleEvents::from_age(SYNODIC_MONTH * 0.5);
        assert_eq!(events.since_full_moon, Days::new(0.0));
        assert_eq!(events.until_full_moon, SYNODIC_MONTH);
    }
}
