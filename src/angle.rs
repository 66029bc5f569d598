// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angular helpers on [`Degrees`].

use qtty::Degrees;

/// One full turn.
pub const FULL_TURN: Degrees = Degrees::new(360.0);

/// Wraps an angle into the half-open range `[0°, 360°)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0, which
/// is folded back to 0.0 so the upper bound stays open.
#[inline]
pub fn normalize(angle: Degrees) -> Degrees {
    let wrapped = angle.value().rem_euclid(FULL_TURN.value());
    if wrapped >= FULL_TURN.value() {
        Degrees::new(0.0)
    } else {
        Degrees::new(wrapped)
    }
}

/// Forward angular distance from `from` to `to`, in `[0°, 360°)`.
#[inline]
pub fn separation(to: Degrees, from: Degrees) -> Degrees {
    normalize(to - from)
}

#[inline]
pub(crate) fn sin(angle: Degrees) -> f64 {
    angle.value().to_radians().sin()
}

#[inline]
pub(crate) fn cos(angle: Degrees) -> f64 {
    angle.value().to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize(Degrees::new(370.0)), Degrees::new(10.0));
        assert_eq!(normalize(Degrees::new(-10.0)), Degrees::new(350.0));
        assert_eq!(normalize(Degrees::new(720.0)), Degrees::new(0.0));
        assert_eq!(normalize(Degrees::new(0.0)), Degrees::new(0.0));
    }

    #[test]
    fn normalize_keeps_upper_bound_open() {
        let tiny = normalize(Degrees::new(-1e-17));
        assert!(tiny >= Degrees::new(0.0) && tiny < FULL_TURN);
        assert_eq!(normalize(FULL_TURN), Degrees::new(0.0));
    }

    #[test]
    fn separation_is_forward_distance() {
        assert_eq!(
            separation(Degrees::new(10.0), Degrees::new(350.0)),
            Degrees::new(20.0)
        );
        assert_eq!(
            separation(Degrees::new(350.0), Degrees::new(10.0)),
            Degrees::new(340.0)
        );
    }

    #[test]
    fn trig_in_degrees() {
        assert!((sin(Degrees::new(90.0)) - 1.0).abs() < 1e-15);
        assert!((cos(Degrees::new(180.0)) + 1.0).abs() < 1e-15);
    }
}
