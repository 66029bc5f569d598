// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculator configuration.
//!
//! With the `serde` feature both types deserialize from partial documents;
//! missing fields take their defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::normalize::NaivePolicy;

/// Decimal places kept in each field of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Precision {
    /// Illumination percentage.
    pub illumination: u8,
    /// Moon age in days.
    pub age: u8,
    /// Days since/until new and full moon.
    pub days: u8,
    /// Sun–Moon elongation in degrees.
    pub elongation: u8,
}

impl Precision {
    pub const DEFAULT: Self = Self {
        illumination: 4,
        age: 6,
        days: 4,
        elongation: 4,
    };

    /// Rounds `value` half away from zero to `decimals` places.
    pub fn round(value: f64, decimals: u8) -> f64 {
        let scale = 10f64.powi(i32::from(decimals));
        let rounded = (value * scale).round() / scale;
        if rounded.is_finite() {
            rounded
        } else {
            value
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings of a [`MoonPhaseCalculator`](crate::MoonPhaseCalculator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    pub precision: Precision,
    /// How naive timestamps are placed on the UTC axis.
    pub naive_policy: NaivePolicy,
}

impl CalculatorConfig {
    pub const fn new() -> Self {
        Self {
            precision: Precision::DEFAULT,
            naive_policy: NaivePolicy::Utc,
        }
    }

    pub const fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub const fn with_naive_policy(mut self, naive_policy: NaivePolicy) -> Self {
        self.naive_policy = naive_policy;
        self
    }
}
