// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tithi and paksha: the Hindu lunar day and fortnight.
//!
//! A tithi is the time the Moon takes to gain 12° of elongation on the Sun,
//! so a synodic month holds thirty of them. Indices `0..=14` form the bright
//! fortnight (*Shukla paksha*) ending at full moon, `15..=29` the dark
//! fortnight (*Krishna paksha*) ending at new moon.

use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::normalize;
use crate::error::TithiIndexError;

/// Elongation gained per tithi.
pub const TITHI_SPAN: Degrees = Degrees::new(12.0);

/// Number of tithis in a lunar month.
pub const TITHIS_PER_MONTH: u8 = 30;

/// Names of the first fourteen tithis of each fortnight.
///
/// The fifteenth is named after the fortnight's closing syzygy instead:
/// [`Tithi::PURNIMA`] or [`Tithi::AMAVASYA`].
pub const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Paksha {
    /// Waxing, from new moon to full moon.
    Shukla,
    /// Waning, from full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

impl std::fmt::Display for Paksha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A lunar day, identified by its index `0..=29` within the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Tithi {
    index: u8,
}

impl Tithi {
    /// Shukla 15, the full-moon tithi.
    pub const PURNIMA: Self = Self { index: 14 };
    /// Krishna 15, the new-moon tithi.
    pub const AMAVASYA: Self = Self { index: 29 };

    /// Builds a tithi from its month index, `None` outside `0..=29`.
    pub const fn new(index: u8) -> Option<Self> {
        if index < TITHIS_PER_MONTH {
            Some(Self { index })
        } else {
            None
        }
    }

    /// The tithi in progress at a Sun–Moon elongation.
    ///
    /// The index is `⌊elongation / 12°⌋`, clamped to `0..=29` so a value
    /// that rounds onto 360° stays in the last tithi.
    pub fn from_elongation(elongation: Degrees) -> Self {
        let elongation = normalize(elongation);
        let raw = (elongation.value() / TITHI_SPAN.value()).floor();
        // NaN casts to 0.
        let index = (raw as i64).clamp(0, i64::from(TITHIS_PER_MONTH) - 1) as u8;
        Self { index }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.index
    }

    #[inline]
    pub const fn paksha(self) -> Paksha {
        if self.index < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// Day number within the fortnight, `1..=15`.
    #[inline]
    pub const fn number(self) -> u8 {
        match self.paksha() {
            Paksha::Shukla => self.index + 1,
            Paksha::Krishna => self.index - 14,
        }
    }

    pub const fn name(self) -> &'static str {
        match self.index {
            14 => "Purnima",
            29 => "Amavasya",
            i if i < 15 => TITHI_NAMES[i as usize],
            i => TITHI_NAMES[(i - 15) as usize],
        }
    }
}

impl std::fmt::Display for Tithi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.paksha(), self.number(), self.name())
    }
}

impl TryFrom<u8> for Tithi {
    type Error = TithiIndexError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(TithiIndexError(index))
    }
}

impl From<Tithi> for u8 {
    fn from(tithi: Tithi) -> Self {
        tithi.index
    }
}
