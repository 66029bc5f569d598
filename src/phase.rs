// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Named lunar phases.
//!
//! The eight phases partition the elongation circle into 45° sectors
//! centred on 0°, 45°, …, 315°. Each sector is a half-open range
//! `[min, max)`; the New Moon sector is the single range `[337.5°, 22.5°)`
//! that wraps through 0°, so the table is circular rather than linear.
//!
//! | Phase | Range |
//! |-------|-------|
//! | New Moon 🌑 | 337.5° – 22.5° |
//! | Waxing Crescent 🌒 | 22.5° – 67.5° |
//! | First Quarter 🌓 | 67.5° – 112.5° |
//! | Waxing Gibbous 🌔 | 112.5° – 157.5° |
//! | Full Moon 🌕 | 157.5° – 202.5° |
//! | Waning Gibbous 🌖 | 202.5° – 247.5° |
//! | Last Quarter 🌗 | 247.5° – 292.5° |
//! | Waning Crescent 🌘 | 292.5° – 337.5° |

use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::normalize;

/// One of the eight conventional phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl Phase {
    /// English name of the phase.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Unicode moon symbol for the phase.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::NewMoon => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::FullMoon => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }

    /// The sector of the elongation circle this phase owns.
    pub fn definition(self) -> &'static PhaseDefinition {
        // PHASE_TABLE is in enum order.
        &PHASE_TABLE[self as usize]
    }

    /// Classifies a Sun–Moon elongation. The angle is normalized first.
    pub fn from_elongation(elongation: Degrees) -> Self {
        let elongation = normalize(elongation);
        match PHASE_TABLE.iter().find(|def| def.contains(elongation)) {
            Some(def) => def.phase,
            None => {
                log::warn!("elongation {elongation} matched no phase sector; reporting New Moon");
                Self::NewMoon
            }
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A half-open sector `[min, max)` of the elongation circle.
///
/// When `min > max` the sector wraps through 0°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDefinition {
    pub phase: Phase,
    pub min: Degrees,
    pub max: Degrees,
}

impl PhaseDefinition {
    const fn new(phase: Phase, min: f64, max: f64) -> Self {
        Self {
            phase,
            min: Degrees::new(min),
            max: Degrees::new(max),
        }
    }

    /// Whether this sector wraps through 0°.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.min > self.max
    }

    /// Whether a normalized angle lies in this sector.
    #[inline]
    pub fn contains(&self, angle: Degrees) -> bool {
        if self.wraps() {
            angle >= self.min || angle < self.max
        } else {
            angle >= self.min && angle < self.max
        }
    }

    /// Angular width of the sector.
    pub fn width(&self) -> Degrees {
        normalize(self.max - self.min)
    }
}

/// The eight phase sectors, in [`Phase`] order.
pub const PHASE_TABLE: [PhaseDefinition; 8] = [
    PhaseDefinition::new(Phase::NewMoon, 337.5, 22.5),
    PhaseDefinition::new(Phase::WaxingCrescent, 22.5, 67.5),
    PhaseDefinition::new(Phase::FirstQuarter, 67.5, 112.5),
    PhaseDefinition::new(Phase::WaxingGibbous, 112.5, 157.5),
    PhaseDefinition::new(Phase::FullMoon, 157.5, 202.5),
    PhaseDefinition::new(Phase::WaningGibbous, 202.5, 247.5),
    PhaseDefinition::new(Phase::LastQuarter, 247.5, 292.5),
    PhaseDefinition::new(Phase::WaningCrescent, 292.5, 337.5),
];
