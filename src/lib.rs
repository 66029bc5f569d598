// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chandrama: Moon phase and tithi calculator.
//!
//! Given an instant, computes the apparent Sun–Moon elongation from
//! analytical ephemerides and derives from it the illuminated fraction, the
//! phase name, the Moon's age, the days since and until the nearest new and
//! full moons, and the Hindu lunar day (tithi) with its fortnight (paksha).
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use chandrama::{moon_phase, Phase};
//!
//! let result = moon_phase(Utc.with_ymd_and_hms(2024, 1, 25, 17, 0, 0).unwrap());
//! assert_eq!(result.phase(), Phase::FullMoon);
//! assert_eq!(result.tithi_name(), "Purnima");
//! ```
//!
//! # Layers
//!
//! | Module | Role |
//! |--------|------|
//! | [`normalize`] | chrono timestamps → UTC → Julian Day |
//! | [`Time<S>`] | Julian Day on the [`UT`] or [`JD`] (TT) axis, ΔT between them |
//! | [`solar`], [`lunar`] | apparent ecliptic longitudes (Meeus ch. 25, 47) |
//! | [`phase`], [`tithi`], [`cycle`] | classification of the elongation |
//! | [`calculator`] | the pipeline, rounding and result type |
//!
//! Computation is synchronous and free of shared state; the only fallible
//! step is placing a naive timestamp on the UTC axis.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration and value types,
//!   `Serialize` for [`MoonPhaseResult`].

pub mod angle;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod cycle;
mod delta_t;
pub mod error;
pub(crate) mod instant;
mod julian_date_ext;
pub mod lunar;
pub mod normalize;
pub mod phase;
pub(crate) mod scales;
pub mod solar;
pub mod tithi;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calculator::{moon_phase, MoonPhaseCalculator, MoonPhaseResult};
pub use clock::{Clock, OffsetClock, SystemClock};
pub use config::{CalculatorConfig, Precision};
pub use cycle::{CycleEvents, SYNODIC_MONTH};
pub use error::{NormalizeError, TithiIndexError};
pub use instant::{Time, TimeScale};
pub use normalize::NaivePolicy;
pub use phase::Phase;
pub use scales::{JD, UT};
pub use tithi::{Paksha, Tithi};

/// Julian Day on the Terrestrial Time axis, as used by ephemeris formulas.
pub type JulianDate = Time<JD>;

/// Julian Day on the Universal Time axis.
pub type UniversalTime = Time<UT>;
