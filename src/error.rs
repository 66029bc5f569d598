// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! The astronomical computation itself is total; errors only arise at the
//! boundaries where loosely-typed input is turned into the crate's types.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Failure to turn a naive wall-clock reading into a UTC instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The reading falls into a gap of the host time zone (e.g. the hour
    /// skipped when daylight saving time starts).
    #[error("local time {0} does not exist in the host time zone")]
    NonexistentLocalTime(NaiveDateTime),

    /// A fixed UTC offset outside ±24 h.
    #[error("UTC offset of {seconds_east} s is out of range")]
    InvalidOffset { seconds_east: i32 },
}

/// A tithi index outside `0..=29`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tithi index {0} is outside 0..=29")]
pub struct TithiIndexError(pub u8);
