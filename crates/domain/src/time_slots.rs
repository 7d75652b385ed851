// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-slot label normalization.
//!
//! Slot timestamps are trusted to be wall-clock correct in the facility
//! zone. Labels are read straight from the timestamp text; no offset in
//! the text is ever applied.

use crate::error::DomainError;
use crate::slot::{AvailabilityDay, Slot};
use std::collections::BTreeSet;

/// Extracts `HH:MM` from a timestamp such as `2026-03-02T09:00:00`.
///
/// Accepts a `T` or space separated date-time or a bare time.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if no `HH:MM` can be read.
pub fn wall_clock_time(timestamp: &str) -> Result<&str, DomainError> {
    let trimmed: &str = timestamp.trim();
    let time_part: &str = trimmed
        .split_once(['T', ' '])
        .map_or(trimmed, |(_, time)| time);

    let candidate: &str = time_part
        .get(..5)
        .ok_or_else(|| DomainError::InvalidTimestamp(timestamp.to_string()))?;

    let bytes: &[u8] = candidate.as_bytes();
    let well_formed: bool = bytes[2] == b':'
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[3..].iter().all(u8::is_ascii_digit);

    if well_formed {
        Ok(candidate)
    } else {
        Err(DomainError::InvalidTimestamp(timestamp.to_string()))
    }
}

/// Returns the `"HH:MM - HH:MM"` label of a slot.
///
/// Returns `None` when either endpoint is malformed; such a slot never
/// matches a grid row.
#[must_use]
pub fn time_label(slot: &Slot) -> Option<String> {
    let start: &str = wall_clock_time(&slot.start_time).ok()?;
    let end: &str = wall_clock_time(&slot.end_time).ok()?;
    Some(format!("{start} - {end}"))
}

/// Collects the distinct slot labels across all days, sorted ascending.
///
/// Zero-padded `HH:MM` labels sort chronologically as strings.
#[must_use]
pub fn canonical_time_slots(days: &[AvailabilityDay]) -> Vec<String> {
    days.iter()
        .flat_map(|day| day.slots.iter())
        .filter_map(time_label)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Finds the first slot on a day whose label equals `label`.
#[must_use]
pub fn find_slot<'a>(slots: &'a [Slot], label: &str) -> Option<&'a Slot> {
    slots
        .iter()
        .find(|slot| time_label(slot).is_some_and(|l| l == label))
}
