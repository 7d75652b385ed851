// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod grid;
mod slot;
mod status;
mod time_slots;

#[cfg(test)]
mod tests;

pub use calendar::{CivilCalendar, DEFAULT_TIMEZONE};
pub use error::DomainError;
pub use grid::{CellRef, DisplayGrid, DisplayedDate, INVALID_DATE_LABEL};
pub use slot::{AvailabilityDay, CoachAvailability, Slot, SlotCode, SlotKey};
pub use status::{OverrideMap, SlotStatus, StatusResolver, resolve_status};
pub use time_slots::{canonical_time_slots, find_slot, time_label, wall_clock_time};
