// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The date × time-slot display grid.
//!
//! ## Invariants
//!
//! - Columns follow the fetched day order; rows are the canonical labels
//! - A cell is matched to a slot by label string, never by slot code
//! - Every cell inside the grid has exactly one `SlotKey`
//! - Derivation never fails: malformed dates render as `"Invalid Date"`

use crate::calendar::CivilCalendar;
use crate::slot::{AvailabilityDay, Slot, SlotKey};
use crate::time_slots::{canonical_time_slots, find_slot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weekday label shown for a date that cannot be parsed.
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Coordinates of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellRef {
    /// Index of the displayed date.
    pub day_index: usize,
    /// Index of the canonical time-slot label.
    pub slot_index: usize,
}

impl CellRef {
    /// Creates a new cell reference.
    #[must_use]
    pub const fn new(day_index: usize, slot_index: usize) -> Self {
        Self {
            day_index,
            slot_index,
        }
    }
}

/// One column of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedDate {
    /// Civil date as delivered by the service.
    pub date: String,
    /// Uppercase abbreviated weekday, or `"Invalid Date"`.
    pub weekday: String,
    /// Whether the day is a holiday.
    pub is_holiday: bool,
    /// Whether the day is today in the facility zone.
    pub is_today: bool,
    /// The day's slots.
    pub slots: Vec<Slot>,
}

/// A derived grid, rebuilt whenever the underlying data changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayGrid {
    dates: Vec<DisplayedDate>,
    time_slots: Vec<String>,
}

impl DisplayGrid {
    /// Builds the grid for a set of days.
    ///
    /// # Arguments
    ///
    /// * `days` - The fetched days, in display order
    /// * `calendar` - The facility calendar used for weekday labels
    /// * `today` - Today's civil date in the facility zone
    #[must_use]
    pub fn build(days: &[AvailabilityDay], calendar: &CivilCalendar, today: NaiveDate) -> Self {
        let dates: Vec<DisplayedDate> = days
            .iter()
            .map(|day| {
                let parsed: Option<NaiveDate> = CivilCalendar::parse_civil_date(&day.date).ok();
                let weekday: String = parsed
                    .and_then(|date| calendar.weekday_label(date).ok())
                    .unwrap_or_else(|| String::from(INVALID_DATE_LABEL));

                DisplayedDate {
                    date: day.date.clone(),
                    weekday,
                    is_holiday: day.is_holiday,
                    is_today: parsed == Some(today),
                    slots: day.slots.clone(),
                }
            })
            .collect();

        Self {
            dates,
            time_slots: canonical_time_slots(days),
        }
    }

    /// Returns the displayed dates.
    #[must_use]
    pub fn dates(&self) -> &[DisplayedDate] {
        &self.dates
    }

    /// Returns the canonical time-slot labels.
    #[must_use]
    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    /// Returns whether the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() || self.time_slots.is_empty()
    }

    /// Returns whether a cell lies inside the grid.
    #[must_use]
    pub fn contains(&self, cell: CellRef) -> bool {
        cell.day_index < self.dates.len() && cell.slot_index < self.time_slots.len()
    }

    /// Returns the displayed date of a cell.
    #[must_use]
    pub fn date(&self, cell: CellRef) -> Option<&DisplayedDate> {
        self.dates.get(cell.day_index)
    }

    /// Returns the time-slot label of a cell.
    #[must_use]
    pub fn label(&self, cell: CellRef) -> Option<&str> {
        self.time_slots.get(cell.slot_index).map(String::as_str)
    }

    /// Returns the slot occupying a cell, if one is configured.
    #[must_use]
    pub fn slot_at(&self, cell: CellRef) -> Option<&Slot> {
        let date: &DisplayedDate = self.date(cell)?;
        let label: &str = self.label(cell)?;
        find_slot(&date.slots, label)
    }

    /// Returns the key of a cell, or `None` if the cell is outside the grid.
    #[must_use]
    pub fn key_at(&self, cell: CellRef) -> Option<SlotKey> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.slot_at(cell).map_or(
            SlotKey::Temp {
                day_index: cell.day_index,
                slot_index: cell.slot_index,
            },
            |slot| SlotKey::Code(slot.code.clone()),
        ))
    }

    /// Returns the cell a key refers to in this grid.
    ///
    /// A synthetic key matches only while its cell still has no slot.
    #[must_use]
    pub fn cell_of(&self, key: &SlotKey) -> Option<CellRef> {
        match key {
            SlotKey::Code(_) => self
                .cells()
                .find(|&cell| self.key_at(cell).as_ref() == Some(key)),
            SlotKey::Temp {
                day_index,
                slot_index,
            } => {
                let cell: CellRef = CellRef::new(*day_index, *slot_index);
                (self.key_at(cell).as_ref() == Some(key)).then_some(cell)
            }
        }
    }

    /// Returns whether a persisted slot code still appears in this grid.
    ///
    /// Synthetic keys belong to the grid they were derived from and are
    /// never carried over.
    #[must_use]
    pub fn has_key(&self, key: &SlotKey) -> bool {
        !key.is_temp() && self.cell_of(key).is_some()
    }

    /// Iterates over every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        (0..self.dates.len())
            .flat_map(|day| (0..self.time_slots.len()).map(move |slot| CellRef::new(day, slot)))
    }
}
