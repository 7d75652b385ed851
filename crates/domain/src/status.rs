// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-cell display status.
//!
//! Resolution order is fixed: holiday, missing slot, booking, local
//! override, server baseline. Holiday and booked always win, so a stale
//! override can never make those cells look editable.

use crate::grid::{CellRef, DisplayGrid, DisplayedDate};
use crate::slot::{Slot, SlotKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The display status of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotStatus {
    /// The coach is available.
    Available,
    /// The coach is unavailable.
    Unavailable,
    /// No slot is configured for this cell.
    NotSet,
    /// The whole day is a holiday.
    Holiday,
    /// Something is booked into the slot.
    Booked,
}

impl SlotStatus {
    /// Returns whether the status is `Available` or `Unavailable`.
    #[must_use]
    pub const fn is_determinate(self) -> bool {
        matches!(self, Self::Available | Self::Unavailable)
    }

    /// Returns whether the cell can ever be edited.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        !matches!(self, Self::Holiday | Self::Booked)
    }

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::NotSet => "not-set",
            Self::Holiday => "holiday",
            Self::Booked => "booked",
        }
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Availability confirmed locally after a successful mutation.
///
/// Supersedes the server's `is_available` until the next full refetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverrideMap {
    entries: HashMap<SlotKey, bool>,
}

impl OverrideMap {
    /// Creates an empty override map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the confirmed availability of a key, if any.
    #[must_use]
    pub fn get(&self, key: &SlotKey) -> Option<bool> {
        self.entries.get(key).copied()
    }

    /// Records the confirmed availability of one key.
    pub fn insert(&mut self, key: SlotKey, available: bool) {
        self.entries.insert(key, available);
    }

    /// Records the same confirmed availability for every key.
    pub fn insert_all<I>(&mut self, keys: I, available: bool)
    where
        I: IntoIterator<Item = SlotKey>,
    {
        self.entries
            .extend(keys.into_iter().map(|key| (key, available)));
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves the status of a cell.
///
/// Cells outside the grid resolve to `NotSet`.
#[must_use]
pub fn resolve_status(grid: &DisplayGrid, overrides: &OverrideMap, cell: CellRef) -> SlotStatus {
    let Some(date): Option<&DisplayedDate> = grid.date(cell) else {
        return SlotStatus::NotSet;
    };
    if date.is_holiday {
        return SlotStatus::Holiday;
    }

    let Some(slot): Option<&Slot> = grid.slot_at(cell) else {
        return SlotStatus::NotSet;
    };
    if slot.is_booked() {
        return SlotStatus::Booked;
    }

    let available: bool = overrides
        .get(&SlotKey::Code(slot.code.clone()))
        .unwrap_or(slot.is_available);

    if available {
        SlotStatus::Available
    } else {
        SlotStatus::Unavailable
    }
}

/// Read-only view of a grid together with its confirmed overrides.
#[derive(Debug, Clone, Copy)]
pub struct StatusResolver<'a> {
    grid: &'a DisplayGrid,
    overrides: &'a OverrideMap,
}

impl<'a> StatusResolver<'a> {
    /// Creates a resolver over a grid and its overrides.
    #[must_use]
    pub const fn new(grid: &'a DisplayGrid, overrides: &'a OverrideMap) -> Self {
        Self { grid, overrides }
    }

    /// Returns the grid being resolved.
    #[must_use]
    pub const fn grid(&self) -> &'a DisplayGrid {
        self.grid
    }

    /// Returns the status of a cell.
    #[must_use]
    pub fn status(&self, cell: CellRef) -> SlotStatus {
        resolve_status(self.grid, self.overrides, cell)
    }

    /// Returns the key of a cell, or `None` outside the grid.
    #[must_use]
    pub fn key(&self, cell: CellRef) -> Option<SlotKey> {
        self.grid.key_at(cell)
    }
}
