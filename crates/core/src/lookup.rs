// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coach_grid_domain::{CellRef, SlotKey, SlotStatus, StatusResolver};

/// Read access to the grid the selection refers to.
pub trait CellLookup {
    /// Returns the resolved status of a cell.
    fn status(&self, cell: CellRef) -> SlotStatus;

    /// Returns the key of a cell, or `None` outside the grid.
    fn key(&self, cell: CellRef) -> Option<SlotKey>;

    /// Returns the resolved status of the cell a persisted key maps to.
    ///
    /// `None` when the grid no longer holds the key. Synthetic keys never
    /// carry over between grids, so they always resolve to `None`.
    fn key_status(&self, key: &SlotKey) -> Option<SlotStatus>;
}

impl CellLookup for StatusResolver<'_> {
    fn status(&self, cell: CellRef) -> SlotStatus {
        Self::status(self, cell)
    }

    fn key(&self, cell: CellRef) -> Option<SlotKey> {
        Self::key(self, cell)
    }

    fn key_status(&self, key: &SlotKey) -> Option<SlotStatus> {
        if key.is_temp() {
            return None;
        }
        self.grid()
            .cell_of(key)
            .map(|cell| Self::status(self, cell))
    }
}
