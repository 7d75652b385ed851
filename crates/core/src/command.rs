// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coach_grid_domain::CellRef;

/// A command represents one user interaction with the grid, as data only.
///
/// Commands are the only way to change selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn selection mode on.
    EnterSelectionMode,
    /// Turn selection mode off, dropping the selection and restriction.
    ExitSelectionMode,
    /// Flip selection mode.
    ToggleSelectionMode,
    /// The pointer was pressed over a cell.
    PointerDown {
        /// The cell under the pointer.
        cell: CellRef,
    },
    /// The pointer moved into a cell while pressed.
    PointerEnter {
        /// The cell under the pointer.
        cell: CellRef,
    },
    /// The pointer was released over a cell.
    PointerUp {
        /// The cell under the pointer.
        cell: CellRef,
    },
    /// The pointer was released outside every cell.
    DocumentPointerUp,
    /// Empty the selection without leaving selection mode.
    ClearSelection,
    /// The grid was rebuilt from fresh data; drop keys it no longer has.
    Reconcile,
}
