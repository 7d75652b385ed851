// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::lookup::CellLookup;
use crate::state::{
    Effect, Gesture, IgnoreReason, SelectionRestriction, State, TransitionResult,
};
use coach_grid_domain::{CellRef, SlotKey, SlotStatus};

/// Applies a command to the selection state, producing the next state.
///
/// Every pointer event runs to completion here before the next one is
/// applied, so a `PointerDown` is always visible to the `PointerEnter`
/// events that follow it.
///
/// # Arguments
///
/// * `state` - The current selection state (immutable)
/// * `lookup` - The grid the selection refers to
/// * `command` - The interaction to apply
///
/// # Returns
///
/// The next state and the effect of the command. Commands that cannot
/// apply (wrong mode, ineligible cell) return the state unchanged with
/// `Effect::Ignored`.
pub fn apply<L>(state: &State, lookup: &L, command: Command) -> TransitionResult
where
    L: CellLookup + ?Sized,
{
    match command {
        Command::EnterSelectionMode => enter_selection_mode(state),
        Command::ExitSelectionMode => exit_selection_mode(state),
        Command::ToggleSelectionMode => {
            if state.is_selection_mode() {
                exit_selection_mode(state)
            } else {
                enter_selection_mode(state)
            }
        }
        Command::PointerDown { cell } => pointer_down(state, lookup, cell),
        Command::PointerEnter { cell } => pointer_enter(state, lookup, cell),
        Command::PointerUp { cell } => pointer_up(state, lookup, cell),
        Command::DocumentPointerUp => document_pointer_up(state),
        Command::ClearSelection => clear_selection(state),
        Command::Reconcile => reconcile(state, lookup),
    }
}

/// Returns whether a cell may join the current selection.
///
/// Holiday, booked and out-of-grid cells are never selectable. With a
/// restriction in place only not-set cells and cells of the restricted
/// status are.
pub fn can_select<L>(state: &State, lookup: &L, cell: CellRef) -> bool
where
    L: CellLookup + ?Sized,
{
    eligibility(state, lookup, cell).is_ok()
}

/// Resolves a cell's key and status, or the reason it cannot be selected.
fn eligibility<L>(state: &State, lookup: &L, cell: CellRef) -> Result<(SlotKey, SlotStatus), IgnoreReason>
where
    L: CellLookup + ?Sized,
{
    let (key, status) = editable_cell(lookup, cell)?;
    match state.restriction() {
        Some(restriction) if !restriction.permits(status) => {
            Err(IgnoreReason::RestrictionMismatch {
                restriction,
                status,
            })
        }
        _ => Ok((key, status)),
    }
}

/// Resolves a cell that can ever be edited, ignoring the restriction.
fn editable_cell<L>(lookup: &L, cell: CellRef) -> Result<(SlotKey, SlotStatus), IgnoreReason>
where
    L: CellLookup + ?Sized,
{
    let key: SlotKey = lookup.key(cell).ok_or(IgnoreReason::OutsideGrid)?;
    let status: SlotStatus = lookup.status(cell);
    if status.is_editable() {
        Ok((key, status))
    } else {
        Err(IgnoreReason::NotEditable(status))
    }
}

fn unchanged(state: &State, reason: IgnoreReason) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        effect: Effect::Ignored(reason),
    }
}

fn enter_selection_mode(state: &State) -> TransitionResult {
    if state.is_selection_mode() {
        return unchanged(state, IgnoreReason::SelectionModeOn);
    }
    let mut new_state: State = State::new();
    new_state.set_mode(true);
    TransitionResult {
        new_state,
        effect: Effect::ModeEntered,
    }
}

fn exit_selection_mode(state: &State) -> TransitionResult {
    // Mode, selection, restriction and gesture are reset together.
    TransitionResult {
        new_state: State::new(),
        effect: Effect::ModeExited {
            dropped: state.selected().len(),
        },
    }
}

fn clear_selection(state: &State) -> TransitionResult {
    let mut new_state: State = state.clone();
    new_state.clear_selection();
    TransitionResult {
        new_state,
        effect: Effect::Cleared {
            dropped: state.selected().len(),
        },
    }
}

fn pointer_down<L>(state: &State, lookup: &L, cell: CellRef) -> TransitionResult
where
    L: CellLookup + ?Sized,
{
    if !state.is_selection_mode() {
        return unchanged(state, IgnoreReason::SelectionModeOff);
    }
    let (key, status) = match editable_cell(lookup, cell) {
        Ok(resolved) => resolved,
        Err(reason) => return unchanged(state, reason),
    };

    let was_selected: bool = state.is_selected(&key);
    let mut new_state: State = state.clone();
    new_state.open_gesture(Gesture::new(cell, was_selected));

    // The gesture opens even when the restriction keeps the origin out, so a
    // drag starting there can still pick up eligible cells.
    let effect: Effect = if !was_selected && state.admits(status) {
        new_state.insert(key.clone(), status);
        Effect::Added(key)
    } else {
        Effect::GestureStarted
    };

    TransitionResult { new_state, effect }
}

fn pointer_enter<L>(state: &State, lookup: &L, cell: CellRef) -> TransitionResult
where
    L: CellLookup + ?Sized,
{
    if !state.is_selection_mode() {
        return unchanged(state, IgnoreReason::SelectionModeOff);
    }
    if state.gesture().is_none() {
        return unchanged(state, IgnoreReason::NoGesture);
    }
    let (key, status) = match eligibility(state, lookup, cell) {
        Ok(resolved) => resolved,
        Err(reason) => return unchanged(state, reason),
    };

    let mut new_state: State = state.clone();
    if let Some(gesture) = new_state.gesture_mut() {
        gesture.touched.insert(cell);
    }

    let effect: Effect = if state.is_selected(&key) {
        Effect::GestureExtended
    } else {
        new_state.insert(key.clone(), status);
        Effect::Added(key)
    };

    TransitionResult { new_state, effect }
}

fn pointer_up<L>(state: &State, lookup: &L, cell: CellRef) -> TransitionResult
where
    L: CellLookup + ?Sized,
{
    let mut new_state: State = state.clone();
    let Some(gesture) = new_state.take_gesture() else {
        return unchanged(state, IgnoreReason::NoGesture);
    };

    // Only a plain click on a cell that was already selected toggles it off.
    // A click that just added the cell, or any drag, leaves the selection as
    // pointer-down and pointer-enter built it.
    if gesture.origin_was_selected && gesture.is_click_on(cell) {
        if let Some(key) = lookup.key(cell) {
            if new_state.remove(&key) {
                return TransitionResult {
                    new_state,
                    effect: Effect::Removed(key),
                };
            }
        }
    }

    TransitionResult {
        new_state,
        effect: Effect::GestureEnded,
    }
}

fn document_pointer_up(state: &State) -> TransitionResult {
    let mut new_state: State = state.clone();
    if new_state.take_gesture().is_none() {
        return unchanged(state, IgnoreReason::NoGesture);
    }
    TransitionResult {
        new_state,
        effect: Effect::GestureEnded,
    }
}

fn reconcile<L>(state: &State, lookup: &L) -> TransitionResult
where
    L: CellLookup + ?Sized,
{
    let mut new_state: State = state.clone();
    // Cell coordinates of an open gesture refer to the previous grid.
    new_state.take_gesture();
    // A kept key must still be editable and match the restriction it was
    // selected under; the fetched data may have booked it or flipped it.
    let restriction: Option<SelectionRestriction> = state.restriction();
    let dropped: usize = new_state.retain(|key| {
        lookup.key_status(key).is_some_and(|status| {
            status.is_editable() && restriction.is_none_or(|r| r.permits(status))
        })
    });
    TransitionResult {
        new_state,
        effect: Effect::Reconciled { dropped },
    }
}
