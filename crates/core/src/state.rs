// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coach_grid_domain::{CellRef, SlotKey, SlotStatus};
use std::collections::BTreeSet;

/// The single status kind a selection batch is limited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionRestriction {
    /// Only available slots (and not-set cells) may join.
    Available,
    /// Only unavailable slots (and not-set cells) may join.
    Unavailable,
}

impl SelectionRestriction {
    /// Derives a restriction from a determinate status.
    #[must_use]
    pub const fn from_status(status: SlotStatus) -> Option<Self> {
        match status {
            SlotStatus::Available => Some(Self::Available),
            SlotStatus::Unavailable => Some(Self::Unavailable),
            SlotStatus::NotSet | SlotStatus::Holiday | SlotStatus::Booked => None,
        }
    }

    /// Returns whether a cell with `status` may join a batch with this restriction.
    ///
    /// Not-set cells are always exempt.
    #[must_use]
    pub const fn permits(self, status: SlotStatus) -> bool {
        matches!(
            (self, status),
            (_, SlotStatus::NotSet)
                | (Self::Available, SlotStatus::Available)
                | (Self::Unavailable, SlotStatus::Unavailable)
        )
    }

    /// Converts this restriction to its string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for SelectionRestriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pointer-down-to-pointer-up interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gesture {
    /// The cell the pointer was pressed on.
    pub origin: CellRef,
    /// Whether the origin was already selected when the gesture began.
    pub origin_was_selected: bool,
    /// Every eligible cell the gesture has passed over, origin included.
    pub touched: BTreeSet<CellRef>,
}

impl Gesture {
    pub(crate) fn new(origin: CellRef, origin_was_selected: bool) -> Self {
        Self {
            origin,
            origin_was_selected,
            touched: BTreeSet::from([origin]),
        }
    }

    /// Returns whether this gesture is a click on its origin rather than a drag.
    #[must_use]
    pub fn is_click_on(&self, cell: CellRef) -> bool {
        self.origin == cell && self.touched.len() == 1 && self.touched.contains(&cell)
    }
}

/// Coarse view of where the selection state machine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Selection mode is off.
    Idle,
    /// Selection mode is on and nothing is selected.
    Armed,
    /// Only not-set cells are selected, so no restriction applies yet.
    Selecting,
    /// At least one determinate cell fixed the batch's status kind.
    Restricted(SelectionRestriction),
}

/// The complete selection state of one grid.
///
/// ## Invariants
///
/// - An empty selection never carries a restriction
/// - Leaving selection mode empties the selection and drops the gesture
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    mode_enabled: bool,
    selected: BTreeSet<SlotKey>,
    restriction: Option<SelectionRestriction>,
    gesture: Option<Gesture>,
}

impl State {
    /// Creates an idle state with selection mode off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode_enabled: false,
            selected: BTreeSet::new(),
            restriction: None,
            gesture: None,
        }
    }

    /// Returns whether selection mode is on.
    #[must_use]
    pub const fn is_selection_mode(&self) -> bool {
        self.mode_enabled
    }

    /// Returns the selected keys.
    #[must_use]
    pub const fn selected(&self) -> &BTreeSet<SlotKey> {
        &self.selected
    }

    /// Returns whether a key is selected.
    #[must_use]
    pub fn is_selected(&self, key: &SlotKey) -> bool {
        self.selected.contains(key)
    }

    /// Returns the active restriction.
    #[must_use]
    pub const fn restriction(&self) -> Option<SelectionRestriction> {
        self.restriction
    }

    /// Returns the open gesture, if any.
    #[must_use]
    pub const fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        if !self.mode_enabled {
            return SelectionPhase::Idle;
        }
        match (self.selected.is_empty(), self.restriction) {
            (true, _) => SelectionPhase::Armed,
            (false, None) => SelectionPhase::Selecting,
            (false, Some(restriction)) => SelectionPhase::Restricted(restriction),
        }
    }

    /// Returns whether the current restriction admits `status`.
    #[must_use]
    pub fn admits(&self, status: SlotStatus) -> bool {
        self.restriction
            .is_none_or(|restriction| restriction.permits(status))
    }

    pub(crate) const fn set_mode(&mut self, enabled: bool) {
        self.mode_enabled = enabled;
    }

    pub(crate) fn open_gesture(&mut self, gesture: Gesture) {
        self.gesture = Some(gesture);
    }

    pub(crate) const fn gesture_mut(&mut self) -> Option<&mut Gesture> {
        self.gesture.as_mut()
    }

    pub(crate) const fn take_gesture(&mut self) -> Option<Gesture> {
        self.gesture.take()
    }

    /// Adds a key, fixing the restriction from the first determinate status.
    ///
    /// Not-set cells selected earlier do not count, so a determinate cell
    /// joining a non-empty selection of not-set cells still fixes it.
    pub(crate) fn insert(&mut self, key: SlotKey, status: SlotStatus) {
        self.selected.insert(key);
        if self.restriction.is_none() {
            self.restriction = SelectionRestriction::from_status(status);
        }
    }

    /// Removes a key, dropping the restriction once nothing is left.
    pub(crate) fn remove(&mut self, key: &SlotKey) -> bool {
        let removed: bool = self.selected.remove(key);
        if self.selected.is_empty() {
            self.restriction = None;
        }
        removed
    }

    /// Keeps only the keys matching `keep`, returning how many were dropped.
    pub(crate) fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&SlotKey) -> bool,
    {
        let before: usize = self.selected.len();
        self.selected.retain(keep);
        if self.selected.is_empty() {
            self.restriction = None;
        }
        before - self.selected.len()
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected.clear();
        self.restriction = None;
    }
}

/// The result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the command.
    pub new_state: State,
    /// What the command did.
    pub effect: Effect,
}

/// What applying a command did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Selection mode was turned on.
    ModeEntered,
    /// Selection mode was turned off and the selection dropped.
    ModeExited {
        /// How many keys were dropped.
        dropped: usize,
    },
    /// The selection was emptied.
    Cleared {
        /// How many keys were dropped.
        dropped: usize,
    },
    /// A key joined the selection.
    Added(SlotKey),
    /// A key left the selection through a click.
    Removed(SlotKey),
    /// A gesture began without adding anything.
    GestureStarted,
    /// A gesture passed over an already-selected cell.
    GestureExtended,
    /// A gesture ended without removing anything.
    GestureEnded,
    /// Stale keys were dropped after the grid was rebuilt.
    Reconciled {
        /// How many keys were dropped.
        dropped: usize,
    },
    /// The command had no effect.
    Ignored(IgnoreReason),
}

/// Why a command was ignored.
///
/// These are routine during drags over mixed cells, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Selection mode is off.
    SelectionModeOff,
    /// Selection mode is already on.
    SelectionModeOn,
    /// No gesture is open.
    NoGesture,
    /// The cell is not part of the grid.
    OutsideGrid,
    /// Holiday and booked cells can never be selected.
    NotEditable(SlotStatus),
    /// The cell's status contradicts the selection's restriction.
    RestrictionMismatch {
        /// The active restriction.
        restriction: SelectionRestriction,
        /// The cell's status.
        status: SlotStatus,
    },
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelectionModeOff => write!(f, "selection mode is off"),
            Self::SelectionModeOn => write!(f, "selection mode is already on"),
            Self::NoGesture => write!(f, "no gesture in progress"),
            Self::OutsideGrid => write!(f, "cell is outside the grid"),
            Self::NotEditable(status) => write!(f, "{status} cells cannot be selected"),
            Self::RestrictionMismatch {
                restriction,
                status,
            } => write!(
                f,
                "{status} cell does not match the {restriction} selection"
            ),
        }
    }
}
