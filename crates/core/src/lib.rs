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

//! The selection engine of the coach availability grid.
//!
//! Selection state has exactly one owner. Each pointer event is turned into
//! a [`Command`] and run through [`apply`], which returns the next state;
//! there is no second copy of the selection to keep in sync.

mod apply;
mod command;
mod lookup;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, can_select};
pub use command::Command;
pub use lookup::CellLookup;
pub use state::{
    Effect, Gesture, IgnoreReason, SelectionPhase, SelectionRestriction, State, TransitionResult,
};
