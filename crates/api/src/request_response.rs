// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Requests exchanged with the availability service.

use coach_grid_domain::SlotCode;
use serde::{Deserialize, Serialize};

/// The availability a mutation sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityAction {
    /// Mark the slots available.
    Available,
    /// Mark the slots unavailable.
    Disable,
}

impl AvailabilityAction {
    /// Returns the action that sets `available`.
    #[must_use]
    pub const fn from_available(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Disable
        }
    }

    /// Returns the availability this action sets.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Converts this action to its wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Disable => "disable",
        }
    }
}

/// One cell a mutation applies to.
///
/// Cells without a slot are sent as creations, never under their
/// synthetic grid key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MutationTarget {
    /// An existing slot.
    Existing {
        /// The slot's code.
        code: SlotCode,
    },
    /// A slot to create for an unconfigured cell.
    Create {
        /// Civil date of the cell.
        date: String,
        /// The cell's `"HH:MM - HH:MM"` label.
        time_label: String,
    },
}

/// Request to set the availability of one or more slots.
///
/// The service applies every target or none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAvailabilityRequest {
    /// The coach whose slots change.
    pub coach_code: String,
    /// The cells to change.
    pub targets: Vec<MutationTarget>,
    /// The availability to set.
    pub action: AvailabilityAction,
    /// Optional free-text reason shown in the service's history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl SetAvailabilityRequest {
    /// Returns the codes of the existing slots this request targets.
    #[must_use]
    pub fn slot_codes(&self) -> Vec<&SlotCode> {
        self.targets
            .iter()
            .filter_map(|target| match target {
                MutationTarget::Existing { code } => Some(code),
                MutationTarget::Create { .. } => None,
            })
            .collect()
    }
}

/// Request to fetch a facility's availability for a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchAvailabilityRequest {
    /// The facility.
    pub facility_code: String,
    /// First civil date, inclusive.
    pub start_date: String,
    /// Last civil date, inclusive.
    pub end_date: String,
}
