// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability data as delivered by the availability service.

use serde::{Deserialize, Serialize};

/// The identifier of a persisted slot.
///
/// Stable across refetches for the same calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotCode(String);

impl SlotCode {
    /// Creates a new slot code.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.to_string())
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SlotCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single schedulable time range on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// The slot's persisted identifier.
    pub code: SlotCode,
    /// Start timestamp text, wall-clock correct in the facility zone.
    pub start_time: String,
    /// End timestamp text, wall-clock correct in the facility zone.
    pub end_time: String,
    /// Server-declared availability baseline.
    pub is_available: bool,
    /// Booking type, present when something is booked into this slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_type: Option<String>,
    /// Booking code, present when something is booked into this slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_code: Option<String>,
}

impl Slot {
    /// Creates an unbooked slot.
    #[must_use]
    pub fn new(code: &str, start_time: &str, end_time: &str, is_available: bool) -> Self {
        Self {
            code: SlotCode::new(code),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            is_available,
            booking_type: None,
            booking_code: None,
        }
    }

    /// Attaches a booking to this slot.
    #[must_use]
    pub fn with_booking(mut self, booking_type: &str, booking_code: &str) -> Self {
        self.booking_type = Some(booking_type.to_string());
        self.booking_code = Some(booking_code.to_string());
        self
    }

    /// Returns whether the slot is booked.
    ///
    /// Both the booking type and the booking code must be present.
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        self.booking_type.is_some() && self.booking_code.is_some()
    }
}

/// One day of a coach's availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDay {
    /// Civil date (`YYYY-MM-DD`) in the facility zone.
    pub date: String,
    /// Whether the facility is closed for a holiday on this day.
    #[serde(default)]
    pub is_holiday: bool,
    /// The configured slots, in service order.
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl AvailabilityDay {
    /// Creates a new availability day.
    #[must_use]
    pub fn new(date: &str, is_holiday: bool, slots: Vec<Slot>) -> Self {
        Self {
            date: date.to_string(),
            is_holiday,
            slots,
        }
    }
}

/// All fetched availability days for one coach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachAvailability {
    /// The coach's identifier.
    pub coach_code: String,
    /// The coach's display name.
    #[serde(default)]
    pub coach_name: String,
    /// The coach's days, in date order.
    #[serde(default)]
    pub days: Vec<AvailabilityDay>,
}

/// The key the grid uses for one cell.
///
/// A cell either maps to a persisted slot or has no slot configured yet.
/// Cells without a slot get a synthetic key that is only meaningful for
/// the grid it was derived from; it is never a slot code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotKey {
    /// The cell holds a persisted slot.
    Code(SlotCode),
    /// The cell has no slot in the current grid.
    Temp {
        /// Index of the displayed date.
        day_index: usize,
        /// Index of the canonical time-slot label.
        slot_index: usize,
    },
}

impl SlotKey {
    /// Returns the slot code if this key refers to a persisted slot.
    #[must_use]
    pub const fn code(&self) -> Option<&SlotCode> {
        match self {
            Self::Code(code) => Some(code),
            Self::Temp { .. } => None,
        }
    }

    /// Returns whether this is a synthetic key.
    #[must_use]
    pub const fn is_temp(&self) -> bool {
        matches!(self, Self::Temp { .. })
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Temp {
                day_index,
                slot_index,
            } => write!(f, "temp-{day_index}-{slot_index}"),
        }
    }
}
