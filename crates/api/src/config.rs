// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grid configuration.

use crate::error::ApiError;
use coach_grid_domain::CivilCalendar;
use serde::{Deserialize, Serialize};

/// Configuration for one grid session.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// The facility whose coaches are shown.
    pub facility_code: String,
    /// IANA name of the civil zone all dates are expressed in.
    pub timezone: String,
    /// Number of days shown at once; navigation moves by this many days.
    pub window_days: u32,
    /// Which of the fetched coaches the grid renders.
    pub coach_index: usize,
    /// Whether cells without a slot may be committed as slot creations.
    pub create_missing_slots: bool,
    /// Fallback tracing filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            facility_code: String::new(),
            timezone: String::from("America/Chicago"),
            window_days: 7,
            coach_index: 0,
            create_missing_slots: false,
            log_filter: String::from("info"),
        }
    }
}

impl GridConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if the JSON is malformed or a value
    /// fails validation.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ApiError::InvalidConfig {
            field: String::from("json"),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if the timezone is unknown or the
    /// window is empty.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.window_days == 0 {
            return Err(ApiError::InvalidConfig {
                field: String::from("window_days"),
                message: String::from("Must be at least 1"),
            });
        }
        self.calendar()?;
        Ok(())
    }

    /// Returns the calendar for the configured zone.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if the timezone is unknown.
    pub fn calendar(&self) -> Result<CivilCalendar, ApiError> {
        Ok(CivilCalendar::from_name(&self.timezone)?)
    }
}
