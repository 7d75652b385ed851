// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-range navigation.
//!
//! The grid shows a fixed-length window of civil days. Moving the window
//! only computes the new range; fetching it is the host's job.

use chrono::NaiveDate;
use coach_grid_domain::{CivilCalendar, DomainError};
use serde::{Deserialize, Serialize};

/// Where to move the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// One window earlier.
    Previous,
    /// One window later.
    Next,
    /// Start the window on today.
    Today,
}

/// A request to show the civil days `start_date..=end_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeRequest {
    /// First civil date, inclusive.
    pub start_date: String,
    /// Last civil date, inclusive.
    pub end_date: String,
}

impl DateRangeRequest {
    /// Builds the range of `window_days` days starting at `start_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_date` is malformed or the range overflows.
    pub fn for_window(
        calendar: &CivilCalendar,
        start_date: &str,
        window_days: u32,
    ) -> Result<Self, DomainError> {
        let last_offset: i64 = i64::from(window_days.max(1)) - 1;
        let end_date: String = calendar.add_civil_days(start_date, last_offset)?;
        Ok(Self {
            start_date: CivilCalendar::format_civil_date(CivilCalendar::parse_civil_date(
                start_date,
            )?),
            end_date,
        })
    }

    /// Builds the range of `window_days` days starting today.
    ///
    /// # Errors
    ///
    /// Returns an error if the range overflows.
    pub fn starting_on(
        calendar: &CivilCalendar,
        today: NaiveDate,
        window_days: u32,
    ) -> Result<Self, DomainError> {
        Self::for_window(
            calendar,
            &CivilCalendar::format_civil_date(today),
            window_days,
        )
    }

    /// Returns every civil date in the range.
    ///
    /// # Errors
    ///
    /// Returns an error if the range's dates are malformed.
    pub fn dates(&self, calendar: &CivilCalendar) -> Result<Vec<String>, DomainError> {
        let start: NaiveDate = CivilCalendar::parse_civil_date(&self.start_date)?;
        let end: NaiveDate = CivilCalendar::parse_civil_date(&self.end_date)?;
        let len: u32 = u32::try_from((end - start).num_days() + 1).unwrap_or(0);
        calendar.date_window(&self.start_date, len)
    }
}

/// Computes the range the grid should show after a navigation step.
///
/// # Arguments
///
/// * `calendar` - The facility calendar
/// * `current` - The range currently shown
/// * `window_days` - Window length in days
/// * `navigation` - The requested move
/// * `today` - Today's civil date in the facility zone
///
/// # Errors
///
/// Returns an error if the current range is malformed or the move
/// overflows.
pub fn navigate(
    calendar: &CivilCalendar,
    current: &DateRangeRequest,
    window_days: u32,
    navigation: Navigation,
    today: NaiveDate,
) -> Result<DateRangeRequest, DomainError> {
    let step: i64 = i64::from(window_days.max(1));
    let start_date: String = match navigation {
        Navigation::Previous => calendar.add_civil_days(&current.start_date, -step)?,
        Navigation::Next => calendar.add_civil_days(&current.start_date, step)?,
        Navigation::Today => {
            return DateRangeRequest::starting_on(calendar, today, window_days);
        }
    };
    DateRangeRequest::for_window(calendar, &start_date, window_days)
}
