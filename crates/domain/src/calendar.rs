// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Civil calendar math anchored to a fixed timezone.
//!
//! The scheduling grid is expressed in the facility's civil zone
//! (America/Chicago unless configured otherwise), never in the host's
//! local zone.
//!
//! ## Trust boundary
//!
//! - Date strings received from the availability service are already
//!   civil dates in the target zone. They are split into components
//!   as-is; no timezone conversion is applied to them.
//! - Only "today" and day arithmetic consult the zone's offset rules.
//!
//! If the upstream contract ever changes to emit UTC dates, this module
//! is where the conversion must be added.
//!
//! ## DST safety
//!
//! Any instant derived from a civil date is anchored at local noon.
//! Noon is never inside a DST gap or overlap, and shifting it by whole
//! days can only drift by the size of one DST jump, so re-reading the
//! civil date in the zone always lands on the intended day.

use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// The zone every facility date is expressed in unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Chicago;

/// Format of civil date strings exchanged with the availability service.
const CIVIL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Hour of the local day used to anchor civil dates as instants.
const ANCHOR_HOUR: u32 = 12;

/// Calendar operations in a single civil timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilCalendar {
    tz: Tz,
}

impl Default for CivilCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl CivilCalendar {
    /// Creates a calendar for the given zone.
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Creates a calendar from an IANA zone name such as `America/Chicago`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimezone` if the name is unknown.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        let tz: Tz = name
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))?;
        Ok(Self::new(tz))
    }

    /// Returns the zone this calendar is anchored to.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Returns today's civil date as observed in the zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today_at(Utc::now())
    }

    /// Returns the civil date in the zone at the given instant.
    #[must_use]
    pub fn today_at(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Splits a `YYYY-MM-DD` string into a civil date.
    ///
    /// No timezone conversion is applied: the string already names the
    /// civil date in the target zone.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the string is not a valid
    /// calendar date.
    pub fn parse_civil_date(value: &str) -> Result<NaiveDate, DomainError> {
        NaiveDate::parse_from_str(value.trim(), CIVIL_DATE_FORMAT).map_err(|e| {
            DomainError::DateParseError {
                date_string: value.to_string(),
                error: e.to_string(),
            }
        })
    }

    /// Formats a civil date as `YYYY-MM-DD`.
    #[must_use]
    pub fn format_civil_date(date: NaiveDate) -> String {
        date.format(CIVIL_DATE_FORMAT).to_string()
    }

    /// Returns the uppercase abbreviated weekday (`"MON"`) of a civil date.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be anchored in the zone.
    pub fn weekday_label(&self, date: NaiveDate) -> Result<String, DomainError> {
        let anchored: DateTime<Tz> = self.anchor(date)?;
        Ok(anchored.format("%a").to_string().to_uppercase())
    }

    /// Shifts a `YYYY-MM-DD` string by `days` civil days.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is malformed or the result leaves the
    /// representable range.
    pub fn add_civil_days(&self, value: &str, days: i64) -> Result<String, DomainError> {
        let date: NaiveDate = Self::parse_civil_date(value)?;
        let shifted: NaiveDate = self.shift(date, days)?;
        Ok(Self::format_civil_date(shifted))
    }

    /// Returns `len` consecutive civil dates starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is malformed or the window overflows.
    pub fn date_window(&self, start: &str, len: u32) -> Result<Vec<String>, DomainError> {
        let first: NaiveDate = Self::parse_civil_date(start)?;
        (0..i64::from(len))
            .map(|offset| self.shift(first, offset).map(Self::format_civil_date))
            .collect()
    }

    /// Shifts a civil date by whole days through its noon anchor.
    fn shift(&self, date: NaiveDate, days: i64) -> Result<NaiveDate, DomainError> {
        let overflow = || DomainError::DateArithmeticOverflow {
            operation: format!("adding {days} days to {date}"),
        };
        let delta: TimeDelta = TimeDelta::try_days(days).ok_or_else(overflow)?;
        let anchored: DateTime<Tz> = self.anchor(date)?;
        let shifted: DateTime<Tz> = anchored.checked_add_signed(delta).ok_or_else(overflow)?;
        Ok(shifted.date_naive())
    }

    /// Anchors a civil date at local noon in the zone.
    fn anchor(&self, date: NaiveDate) -> Result<DateTime<Tz>, DomainError> {
        date.and_hms_opt(ANCHOR_HOUR, 0, 0)
            .and_then(|noon| self.tz.from_local_datetime(&noon).earliest())
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("anchoring {date} in {}", self.tz.name()),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_local_noon() {
        let calendar: CivilCalendar = CivilCalendar::default();
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        let anchored: DateTime<Tz> = calendar.anchor(date).unwrap();
        assert_eq!(anchored.date_naive(), date);
        assert_eq!(anchored.format("%H:%M").to_string(), "12:00");
    }

    #[test]
    fn test_shift_zero_days_is_identity() {
        let calendar: CivilCalendar = CivilCalendar::default();
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        assert_eq!(calendar.shift(date, 0).unwrap(), date);
    }

    #[test]
    fn test_shift_overflow_is_reported() {
        let calendar: CivilCalendar = CivilCalendar::default();
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let result = calendar.shift(date, i64::MAX);
        assert!(matches!(
            result,
            Err(DomainError::DateArithmeticOverflow { .. })
        ));
    }
}
