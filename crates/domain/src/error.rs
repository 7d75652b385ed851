// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while deriving calendar and grid data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configured timezone name is not a known IANA zone.
    InvalidTimezone(String),
    /// Failed to parse a civil date string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A slot timestamp does not carry a readable `HH:MM` wall-clock time.
    InvalidTimestamp(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidTimestamp(value) => write!(f, "Invalid slot timestamp: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
