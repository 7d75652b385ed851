// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the session and mutation layer.

use coach_grid_domain::{CellRef, DomainError, SlotStatus};
use thiserror::Error;

/// Failures reported by the availability service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// The service could not be reached.
    #[error("Availability service unreachable: {0}")]
    Network(String),

    /// The service refused the request on business grounds.
    #[error("Availability service rejected the request: {0}")]
    Rejected(String),

    /// The service answered with something that could not be understood.
    #[error("Availability service returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Session-level errors.
///
/// These are distinct from domain errors and represent what the host UI
/// has to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Configuration could not be parsed or failed validation.
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A human-readable description of the problem.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A mutation is already waiting for the service.
    CommitInFlight,
    /// Batch commits require selection mode.
    SelectionModeOff,
    /// Batch commits require at least one selected cell.
    EmptySelection,
    /// The configured coach is not part of the fetched data.
    CoachNotFound {
        /// The configured coach index.
        index: usize,
        /// How many coaches were fetched.
        available: usize,
    },
    /// The cell can never be edited.
    NotCommittable {
        /// The cell.
        cell: CellRef,
        /// Its resolved status.
        status: SlotStatus,
    },
    /// Cells without a configured slot cannot be committed with slot
    /// creation disabled.
    UncommittableCells {
        /// How many such cells were part of the commit.
        count: usize,
    },
    /// The service rejected the mutation; nothing was applied locally.
    MutationRejected(RemoteError),
    /// Availability could not be fetched.
    FetchFailed(RemoteError),
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { field, message } => {
                write!(f, "Invalid configuration for '{field}': {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::CommitInFlight => write!(f, "Another availability update is still in progress"),
            Self::SelectionModeOff => write!(f, "Selection mode is off"),
            Self::EmptySelection => write!(f, "No slots are selected"),
            Self::CoachNotFound { index, available } => {
                write!(
                    f,
                    "Coach {index} not found: {available} coach(es) were loaded"
                )
            }
            Self::NotCommittable { cell, status } => {
                write!(
                    f,
                    "Cell ({}, {}) is {status} and cannot be changed",
                    cell.day_index, cell.slot_index
                )
            }
            Self::UncommittableCells { count } => {
                write!(
                    f,
                    "{count} selected cell(s) have no configured slot and slot creation is disabled"
                )
            }
            Self::MutationRejected(err) => write!(f, "Failed to update availability: {err}"),
            Self::FetchFailed(err) => write!(f, "Failed to load availability: {err}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTimezone(tz) => ApiError::InvalidConfig {
            field: String::from("timezone"),
            message: format!("Unknown timezone '{tz}'"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{date_string}' is not a YYYY-MM-DD date: {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date out of range while {operation}"),
        },
        DomainError::InvalidTimestamp(value) => ApiError::InvalidInput {
            field: String::from("timestamp"),
            message: format!("'{value}' has no HH:MM time"),
        },
    }
}
