// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `default_filter` (see `GridConfig::log_filter`).
///
/// # Errors
///
/// Returns `ApiError::InvalidConfig` if `default_filter` cannot be parsed,
/// or `ApiError::Internal` if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), ApiError> {
    let filter: EnvFilter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| ApiError::InvalidConfig {
            field: String::from("log_filter"),
            message: e.to_string(),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to install tracing subscriber: {e}"),
        })
}
