// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// An operation succeeded.
    Success,
    /// An operation failed.
    Error,
}

/// A transient notification for the host UI to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Display text.
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub const fn success(message: String) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub const fn error(message: String) -> Self {
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }
}
