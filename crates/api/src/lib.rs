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
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Session and mutation layer of the coach availability grid.
//!
//! [`GridSession`] owns the grid, the selection and the optimistic
//! overrides. Mutations go through [`AvailabilityRemote`] and only touch
//! local state once the service confirms them.

mod config;
mod coordinator;
mod error;
mod logging;
mod navigation;
mod notice;
mod remote;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use config::GridConfig;
pub use coordinator::{CommitKind, PendingCommit};
pub use error::{ApiError, RemoteError, translate_domain_error};
pub use logging::init_tracing;
pub use navigation::{DateRangeRequest, Navigation, navigate};
pub use notice::{Notice, NoticeLevel};
pub use remote::AvailabilityRemote;
pub use request_response::{
    AvailabilityAction, FetchAvailabilityRequest, MutationTarget, SetAvailabilityRequest,
};
pub use session::GridSession;
