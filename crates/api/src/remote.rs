// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability service as seen by the grid.

use crate::error::RemoteError;
use crate::request_response::{FetchAvailabilityRequest, SetAvailabilityRequest};
use coach_grid_domain::CoachAvailability;
use std::future::Future;

/// The remote store that owns availability data.
///
/// Transport, retries and pagination belong to the implementation.
pub trait AvailabilityRemote {
    /// Fetches every coach's availability for a date range.
    fn fetch_availability(
        &self,
        request: &FetchAvailabilityRequest,
    ) -> impl Future<Output = Result<Vec<CoachAvailability>, RemoteError>> + Send;

    /// Sets the availability of every target, atomically.
    fn set_availability(
        &self,
        request: &SetAvailabilityRequest,
    ) -> impl Future<Output = Result<(), RemoteError>> + Send;
}
