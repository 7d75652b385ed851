// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability mutations.
//!
//! A commit runs in two phases. `begin_*` validates the commit, builds the
//! request and marks a commit in flight; the host sends the request and
//! hands the outcome to [`GridSession::finish_commit`], or to
//! [`GridSession::abandon_commit`] if it gives up on the request. Selection
//! keeps working between the phases.
//!
//! ## Invariants
//!
//! - At most one commit is in flight per session
//! - Overrides are written only after the service confirms the mutation
//! - A rejected mutation leaves selection, restriction and mode untouched
//! - Cells without a slot are never sent under their grid key

use crate::error::{ApiError, RemoteError};
use crate::notice::Notice;
use crate::remote::AvailabilityRemote;
use crate::request_response::{
    AvailabilityAction, FetchAvailabilityRequest, MutationTarget, SetAvailabilityRequest,
};
use crate::session::GridSession;
use coach_grid::Command;
use coach_grid_domain::{CellRef, CoachAvailability, SlotKey, SlotStatus};
use tracing::{info, warn};

/// Which interaction started a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// A single cell outside selection mode.
    Single {
        /// The cell.
        cell: CellRef,
    },
    /// The whole selection.
    Batch,
}

/// A commit waiting for the service's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending commit must be finished to release the session"]
pub struct PendingCommit {
    kind: CommitKind,
    keys: Vec<SlotKey>,
    request: SetAvailabilityRequest,
}

impl PendingCommit {
    /// Returns what started the commit.
    #[must_use]
    pub const fn kind(&self) -> CommitKind {
        self.kind
    }

    /// Returns the grid keys the commit covers.
    #[must_use]
    pub fn keys(&self) -> &[SlotKey] {
        &self.keys
    }

    /// Returns the request to send.
    #[must_use]
    pub const fn request(&self) -> &SetAvailabilityRequest {
        &self.request
    }

    /// Returns the availability the commit sets.
    #[must_use]
    pub const fn available(&self) -> bool {
        self.request.action.is_available()
    }
}

impl GridSession {
    /// Starts a commit for one cell.
    ///
    /// # Errors
    ///
    /// Returns an error if a commit is already in flight, no coach is
    /// loaded, the cell is outside the grid or not editable, or the cell has
    /// no slot and slot creation is disabled.
    pub fn begin_single_commit(
        &mut self,
        cell: CellRef,
        available: bool,
    ) -> Result<PendingCommit, ApiError> {
        self.ensure_idle()?;
        let coach_code: String = self.current_coach()?.coach_code.clone();

        let Some(key) = self.grid.key_at(cell) else {
            return Err(ApiError::InvalidInput {
                field: String::from("cell"),
                message: format!(
                    "Cell ({}, {}) is outside the grid",
                    cell.day_index, cell.slot_index
                ),
            });
        };
        let status: SlotStatus = self.status(cell);
        if !status.is_editable() {
            warn!(?cell, %status, "Refused single commit");
            return Err(ApiError::NotCommittable { cell, status });
        }
        let Some(target) = self.target_for(&key)? else {
            warn!(?cell, "Refused single commit for a cell without a slot");
            return Err(ApiError::UncommittableCells { count: 1 });
        };

        Ok(self.start(
            CommitKind::Single { cell },
            vec![key],
            SetAvailabilityRequest {
                coach_code,
                targets: vec![target],
                action: AvailabilityAction::from_available(available),
                reason: None,
            },
        ))
    }

    /// Starts a commit for the whole selection.
    ///
    /// # Errors
    ///
    /// Returns an error if a commit is already in flight, selection mode is
    /// off, nothing is selected, no coach is loaded, a selected cell is no
    /// longer editable, or selected cells have no slot and slot creation is
    /// disabled.
    pub fn begin_batch_commit(
        &mut self,
        available: bool,
        reason: Option<String>,
    ) -> Result<PendingCommit, ApiError> {
        self.ensure_idle()?;
        if !self.selection.is_selection_mode() {
            return Err(ApiError::SelectionModeOff);
        }
        if self.selection.selected().is_empty() {
            return Err(ApiError::EmptySelection);
        }
        let coach_code: String = self.current_coach()?.coach_code.clone();

        let keys: Vec<SlotKey> = self.selection.selected().iter().cloned().collect();
        let mut targets: Vec<MutationTarget> = Vec::with_capacity(keys.len());
        let mut uncommittable: usize = 0;
        for key in &keys {
            let Some(cell) = self.grid.cell_of(key) else {
                return Err(ApiError::Internal {
                    message: format!("Selected cell {key} is not part of the grid"),
                });
            };
            let status: SlotStatus = self.status(cell);
            if !status.is_editable() {
                warn!(?cell, %status, "Refused batch commit");
                return Err(ApiError::NotCommittable { cell, status });
            }
            match self.target_for(key)? {
                Some(target) => targets.push(target),
                None => uncommittable += 1,
            }
        }
        if uncommittable > 0 {
            warn!(
                count = uncommittable,
                "Refused batch commit with cells that have no slot"
            );
            return Err(ApiError::UncommittableCells {
                count: uncommittable,
            });
        }

        Ok(self.start(
            CommitKind::Batch,
            keys,
            SetAvailabilityRequest {
                coach_code,
                targets,
                action: AvailabilityAction::from_available(available),
                reason,
            },
        ))
    }

    /// Applies the service's answer to a pending commit.
    ///
    /// On success every committed slot gets an override and a batch commit
    /// leaves selection mode. On failure nothing but the notice queue
    /// changes. The in-flight flag is released either way.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MutationRejected` if the service refused or could
    /// not be reached.
    pub fn finish_commit(
        &mut self,
        pending: PendingCommit,
        outcome: Result<(), RemoteError>,
    ) -> Result<(), ApiError> {
        self.in_flight = false;
        let available: bool = pending.available();

        if let Err(err) = outcome {
            warn!(kind = ?pending.kind, error = %err, "Availability update rejected");
            let err: ApiError = ApiError::MutationRejected(err);
            self.push_notice(Notice::error(err.to_string()));
            return Err(err);
        }

        let count: usize = pending.keys.len();
        // Created slots have no code yet; they show once the grid is refetched.
        self.overrides.insert_all(
            pending
                .keys
                .into_iter()
                .filter(|key| key.code().is_some()),
            available,
        );
        if pending.kind == CommitKind::Batch {
            self.handle(Command::ExitSelectionMode);
        }

        info!(kind = ?pending.kind, count, available, "Availability updated");
        let state: &str = if available { "available" } else { "unavailable" };
        let message: String = match pending.kind {
            CommitKind::Single { .. } => format!("Slot marked {state}"),
            CommitKind::Batch => format!("{count} slot(s) marked {state}"),
        };
        self.push_notice(Notice::success(message));
        Ok(())
    }

    /// Releases a pending commit whose request never got an answer.
    ///
    /// Nothing is applied; the next fetch shows whatever the service did.
    pub fn abandon_commit(&mut self, pending: PendingCommit) {
        warn!(kind = ?pending.kind, "Availability update abandoned");
        self.in_flight = false;
    }

    /// Commits one cell and waits for the service.
    ///
    /// # Errors
    ///
    /// Returns the refusal from [`Self::begin_single_commit`] or the
    /// rejection from [`Self::finish_commit`].
    pub async fn commit_single<R>(
        &mut self,
        remote: &R,
        cell: CellRef,
        available: bool,
    ) -> Result<(), ApiError>
    where
        R: AvailabilityRemote + ?Sized,
    {
        let pending: PendingCommit = self.begin_single_commit(cell, available)?;
        InFlight::new(self).send(remote, pending).await
    }

    /// Commits the whole selection and waits for the service.
    ///
    /// # Errors
    ///
    /// Returns the refusal from [`Self::begin_batch_commit`] or the
    /// rejection from [`Self::finish_commit`].
    pub async fn commit_batch<R>(
        &mut self,
        remote: &R,
        available: bool,
        reason: Option<String>,
    ) -> Result<(), ApiError>
    where
        R: AvailabilityRemote + ?Sized,
    {
        let pending: PendingCommit = self.begin_batch_commit(available, reason)?;
        InFlight::new(self).send(remote, pending).await
    }

    /// Fetches the current range and loads it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::FetchFailed` if the service fails, or the error
    /// from [`GridSession::load`].
    pub async fn refresh<R>(&mut self, remote: &R) -> Result<(), ApiError>
    where
        R: AvailabilityRemote + ?Sized,
    {
        let request: FetchAvailabilityRequest = self.fetch_request();
        match remote.fetch_availability(&request).await {
            Ok(coaches) => self.load(coaches),
            Err(err) => {
                warn!(error = %err, "Availability fetch failed");
                let err: ApiError = ApiError::FetchFailed(err);
                self.push_notice(Notice::error(err.to_string()));
                Err(err)
            }
        }
    }

    fn ensure_idle(&self) -> Result<(), ApiError> {
        if self.in_flight {
            warn!("Refused commit while another is in flight");
            return Err(ApiError::CommitInFlight);
        }
        Ok(())
    }

    fn current_coach(&self) -> Result<&CoachAvailability, ApiError> {
        self.coach().ok_or(ApiError::CoachNotFound {
            index: self.config.coach_index,
            available: self.coaches.len(),
        })
    }

    /// Resolves a grid key into what is sent to the service.
    ///
    /// Returns `None` for a cell without a slot when slot creation is off.
    fn target_for(&self, key: &SlotKey) -> Result<Option<MutationTarget>, ApiError> {
        match key {
            SlotKey::Code(code) => Ok(Some(MutationTarget::Existing { code: code.clone() })),
            SlotKey::Temp { .. } if !self.config.create_missing_slots => Ok(None),
            SlotKey::Temp {
                day_index,
                slot_index,
            } => {
                let cell: CellRef = CellRef::new(*day_index, *slot_index);
                match (self.grid.date(cell), self.grid.label(cell)) {
                    (Some(date), Some(label)) => Ok(Some(MutationTarget::Create {
                        date: date.date.clone(),
                        time_label: label.to_string(),
                    })),
                    _ => Err(ApiError::Internal {
                        message: format!("Selected cell {key} is not part of the grid"),
                    }),
                }
            }
        }
    }

    fn start(
        &mut self,
        kind: CommitKind,
        keys: Vec<SlotKey>,
        request: SetAvailabilityRequest,
    ) -> PendingCommit {
        self.in_flight = true;
        info!(
            ?kind,
            count = request.targets.len(),
            action = request.action.as_str(),
            "Availability update started"
        );
        PendingCommit {
            kind,
            keys,
            request,
        }
    }
}

/// Holds the session while a request is out.
///
/// Dropping it before the answer arrives (a timeout, a `select!`, a
/// cancelled task) releases the in-flight flag.
struct InFlight<'a> {
    session: &'a mut GridSession,
    answered: bool,
}

impl<'a> InFlight<'a> {
    const fn new(session: &'a mut GridSession) -> Self {
        Self {
            session,
            answered: false,
        }
    }

    async fn send<R>(mut self, remote: &R, pending: PendingCommit) -> Result<(), ApiError>
    where
        R: AvailabilityRemote + ?Sized,
    {
        let outcome: Result<(), RemoteError> = remote.set_availability(pending.request()).await;
        self.answered = true;
        self.session.finish_commit(pending, outcome)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.answered {
            warn!("Availability update cancelled before the service answered");
            self.session.in_flight = false;
        }
    }
}
