// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The grid session.
//!
//! A session owns everything the grid shows: the fetched coaches, the
//! derived display grid, optimistic overrides, the selection and the
//! in-flight commit flag. Pointer handlers run the selection reducer
//! synchronously and replace the state in place.

use crate::config::GridConfig;
use crate::error::ApiError;
use crate::navigation::{DateRangeRequest, Navigation, navigate};
use crate::notice::Notice;
use crate::request_response::FetchAvailabilityRequest;
use chrono::NaiveDate;
use coach_grid::{Command, Effect, SelectionPhase, State, TransitionResult, apply};
use coach_grid_domain::{
    CellRef, CivilCalendar, CoachAvailability, DisplayGrid, OverrideMap, SlotKey, SlotStatus,
    StatusResolver, resolve_status,
};
use tracing::{debug, info};

/// The single owner of one grid's state.
#[derive(Debug, Clone)]
pub struct GridSession {
    pub(crate) config: GridConfig,
    pub(crate) calendar: CivilCalendar,
    pub(crate) coaches: Vec<CoachAvailability>,
    pub(crate) grid: DisplayGrid,
    pub(crate) overrides: OverrideMap,
    pub(crate) selection: State,
    pub(crate) in_flight: bool,
    pub(crate) range: DateRangeRequest,
    pub(crate) notices: Vec<Notice>,
}

impl GridSession {
    /// Creates a session whose window starts today.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GridConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let calendar: CivilCalendar = config.calendar()?;
        let today: String = CivilCalendar::format_civil_date(calendar.today());
        Self::with_start_date(config, &today)
    }

    /// Creates a session whose window starts on `start_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or `start_date` is
    /// not a `YYYY-MM-DD` date.
    pub fn with_start_date(config: GridConfig, start_date: &str) -> Result<Self, ApiError> {
        config.validate()?;
        let calendar: CivilCalendar = config.calendar()?;
        let range: DateRangeRequest =
            DateRangeRequest::for_window(&calendar, start_date, config.window_days)?;
        Ok(Self {
            config,
            calendar,
            coaches: Vec::new(),
            grid: DisplayGrid::default(),
            overrides: OverrideMap::new(),
            selection: State::new(),
            in_flight: false,
            range,
            notices: Vec::new(),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the facility calendar.
    #[must_use]
    pub const fn calendar(&self) -> &CivilCalendar {
        &self.calendar
    }

    /// Returns every fetched coach.
    #[must_use]
    pub fn coaches(&self) -> &[CoachAvailability] {
        &self.coaches
    }

    /// Returns the coach the grid renders, if loaded.
    #[must_use]
    pub fn coach(&self) -> Option<&CoachAvailability> {
        self.coaches.get(self.config.coach_index)
    }

    /// Returns the display grid.
    #[must_use]
    pub const fn grid(&self) -> &DisplayGrid {
        &self.grid
    }

    /// Returns the optimistic overrides.
    #[must_use]
    pub const fn overrides(&self) -> &OverrideMap {
        &self.overrides
    }

    /// Returns the selection state.
    #[must_use]
    pub const fn selection(&self) -> &State {
        &self.selection
    }

    /// Returns the selection phase.
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    /// Returns whether a mutation is waiting for the service.
    #[must_use]
    pub const fn is_commit_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns the date range currently shown.
    #[must_use]
    pub const fn range(&self) -> &DateRangeRequest {
        &self.range
    }

    /// Returns the fetch request for the current range.
    #[must_use]
    pub fn fetch_request(&self) -> FetchAvailabilityRequest {
        FetchAvailabilityRequest {
            facility_code: self.config.facility_code.clone(),
            start_date: self.range.start_date.clone(),
            end_date: self.range.end_date.clone(),
        }
    }

    /// Replaces the fetched data, using today's date in the facility zone.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::CoachNotFound` if coaches were fetched but the
    /// configured index is out of range.
    pub fn load(&mut self, coaches: Vec<CoachAvailability>) -> Result<(), ApiError> {
        let today: NaiveDate = self.calendar.today();
        self.load_at(coaches, today)
    }

    /// Replaces the fetched data and rebuilds the grid.
    ///
    /// Overrides are dropped since the fetched data already reflects every
    /// confirmed mutation. Selected keys that no longer exist are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::CoachNotFound` if coaches were fetched but the
    /// configured index is out of range. The session is left unchanged.
    pub fn load_at(
        &mut self,
        coaches: Vec<CoachAvailability>,
        today: NaiveDate,
    ) -> Result<(), ApiError> {
        let index: usize = self.config.coach_index;
        let grid: DisplayGrid = match coaches.get(index) {
            Some(coach) => DisplayGrid::build(&coach.days, &self.calendar, today),
            None if coaches.is_empty() => DisplayGrid::default(),
            None => {
                return Err(ApiError::CoachNotFound {
                    index,
                    available: coaches.len(),
                });
            }
        };

        info!(
            coaches = coaches.len(),
            dates = grid.dates().len(),
            time_slots = grid.time_slots().len(),
            "Loaded availability"
        );

        self.coaches = coaches;
        self.grid = grid;
        self.overrides.clear();
        self.handle(Command::Reconcile);
        Ok(())
    }

    /// Returns the resolved status of a cell.
    #[must_use]
    pub fn status(&self, cell: CellRef) -> SlotStatus {
        resolve_status(&self.grid, &self.overrides, cell)
    }

    /// Returns the grid key of a cell.
    #[must_use]
    pub fn key(&self, cell: CellRef) -> Option<SlotKey> {
        self.grid.key_at(cell)
    }

    /// Returns whether a cell is selected.
    #[must_use]
    pub fn is_selected(&self, cell: CellRef) -> bool {
        self.key(cell)
            .is_some_and(|key| self.selection.is_selected(&key))
    }

    /// Returns whether a cell may join the current selection.
    #[must_use]
    pub fn can_select(&self, cell: CellRef) -> bool {
        let resolver: StatusResolver<'_> = StatusResolver::new(&self.grid, &self.overrides);
        coach_grid::can_select(&self.selection, &resolver, cell)
    }

    /// Applies a selection command and returns its effect.
    pub fn handle(&mut self, command: Command) -> Effect {
        let resolver: StatusResolver<'_> = StatusResolver::new(&self.grid, &self.overrides);
        let result: TransitionResult = apply(&self.selection, &resolver, command);
        match &result.effect {
            Effect::Ignored(reason) => {
                debug!(?command, %reason, "Selection command ignored");
            }
            effect => {
                debug!(?command, ?effect, "Selection command applied");
            }
        }
        self.selection = result.new_state;
        result.effect
    }

    /// Turns selection mode on or off.
    pub fn toggle_selection_mode(&mut self) -> Effect {
        self.handle(Command::ToggleSelectionMode)
    }

    /// Empties the selection, keeping selection mode on.
    pub fn clear_selection(&mut self) -> Effect {
        self.handle(Command::ClearSelection)
    }

    /// Handles a pointer press on a cell.
    pub fn pointer_down(&mut self, cell: CellRef) -> Effect {
        self.handle(Command::PointerDown { cell })
    }

    /// Handles the pointer moving onto a cell.
    pub fn pointer_enter(&mut self, cell: CellRef) -> Effect {
        self.handle(Command::PointerEnter { cell })
    }

    /// Handles a pointer release over a cell.
    pub fn pointer_up(&mut self, cell: CellRef) -> Effect {
        self.handle(Command::PointerUp { cell })
    }

    /// Handles a pointer release outside the grid.
    pub fn document_pointer_up(&mut self) -> Effect {
        self.handle(Command::DocumentPointerUp)
    }

    /// Moves the window, using today's date in the facility zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the move leaves the representable date range.
    pub fn navigate(&mut self, navigation: Navigation) -> Result<DateRangeRequest, ApiError> {
        let today: NaiveDate = self.calendar.today();
        self.navigate_at(navigation, today)
    }

    /// Moves the window and returns the range to fetch next.
    ///
    /// # Errors
    ///
    /// Returns an error if the move leaves the representable date range.
    pub fn navigate_at(
        &mut self,
        navigation: Navigation,
        today: NaiveDate,
    ) -> Result<DateRangeRequest, ApiError> {
        let range: DateRangeRequest = navigate(
            &self.calendar,
            &self.range,
            self.config.window_days,
            navigation,
            today,
        )?;
        info!(
            ?navigation,
            start_date = %range.start_date,
            end_date = %range.end_date,
            "Moved availability window"
        );
        self.range = range.clone();
        Ok(range)
    }

    /// Returns pending notices, oldest first, and empties the queue.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub(crate) fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
