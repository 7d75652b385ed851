// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AvailabilityRemote, FetchAvailabilityRequest, GridConfig, GridSession, RemoteError,
    SetAvailabilityRequest,
};
use chrono::NaiveDate;
use coach_grid_domain::{AvailabilityDay, CellRef, CoachAvailability, Slot, SlotKey};
use std::future::Future;
use std::sync::Mutex;

/// Cells of the first coach's grid.
///
/// | day        | 09:00 - 10:00 | 10:00 - 11:00 | 11:00 - 12:00 |
/// |------------|---------------|---------------|---------------|
/// | 2026-03-02 | A available   | B available   | C unavailable |
/// | 2026-03-03 | D unavailable | E booked      | not set       |
/// | 2026-03-04 | F (holiday)   | (holiday)     | (holiday)     |
pub const A: CellRef = CellRef::new(0, 0);
pub const B: CellRef = CellRef::new(0, 1);
pub const C: CellRef = CellRef::new(0, 2);
pub const D: CellRef = CellRef::new(1, 0);
pub const E: CellRef = CellRef::new(1, 1);
pub const NOT_SET: CellRef = CellRef::new(1, 2);
pub const HOLIDAY: CellRef = CellRef::new(2, 0);
pub const OUTSIDE: CellRef = CellRef::new(9, 0);

pub const START_DATE: &str = "2026-03-02";

pub fn create_test_slot(code: &str, date: &str, start: &str, end: &str, available: bool) -> Slot {
    Slot::new(
        code,
        &format!("{date}T{start}:00"),
        &format!("{date}T{end}:00"),
        available,
    )
}

pub fn create_test_coach() -> CoachAvailability {
    CoachAvailability {
        coach_code: String::from("COACH1"),
        coach_name: String::from("Pat Doe"),
        days: vec![
            AvailabilityDay::new(
                "2026-03-02",
                false,
                vec![
                    create_test_slot("A", "2026-03-02", "09:00", "10:00", true),
                    create_test_slot("B", "2026-03-02", "10:00", "11:00", true),
                    create_test_slot("C", "2026-03-02", "11:00", "12:00", false),
                ],
            ),
            AvailabilityDay::new(
                "2026-03-03",
                false,
                vec![
                    create_test_slot("D", "2026-03-03", "09:00", "10:00", false),
                    create_test_slot("E", "2026-03-03", "10:00", "11:00", true)
                        .with_booking("lesson", "BK-1"),
                ],
            ),
            AvailabilityDay::new(
                "2026-03-04",
                true,
                vec![create_test_slot("F", "2026-03-04", "09:00", "10:00", true)],
            ),
        ],
    }
}

pub fn create_second_coach() -> CoachAvailability {
    CoachAvailability {
        coach_code: String::from("COACH2"),
        coach_name: String::from("Sam Roe"),
        days: vec![AvailabilityDay::new(
            "2026-03-02",
            false,
            vec![create_test_slot("Z", "2026-03-02", "14:00", "15:00", true)],
        )],
    }
}

pub fn create_test_coaches() -> Vec<CoachAvailability> {
    vec![create_test_coach(), create_second_coach()]
}

pub fn create_test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()
}

pub fn create_test_config() -> GridConfig {
    GridConfig {
        facility_code: String::from("FAC1"),
        ..GridConfig::default()
    }
}

/// A session over the first coach with nothing selected.
pub fn create_loaded_session(config: GridConfig) -> GridSession {
    let mut session: GridSession = GridSession::with_start_date(config, START_DATE).unwrap();
    session
        .load_at(create_test_coaches(), create_test_today())
        .unwrap();
    session
}

/// A loaded session in selection mode with `cells` clicked in order.
pub fn create_selecting_session(config: GridConfig, cells: &[CellRef]) -> GridSession {
    let mut session: GridSession = create_loaded_session(config);
    session.toggle_selection_mode();
    for cell in cells {
        click(&mut session, *cell);
    }
    session
}

pub fn click(session: &mut GridSession, cell: CellRef) {
    session.pointer_down(cell);
    session.pointer_up(cell);
}

pub fn code(value: &str) -> SlotKey {
    SlotKey::Code(coach_grid_domain::SlotCode::new(value))
}

/// In-memory availability service.
#[derive(Debug, Default)]
pub struct FakeRemote {
    coaches: Vec<CoachAvailability>,
    failure: Mutex<Option<RemoteError>>,
    mutations: Mutex<Vec<SetAvailabilityRequest>>,
    fetches: Mutex<Vec<FetchAvailabilityRequest>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::with_coaches(create_test_coaches())
    }

    pub fn with_coaches(coaches: Vec<CoachAvailability>) -> Self {
        Self {
            coaches,
            ..Self::default()
        }
    }

    pub fn failing(error: RemoteError) -> Self {
        let remote: Self = Self::new();
        remote.fail_with(Some(error));
        remote
    }

    pub fn fail_with(&self, error: Option<RemoteError>) {
        *self.failure.lock().unwrap() = error;
    }

    pub fn mutations(&self) -> Vec<SetAvailabilityRequest> {
        self.mutations.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> Vec<FetchAvailabilityRequest> {
        self.fetches.lock().unwrap().clone()
    }

    fn outcome(&self) -> Result<(), RemoteError> {
        self.failure.lock().unwrap().clone().map_or(Ok(()), Err)
    }
}

impl AvailabilityRemote for FakeRemote {
    fn fetch_availability(
        &self,
        request: &FetchAvailabilityRequest,
    ) -> impl Future<Output = Result<Vec<CoachAvailability>, RemoteError>> + Send {
        self.fetches.lock().unwrap().push(request.clone());
        let result: Result<Vec<CoachAvailability>, RemoteError> =
            self.outcome().map(|()| self.coaches.clone());
        std::future::ready(result)
    }

    fn set_availability(
        &self,
        request: &SetAvailabilityRequest,
    ) -> impl Future<Output = Result<(), RemoteError>> + Send {
        self.mutations.lock().unwrap().push(request.clone());
        std::future::ready(self.outcome())
    }
}

/// A service that never answers.
#[derive(Debug, Default)]
pub struct StalledRemote;

impl AvailabilityRemote for StalledRemote {
    fn fetch_availability(
        &self,
        _request: &FetchAvailabilityRequest,
    ) -> impl Future<Output = Result<Vec<CoachAvailability>, RemoteError>> + Send {
        std::future::pending()
    }

    fn set_availability(
        &self,
        _request: &SetAvailabilityRequest,
    ) -> impl Future<Output = Result<(), RemoteError>> + Send {
        std::future::pending()
    }
}
