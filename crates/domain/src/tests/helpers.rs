// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AvailabilityDay, CivilCalendar, DisplayGrid, Slot};
use chrono::NaiveDate;

pub fn create_test_slot(code: &str, date: &str, start: &str, end: &str, available: bool) -> Slot {
    Slot::new(
        code,
        &format!("{date}T{start}:00"),
        &format!("{date}T{end}:00"),
        available,
    )
}

/// Four days starting Monday 2026-03-02.
///
/// | day | 09:00 - 10:00      | 10:00 - 11:00 | 11:00 - 12:00 |
/// |-----|--------------------|---------------|---------------|
/// | 0   | A available        | B unavailable | -             |
/// | 1   | C booked           | -             | -             |
/// | 2   | D (holiday)        | -             | -             |
/// | 3   | -                  | -             | E unavailable |
pub fn create_test_days() -> Vec<AvailabilityDay> {
    vec![
        AvailabilityDay::new(
            "2026-03-02",
            false,
            vec![
                create_test_slot("A", "2026-03-02", "09:00", "10:00", true),
                create_test_slot("B", "2026-03-02", "10:00", "11:00", false),
            ],
        ),
        AvailabilityDay::new(
            "2026-03-03",
            false,
            vec![
                create_test_slot("C", "2026-03-03", "09:00", "10:00", true)
                    .with_booking("induction", "BK-1"),
            ],
        ),
        AvailabilityDay::new(
            "2026-03-04",
            true,
            vec![create_test_slot("D", "2026-03-04", "09:00", "10:00", true)],
        ),
        AvailabilityDay::new(
            "2026-03-05",
            false,
            vec![create_test_slot("E", "2026-03-05", "11:00", "12:00", false)],
        ),
    ]
}

pub fn create_test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 3).unwrap()
}

pub fn create_test_grid() -> DisplayGrid {
    DisplayGrid::build(
        &create_test_days(),
        &CivilCalendar::default(),
        create_test_today(),
    )
}
