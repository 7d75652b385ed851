// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, State, TransitionResult, apply};
use chrono::NaiveDate;
use coach_grid_domain::{
    AvailabilityDay, CellRef, CivilCalendar, DisplayGrid, OverrideMap, Slot, SlotCode, SlotKey,
    StatusResolver,
};

/// Cells of the test grid.
///
/// | day | 09:00 - 10:00 | 10:00 - 11:00 | 11:00 - 12:00 |
/// |-----|---------------|---------------|---------------|
/// | 0   | A available   | B available   | C unavailable |
/// | 1   | D unavailable | E booked      | not set       |
/// | 2   | F (holiday)   | (holiday)     | (holiday)     |
pub const A: CellRef = CellRef::new(0, 0);
pub const B: CellRef = CellRef::new(0, 1);
pub const C: CellRef = CellRef::new(0, 2);
pub const D: CellRef = CellRef::new(1, 0);
pub const E: CellRef = CellRef::new(1, 1);
pub const NOT_SET: CellRef = CellRef::new(1, 2);
pub const HOLIDAY: CellRef = CellRef::new(2, 0);
pub const OUTSIDE: CellRef = CellRef::new(7, 0);

fn slot(code: &str, date: &str, start: &str, end: &str, available: bool) -> Slot {
    Slot::new(
        code,
        &format!("{date}T{start}:00"),
        &format!("{date}T{end}:00"),
        available,
    )
}

pub struct Fixture {
    pub days: Vec<AvailabilityDay>,
    pub grid: DisplayGrid,
    pub overrides: OverrideMap,
}

impl Fixture {
    pub fn new() -> Self {
        Self::from_days(vec![
            AvailabilityDay::new(
                "2026-03-02",
                false,
                vec![
                    slot("A", "2026-03-02", "09:00", "10:00", true),
                    slot("B", "2026-03-02", "10:00", "11:00", true),
                    slot("C", "2026-03-02", "11:00", "12:00", false),
                ],
            ),
            AvailabilityDay::new(
                "2026-03-03",
                false,
                vec![
                    slot("D", "2026-03-03", "09:00", "10:00", false),
                    slot("E", "2026-03-03", "10:00", "11:00", true).with_booking("lane", "BK-9"),
                ],
            ),
            AvailabilityDay::new(
                "2026-03-04",
                true,
                vec![slot("F", "2026-03-04", "09:00", "10:00", true)],
            ),
        ])
    }

    pub fn from_days(days: Vec<AvailabilityDay>) -> Self {
        let today: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        Self {
            grid: DisplayGrid::build(&days, &CivilCalendar::default(), today),
            days,
            overrides: OverrideMap::new(),
        }
    }

    /// The same data refetched without the slot `code`.
    pub fn without(&self, code: &str) -> Self {
        let days: Vec<AvailabilityDay> = self
            .days
            .iter()
            .cloned()
            .map(|mut day| {
                day.slots.retain(|slot| slot.code.value() != code);
                day
            })
            .collect();
        Self::from_days(days)
    }

    /// The same data refetched with the slot `code` changed by `edit`.
    pub fn with_slot<F>(&self, code: &str, edit: F) -> Self
    where
        F: Fn(Slot) -> Slot,
    {
        let days: Vec<AvailabilityDay> = self
            .days
            .iter()
            .cloned()
            .map(|mut day| {
                day.slots = day
                    .slots
                    .into_iter()
                    .map(|slot| if slot.code.value() == code { edit(slot) } else { slot })
                    .collect();
                day
            })
            .collect();
        Self::from_days(days)
    }

    /// The same data refetched with day `index` turned into a holiday.
    pub fn with_holiday(&self, index: usize) -> Self {
        let mut days: Vec<AvailabilityDay> = self.days.clone();
        days[index].is_holiday = true;
        Self::from_days(days)
    }

    pub const fn resolver(&self) -> StatusResolver<'_> {
        StatusResolver::new(&self.grid, &self.overrides)
    }

    pub fn key(&self, cell: CellRef) -> SlotKey {
        self.grid.key_at(cell).unwrap()
    }

    pub fn step(&self, state: &State, command: Command) -> TransitionResult {
        apply(state, &self.resolver(), command)
    }

    pub fn run(&self, state: &State, commands: &[Command]) -> State {
        commands
            .iter()
            .fold(state.clone(), |current, command| {
                self.step(&current, *command).new_state
            })
    }

    /// A state with selection mode on and nothing selected.
    pub fn armed(&self) -> State {
        self.step(&State::new(), Command::EnterSelectionMode).new_state
    }
}

pub fn code(value: &str) -> SlotKey {
    SlotKey::Code(SlotCode::new(value))
}

pub fn click(cell: CellRef) -> [Command; 2] {
    [Command::PointerDown { cell }, Command::PointerUp { cell }]
}

/// Presses on the first cell, drags through the rest and releases on the last.
pub fn drag(path: &[CellRef]) -> Vec<Command> {
    let mut commands: Vec<Command> = Vec::new();
    if let Some((first, rest)) = path.split_first() {
        commands.push(Command::PointerDown { cell: *first });
        commands.extend(rest.iter().map(|cell| Command::PointerEnter { cell: *cell }));
        let last: CellRef = *path.last().unwrap();
        commands.push(Command::PointerUp { cell: last });
    }
    commands
}
