// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{START_DATE, create_test_config};
use crate::{ApiError, DateRangeRequest, GridConfig, GridSession, Navigation, navigate};
use chrono::NaiveDate;
use coach_grid_domain::CivilCalendar;

fn range(start: &str, end: &str) -> DateRangeRequest {
    DateRangeRequest {
        start_date: String::from(start),
        end_date: String::from(end),
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_window_is_inclusive() {
    let calendar: CivilCalendar = CivilCalendar::default();
    assert_eq!(
        DateRangeRequest::for_window(&calendar, "2026-03-02", 7).unwrap(),
        range("2026-03-02", "2026-03-08")
    );
    assert_eq!(
        DateRangeRequest::for_window(&calendar, "2026-03-02", 1).unwrap(),
        range("2026-03-02", "2026-03-02")
    );
}

#[test]
fn test_window_dates_cover_range() {
    let calendar: CivilCalendar = CivilCalendar::default();
    let dates: Vec<String> = range("2026-02-26", "2026-03-04").dates(&calendar).unwrap();
    assert_eq!(dates.len(), 7);
    assert_eq!(dates.first().unwrap(), "2026-02-26");
    assert_eq!(dates.last().unwrap(), "2026-03-04");
}

#[test]
fn test_next_and_previous_shift_by_window() {
    let calendar: CivilCalendar = CivilCalendar::default();
    let current: DateRangeRequest = range("2026-03-02", "2026-03-08");
    let today: NaiveDate = ymd(2026, 3, 3);

    let next: DateRangeRequest =
        navigate(&calendar, &current, 7, Navigation::Next, today).unwrap();
    assert_eq!(next, range("2026-03-09", "2026-03-15"));

    let previous: DateRangeRequest =
        navigate(&calendar, &current, 7, Navigation::Previous, today).unwrap();
    assert_eq!(previous, range("2026-02-23", "2026-03-01"));

    let back: DateRangeRequest =
        navigate(&calendar, &next, 7, Navigation::Previous, today).unwrap();
    assert_eq!(back, current);
}

#[test]
fn test_navigation_across_dst_changes() {
    let calendar: CivilCalendar = CivilCalendar::default();
    let today: NaiveDate = ymd(2026, 3, 3);

    let spring: DateRangeRequest = navigate(
        &calendar,
        &range("2026-03-05", "2026-03-11"),
        7,
        Navigation::Next,
        today,
    )
    .unwrap();
    assert_eq!(spring, range("2026-03-12", "2026-03-18"));

    let fall: DateRangeRequest = navigate(
        &calendar,
        &range("2026-11-01", "2026-11-07"),
        7,
        Navigation::Previous,
        today,
    )
    .unwrap();
    assert_eq!(fall, range("2026-10-25", "2026-10-31"));
}

#[test]
fn test_today_reanchors_window() {
    let calendar: CivilCalendar = CivilCalendar::default();
    let far: DateRangeRequest = range("2027-01-04", "2027-01-10");
    let today: DateRangeRequest =
        navigate(&calendar, &far, 7, Navigation::Today, ymd(2026, 12, 31)).unwrap();
    assert_eq!(today, range("2026-12-31", "2027-01-06"));
}

#[test]
fn test_window_starting_on_today() {
    let calendar: CivilCalendar = CivilCalendar::default();
    assert_eq!(
        DateRangeRequest::starting_on(&calendar, ymd(2026, 2, 27), 3).unwrap(),
        range("2026-02-27", "2026-03-01")
    );
}

#[test]
fn test_session_navigation_updates_fetch_request() {
    let mut session: GridSession =
        GridSession::with_start_date(create_test_config(), START_DATE).unwrap();
    assert_eq!(session.range(), &range("2026-03-02", "2026-03-08"));

    let next: DateRangeRequest = session
        .navigate_at(Navigation::Next, ymd(2026, 3, 3))
        .unwrap();
    assert_eq!(session.range(), &next);

    let request = session.fetch_request();
    assert_eq!(request.facility_code, "FAC1");
    assert_eq!(request.start_date, "2026-03-09");
    assert_eq!(request.end_date, "2026-03-15");
}

#[test]
fn test_session_uses_configured_window() {
    let config: GridConfig = GridConfig {
        window_days: 3,
        ..create_test_config()
    };
    let mut session: GridSession = GridSession::with_start_date(config, START_DATE).unwrap();
    assert_eq!(session.range(), &range("2026-03-02", "2026-03-04"));
    session
        .navigate_at(Navigation::Previous, ymd(2026, 3, 3))
        .unwrap();
    assert_eq!(session.range(), &range("2026-02-27", "2026-03-01"));
}

#[test]
fn test_malformed_start_date_is_rejected() {
    let err: ApiError = GridSession::with_start_date(create_test_config(), "03/02/2026").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "date"));
}
