// libs/calendar-cell/tests/session_window_test.rs

use assert_matches::assert_matches;
use chrono::{DateTime, Duration, Utc};

use calendar_cell::models::TimeWindow;
use calendar_cell::services::session_window::{
    can_start_session, POST_ROLL_MINUTES, PRE_ROLL_MINUTES,
};
use shared_models::error::SchedulingError;

fn session_window() -> TimeWindow {
    let start: DateTime<Utc> = "2024-02-12T10:00:00Z".parse().unwrap();
    TimeWindow::new(start, start + Duration::minutes(50), "Europe/Paris").unwrap()
}

#[test]
fn joinable_exactly_at_the_nominal_start() {
    let window = session_window();
    let status = can_start_session(&window, window.start);

    assert!(!status.blocked);
    assert_eq!(status.minutes_until_start, 0);
    assert_eq!(status.minutes_until_end, 50);
}

#[test]
fn joinable_at_the_pre_roll_boundary() {
    let window = session_window();
    let now = window.start - Duration::minutes(PRE_ROLL_MINUTES);

    assert!(!can_start_session(&window, now).blocked);
}

#[test]
fn blocked_one_minute_before_the_pre_roll_opens() {
    let window = session_window();
    let now = window.start - Duration::minutes(PRE_ROLL_MINUTES + 1);
    let status = can_start_session(&window, now);

    assert!(status.blocked);
    assert_eq!(status.minutes_until_start, 16);
}

#[test]
fn joinable_mid_window_with_negative_start_distance() {
    let window = session_window();
    let status = can_start_session(&window, window.start + Duration::minutes(20));

    assert!(!status.blocked);
    assert_eq!(status.minutes_until_start, -20);
    assert_eq!(status.minutes_until_end, 30);
}

#[test]
fn joinable_at_the_post_roll_boundary() {
    let window = session_window();
    let now = window.end + Duration::minutes(POST_ROLL_MINUTES);

    assert!(!can_start_session(&window, now).blocked);
}

#[test]
fn blocked_once_the_post_roll_grace_is_exceeded() {
    let window = session_window();
    let now = window.end + Duration::minutes(POST_ROLL_MINUTES + 1);
    let status = can_start_session(&window, now);

    // The start distance alone would read as "window already open"; the end
    // check has to win.
    assert!(status.minutes_until_start < PRE_ROLL_MINUTES);
    assert!(status.blocked);
    assert_eq!(status.minutes_until_end, -(POST_ROLL_MINUTES + 1));
}

#[test]
fn blocked_for_a_window_long_past() {
    let window = session_window();
    let status = can_start_session(&window, window.end + Duration::days(2));

    assert!(status.blocked);
}

#[test]
fn inverted_windows_never_construct() {
    let start: DateTime<Utc> = "2024-02-12T10:00:00Z".parse().unwrap();

    let inverted = TimeWindow::new(start, start - Duration::minutes(30), "UTC");
    assert_matches!(inverted, Err(SchedulingError::Validation(_)));

    let empty = TimeWindow::new(start, start, "UTC");
    assert_matches!(empty, Err(SchedulingError::Validation(_)));
}

#[test]
fn window_membership_is_half_open() {
    let window = session_window();

    assert!(window.contains(window.start));
    assert!(!window.contains(window.end));
}
