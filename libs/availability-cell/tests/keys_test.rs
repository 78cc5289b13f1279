// libs/availability-cell/tests/keys_test.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use availability_cell::keys;
use availability_cell::models::SlotFilters;
use calendar_cell::models::TimeWindow;

fn window(start: &str, end: &str) -> TimeWindow {
    let start: DateTime<Utc> = start.parse().unwrap();
    let end: DateTime<Utc> = end.parse().unwrap();
    TimeWindow::new(start, end, "UTC").unwrap()
}

#[test]
fn identical_queries_derive_equal_keys() {
    let practitioner_id = Uuid::new_v4();
    let window = window("2024-02-12T00:00:00Z", "2024-02-13T00:00:00Z");
    let filters = SlotFilters {
        appointment_type: Some("consultation".to_string()),
        duration_minutes: None,
        search: None,
        page: Some(0),
    };

    let a = keys::slots(practitioner_id, &window, &filters);
    let b = keys::slots(practitioner_id, &window, &filters);

    assert_eq!(a, b);
}

#[test]
fn one_changed_filter_value_derives_a_different_key() {
    let practitioner_id = Uuid::new_v4();
    let window = window("2024-02-12T00:00:00Z", "2024-02-13T00:00:00Z");

    let page_zero = SlotFilters {
        page: Some(0),
        ..SlotFilters::default()
    };
    let page_one = SlotFilters {
        page: Some(1),
        ..SlotFilters::default()
    };

    assert_ne!(
        keys::slots(practitioner_id, &window, &page_zero),
        keys::slots(practitioner_id, &window, &page_one)
    );
}

#[test]
fn default_filters_add_no_key_segment() {
    let practitioner_id = Uuid::new_v4();
    let window = window("2024-02-12T00:00:00Z", "2024-02-13T00:00:00Z");

    let with_defaults = keys::slots(practitioner_id, &window, &SlotFilters::default());
    let bare = keys::practitioner(practitioner_id)
        .text(window.start.to_rfc3339())
        .text(window.end.to_rfc3339());

    assert_eq!(with_defaults, bare);
}

#[test]
fn slot_keys_nest_under_their_practitioner_scope() {
    let practitioner_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();
    let window = window("2024-02-12T00:00:00Z", "2024-02-13T00:00:00Z");

    let mine = keys::slots(practitioner_id, &window, &SlotFilters::default());
    let theirs = keys::slots(other_id, &window, &SlotFilters::default());
    let scope = keys::practitioner(practitioner_id);

    assert!(mine.starts_with(&scope));
    assert!(!theirs.starts_with(&scope));
}

#[test]
fn distinct_windows_derive_distinct_keys() {
    let practitioner_id = Uuid::new_v4();
    let monday = window("2024-02-12T00:00:00Z", "2024-02-13T00:00:00Z");
    let tuesday = window("2024-02-13T00:00:00Z", "2024-02-14T00:00:00Z");

    assert_ne!(
        keys::slots(practitioner_id, &monday, &SlotFilters::default()),
        keys::slots(practitioner_id, &tuesday, &SlotFilters::default())
    );
}
