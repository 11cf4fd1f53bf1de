// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end flow of one editing session: mutate the picker state, build an
//! item, hand it to the event, and remove it again.

use agenda_core::{Event, TimeOfDay, TimeState, build_schedule_item, duration_label};
use chrono::NaiveDate;

fn event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()
}

#[test]
fn add_then_remove_round_trip() {
    let mut state = TimeState::default();
    let event = Event::new(event_date());

    // the user fills the pickers and submits
    state.set_start_hour("2");
    state.set_start_minute("00");
    state.set_end_hour("4");
    state.set_end_minute("30");
    state.set_has_end_time(true);

    let item = build_schedule_item(&state, event.date, "Panel discussion");
    let id = item.id;
    let event = event.with_item(item);
    state.reset();

    assert_eq!(event.schedule.len(), 1);
    assert_eq!(state, TimeState::default());

    let time = &event.schedule[0].time;
    assert_eq!(time.start, "2:00 pm");
    assert_eq!(time.end.as_deref(), Some("4:30 pm"));
    assert_eq!(
        duration_label(&time.start, time.end.as_deref().unwrap()).unwrap(),
        "2 h 30 m"
    );

    // confirmation declined: nothing changes
    let untouched = event.clone();
    assert_eq!(event, untouched);

    // confirmation accepted: the item is filtered out
    let event = event.without_item(id);
    assert!(event.schedule.is_empty());
}

#[test]
fn morning_item_without_end_time() {
    let mut state = TimeState::default();
    state.set_start_hour("9");
    state.set_start_minute("15");
    state.set_start_time_of_day(TimeOfDay::Am);

    let item = build_schedule_item(&state, event_date(), "Registration");
    assert_eq!(item.time.start, "9:15 am");
    assert!(item.time.end.is_none());
}
