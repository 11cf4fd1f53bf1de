// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

mod duration;
mod event;
mod item;
mod time_state;

pub use crate::duration::{
    ClockParseError, duration_label, format_minutes, minutes_between, parse_clock,
};
pub use crate::event::Event;
pub use crate::item::{ItemTime, ScheduleItem, build_schedule_item};
pub use crate::time_state::{
    ParseTimeSelectionError, TimeOfDay, TimeSelection, TimeState, hour_choices, minute_choices,
};

/// The canonical application name, used for the binary and config lookup.
pub const APP_NAME: &str = "agenda";
