// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time_state::TimeState;

/// The display times of a schedule item.
///
/// Times are stored as "h:mm a" display strings, never as absolute
/// timestamps; the end string is present exactly when the item has an end
/// time. Duration is derived from the pair at render time and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTime {
    /// Display of the start time.
    pub start: String,

    /// Display of the end time, for ranged items.
    pub end: Option<String>,
}

impl ItemTime {
    /// Whether the item carries an end time.
    pub fn has_end_time(&self) -> bool {
        self.end.is_some()
    }
}

/// One agenda entry belonging to an event.
///
/// Immutable once created; ownership transfers to the parent event's schedule
/// immediately after the builder returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Identifier unique among the event's schedule items.
    pub id: Uuid,

    /// The submitted name of the agenda entry.
    pub name: String,

    /// The display times of the entry.
    pub time: ItemTime,
}

/// Builds a schedule item from the picker state and the submitted name.
///
/// Composes the "h:mm a" display strings from the selections as-is; no
/// timezone conversion happens at build time.
pub fn build_schedule_item(
    state: &TimeState,
    event_date: NaiveDate,
    name: impl Into<String>,
) -> ScheduleItem {
    let name = name.into();
    tracing::debug!(%event_date, name, "building schedule item");

    ScheduleItem {
        id: Uuid::new_v4(),
        name,
        time: ItemTime {
            start: state.start.display(),
            end: state.has_end_time.then(|| state.end.display()),
        },
    }
}
