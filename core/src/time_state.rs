// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Half of the 12-hour clock face.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Before noon.
    Am,

    /// Noon or later.
    #[default]
    Pm,
}

const TIME_OF_DAY_AM: &str = "am";
const TIME_OF_DAY_PM: &str = "pm";

impl AsRef<str> for TimeOfDay {
    fn as_ref(&self) -> &str {
        match self {
            TimeOfDay::Am => TIME_OF_DAY_AM,
            TimeOfDay::Pm => TIME_OF_DAY_PM,
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for TimeOfDay {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            TIME_OF_DAY_AM => Ok(TimeOfDay::Am),
            TIME_OF_DAY_PM => Ok(TimeOfDay::Pm),
            _ => Err(()),
        }
    }
}

/// A single clock-face reading before it is formatted for display.
///
/// Hour and minute are kept as the display strings the picker produced:
/// hours in 1-12 without a leading zero, minutes zero-padded to two digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSelection {
    pub hour: String,
    pub minute: String,
    pub time_of_day: TimeOfDay,
}

impl TimeSelection {
    /// The "h:mm a" display string for this selection.
    pub fn display(&self) -> String {
        format!("{}:{} {}", self.hour, self.minute, self.time_of_day)
    }
}

impl Default for TimeSelection {
    fn default() -> Self {
        Self {
            hour: "12".to_string(),
            minute: "00".to_string(),
            time_of_day: TimeOfDay::Pm,
        }
    }
}

/// Error for a clock string outside the "h:mm am|pm" picker domain.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time {0:?}, expected \"h:mm am|pm\"")]
pub struct ParseTimeSelectionError(String);

impl FromStr for TimeSelection {
    type Err = ParseTimeSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeSelectionError(s.to_string());

        let (clock, period) = s.trim().rsplit_once(' ').ok_or_else(err)?;
        let time_of_day = period.parse().map_err(|()| err())?;

        let (hour, minute) = clock.rsplit_once(':').ok_or_else(err)?;
        let hour: u32 = hour.parse().map_err(|_| err())?;
        let minute: u32 = minute.parse().map_err(|_| err())?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(err());
        }

        Ok(Self {
            hour: hour.to_string(),
            minute: format!("{minute:02}"),
            time_of_day,
        })
    }
}

/// The time-picker state of one editing session.
///
/// Owned exclusively by the active session: initialized to the default when
/// the editor opens, mutated field-by-field through the setters below, and
/// reset after a successful add or a cancel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TimeState {
    pub start: TimeSelection,
    pub end: TimeSelection,
    pub has_end_time: bool,
}

impl TimeState {
    pub fn set_start_hour(&mut self, hour: impl Into<String>) {
        self.start.hour = hour.into();
    }

    pub fn set_start_minute(&mut self, minute: impl Into<String>) {
        self.start.minute = minute.into();
    }

    pub fn set_start_time_of_day(&mut self, time_of_day: TimeOfDay) {
        self.start.time_of_day = time_of_day;
    }

    pub fn set_end_hour(&mut self, hour: impl Into<String>) {
        self.end.hour = hour.into();
    }

    pub fn set_end_minute(&mut self, minute: impl Into<String>) {
        self.end.minute = minute.into();
    }

    pub fn set_end_time_of_day(&mut self, time_of_day: TimeOfDay) {
        self.end.time_of_day = time_of_day;
    }

    /// Toggles end-time presence without altering the end selection's fields.
    pub fn set_has_end_time(&mut self, has_end_time: bool) {
        self.has_end_time = has_end_time;
    }

    /// Restores the default state: start 12:00 pm, end 12:00 pm, no end time.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The hour picker domain: "1" through "12".
pub fn hour_choices() -> Vec<String> {
    (1..=12).map(|h| h.to_string()).collect()
}

/// The minute picker domain: "00" through "59".
pub fn minute_choices() -> Vec<String> {
    (0..60).map(|m| format!("{m:02}")).collect()
}
