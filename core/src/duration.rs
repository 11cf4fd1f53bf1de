// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveTime;

const CLOCK_FORMAT: &str = "%I:%M %p";
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error for a display string that does not parse as a 12-hour clock time.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time {0:?}, expected \"h:mm am|pm\"")]
pub struct ClockParseError(String);

/// Parses a "h:mm a" display string on an arbitrary common reference date.
pub fn parse_clock(s: &str) -> Result<NaiveTime, ClockParseError> {
    NaiveTime::parse_from_str(s, CLOCK_FORMAT).map_err(|_| ClockParseError(s.to_string()))
}

/// Minutes from `start` to `end`.
///
/// An end earlier than the start is treated as crossing midnight, so the
/// result is always in 0..1440.
pub fn minutes_between(start: &str, end: &str) -> Result<i64, ClockParseError> {
    let start = parse_clock(start)?;
    let end = parse_clock(end)?;
    Ok((end - start).num_minutes().rem_euclid(MINUTES_PER_DAY))
}

/// Formats a minute span for display next to a schedule item.
pub fn format_minutes(diff: i64) -> String {
    if diff < 60 {
        format!("{diff} m")
    } else if diff % 60 == 0 {
        format!("{} h", diff / 60)
    } else {
        format!("{} h {} m", diff / 60, diff % 60)
    }
}

/// The derived duration label between two display times, e.g. "2 h 30 m".
///
/// Purely presentational: recomputed on every render, never stored.
pub fn duration_label(start: &str, end: &str) -> Result<String, ClockParseError> {
    minutes_between(start, end).map(format_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock() {
        let time = parse_clock("2:45 pm").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(14, 45, 0).unwrap());

        let time = parse_clock("12:00 am").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(0, 0, 0).unwrap());

        let time = parse_clock("12:00 pm").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_clock_invalid() {
        assert!(parse_clock("").is_err());
        assert!(parse_clock("14:00").is_err());
        assert!(parse_clock("2:45").is_err());
        assert!(parse_clock("noonish").is_err());
    }

    #[test]
    fn test_duration_label_under_an_hour() {
        assert_eq!(duration_label("2:00 pm", "2:45 pm").unwrap(), "45 m");
        assert_eq!(duration_label("2:00 pm", "2:00 pm").unwrap(), "0 m");
    }

    #[test]
    fn test_duration_label_whole_hours() {
        assert_eq!(duration_label("2:00 pm", "4:00 pm").unwrap(), "2 h");
        assert_eq!(duration_label("2:00 pm", "3:00 pm").unwrap(), "1 h");
    }

    #[test]
    fn test_duration_label_hours_and_minutes() {
        assert_eq!(duration_label("2:00 pm", "4:30 pm").unwrap(), "2 h 30 m");
    }

    #[test]
    fn test_duration_wraps_past_midnight() {
        assert_eq!(duration_label("11:00 pm", "1:00 am").unwrap(), "2 h");
        assert_eq!(minutes_between("11:30 pm", "12:15 am").unwrap(), 45);
    }
}
