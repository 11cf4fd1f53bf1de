// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use agenda_core::{ScheduleItem, duration_label};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

/// How many characters of the item id to show in the short id column.
const SHORT_ID_LEN: usize = 8;

#[derive(Debug)]
pub struct ScheduleFormatter {
    columns: Vec<ScheduleColumn>,
    format: ArgOutputFormat,
}

impl ScheduleFormatter {
    pub fn new(verbose: bool) -> Self {
        let mut columns = vec![
            ScheduleColumn::ShortId,
            ScheduleColumn::Time,
            ScheduleColumn::Name,
        ];
        if verbose {
            columns.push(ScheduleColumn::Uid);
        }
        Self {
            columns,
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, items: &'a [ScheduleItem]) -> Display<'a> {
        Display {
            items,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    items: &'a [ScheduleItem],
    formatter: &'a ScheduleFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), &self.formatter.columns, self.items)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &self.formatter.columns, self.items)
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ScheduleColumn {
    ShortId,
    Time,
    Name,
    Uid,
}

impl TableColumn<ScheduleItem> for ScheduleColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ScheduleColumn::ShortId => "Id",
            ScheduleColumn::Time => "Time",
            ScheduleColumn::Name => "Name",
            ScheduleColumn::Uid => "UID",
        }
        .into()
    }

    fn format<'a>(&self, item: &'a ScheduleItem) -> Cow<'a, str> {
        match self {
            ScheduleColumn::ShortId => item.id.to_string()[..SHORT_ID_LEN].to_string().into(),
            ScheduleColumn::Time => format_time(item),
            ScheduleColumn::Name => item.name.as_str().into(),
            ScheduleColumn::Uid => format!("#{}", item.id).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ScheduleColumn::ShortId | ScheduleColumn::Uid => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}

/// "2:00 pm - 4:30 pm (2 h 30 m)" when an ending time is set, "2:00 pm"
/// otherwise. A duration is only shown for times the clock parser accepts.
fn format_time(item: &ScheduleItem) -> Cow<'_, str> {
    let start = &item.time.start;
    match &item.time.end {
        Some(end) => match duration_label(start, end) {
            Ok(label) => format!("{start} - {end} ({label})").into(),
            Err(_) => format!("{start} - {end}").into(),
        },
        None => start.as_str().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::{TimeState, build_schedule_item};
    use chrono::NaiveDate;

    fn item(start_hour: &str, end: Option<(&str, &str)>) -> ScheduleItem {
        let mut state = TimeState::default();
        state.set_start_hour(start_hour);
        if let Some((hour, minute)) = end {
            state.set_end_hour(hour);
            state.set_end_minute(minute);
            state.set_has_end_time(true);
        }
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        build_schedule_item(&state, date, "Keynote")
    }

    #[test]
    fn test_time_column_without_end() {
        let item = item("2", None);
        let cell = ScheduleColumn::Time.format(&item);
        assert_eq!(cell, "2:00 pm");
    }

    #[test]
    fn test_time_column_with_end_and_duration() {
        let item = item("2", Some(("4", "30")));
        let cell = ScheduleColumn::Time.format(&item);
        assert_eq!(cell, "2:00 pm - 4:30 pm (2 h 30 m)");
    }

    #[test]
    fn test_short_id_is_a_prefix_of_the_uid() {
        let item = item("2", None);
        let short = ScheduleColumn::ShortId.format(&item).into_owned();
        assert_eq!(short.len(), SHORT_ID_LEN);
        assert!(item.id.to_string().starts_with(&short));
    }

    #[test]
    fn test_table_format_lists_every_item() {
        let items = [item("2", None), item("9", Some(("11", "00")))];
        let formatter = ScheduleFormatter::new(false);
        let out = formatter.format(&items).to_string();

        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("2:00 pm"));
        assert!(out.contains("9:00 pm - 11:00 pm (2 h)"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let items = [item("2", Some(("4", "30")))];
        let formatter = ScheduleFormatter::new(true).with_output_format(ArgOutputFormat::Json);
        let out = formatter.format(&items).to_string();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["Name"], "Keynote");
        assert_eq!(parsed[0]["Time"], "2:00 pm - 4:30 pm (2 h 30 m)");
        assert_eq!(parsed[0]["UID"], format!("#{}", items[0].id));
    }
}
