// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;
    fn padding_direction(&self) -> PaddingDirection;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub struct Table<'a, T, C: TableColumn<T>, S: TableStyle> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, T, C: TableColumn<T>, S: TableStyle> Table<'a, T, C, S> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<T, C: TableColumn<T>, S: TableStyle> fmt::Display for Table<'_, T, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

/// Plain columns separated by two spaces, padded to the widest cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStyleBasic;

impl TableStyleBasic {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let table: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = column_max_widths(columns.len(), &table);

        for (i, cells) in table.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, (col, cell)) in columns.iter().zip(cells).enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }

                let last = j == columns.len() - 1;
                match col.padding_direction() {
                    // the last column never needs trailing padding
                    PaddingDirection::Left if last => write!(f, "{cell}")?,
                    PaddingDirection::Left => write!(f, "{:<width$}", cell, width = widths[j])?,
                    PaddingDirection::Right => write!(f, "{:>width$}", cell, width = widths[j])?,
                }
            }
        }
        Ok(())
    }
}

/// One JSON array, each row an object keyed by column name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Value> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| {
                        let name = col.name().into_owned();
                        let cell = serde_json::Value::String(col.format(row).into_owned());
                        (name, cell)
                    })
                    .collect::<serde_json::Map<_, _>>()
                    .into()
            })
            .collect();

        write!(f, "{}", serde_json::Value::Array(rows))
    }
}

fn column_max_widths(count: usize, table: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut max_widths = vec![0; count];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            let width = cell.width();
            if width > max_widths[i] {
                max_widths[i] = width;
            }
        }
    }
    max_widths
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, &'static str);

    enum PairColumn {
        Key,
        Value,
    }

    impl TableColumn<Pair> for PairColumn {
        fn name(&self) -> Cow<'_, str> {
            match self {
                PairColumn::Key => "Key".into(),
                PairColumn::Value => "Value".into(),
            }
        }

        fn format<'a>(&self, data: &'a Pair) -> Cow<'a, str> {
            match self {
                PairColumn::Key => data.0.into(),
                PairColumn::Value => data.1.into(),
            }
        }

        fn padding_direction(&self) -> PaddingDirection {
            match self {
                PairColumn::Key => PaddingDirection::Right,
                PairColumn::Value => PaddingDirection::Left,
            }
        }
    }

    #[test]
    fn test_basic_style_pads_to_widest_cell() {
        let columns = [PairColumn::Key, PairColumn::Value];
        let data = [Pair("a", "one"), Pair("long", "two")];
        let table = Table::new(TableStyleBasic::new(), &columns, &data);
        assert_eq!(table.to_string(), "   a  one\nlong  two");
    }

    #[test]
    fn test_basic_style_empty_data() {
        let columns = [PairColumn::Key, PairColumn::Value];
        let table = Table::new(TableStyleBasic::new(), &columns, &[]);
        assert_eq!(table.to_string(), "");
    }

    #[test]
    fn test_json_style_keys_rows_by_column_name() {
        let columns = [PairColumn::Key, PairColumn::Value];
        let data = [Pair("a", "one")];
        let table = Table::new(TableStyleJson::new(), &columns, &data);

        let parsed: serde_json::Value = serde_json::from_str(&table.to_string()).unwrap();
        assert_eq!(parsed[0]["Key"], "a");
        assert_eq!(parsed[0]["Value"], "one");
    }
}
