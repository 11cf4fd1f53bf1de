// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_schedule;
mod config;
mod host;
mod prompt;
mod schedule_formatter;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
