// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use agenda_core::{ScheduleItem, TimeState, build_schedule_item};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::host::JsonEventHost;
use crate::prompt::{CliclackConfirm, Confirm};
use crate::schedule_formatter::ScheduleFormatter;
use crate::tui;
use crate::util::{ArgOutputFormat, arg_verbose, get_verbose};

#[derive(Debug, Clone)]
pub struct CmdAdd {
    pub name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,

    pub tui: bool,
    pub output_format: ArgOutputFormat,
    pub verbose: bool,
}

impl CmdAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a schedule item to the event")
            .arg(arg!([NAME] "Name of the schedule item"))
            .arg(arg!(--start <TIME> "Starting time, e.g. \"2:00 pm\""))
            .arg(arg!(--end <TIME> "Ending time, e.g. \"4:30 pm\""))
            .arg(ArgOutputFormat::arg())
            .arg(arg_verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let start = matches.get_one::<String>("start").cloned();
        let end = matches.get_one::<String>("end").cloned();

        let name = match matches.get_one::<String>("NAME") {
            Some(name) => Some(name.clone()),
            None if start.is_none() && end.is_none() => None,
            // times without a name still require a name
            None => return Err("Name is required for a new schedule item".into()),
        };

        let tui = name.is_none();
        Ok(Self {
            name,
            start,
            end,

            tui,
            output_format: ArgOutputFormat::from(matches),
            verbose: get_verbose(matches),
        })
    }

    pub async fn run(self, host: &JsonEventHost) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding schedule item...");
        let event = host.load().await?;

        let item = if self.tui {
            match tui::add_schedule_item(&event)? {
                Some(item) => item,
                None => {
                    tracing::info!("user cancelled the schedule item");
                    return Ok(());
                }
            }
        } else {
            let mut state = TimeState::default();
            if let Some(start) = &self.start {
                state.start = start.parse()?;
            }
            if let Some(end) = &self.end {
                state.end = end.parse()?;
                state.set_has_end_time(true);
            }
            build_schedule_item(&state, event.date, self.name.unwrap_or_default())
        };

        let updated = event.with_item(item.clone());
        host.update(&updated).await?;
        print_items(&[item], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CmdList {
    pub output_format: ArgOutputFormat,
    pub verbose: bool,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the schedule items of the event")
            .arg(ArgOutputFormat::arg())
            .arg(arg_verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
            verbose: get_verbose(matches),
        }
    }

    pub async fn run(self, host: &JsonEventHost) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing schedule items...");
        let event = host.load().await?;
        if event.schedule.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No schedule items found".italic());
            return Ok(());
        }

        print_items(&event.schedule, self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRemove {
    pub id: String,
    pub yes: bool,
}

impl CmdRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove a schedule item from the event")
            .arg(arg!(<ID> "Schedule item id (or unique prefix)"))
            .arg(arg!(-y --yes "Skip the confirmation prompt"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one::<String>("ID").cloned().unwrap_or_default(),
            yes: matches.get_flag("yes"),
        }
    }

    pub async fn run(self, host: &JsonEventHost) -> Result<(), Box<dyn Error>> {
        self.run_with(host, &mut CliclackConfirm).await
    }

    pub async fn run_with(
        self,
        host: &JsonEventHost,
        confirm: &mut impl Confirm,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "removing schedule item...");
        let event = host.load().await?;

        let needle = self.id.to_lowercase();
        let matched: Vec<&ScheduleItem> = event
            .schedule
            .iter()
            .filter(|item| item.id.to_string().starts_with(&needle))
            .collect();
        let item = match matched.as_slice() {
            [item] => *item,
            [] => {
                println!("{}", "No schedule item matches that id".italic());
                return Ok(());
            }
            _ => return Err(format!("Id prefix {:?} is ambiguous", self.id).into()),
        };

        if !self.yes && !confirm.confirm("Are you sure you want to remove this event?")? {
            tracing::info!("user declined the removal");
            return Ok(());
        }

        let updated = event.without_item(item.id);
        host.update(&updated).await?;
        println!("Removed {}", item.name.bold());
        Ok(())
    }
}

fn print_items(items: &[ScheduleItem], output_format: ArgOutputFormat, verbose: bool) {
    let formatter = ScheduleFormatter::new(verbose).with_output_format(output_format);
    println!("{}", formatter.format(items));
}
