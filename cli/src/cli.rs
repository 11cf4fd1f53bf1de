// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use agenda_core::APP_NAME;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_schedule::{CmdAdd, CmdList, CmdRemove};
use crate::config::parse_config;
use crate::host::JsonEventHost;

/// Run the Agenda command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Edit the schedule of an event from the terminal.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to list
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/agenda/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/agenda/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdAdd::command())
            .subcommand(CmdList::command())
            .subcommand(CmdRemove::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdAdd::NAME, matches)) => Add(CmdAdd::from(matches)?),
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdRemove::NAME, matches)) => Remove(CmdRemove::from(matches)),
            None => List(CmdList::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config).await?;
        let host = JsonEventHost::new(config.event_path);
        self.command.run(&host).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Add a schedule item
    Add(CmdAdd),

    /// List the schedule items
    List(CmdList),

    /// Remove a schedule item
    Remove(CmdRemove),
}

impl Commands {
    /// Run the command against the configured event
    pub async fn run(self, host: &JsonEventHost) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Add(a) => a.run(host).await,
            List(a) => a.run(host).await,
            Remove(a) => a.run(host).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::ArgOutputFormat;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_parse_default_list() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(vec!["test", "add", "Keynote"]).unwrap();
        match cli.command {
            Commands::Add(cmd) => {
                assert_eq!(cmd.name, Some("Keynote".to_string()));
                assert!(!cmd.tui);
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_new_alias() {
        let cli = Cli::try_parse_from(vec!["test", "new"]).unwrap();
        match cli.command {
            Commands::Add(cmd) => assert!(cmd.tui),
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_parse_list() {
        let args = vec!["test", "list", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::List(cmd) => {
                assert_eq!(cmd.output_format, ArgOutputFormat::Json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_remove() {
        let cli = Cli::try_parse_from(vec!["test", "remove", "deadbeef"]).unwrap();
        match cli.command {
            Commands::Remove(cmd) => {
                assert_eq!(cmd.id, "deadbeef");
                assert!(!cmd.yes);
            }
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_parse_rm_alias() {
        let cli = Cli::try_parse_from(vec!["test", "rm", "deadbeef", "-y"]).unwrap();
        match cli.command {
            Commands::Remove(cmd) => assert!(cmd.yes),
            _ => panic!("Expected Remove command"),
        }
    }
}
