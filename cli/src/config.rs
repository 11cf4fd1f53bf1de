// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use agenda_core::APP_NAME;

const AGENDA_CONFIG_ENV: &str = "AGENDA_CONFIG";

#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(AGENDA_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration for the Agenda application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Path of the JSON file the edited event is stored in.
    pub event_path: PathBuf,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(dir: &TempDir, file: &str, event_path: &str) -> PathBuf {
        let path = dir.path().join(file);
        let content = format!(
            r#"event_path = "{}""#,
            dir.path().join(event_path).to_str().unwrap().replace('\\', "/")
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_toml() {
        let config: Config = r#"event_path = "/tmp/event.json""#.parse().unwrap();
        assert_eq!(config.event_path, PathBuf::from("/tmp/event.json"));
    }

    #[test]
    fn rejects_missing_event_path() {
        assert!("".parse::<Config>().is_err());
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let cli_config = write_config(&temp_dir, "cli_config.toml", "cli_event.json");
        let env_config = write_config(&temp_dir, "env_config.toml", "env_event.json");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
                std::env::set_var(AGENDA_CONFIG_ENV, env_config.to_str().unwrap());
            }

            let config = parse_config(Some(cli_config)).await.unwrap();
            assert_eq!(config.event_path, temp_dir.path().join("cli_event.json"));

            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
            }
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_config = write_config(&temp_dir, "env_config.toml", "env_event.json");

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
                std::env::set_var(AGENDA_CONFIG_ENV, env_config.to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();
            assert_eq!(config.event_path, temp_dir.path().join("env_event.json"));

            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
            }
        }
    }

    // TODO: Re-enable on Windows once get_config_dir() supports environment variables
    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_when_no_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        let default_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir_all(&default_dir).unwrap();
        let content = format!(
            r#"event_path = "{}""#,
            temp_dir.path().join("event.json").to_str().unwrap()
        );
        fs::write(default_dir.join("config.toml"), content).unwrap();

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap());
            }

            let config = parse_config(None).await.unwrap();
            assert_eq!(config.event_path, temp_dir.path().join("event.json"));

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn returns_error_when_no_config_found() {
        let temp_dir = TempDir::new().unwrap();
        let empty_dir = temp_dir.path().join("empty");
        fs::create_dir(&empty_dir).unwrap();

        {
            let _guard = env_lock().lock().await;
            unsafe {
                std::env::remove_var(AGENDA_CONFIG_ENV);
                std::env::set_var("XDG_CONFIG_HOME", empty_dir.to_str().unwrap());
            }

            let result = parse_config(None).await;
            assert!(result.is_err());

            unsafe {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }
}
