// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use agenda_core::Event;
use chrono::Local;
use tokio::fs;

/// Owns persistence of the event whose schedule is being edited. Commands
/// only ever hand it whole updated copies, never partial edits.
#[derive(Debug, Clone)]
pub struct JsonEventHost {
    path: PathBuf,
}

impl JsonEventHost {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the event, or starts a fresh one dated today when no file
    /// exists yet.
    pub async fn load(&self) -> Result<Event, Box<dyn Error>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no event file, starting fresh");
                Ok(Event::new(Local::now().date_naive()))
            }
            Err(e) => {
                Err(format!("Failed to read event file at {}: {}", self.path.display(), e).into())
            }
        }
    }

    pub async fn update(&self, event: &Event) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(event)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| format!("Failed to write event file at {}: {}", self.path.display(), e))?;
        Ok(())
    }
}
