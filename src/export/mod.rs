//! Export Engine
//!
//! Writes the settings record and the active playlist to files the user
//! picks, and reads settings back in.

use std::path::Path;
use std::fs::File;
use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::settings::PersistedSettings;
use crate::playlist::Playlist;

/// One CSV row per playlist entry
#[derive(Serialize)]
struct PlaylistRow<'a> {
    position: usize,
    url: &'a str,
    interval_ms: u64,
}

/// Export engine functions
pub struct ExportEngine;

impl ExportEngine {
    /// Suggested file name, stamped with the local time
    pub fn suggested_file_name(stem: &str, extension: &str) -> String {
        format!("{}_{}.{}", stem, chrono::Local::now().format("%Y%m%d_%H%M%S"), extension)
    }

    /// Export the settings record as pretty JSON, same shape as the stored one
    pub fn export_settings_json(record: &PersistedSettings, path: &Path) -> Result<()> {
        let file = File::create(path).context("Failed to create JSON file")?;
        serde_json::to_writer_pretty(file, record)
            .context("Failed to write JSON data")?;
        tracing::info!("Exported settings to {:?}", path);
        Ok(())
    }

    /// Read a settings record previously exported (or copied from the store)
    pub fn import_settings_json(path: &Path) -> Result<PersistedSettings> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let record: PersistedSettings = serde_json::from_str(&content)
            .context("File is not a settings record")?;
        tracing::info!("Imported {} URL entries from {:?}", record.urls.len(), path);
        Ok(record.normalized())
    }

    /// Export the active playlist to CSV, positions starting at 1
    pub fn export_playlist_csv(playlist: &Playlist, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .context("Failed to create CSV writer")?;

        for (i, url) in playlist.urls.iter().enumerate() {
            wtr.serialize(PlaylistRow {
                position: i + 1,
                url,
                interval_ms: playlist.interval_ms,
            })
            .context("Failed to serialize row to CSV")?;
        }

        wtr.flush().context("Failed to flush CSV writer")?;
        tracing::info!("Exported {} playlist entries to {:?}", playlist.urls.len(), path);
        Ok(())
    }
}
