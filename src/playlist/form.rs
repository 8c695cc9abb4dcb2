//! Settings form state
//!
//! Owns the URL entries, the interval and the store they are persisted to.
//! Loaded once at mount, edited in memory, written back only on a successful
//! apply.

use crate::config::settings::PersistedSettings;
use crate::config::store::{SettingsStore, StorageError};

use super::editor::UrlList;
use super::interval::{Interval, IntervalEdit};
use super::starter::LoopStarter;
use super::validation::{self, Playlist, ValidationError};


/// Result of a successful apply.
#[derive(Debug)]
pub struct Applied {
    pub playlist: Playlist,
    /// The loop was started but the settings could not be written.
    pub save_error: Option<StorageError>,
}


pub struct SettingsForm<S: SettingsStore> {

    urls: UrlList,

    interval: Interval,

    store: S,

    load_error: Option<StorageError>,
}

impl<S: SettingsStore> SettingsForm<S> {

    /// Initialize from whatever `store` holds. An unreadable record is logged
    /// and the form starts from defaults; the error is kept for the host to
    /// report.
    pub fn mount(store: S) -> Self {
        let (record, load_error) = match store.load() {
            Ok(Some(record)) => (record.normalized(), None),
            Ok(None) => (PersistedSettings::default(), None),
            Err(e) => {
                tracing::warn!("Discarding unreadable settings: {}", e);
                (PersistedSettings::default(), Some(e))
            }
        };

        Self {
            urls: UrlList::from_entries(record.urls),
            interval: Interval::from_seconds(record.time_between),
            store,
            load_error,
        }
    }

    pub fn take_load_error(&mut self) -> Option<StorageError> {
        self.load_error.take()
    }

    pub fn entries(&self) -> &[String] {
        self.urls.entries()
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn edit_url(&mut self, index: usize, value: impl Into<String>) {
        self.urls.edit(index, value);
    }

    pub fn edit_interval(&mut self, text: &str) -> IntervalEdit {
        self.interval.edit(text)
    }

    /// Current state as it would be persisted.
    pub fn record(&self) -> PersistedSettings {
        PersistedSettings::new(self.urls.entries().to_vec(), self.interval.seconds())
    }

    /// Replace the in-memory state, e.g. from an imported file. Nothing is
    /// persisted until the next apply.
    pub fn replace(&mut self, record: PersistedSettings) {
        let record = record.normalized();
        self.urls = UrlList::from_entries(record.urls);
        self.interval = Interval::from_seconds(record.time_between);
    }

    /// Validate, start the loop, then persist the raw entries.
    ///
    /// Nothing happens on a validation error. A failed save does not undo
    /// the started loop; it comes back in [`Applied::save_error`].
    pub fn apply(&mut self, starter: &mut impl LoopStarter) -> Result<Applied, ValidationError> {
        let playlist = validation::validate(self.urls.entries(), self.interval)?;

        tracing::info!(
            "Starting loop with {} URLs every {} ms",
            playlist.urls.len(),
            playlist.interval_ms
        );
        starter.start_loop(playlist.urls.clone(), playlist.interval_ms);

        let save_error = self.store.save(&self.record()).err();
        if let Some(e) = &save_error {
            tracing::error!("Failed to persist settings: {}", e);
        }

        Ok(Applied { playlist, save_error })
    }
}
