//! services/quote/src/adapters/settings_file.rs
//!
//! This module contains the file-backed room settings adapter.
//! It implements the `RoomSettingsSource` port from the `core` crate by reading
//! `<settings_dir>/<room_id>.json`.

use async_trait::async_trait;
use booking_core::ports::{PortError, PortResult, RoomSettingsSource};
use booking_core::RoomSettings;
use futures::future::try_join_all;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that loads room settings from JSON files in one directory.
#[derive(Clone, Debug)]
pub struct FileSettingsAdapter {
    settings_dir: PathBuf,
}

impl FileSettingsAdapter {
    /// Creates a new `FileSettingsAdapter` rooted at `settings_dir`.
    pub fn new(settings_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings_dir: settings_dir.into(),
        }
    }

    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    /// Loads several rooms concurrently, failing on the first room that cannot be loaded.
    pub async fn load_many(&self, room_ids: &[&str]) -> PortResult<Vec<RoomSettings>> {
        try_join_all(room_ids.iter().map(|room_id| self.load_room_settings(room_id))).await
    }

    /// Maps a room id to its settings file, refusing ids that would leave the directory.
    fn settings_path(&self, room_id: &str) -> PortResult<PathBuf> {
        let is_plain_name = !room_id.is_empty()
            && !room_id.contains(['/', '\\'])
            && !room_id.contains("..");
        if !is_plain_name {
            return Err(PortError::NotFound(room_id.to_string()));
        }
        Ok(self.settings_dir.join(format!("{}.json", room_id)))
    }
}

//=========================================================================================
// `RoomSettingsSource` Trait Implementation
//=========================================================================================

#[async_trait]
impl RoomSettingsSource for FileSettingsAdapter {
    async fn load_room_settings(&self, room_id: &str) -> PortResult<RoomSettings> {
        let path = self.settings_path(room_id)?;
        debug!(path = %path.display(), "Loading room settings");

        let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PortError::NotFound(room_id.to_string())
            } else {
                error!("Failed to read room settings {}: {:?}", path.display(), e);
                PortError::Unexpected(e.to_string())
            }
        })?;

        serde_json::from_str(&contents)
            .map_err(|e| PortError::Malformed(format!("{}: {}", room_id, e)))
    }
}
