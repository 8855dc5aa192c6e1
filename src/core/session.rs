//! # Session Persistence
//!
//! Save/restore the last session's `{active_screen, selected_cards}` to a
//! single JSON file under the state directory. One slot, no history: every
//! save overwrites the previous snapshot.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety. There is no versioning, no migration, and no retry: a missing,
//! unreadable, or malformed snapshot is indistinguishable from "no prior
//! session".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cards::find_card;
use crate::core::state::{App, Screen};

/// File name of the single "last session" slot.
pub const SESSION_FILE: &str = "session.json";

/// The persisted snapshot. Stored JSON uses camelCase field names
/// (`activeScreen` / `selectedCards`); existing snapshot files depend on
/// them, so they are part of the format. Every field is optional so a
/// partial snapshot merges over in-memory defaults instead of failing.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub active_screen: Option<Screen>,
    #[serde(default)]
    pub selected_cards: Option<Vec<String>>,
    /// When the snapshot was written (unix seconds). Informational only;
    /// the restore merge ignores it.
    #[serde(default)]
    pub saved_at: Option<i64>,
}

impl SessionSnapshot {
    pub fn of_app(app: &App) -> Self {
        Self {
            active_screen: Some(app.active_screen),
            selected_cards: Some(app.selection.ids().to_vec()),
            saved_at: Some(Utc::now().timestamp()),
        }
    }

    /// Split the stored ids into the ones that still resolve and a count of
    /// dropped stale ids (cards removed from the dataset since the snapshot
    /// was written). Returns `None` when the snapshot carries no id list.
    pub fn sanitized_ids(&self) -> Option<(Vec<String>, usize)> {
        let ids = self.selected_cards.as_ref()?;
        let mut valid = Vec::with_capacity(ids.len());
        let mut dropped = 0;
        for id in ids {
            if find_card(id).is_ok() {
                valid.push(id.clone());
            } else {
                warn!("persisted selection references unknown card id {id:?}, dropping");
                dropped += 1;
            }
        }
        Some((valid, dropped))
    }
}

/// Returns `~/.nvc-cards/`, the default state directory. Falls back to a
/// relative `.nvc-cards/` when no home directory can be determined.
pub fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".nvc-cards"))
        .unwrap_or_else(|| PathBuf::from(".nvc-cards"))
}

/// Path of the session slot inside a state directory.
pub fn session_path(state_dir: &Path) -> PathBuf {
    state_dir.join(SESSION_FILE)
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename),
/// creating the parent directory if needed.
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn save_snapshot(path: &Path, snapshot: &SessionSnapshot) -> io::Result<()> {
    atomic_write_json(path, snapshot)
}

/// Load the snapshot, treating any failure as "no prior session". A missing
/// file is the expected first-launch case; a malformed one is logged.
pub fn load_snapshot(path: &Path) -> Option<SessionSnapshot> {
    if !path.exists() {
        debug!("no session snapshot at {}", path.display());
        return None;
    }
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            warn!("failed to read session snapshot: {err}");
            return None;
        }
    };
    match serde_json::from_str(&json) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            warn!("malformed session snapshot, starting fresh: {err}");
            None
        }
    }
}

/// Persist the current session, logging and otherwise ignoring failures.
/// This is the single entry point the TUI uses on focus loss and quit.
pub fn persist_session(app: &App, path: &Path) {
    let snapshot = SessionSnapshot::of_app(app);
    if let Err(err) = save_snapshot(path, &snapshot) {
        warn!("failed to save session: {err}");
    } else {
        debug!("session saved to {}", path.display());
    }
}
