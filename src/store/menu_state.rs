//! Persisted sidebar state: expanded sections, selected item, scroll offset

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::backend::StorageBackend;
use super::debounce::ScrollDebounce;
use super::error::{StoreError, StoreResult};

pub const MENU_STATE_KEY: &str = "petpooja-menu-state";

/// Serialized as `{"expandedSections":[..],"selectedItem":..,"scrollPosition":N}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuState {
    pub expanded_sections: Vec<String>,
    pub selected_item: Option<String>,
    pub scroll_position: u64,
}

impl MenuState {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let mut state: MenuState = serde_json::from_str(raw)?;
        state.dedup_sections();
        Ok(state)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded_sections.iter().any(|k| k == key)
    }

    /// Adds `key` if absent, removes it otherwise. Returns the new membership.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.is_expanded(key) {
            self.expanded_sections.retain(|k| k != key);
            false
        } else {
            self.expanded_sections.push(key.to_string());
            true
        }
    }

    fn dedup_sections(&mut self) {
        let mut seen = std::collections::BTreeSet::new();
        self.expanded_sections.retain(|key| seen.insert(key.clone()));
    }
}

/// Single owner of [`MenuState`]. Every committed change is written through
/// `B` once [`load`](Self::load) has run; storage failures are logged and
/// never returned to callers.
#[derive(Debug)]
pub struct MenuStateStore<B: StorageBackend> {
    backend: B,
    key: String,
    state: MenuState,
    loaded: bool,
    scroll: ScrollDebounce,
}

impl<B: StorageBackend> MenuStateStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, MENU_STATE_KEY, ScrollDebounce::default().quiet_period())
    }

    pub fn with_options(backend: B, key: impl Into<String>, scroll_quiet: Duration) -> Self {
        Self {
            backend,
            key: key.into(),
            state: MenuState::default(),
            loaded: false,
            scroll: ScrollDebounce::new(scroll_quiet),
        }
    }

    /// Restores the persisted record. Missing, unreadable or malformed data
    /// leaves the defaults in place. The store counts as loaded either way.
    pub fn load(&mut self) {
        self.state = match self.read_persisted() {
            Ok(Some(state)) => {
                debug!(key = %self.key, "restored menu state");
                state
            }
            Ok(None) => MenuState::default(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding persisted menu state");
                MenuState::default()
            }
        };
        self.loaded = true;
    }

    fn read_persisted(&self) -> StoreResult<Option<MenuState>> {
        let Some(raw) = self.backend.read(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(MenuState::from_json(&raw)?))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn expanded_sections(&self) -> &[String] {
        &self.state.expanded_sections
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.state.is_expanded(key)
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.state.selected_item.as_deref()
    }

    /// Last committed offset; a debounced offset is not visible until it fires
    pub fn scroll_position(&self) -> u64 {
        self.state.scroll_position
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.scroll.is_pending()
    }

    pub fn toggle_section(&mut self, key: &str) -> bool {
        let expanded = self.state.toggle(key);
        self.save();
        expanded
    }

    pub fn set_selected_item(&mut self, item: Option<String>) {
        self.state.selected_item = item;
        self.save();
    }

    /// Schedules `offset` to be committed after the quiet period. A newer
    /// call before then replaces it.
    pub fn set_scroll_position(&mut self, offset: u64, now: Instant) {
        self.scroll.arm(offset, now);
    }

    /// Commits a due scroll offset. Returns true if one was committed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.scroll.due(now) {
            Some(offset) => {
                self.commit_scroll(offset);
                true
            }
            None => false,
        }
    }

    /// Commits any pending scroll offset immediately
    pub fn flush(&mut self) {
        if let Some(offset) = self.scroll.take() {
            self.commit_scroll(offset);
        }
    }

    fn commit_scroll(&mut self, offset: u64) {
        if self.state.scroll_position == offset {
            return;
        }
        self.state.scroll_position = offset;
        self.save();
    }

    /// Writes the full record. A no-op until the store has loaded.
    pub fn save(&mut self) {
        if !self.loaded {
            return;
        }
        let result = self
            .state
            .to_json()
            .map_err(StoreError::from)
            .and_then(|json| self.backend.write(&self.key, &json));
        if let Err(err) = result {
            warn!(key = %self.key, error = %err, "failed to persist menu state");
        }
    }

    /// Resets to defaults and removes the persisted record
    pub fn clear(&mut self) {
        self.scroll.cancel();
        self.state = MenuState::default();
        if let Err(err) = self.backend.clear(&self.key) {
            warn!(key = %self.key, error = %err, "failed to remove menu state");
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}
