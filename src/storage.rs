//! Narrow key-value persistence: three logical keys (roster, current
//! tournament, pending selection) behind a caller-injected store, so the
//! engine and the tests never touch ambient state.

use crate::models::{Player, PlayerId, Tournament};
use std::collections::HashMap;

/// Key for the player roster (JSON array of players).
pub const PLAYERS_KEY: &str = "players";
/// Key for the current tournament (absent until a draw happens).
pub const TOURNAMENT_KEY: &str = "tournament";
/// Key for the pending-selection list (player ids for the next draw).
pub const SELECTION_KEY: &str = "selection";

/// Most players that can sit on the pending-selection list.
pub const SELECTION_CAP: usize = 20;

/// Minimal get/set/remove by key. Single-key atomicity only; callers write
/// back whole aggregates after each operation.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store used by the web binary and the tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Typed access to the three logical keys. Absent or unparsable values read
/// as empty/absent; writes replace the whole value under the key.
#[derive(Debug, Default)]
pub struct Repository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn players(&self) -> Vec<Player> {
        self.read_or_default(PLAYERS_KEY)
    }

    pub fn save_players(&mut self, players: &[Player]) {
        self.write(PLAYERS_KEY, players);
    }

    pub fn tournament(&self) -> Option<Tournament> {
        self.store
            .get(TOURNAMENT_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
    }

    pub fn save_tournament(&mut self, tournament: &Tournament) {
        self.write(TOURNAMENT_KEY, tournament);
    }

    pub fn clear_tournament(&mut self) {
        self.store.remove(TOURNAMENT_KEY);
    }

    pub fn selection(&self) -> Vec<PlayerId> {
        self.read_or_default(SELECTION_KEY)
    }

    /// Add a player id to the pending selection. A duplicate id or a full
    /// list (20 entries) is a no-op; returns whether the id was added.
    pub fn add_to_selection(&mut self, player_id: PlayerId) -> bool {
        let mut selection = self.selection();
        if selection.contains(&player_id) || selection.len() >= SELECTION_CAP {
            return false;
        }
        selection.push(player_id);
        self.write(SELECTION_KEY, &selection);
        true
    }

    pub fn remove_from_selection(&mut self, player_id: PlayerId) {
        let mut selection = self.selection();
        selection.retain(|id| *id != player_id);
        self.write(SELECTION_KEY, &selection);
    }

    pub fn clear_selection(&mut self) {
        self.store.remove(SELECTION_KEY);
    }

    /// Wipe all three keys (roster included).
    pub fn clear_all(&mut self) {
        self.store.remove(PLAYERS_KEY);
        self.store.remove(TOURNAMENT_KEY);
        self.store.remove(SELECTION_KEY);
    }

    fn read_or_default<T: serde::de::DeserializeOwned + Default>(&self, key: &str) -> T {
        self.store
            .get(key)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    fn write<T: serde::Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            self.store.set(key, json);
        }
    }
}
