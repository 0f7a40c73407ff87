//! The user's working set of ingredient names.
//!
//! Members are stored verbatim (no case folding) and are unique by exact
//! string comparison. Iteration follows insertion order so the tags render
//! in the order the user picked them.

use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStore {
    items: Vec<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every comma-separated piece of `raw_text`. Pieces are trimmed and
    /// empty ones are dropped. Returns how many new members were added.
    pub fn add_many(&mut self, raw_text: &str) -> usize {
        raw_text
            .split(',')
            .map(str::trim)
            .filter(|piece| self.add(*piece))
            .count()
    }

    /// Add `name` exactly as given. Empty names and existing members are
    /// ignored. Returns `true` if the selection changed.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() || self.contains(&name) {
            return false;
        }
        info!("Added: {}", name);
        self.items.push(name);
        true
    }

    /// Remove `name` if present. Returns `true` if the selection changed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.items.iter().position(|item| item == name) {
            Some(pos) => {
                self.items.remove(pos);
                info!("Removed: {}", name);
                true
            }
            None => false,
        }
    }

    /// Current members in insertion order.
    pub fn all(&self) -> &[String] {
        &self.items
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}
