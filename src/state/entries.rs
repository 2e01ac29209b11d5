//! Dashboard entry-list state.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use crate::net::types::JournalEntry;

/// Entry list with generation-guarded loads.
///
/// Loads carry a monotonically increasing generation tag so a slow
/// response cannot clobber the result of a later refresh: completions
/// whose generation is stale are discarded. Requests themselves are
/// never cancelled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntriesState {
    pub items: Vec<JournalEntry>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl EntriesState {
    /// Start a load and return its generation tag.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a finished load. Returns false (and changes nothing)
    /// when a newer load has started since `generation` was issued.
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<Vec<JournalEntry>, String>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Drop one entry locally after a confirmed delete; no reload.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|entry| entry.id != id);
    }

    /// Case-insensitive substring filter over title and content.
    pub fn filtered(&self, term: &str) -> Vec<JournalEntry> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&term)
                    || entry.content.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }
}
