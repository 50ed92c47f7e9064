#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use crate::domain::models::HistoryEntry;
use crate::domain::models::HistoryItem;
use crate::domain::models::HistorySnapshot;
use crate::domain::models::Language;
use crate::domain::models::Snippet;
use crate::domain::models::Transcript;

/// Number of most recent entries shown and searchable in the history pane.
pub const HISTORY_WINDOW: usize = 50;

/// What the generator screen currently shows. Selecting a history entry or
/// finishing a generation overwrites it; `start_new` resets it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkingState {
    pub language: Language,
    pub request: String,
    pub snippet: Snippet,
    pub transcript: Transcript,
}

/// In-memory history of every generation in this process plus the working
/// state. The full history is kept. Only the last `HISTORY_WINDOW` entries
/// are exposed for listing, filtering and selection.
pub struct Session {
    entries: Vec<HistoryEntry>,
    working: WorkingState,
    default_language: Language,
}

impl Default for Session {
    fn default() -> Session {
        return Session::new(Language::default());
    }
}

impl Session {
    pub fn new(default_language: Language) -> Session {
        return Session {
            entries: vec![],
            working: WorkingState {
                language: default_language,
                ..WorkingState::default()
            },
            default_language,
        };
    }

    pub fn record(&mut self, language: Language, request: &str, code: &str, explanation: &str) {
        self.entries.push(HistoryEntry::new(
            language,
            request,
            &Snippet::new(code, explanation),
        ));
        tracing::debug!(
            language = language.to_string(),
            total = self.len(),
            "Recorded history entry"
        );
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    fn window(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(limit);
        return &self.entries[start..];
    }

    /// The most recent `limit` entries, oldest first.
    pub fn list_visible(&self, limit: usize) -> Vec<HistoryItem> {
        return self
            .window(limit)
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                return HistoryItem {
                    index,
                    language: entry.language,
                    request: entry.request.to_string(),
                };
            })
            .collect();
    }

    /// Case-insensitive substring match on language or request, within the
    /// history window only. Order is preserved.
    pub fn filter(&self, query: &str) -> Vec<HistoryItem> {
        return self
            .list_visible(HISTORY_WINDOW)
            .into_iter()
            .filter(|item| return item.matches(query))
            .collect();
    }

    /// Loads the entry at `index` within the history window into the working
    /// state. Out of range does nothing and returns `None`.
    pub fn select(&mut self, index: usize) -> Option<HistoryEntry> {
        let entry = self.window(HISTORY_WINDOW).get(index)?.clone();

        self.working.language = entry.language;
        self.working.request = entry.request.to_string();
        self.working.snippet = entry.snippet();

        return Some(entry);
    }

    /// Drops every entry and the transcript. Not reversible.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.working.transcript.clear();
        tracing::info!("Cleared session history");
    }

    /// Resets the working state but keeps the history.
    pub fn start_new(&mut self) {
        self.working = WorkingState {
            language: self.default_language,
            ..WorkingState::default()
        };
    }

    pub fn working(&self) -> &WorkingState {
        return &self.working;
    }

    pub fn working_mut(&mut self) -> &mut WorkingState {
        return &mut self.working;
    }

    pub fn snapshot(&self, query: &str) -> HistorySnapshot {
        return HistorySnapshot {
            query: query.to_string(),
            items: self.filter(query),
        };
    }
}
