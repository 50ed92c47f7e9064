use super::Language;
use super::Snippet;

/// One finished generation. Never changes after it's recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub language: Language,
    pub request: String,
    pub code: String,
    pub explanation: String,
}

impl HistoryEntry {
    pub fn new(language: Language, request: &str, snippet: &Snippet) -> HistoryEntry {
        return HistoryEntry {
            language,
            request: request.to_string(),
            code: snippet.code.to_string(),
            explanation: snippet.explanation.to_string(),
        };
    }

    pub fn snippet(&self) -> Snippet {
        return Snippet::new(&self.code, &self.explanation);
    }
}

/// A row of the history list. `index` is the entry's position within the
/// history window, which stays valid when the list is filtered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryItem {
    pub index: usize,
    pub language: Language,
    pub request: String,
}

impl HistoryItem {
    pub fn label(&self) -> String {
        return format!("{}: {}", self.language, self.request);
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        return self.request.to_lowercase().contains(&query)
            || self.language.to_string().to_lowercase().contains(&query);
    }
}

/// What the history pane renders: the rows left after filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub query: String,
    pub items: Vec<HistoryItem>,
}
