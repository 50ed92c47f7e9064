#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;

use super::Language;

/// Running plain text log of the current chat, shown in the conversation
/// pane and written out by "save conversation".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    fn timestamp(time: &DateTime<Local>) -> String {
        return time.format("%H:%M:%S").to_string();
    }

    pub fn push_request(&mut self, time: &DateTime<Local>, language: Language, request: &str) {
        let ts = Transcript::timestamp(time);
        self.text += &format!("[{ts}] You ({language}): {request}\n");
    }

    pub fn push_response(&mut self, time: &DateTime<Local>, response: &str) {
        let ts = Transcript::timestamp(time);
        self.text += &format!("[{ts}] AI Response:\n{response}\n\n");
    }

    pub fn as_str(&self) -> &str {
        return &self.text;
    }

    pub fn is_empty(&self) -> bool {
        return self.text.trim().is_empty();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
