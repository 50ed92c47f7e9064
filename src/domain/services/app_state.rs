#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use chrono::DateTime;
use chrono::Local;

use super::clipboard::ClipboardService;
use super::Completions;
use super::Exports;
use super::Scroll;
use super::Session;
use crate::domain::models::Focus;
use crate::domain::models::HistoryItem;
use crate::domain::models::HistorySnapshot;
use crate::domain::models::Language;
use crate::domain::models::Notice;
use crate::domain::models::Palette;
use crate::domain::models::SlashCommand;
use crate::domain::models::Snippet;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /lang (/l) [LANGUAGE?] - Selects the target language. Without a LANGUAGE, moves to the next one in the list.
- /copy (/c) [code,explanation?] - Copies the current code, or the explanation, to your clipboard.
- /save (/s) [code,conversation?] - Saves the current code, or the whole conversation, to the output directory.
- /theme (/t) - Switches between the dark and light theme.
- /new (/n) - Starts a new chat. History is kept.
- /clear - Clears the whole history after confirmation.
- /quit /exit (/q) - Exit Snipsmith.
- /help (/h) - Provides this help menu.

HOTKEYS:
- Enter - Generate a snippet for the request
- Tab - Move focus between request, search and history
- Up/Down arrow - Move through the history list
- PageUp/PageDown - Scroll the code pane
- CTRL+L - Next language
- CTRL+Y - Copy code
- CTRL+E - Copy explanation
- CTRL+S - Save code
- CTRL+O - Save conversation
- CTRL+T - Toggle theme
- CTRL+N - New chat
- CTRL+X - Clear history
- CTRL+C - Exit
        "#;

    return text.trim().to_string();
}

/// Everything the generator screen renders, minus the input widgets.
pub struct AppState {
    pub session: Session,
    pub exports: Exports,
    pub palette: Palette,
    pub focus: Focus,
    pub username: String,
    pub search_query: String,
    pub history_cursor: usize,
    pub notice: Option<Notice>,
    pub confirm_clear: bool,
    pub waiting_for_backend: bool,
    pub reset_request: bool,
    pub code_scroll: Scroll,
}

impl AppState {
    pub fn new(
        username: &str,
        default_language: Language,
        palette: Palette,
        exports: Exports,
    ) -> AppState {
        return AppState {
            session: Session::new(default_language),
            exports,
            palette,
            focus: Focus::default(),
            username: username.to_string(),
            search_query: "".to_string(),
            history_cursor: 0,
            notice: None,
            confirm_clear: false,
            waiting_for_backend: false,
            reset_request: false,
            code_scroll: Scroll::default(),
        };
    }

    pub fn language(&self) -> Language {
        return self.session.working().language;
    }

    pub fn snippet(&self) -> &Snippet {
        return &self.session.working().snippet;
    }

    pub fn history(&self) -> HistorySnapshot {
        return self.session.snapshot(&self.search_query);
    }

    /// Validates the request text. Returns the trimmed request when a
    /// generation should run.
    pub fn submit_request(&mut self, text: &str) -> Option<String> {
        let request = text.trim();
        if request.is_empty() {
            self.notice = Some(Notice::error("Input Error", "Please enter a request."));
            return None;
        }

        let working = self.session.working_mut();
        working.request = request.to_string();
        working.snippet = Snippet::default();
        self.waiting_for_backend = true;

        return Some(request.to_string());
    }

    /// Applies a finished completion. Failed generations are shown and logged
    /// to the transcript but never recorded to history.
    pub fn handle_completion(&mut self, request: &str, raw: &str, time: &DateTime<Local>) {
        self.waiting_for_backend = false;
        self.code_scroll.reset();

        let language = self.language();
        let working = self.session.working_mut();
        working.transcript.push_request(time, language, request);
        working.transcript.push_response(time, raw);

        if Completions::is_error(raw) {
            working.snippet = Snippet::new(raw.trim(), "");
            return;
        }

        let snippet = Snippet::split(raw);
        working.snippet = snippet.clone();
        self.session
            .record(language, request, &snippet.code, &snippet.explanation);
        self.reset_request = true;

        let items = self.history().items;
        self.history_cursor = items.len().saturating_sub(1);
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.history_cursor = 0;
    }

    pub fn history_up(&mut self) {
        self.history_cursor = self.history_cursor.saturating_sub(1);
    }

    pub fn history_down(&mut self) {
        let len = self.history().items.len();
        if self.history_cursor + 1 < len {
            self.history_cursor += 1;
        }
    }

    /// Loads the highlighted history row into the working state.
    pub fn load_history_cursor(&mut self) -> Option<HistoryItem> {
        let item = self.history().items.get(self.history_cursor)?.clone();
        self.session.select(item.index)?;
        self.code_scroll.reset();
        self.reset_request = true;

        return Some(item);
    }

    pub fn set_language(&mut self, language: Language) {
        self.session.working_mut().language = language;
    }

    pub fn next_language(&mut self) {
        let language = self.language().next();
        self.set_language(language);
    }

    fn copy(&mut self, text: &str, what: &str) {
        if text.trim().is_empty() {
            self.notice = Some(Notice::error("Error", &format!("No {what} to copy!")));
            return;
        }

        match ClipboardService::set(text.to_string()) {
            Ok(()) => {
                self.notice = Some(Notice::info(
                    "Copied",
                    &format!("{} copied to clipboard!", capitalize(what)),
                ));
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", &err.to_string()));
            }
        }
    }

    pub fn copy_code(&mut self) {
        let code = self.snippet().code.to_string();
        self.copy(&code, "code");
    }

    pub fn copy_explanation(&mut self) {
        let explanation = self.snippet().explanation.to_string();
        self.copy(&explanation, "explanation");
    }

    pub async fn save_code(&mut self, time: &DateTime<Local>) {
        let res = self
            .exports
            .save_code(&self.snippet().code, self.language(), time)
            .await;

        match res {
            Ok(file_path) => {
                self.notice = Some(Notice::info(
                    "Saved",
                    &format!("Code saved as {}", file_path.to_string_lossy()),
                ));
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", &err.to_string()));
            }
        }
    }

    pub async fn save_conversation(&mut self, time: &DateTime<Local>) {
        let res = self
            .exports
            .save_conversation(self.session.working().transcript.as_str(), time)
            .await;

        match res {
            Ok(file_path) => {
                self.notice = Some(Notice::info(
                    "Saved",
                    &format!("Conversation saved as {}", file_path.to_string_lossy()),
                ));
            }
            Err(err) => {
                self.notice = Some(Notice::error("Error", &err.to_string()));
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.palette = self.palette.toggle();
    }

    pub fn new_chat(&mut self) {
        self.session.start_new();
        self.code_scroll.reset();
        self.reset_request = true;
    }

    pub fn request_clear(&mut self) {
        self.confirm_clear = true;
    }

    /// Only a confirmed request clears. Any answer closes the prompt.
    pub fn confirm_clear(&mut self, confirmed: bool) {
        self.confirm_clear = false;
        if !confirmed {
            return;
        }

        self.session.clear();
        self.history_cursor = 0;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Returns true when the command asks to quit.
    pub async fn handle_slash_command(
        &mut self,
        command: &SlashCommand,
        time: &DateTime<Local>,
    ) -> Result<bool> {
        if command.is_quit() {
            return Ok(true);
        }

        if command.is_help() {
            self.notice = Some(Notice::info("Help", &help_text()));
        } else if command.is_language() {
            let name = command.args.join(" ");
            if name.is_empty() {
                self.next_language();
            } else if let Some(language) = Language::parse(&name) {
                self.set_language(language);
            } else {
                self.notice = Some(Notice::error(
                    "Error",
                    &format!("Unknown language {name}. Run `snipsmith debug languages` for the full list."),
                ));
            }
        } else if command.is_copy_code() {
            self.copy_code();
        } else if command.is_copy_explanation() {
            self.copy_explanation();
        } else if command.is_save_code() {
            self.save_code(time).await;
        } else if command.is_save_conversation() {
            self.save_conversation(time).await;
        } else if command.is_theme() {
            self.toggle_theme();
        } else if command.is_new_chat() {
            self.new_chat();
        } else if command.is_clear_history() {
            self.request_clear();
        }

        self.reset_request = true;
        return Ok(false);
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    return match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => "".to_string(),
    };
}
