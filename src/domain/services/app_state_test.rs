use std::fs;
use std::path;

use anyhow::Result;
use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;
use tempdir::TempDir;
use test_utils::completion_fixture;
use test_utils::completion_fixture_with_colon;

use super::help_text;
use super::AppState;
use crate::domain::models::Focus;
use crate::domain::models::Language;
use crate::domain::models::NoticeType;
use crate::domain::models::Palette;
use crate::domain::models::SlashCommand;
use crate::domain::services::Exports;

fn fixed_time() -> DateTime<Local> {
    return Local.with_ymd_and_hms(2025, 10, 9, 14, 56, 46).unwrap();
}

fn app_state(output_dir: path::PathBuf) -> AppState {
    return AppState::new(
        "alice",
        Language::Python,
        Palette::Dark,
        Exports::new(output_dir),
    );
}

fn generate(state: &mut AppState, request: &str, raw: &str) {
    let request = state.submit_request(request).unwrap();
    state.handle_completion(&request, raw, &fixed_time());
}

#[test]
fn it_rejects_an_empty_request() {
    let mut state = app_state(path::PathBuf::from("."));

    let res = state.submit_request("   \n ");

    assert!(res.is_none());
    assert!(!state.waiting_for_backend);
    let notice = state.notice.unwrap();
    assert_eq!(notice.notice_type(), NoticeType::Error);
    assert_eq!(notice.title, "Input Error");
    assert_eq!(notice.text, "Please enter a request.");
}

#[test]
fn it_submits_a_trimmed_request() {
    let mut state = app_state(path::PathBuf::from("."));

    let res = state.submit_request("  reverse a string\n");

    assert_eq!(res.unwrap(), "reverse a string");
    assert!(state.waiting_for_backend);
    assert_eq!(state.session.working().request, "reverse a string");
}

#[test]
fn it_records_a_successful_completion() {
    let mut state = app_state(path::PathBuf::from("."));

    generate(&mut state, "reverse a string", &completion_fixture());

    assert!(!state.waiting_for_backend);
    assert!(state.reset_request);
    assert_eq!(state.session.len(), 1);
    assert!(state.snippet().code.contains("def reverse(text):"));
    assert!(state
        .snippet()
        .explanation
        .starts_with("Slicing with a step of -1"));

    let history = state.history();
    assert_eq!(history.items.len(), 1);
    assert_eq!(history.items[0].label(), "Python: reverse a string");
}

#[test]
fn it_writes_both_sides_to_the_transcript() {
    let mut state = app_state(path::PathBuf::from("."));

    generate(&mut state, "count to ten", "for i in range(11): print(i)");

    assert_eq!(
        state.session.working().transcript.as_str(),
        "[14:56:46] You (Python): count to ten\n[14:56:46] AI Response:\nfor i in range(11): print(i)\n\n"
    );
}

#[test]
fn it_does_not_record_failed_completions() {
    let mut state = app_state(path::PathBuf::from("."));

    generate(&mut state, "reverse a string", "Error: 401 Unauthorized");

    assert_eq!(state.session.len(), 0);
    assert_eq!(state.snippet().code, "Error: 401 Unauthorized");
    assert_eq!(state.snippet().explanation, "");
    assert!(!state.session.working().transcript.is_empty());
}

#[test]
fn it_uses_the_selected_language_for_history() {
    let mut state = app_state(path::PathBuf::from("."));
    state.set_language(Language::Go);

    generate(&mut state, "count to ten", &completion_fixture_with_colon());

    assert_eq!(state.history().items[0].language, Language::Go);
    assert_eq!(
        state.snippet().explanation,
        "The loop runs from 0 to 10 inclusive and prints each number."
    );
}

#[test]
fn it_loads_history_under_a_filter() {
    let mut state = app_state(path::PathBuf::from("."));
    generate(&mut state, "reverse a string", "code one # Explanation one");
    state.set_language(Language::Go);
    generate(&mut state, "count to ten", "code two # Explanation two");
    state.new_chat();

    state.set_search_query("GO");
    assert_eq!(state.history().items.len(), 1);

    let item = state.load_history_cursor().unwrap();
    assert_eq!(item.index, 1);
    assert_eq!(state.session.working().request, "count to ten");
    assert_eq!(state.language(), Language::Go);
    assert_eq!(state.snippet().code, "code two");
    assert_eq!(state.snippet().explanation, "two");
}

#[test]
fn it_clamps_the_history_cursor() {
    let mut state = app_state(path::PathBuf::from("."));
    generate(&mut state, "one", "a");
    generate(&mut state, "two", "b");

    assert_eq!(state.history_cursor, 1);
    state.history_down();
    assert_eq!(state.history_cursor, 1);
    state.history_up();
    state.history_up();
    assert_eq!(state.history_cursor, 0);

    let item = state.load_history_cursor().unwrap();
    assert_eq!(item.request, "one");
}

#[test]
fn it_ignores_loading_from_an_empty_history() {
    let mut state = app_state(path::PathBuf::from("."));
    assert!(state.load_history_cursor().is_none());
}

#[test]
fn it_starts_a_new_chat_keeping_history() {
    let mut state = app_state(path::PathBuf::from("."));
    state.set_language(Language::Ruby);
    generate(&mut state, "reverse a string", &completion_fixture());

    state.new_chat();

    assert_eq!(state.session.len(), 1);
    assert_eq!(state.language(), Language::Python);
    assert!(state.snippet().is_empty());
    assert!(state.session.working().transcript.is_empty());
}

#[test]
fn it_clears_only_after_confirmation() {
    let mut state = app_state(path::PathBuf::from("."));
    generate(&mut state, "reverse a string", &completion_fixture());

    state.request_clear();
    assert!(state.confirm_clear);
    state.confirm_clear(false);
    assert!(!state.confirm_clear);
    assert_eq!(state.session.len(), 1);

    state.request_clear();
    state.confirm_clear(true);
    assert_eq!(state.session.len(), 0);
    assert!(state.session.working().transcript.is_empty());
}

#[test]
fn it_refuses_to_copy_nothing() {
    let mut state = app_state(path::PathBuf::from("."));

    state.copy_code();
    assert_eq!(state.notice.as_ref().unwrap().text, "No code to copy!");

    state.copy_explanation();
    assert_eq!(
        state.notice.as_ref().unwrap().text,
        "No explanation to copy!"
    );
}

#[test]
fn it_cycles_language_and_theme() {
    let mut state = app_state(path::PathBuf::from("."));

    state.next_language();
    assert_eq!(state.language(), Language::Java);

    state.toggle_theme();
    assert_eq!(state.palette, Palette::Light);
    state.toggle_theme();
    assert_eq!(state.palette, Palette::Dark);
    assert_eq!(state.focus, Focus::Request);
}

#[tokio::test]
async fn it_saves_code_and_conversation() -> Result<()> {
    let tmp_dir = TempDir::new("app_state")?;
    let mut state = app_state(tmp_dir.path().to_path_buf());
    state.set_language(Language::C);
    generate(&mut state, "hello world", "int main() {} # Explanation empty main");

    state.save_code(&fixed_time()).await;
    let notice = state.notice.take().unwrap();
    assert_eq!(notice.notice_type(), NoticeType::Info);
    assert_eq!(
        fs::read_to_string(tmp_dir.path().join("code_20251009_145646.c"))?,
        "int main() {}"
    );

    state.save_conversation(&fixed_time()).await;
    assert_eq!(state.notice.unwrap().notice_type(), NoticeType::Info);
    let conversation =
        fs::read_to_string(tmp_dir.path().join("conversation_20251009_145646.txt"))?;
    assert!(conversation.starts_with("[14:56:46] You (C): hello world\n"));
    return Ok(());
}

#[tokio::test]
async fn it_shows_an_error_when_there_is_nothing_to_save() -> Result<()> {
    let tmp_dir = TempDir::new("app_state")?;
    let mut state = app_state(tmp_dir.path().to_path_buf());

    state.save_code(&fixed_time()).await;
    assert_eq!(state.notice.take().unwrap().text, "No code to save!");

    state.save_conversation(&fixed_time()).await;
    assert_eq!(state.notice.unwrap().text, "No conversation to save!");
    return Ok(());
}

#[tokio::test]
async fn it_handles_slash_commands() -> Result<()> {
    let mut state = app_state(path::PathBuf::from("."));
    let time = fixed_time();

    let quit = SlashCommand::parse("/quit").unwrap();
    assert!(state.handle_slash_command(&quit, &time).await?);

    let lang = SlashCommand::parse("/lang c++").unwrap();
    assert!(!state.handle_slash_command(&lang, &time).await?);
    assert_eq!(state.language(), Language::Cpp);

    let bad_lang = SlashCommand::parse("/lang cobol").unwrap();
    state.handle_slash_command(&bad_lang, &time).await?;
    assert_eq!(state.notice.take().unwrap().notice_type(), NoticeType::Error);
    assert_eq!(state.language(), Language::Cpp);

    let theme = SlashCommand::parse("/theme").unwrap();
    state.handle_slash_command(&theme, &time).await?;
    assert_eq!(state.palette, Palette::Light);

    let clear = SlashCommand::parse("/clear").unwrap();
    state.handle_slash_command(&clear, &time).await?;
    assert!(state.confirm_clear);

    let help = SlashCommand::parse("/help").unwrap();
    state.handle_slash_command(&help, &time).await?;
    assert_eq!(state.notice.unwrap().text, help_text());
    return Ok(());
}

#[test]
fn it_lists_every_slash_command_in_help() {
    let text = help_text();
    for command in ["/lang", "/copy", "/save", "/theme", "/new", "/clear", "/quit", "/help"] {
        assert!(text.contains(command), "missing {command}");
    }
}
