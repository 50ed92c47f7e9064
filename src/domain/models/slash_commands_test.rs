use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    assert!(SlashCommand::parse("").is_none());
}

#[test]
fn it_parse_space_only() {
    assert!(SlashCommand::parse(" ").is_none());
}

#[test]
fn it_parse_single_slash() {
    assert!(SlashCommand::parse("/").is_none());
}

#[test]
fn it_parse_invalid_prefix() {
    assert!(SlashCommand::parse("!q").is_none());
}

#[test]
fn it_parse_plain_request() {
    assert!(SlashCommand::parse("write a quicksort in C").is_none());
}

#[test]
fn it_parse_valid_prefix() {
    let cmd = SlashCommand::parse("/q");
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_quit() {
    for text in ["/q", "/quit", "/exit"] {
        assert!(SlashCommand::parse(text).unwrap().is_quit());
    }
    assert!(!SlashCommand::parse("/h").unwrap().is_quit());
}

#[test]
fn it_is_help() {
    for text in ["/h", "/help"] {
        assert!(SlashCommand::parse(text).unwrap().is_help());
    }
}

#[test]
fn it_is_language_with_args() {
    let cmd = SlashCommand::parse("/lang  JavaScript").unwrap();
    assert!(cmd.is_language());
    assert_eq!(cmd.args, vec!["JavaScript".to_string()]);
}

#[test]
fn it_is_copy_code() {
    assert!(SlashCommand::parse("/copy").unwrap().is_copy_code());
    assert!(SlashCommand::parse("/c code").unwrap().is_copy_code());
    assert!(!SlashCommand::parse("/copy explanation").unwrap().is_copy_code());
}

#[test]
fn it_is_copy_explanation() {
    assert!(SlashCommand::parse("/copy explanation").unwrap().is_copy_explanation());
    assert!(SlashCommand::parse("/c e").unwrap().is_copy_explanation());
    assert!(!SlashCommand::parse("/copy").unwrap().is_copy_explanation());
}

#[test]
fn it_rejects_unknown_copy_target() {
    assert!(SlashCommand::parse("/copy everything").is_none());
}

#[test]
fn it_is_save_code() {
    assert!(SlashCommand::parse("/save").unwrap().is_save_code());
    assert!(SlashCommand::parse("/s Code").unwrap().is_save_code());
    assert!(!SlashCommand::parse("/save conversation").unwrap().is_save_code());
}

#[test]
fn it_is_save_conversation() {
    assert!(SlashCommand::parse("/save conversation").unwrap().is_save_conversation());
    assert!(SlashCommand::parse("/s conv").unwrap().is_save_conversation());
}

#[test]
fn it_is_theme_new_and_clear() {
    assert!(SlashCommand::parse("/theme").unwrap().is_theme());
    assert!(SlashCommand::parse("/n").unwrap().is_new_chat());
    assert!(SlashCommand::parse("/clear").unwrap().is_clear_history());
    assert!(!SlashCommand::parse("/new").unwrap().is_clear_history());
}
