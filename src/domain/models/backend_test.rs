use super::BackendPrompt;
use super::Language;

#[test]
fn it_builds_snippet_prompt() {
    let prompt = BackendPrompt::for_snippet("reverse a string", Language::Cpp);

    assert_eq!(
        prompt.text,
        "Generate a C++ code snippet with explanation for the following request:\n\nreverse a string"
    );
}

#[test]
fn it_keeps_request_verbatim() {
    let prompt = BackendPrompt::for_snippet("  sort {a, b}\nthen print  ", Language::Go);
    assert!(prompt.text.ends_with(":\n\n  sort {a, b}\nthen print  "));
}
