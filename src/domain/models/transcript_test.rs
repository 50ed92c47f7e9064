use chrono::Local;
use chrono::TimeZone;

use super::Language;
use super::Transcript;

#[test]
fn it_appends_request_and_response() {
    let time = Local.with_ymd_and_hms(2025, 10, 9, 14, 56, 46).unwrap();
    let mut transcript = Transcript::default();
    transcript.push_request(&time, Language::C, "reverse a string");
    transcript.push_response(&time, "char *reverse(char *s);");

    assert_eq!(
        transcript.as_str(),
        "[14:56:46] You (C): reverse a string\n[14:56:46] AI Response:\nchar *reverse(char *s);\n\n"
    );
}

#[test]
fn it_clears() {
    let time = Local.with_ymd_and_hms(2025, 10, 9, 14, 56, 46).unwrap();
    let mut transcript = Transcript::default();
    assert!(transcript.is_empty());

    transcript.push_request(&time, Language::Go, "hello");
    assert!(!transcript.is_empty());

    transcript.clear();
    assert!(transcript.is_empty());
    assert_eq!(transcript.as_str(), "");
}
