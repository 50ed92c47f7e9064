use super::Credential;
use super::RegisterError;

#[test]
fn it_parses_line() {
    let res = Credential::parse("alice:pw1\n").unwrap();
    assert_eq!(res, Credential::new("alice", "pw1"));
}

#[test]
fn it_splits_on_first_separator() {
    let res = Credential::parse("carol:pa:ss").unwrap();
    assert_eq!(res.username, "carol");
    assert_eq!(res.password, "pa:ss");
}

#[test]
fn it_skips_line_without_separator() {
    assert!(Credential::parse("malformed").is_none());
    assert!(Credential::parse("").is_none());
}

#[test]
fn it_formats_line() {
    let line = Credential::new("alice", "pw1").to_line();
    assert_eq!(line, "alice:pw1\n");
}

#[test]
fn it_displays_register_errors() {
    insta::assert_snapshot!(RegisterError::Empty.to_string(), @"Username and password cannot be empty.");
    insta::assert_snapshot!(RegisterError::AlreadyExists.to_string(), @"Username already exists.");
}
