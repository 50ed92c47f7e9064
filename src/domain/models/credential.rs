#[cfg(test)]
#[path = "credential_test.rs"]
mod tests;

use thiserror::Error;

/// A plaintext `username:password` pair as stored in the users file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: &str, password: &str) -> Credential {
        return Credential {
            username: username.to_string(),
            password: password.to_string(),
        };
    }

    /// Splits on the first `:` only. Lines without a separator are not
    /// credentials.
    pub fn parse(line: &str) -> Option<Credential> {
        let (username, password) = line.trim().split_once(':')?;
        return Some(Credential::new(username, password));
    }

    pub fn to_line(&self) -> String {
        return format!("{}:{}\n", self.username, self.password);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("Username and password cannot be empty.")]
    Empty,
    #[error("Username already exists.")]
    AlreadyExists,
}
