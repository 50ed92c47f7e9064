#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Credential;
use crate::domain::models::RegisterError;

/// Plaintext users file holding one `username:password` per line. Nothing
/// is hashed. Lines are only ever appended.
pub struct Credentials {
    pub file_path: PathBuf,
    users: HashMap<String, String>,
}

impl Default for Credentials {
    fn default() -> Credentials {
        return Credentials::new(PathBuf::from(Config::get(ConfigKey::UsersFile)));
    }
}

impl Credentials {
    pub fn new(file_path: PathBuf) -> Credentials {
        let users = Credentials::load(&file_path);
        let credentials = Credentials { file_path, users };
        tracing::debug!(users = credentials.len(), path = ?credentials.file_path, "Loaded users");

        return credentials;
    }

    /// Reads every well formed line of the users file. A missing file is an
    /// empty store. Later lines win over earlier ones for the same username.
    pub fn load(file_path: &Path) -> HashMap<String, String> {
        let payload = match fs::read_to_string(file_path) {
            Ok(payload) => payload,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(error = ?err, path = ?file_path, "Failed to read users file");
                }
                return HashMap::new();
            }
        };

        return payload
            .lines()
            .filter_map(Credential::parse)
            .map(|e| return (e.username, e.password))
            .collect();
    }

    /// Appends a line to the users file. Failures are logged and otherwise
    /// ignored.
    pub fn save(&self, username: &str, password: &str) {
        let res = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .and_then(|mut file| {
                return file.write_all(Credential::new(username, password).to_line().as_bytes());
            });

        if let Err(err) = res {
            tracing::error!(error = ?err, path = ?self.file_path, "Failed to save user");
        }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        return self
            .users
            .get(username)
            .map(|stored| return stored == password)
            .unwrap_or(false);
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<(), RegisterError> {
        if username.is_empty() || password.is_empty() {
            return Err(RegisterError::Empty);
        }
        if self.users.contains_key(username) {
            return Err(RegisterError::AlreadyExists);
        }

        self.save(username, password);
        self.users
            .insert(username.to_string(), password.to_string());
        tracing::info!(username = username, "Registered user");

        return Ok(());
    }

    pub fn len(&self) -> usize {
        return self.users.len();
    }
}
