#[cfg(test)]
#[path = "login_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use dialoguer::Password;
use dialoguer::Select;
use owo_colors::OwoColorize;

use crate::domain::services::Credentials;

const ACTIONS: [&str; 3] = ["Login", "Signup", "Quit"];

pub fn login(credentials: &Credentials, username: &str, password: &str) -> Result<String> {
    let username = username.trim();
    let password = password.trim();

    if !credentials.authenticate(username, password) {
        tracing::info!(username = username, "Failed login");
        bail!("Invalid username or password.");
    }

    tracing::info!(username = username, "Logged in");
    return Ok(format!("Welcome, {username}!"));
}

pub fn signup(credentials: &mut Credentials, username: &str, password: &str) -> Result<String> {
    credentials.register(username.trim(), password.trim())?;
    return Ok("You can now login with your credentials.".to_string());
}

fn prompt_credentials(theme: &ColorfulTheme) -> Result<(String, String)> {
    let username = Input::<String>::with_theme(theme)
        .with_prompt("Username")
        .allow_empty(true)
        .interact_text()?;

    let password = Password::with_theme(theme)
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    return Ok((username, password));
}

/// Runs the login and signup prompts until the user logs in or quits.
/// Returns the logged in username, or `None` on quit.
pub fn start(credentials: &mut Credentials) -> Result<Option<String>> {
    let theme = ColorfulTheme::default();

    loop {
        let action = Select::with_theme(&theme)
            .with_prompt("Snipsmith")
            .default(0)
            .items(&ACTIONS)
            .interact_opt()?;

        match action {
            Some(0) => {
                let (username, password) = prompt_credentials(&theme)?;
                match login(credentials, &username, &password) {
                    Ok(message) => {
                        println!("{}", message.green());
                        return Ok(Some(username.trim().to_string()));
                    }
                    Err(err) => {
                        eprintln!("{}", err.to_string().red());
                    }
                }
            }
            Some(1) => {
                let (username, password) = prompt_credentials(&theme)?;
                match signup(credentials, &username, &password) {
                    Ok(message) => {
                        println!("{}", message.green());
                    }
                    Err(err) => {
                        eprintln!("{}", err.to_string().red());
                    }
                }
            }
            _ => {
                return Ok(None);
            }
        }
    }
}
