#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::Error;
use domain::services::clipboard::ClipboardService;
use domain::services::Credentials;
use infrastructure::backends::BackendManager;
use owo_colors::OwoColorize;
use tokio::task;

use crate::application::cli;
use crate::application::login;
use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        format!(
            "Oh no! Snipsmith has failed with the following app version and error.\n\nVersion: {}\nCommit: {}\nError: {:#}",
            env!("CARGO_PKG_VERSION"),
            env!("VERGEN_GIT_DESCRIBE"),
            err
        )
        .red()
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        ui::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    dotenv::dotenv().ok();

    let debug_log_dir = env::var("SNIPSMITH_LOG_DIR").unwrap_or_else(|_| {
        return cli::log_dir().to_string_lossy().to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("snipsmith")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let ready = match cli::parse().await {
        Ok(ready) => ready,
        Err(err) => {
            handle_error(err);
            return;
        }
    };
    if !ready {
        process::exit(0);
    }

    if let Err(err) = Config::validate() {
        eprintln!("{}", err.to_string().red());
        process::exit(1);
    }

    let mut credentials = Credentials::default();
    let username = match login::start(&mut credentials) {
        Ok(Some(username)) => username,
        Ok(None) => {
            process::exit(0);
        }
        Err(err) => {
            handle_error(err);
            return;
        }
    };
    Config::set(ConfigKey::Username, &username);

    let backend = match BackendManager::get() {
        Ok(backend) => backend,
        Err(err) => {
            handle_error(err);
            return;
        }
    };

    let mut background_futures = task::JoinSet::new();
    if let Err(clipboard_err) = ClipboardService::healthcheck() {
        tracing::warn!(err = ?clipboard_err, "Clipboard service is unable to start")
    } else {
        background_futures.spawn(async move {
            return ClipboardService::start().await;
        });
    }

    if let Err(err) = ui::start(backend).await {
        ui::destruct_terminal_for_panic();
        handle_error(err);
    }

    background_futures.abort_all();
    process::exit(0);
}
