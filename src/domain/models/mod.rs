mod backend;
mod credential;
mod focus;
mod history_entry;
mod language;
mod loading;
mod notice;
mod palette;
mod slash_commands;
mod snippet;
mod textarea;
mod transcript;

pub use backend::*;
pub use credential::*;
pub use focus::*;
pub use history_entry::*;
pub use language::*;
pub use loading::*;
pub use notice::*;
pub use palette::*;
pub use slash_commands::*;
pub use snippet::*;
pub use textarea::*;
pub use transcript::*;
