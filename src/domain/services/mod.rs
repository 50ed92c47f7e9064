mod app_state;
pub mod clipboard;
mod completions;
mod credentials;
mod exports;
mod scroll;
mod session;
mod syntaxes;

pub use app_state::*;
pub use completions::*;
pub use credentials::*;
pub use exports::*;
pub use scroll::*;
pub use session::*;
pub use syntaxes::*;
