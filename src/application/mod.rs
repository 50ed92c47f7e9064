pub mod cli;
pub mod login;
pub mod ui;
