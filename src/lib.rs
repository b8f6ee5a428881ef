pub mod args;
pub mod difficulty;
pub mod engine;
pub mod keyboard;
pub mod logging;
pub mod scoring;
pub mod session;
pub mod ui;
pub mod validate;
pub mod wordlist;
