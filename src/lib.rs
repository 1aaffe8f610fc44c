pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod loader;
pub mod logging;
pub mod root;
pub mod source;
pub mod tui;
pub mod widgets;
