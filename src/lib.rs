pub mod browser;
pub mod config;
pub mod export;
pub mod leads;
pub mod logging;
pub mod output;
pub mod ranking;
pub mod scoring;
pub mod tui;
