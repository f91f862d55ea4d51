//! folio - a terminal browser for a hosted music library
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod format;
pub mod input;
pub mod loader;
pub mod logging;
pub mod models;
pub mod preview;
pub mod state;
pub mod stats;
pub mod terminal;
pub mod traits;
pub mod ui;
