//! tcreactions - long-press reaction previews for a terminal message list
//!
//! The core is UI-free: [`capsule`] holds the bounded reaction list and its
//! selection callback, [`feed`] delivers extra reactions after a delay,
//! [`preview`] computes the overlay geometry and [`selection`] ties a
//! preview to the row that was pressed. [`app`] and [`ui`] host all of it in
//! a ratatui TUI.
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod capsule;
pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod geometry;
pub mod logging;
pub mod menu;
pub mod preview;
pub mod selection;
pub mod terminal;
pub mod ui;
