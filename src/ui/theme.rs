//! Color theme constants
//!
//! Minimal dark palette with green message bubbles.

use ratatui::style::Color;

/// Border color for chrome and the capsule box
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Message bubble border
pub const COLOR_BUBBLE: Color = Color::Rgb(52, 199, 89);

/// Message bubble border when the row is highlighted
pub const COLOR_BUBBLE_SELECTED: Color = Color::LightGreen;

/// Capsule and menu background
pub const COLOR_OVERLAY_BG: Color = Color::Rgb(28, 28, 34);

/// Highlighted capsule button or menu item
pub const COLOR_CURSOR_BG: Color = Color::Rgb(70, 70, 90);

/// Destructive menu actions
pub const COLOR_DESTRUCTIVE: Color = Color::Red;
