//! UI Module
//!
//! Keyboard and text-field widgets rendered with ratatui.

pub mod components;

// Re-exports
pub use components::keyboard::KeyboardView;
pub use components::text_field::TextField;
