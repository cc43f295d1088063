//! UI Components
//!
//! Reusable TUI widgets for the on-screen keyboard.

pub mod key_layout;
pub mod keyboard;
pub mod text_field;

// Re-exports
pub use key_layout::{Key, KeyLayout, KeyRow};
pub use keyboard::KeyboardView;
pub use text_field::TextField;
