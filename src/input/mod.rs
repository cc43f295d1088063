//! Input Module
//!
//! Abstract key actions and the editable text surfaces they act upon.

pub mod actions;
pub mod text_surface;

// Re-exports
pub use actions::{KeyAction, KeyboardMode};
pub use text_surface::{EditBuffer, SecureEditBuffer, Selection, TextSurface};
