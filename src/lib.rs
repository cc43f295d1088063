//! Safeboard
//!
//! Secure on-screen keyboard for terminal applications. Renders a software
//! keyboard inside the host UI and routes abstract key actions into an
//! attached text surface, bypassing the host's native line input so that
//! sensitive entry (PINs, passwords) is never seen by it. Supports a
//! letters/numbers mode switch, caps-lock style shift, and an optionally
//! randomized digit pad for PIN entry.

pub mod controller;
pub mod input;
pub mod ui;

// Re-exports
pub use controller::KeyboardController;
pub use input::{EditBuffer, KeyAction, KeyboardMode, SecureEditBuffer, Selection, TextSurface};
pub use ui::components::keyboard::KeyboardView;
pub use ui::components::text_field::TextField;
