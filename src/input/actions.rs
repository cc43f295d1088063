//! Key Actions
//!
//! The closed set of events the keyboard can emit, decoupled from rendering.

/// Which key layout is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMode {
    Letters,
    Numbers,
}

impl KeyboardMode {
    /// Label of the key that switches into this mode
    pub fn switch_label(&self) -> &'static str {
        match self {
            Self::Letters => "ABC",
            Self::Numbers => "123",
        }
    }
}

/// One keyboard interaction.
///
/// Constructed by the widget per key press and consumed by the controller;
/// the widget itself never mutates any text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    InsertChar(char),
    Delete,
    ToggleShift,
    Space,
    Enter,
    SwitchMode(KeyboardMode),
    Hide,
}
