//! Keyboard Controller
//!
//! Routes key actions from the on-screen keyboard into the attached text
//! surface. The widget stays layout-only; every text mutation happens here,
//! against selection bounds read fresh per action.

use crossterm::event::MouseEvent;
use ratatui::layout::Rect;

use crate::input::{KeyAction, KeyboardMode, TextSurface};
use crate::ui::components::keyboard::KeyboardView;

/// Owns the keyboard widget and, while attached, the surface it edits.
///
/// Attachment is by ownership: `detach` hands the surface back, so nothing
/// can keep editing a surface that is no longer current. Actions that would
/// touch the text are silently ignored while no surface is attached;
/// actions on the widget's own state (shift, mode, hide) always apply.
pub struct KeyboardController<S: TextSurface> {
    keyboard: KeyboardView,
    surface: Option<S>,
    randomize_numbers: bool,
}

impl<S: TextSurface> Default for KeyboardController<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextSurface> KeyboardController<S> {
    pub fn new() -> Self {
        Self {
            keyboard: KeyboardView::new(),
            surface: None,
            randomize_numbers: false,
        }
    }

    pub fn keyboard(&self) -> &KeyboardView {
        &self.keyboard
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Binds a surface, shutting native input off for it. Any previously
    /// attached surface is handed back with native input restored. If the
    /// new surface already has focus the keyboard comes up immediately.
    pub fn attach(&mut self, mut surface: S) -> Option<S> {
        surface.set_native_input_enabled(false);
        let focused = surface.has_focus();
        let previous = self.surface.replace(surface);
        if focused {
            self.show();
        }
        previous.map(release_surface)
    }

    /// Unbinds and returns the current surface, hiding the keyboard
    pub fn detach(&mut self) -> Option<S> {
        self.hide();
        self.surface.take().map(release_surface)
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Focus wiring: gaining focus shows the keyboard, losing it hides it
    pub fn focus_changed(&mut self, focused: bool) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.set_focus(focused);
        if focused {
            self.show();
        } else {
            self.hide();
        }
    }

    /// Click wiring: a click on an attached surface brings the keyboard up
    pub fn surface_clicked(&mut self) {
        if self.surface.is_some() {
            self.show();
        }
    }

    pub fn set_randomize_number_pad(&mut self, enabled: bool) {
        self.randomize_numbers = enabled;
        self.keyboard.set_randomize_number_pad(enabled);
    }

    /// Shows the keyboard and re-suppresses native input on the surface
    pub fn show(&mut self) {
        self.keyboard.show();
        if let Some(surface) = self.surface.as_mut() {
            surface.set_native_input_enabled(false);
        }
    }

    pub fn hide(&mut self) {
        self.keyboard.hide();
    }

    pub fn is_visible(&self) -> bool {
        self.keyboard.is_visible()
    }

    /// Applies one key action. One action in, one handling pass out.
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::InsertChar(c) => self.insert_char(c),
            KeyAction::Delete => self.delete_backward(),
            KeyAction::ToggleShift => {
                let on = self.keyboard.is_shift_on();
                self.keyboard.set_shift(!on);
            }
            KeyAction::Space => self.insert_char(' '),
            KeyAction::Enter => self.handle_enter(),
            // Shift state is kept across mode switches
            KeyAction::SwitchMode(mode) => self.keyboard.set_mode(mode),
            KeyAction::Hide => self.hide(),
        }
    }

    /// Hit-tests a mouse event against the keyboard and applies the
    /// resulting action, returning it when one was handled.
    pub fn handle_mouse(&mut self, area: Rect, event: &MouseEvent) -> Option<KeyAction> {
        let action = self.keyboard.action_for_mouse(area, event)?;
        self.handle_action(action);
        Some(action)
    }

    fn insert_char(&mut self, c: char) {
        let shifted =
            self.keyboard.is_shift_on() && self.keyboard.mode() == KeyboardMode::Letters;
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let c = if shifted { c.to_ascii_uppercase() } else { c };
        let (start, end) = surface.selection().normalized();
        surface.replace_range(start, end, &c.to_string());
    }

    fn delete_backward(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let (start, end) = surface.selection().normalized();
        if start != end {
            surface.replace_range(start, end, "");
            return;
        }
        if start == 0 {
            return;
        }
        surface.replace_range(start - 1, start, "");
    }

    fn handle_enter(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if surface.is_multiline() {
            let (start, end) = surface.selection().normalized();
            surface.replace_range(start, end, "\n");
        } else {
            // Submit-like: leave the text alone, drop focus, put the
            // keyboard away
            surface.set_focus(false);
            self.hide();
        }
    }
}

fn release_surface<S: TextSurface>(mut surface: S) -> S {
    surface.set_native_input_enabled(true);
    surface
}

// ============================================================================
// Tests
// ============================================================================
