//! On-Screen Keyboard Widget
//!
//! Owns the visual layout state (mode, shift, digit order, visibility) and
//! maps presses to abstract key actions. It never touches the attached text
//! surface; all text mutation lives in the controller.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::key_layout::{self, KeyLayout, KeyRow};
use crate::input::{KeyAction, KeyboardMode};

const DIGITS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Terminal rows per key row (one key line plus one gap line)
pub const ROW_HEIGHT: u16 = 2;

pub struct KeyboardView {
    mode: KeyboardMode,
    shift_on: bool,
    randomize_numbers: bool,
    digit_order: [char; 9],
    visible: bool,
}

impl Default for KeyboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardView {
    /// Starts hidden, in letters mode, with an ascending digit pad.
    pub fn new() -> Self {
        Self {
            mode: KeyboardMode::Letters,
            shift_on: false,
            randomize_numbers: false,
            digit_order: DIGITS,
            visible: false,
        }
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    pub fn is_shift_on(&self) -> bool {
        self.shift_on
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_randomized(&self) -> bool {
        self.randomize_numbers
    }

    /// Switch layouts. No-op when the mode is unchanged; entering number
    /// mode draws a fresh digit order.
    pub fn set_mode(&mut self, mode: KeyboardMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        if mode == KeyboardMode::Numbers {
            self.reshuffle_digits();
        }
    }

    /// Shift only affects the letters layout; the number pad ignores it.
    pub fn set_shift(&mut self, on: bool) {
        self.shift_on = on;
    }

    pub fn set_randomize_number_pad(&mut self, enabled: bool) {
        self.randomize_numbers = enabled;
        if self.mode == KeyboardMode::Numbers {
            self.reshuffle_digits();
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    // Digits stay put between key presses; a new order is only drawn at the
    // transitions that rebuild the number layout.
    fn reshuffle_digits(&mut self) {
        self.digit_order = DIGITS;
        if self.randomize_numbers {
            self.digit_order.shuffle(&mut OsRng);
        }
    }

    /// Current layout as a pure function of widget state
    pub fn layout(&self) -> KeyLayout {
        match self.mode {
            KeyboardMode::Letters => key_layout::letters(self.shift_on),
            KeyboardMode::Numbers => key_layout::numbers(self.digit_order),
        }
    }

    /// Height the keyboard wants for a given layout, in terminal rows
    pub fn preferred_height(&self) -> u16 {
        self.layout().rows.len() as u16 * ROW_HEIGHT
    }

    /// The action of the key under the given terminal cell, if any.
    /// A hidden keyboard has no keys.
    pub fn action_at(&self, area: Rect, column: u16, row: u16) -> Option<KeyAction> {
        if !self.visible || !area.contains((column, row).into()) {
            return None;
        }
        let layout = self.layout();
        let row_count = layout.rows.len() as u16;
        let row_height = (area.height / row_count).max(1);
        let index = ((row - area.y) / row_height) as usize;
        let key_row = layout.rows.get(index)?;

        key_spans(key_row, area)
            .into_iter()
            .zip(&key_row.keys)
            .find(|((x, width), _)| column >= *x && column < x + width)
            .map(|(_, key)| key.action)
    }

    /// Maps a left-button press to the key under it
    pub fn action_for_mouse(&self, area: Rect, event: &MouseEvent) -> Option<KeyAction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.action_at(area, event.column, event.row)
            }
            _ => None,
        }
    }
}

/// Horizontal (x, width) span of every key in a row, proportional to key
/// weights. Spans are contiguous so hit-testing has no dead cells.
fn key_spans(row: &KeyRow, area: Rect) -> Vec<(u16, u16)> {
    let unit = area.width as f32 / row.total_weight();
    let mut spans = Vec::with_capacity(row.keys.len());
    let mut cursor = row.side_pad;

    for key in &row.keys {
        let x = area.x + (cursor * unit).round() as u16;
        cursor += key.weight;
        let next = area.x + (cursor * unit).round() as u16;
        spans.push((x, next.saturating_sub(x)));
    }
    spans
}

impl Widget for &KeyboardView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible || area.is_empty() {
            return;
        }
        fill_background(buf, area);

        let layout = self.layout();
        let row_count = layout.rows.len() as u16;
        let row_height = (area.height / row_count).max(1);

        for (i, key_row) in layout.rows.iter().enumerate() {
            let y = area.y + i as u16 * row_height;
            if y >= area.y + area.height {
                break;
            }
            let spans = key_spans(key_row, area);
            for (key, (x, width)) in key_row.keys.iter().zip(spans) {
                render_key(buf, x, y, width, key);
            }
        }
    }
}

fn fill_background(buf: &mut Buffer, area: Rect) {
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(Color::Black);
            }
        }
    }
}

fn render_key(buf: &mut Buffer, x: u16, y: u16, width: u16, key: &key_layout::Key) {
    // One trailing column per key stays background, as the gap
    let cap_width = width.saturating_sub(1);
    if cap_width == 0 {
        return;
    }
    let bg = if key.secondary { Color::DarkGray } else { Color::Gray };
    let fg = if key.secondary { Color::White } else { Color::Black };

    for px in x..x + cap_width {
        if let Some(cell) = buf.cell_mut((px, y)) {
            cell.set_bg(bg);
        }
    }

    let label_width = key.label.chars().count() as u16;
    let label_x = x + cap_width.saturating_sub(label_width) / 2;
    buf.set_stringn(
        label_x,
        y,
        &key.label,
        cap_width as usize,
        Style::default().fg(fg).bg(bg),
    );
}

// ============================================================================
// Tests
// ============================================================================
