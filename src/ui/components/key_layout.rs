//! Key Layout
//!
//! Pure mapping from keyboard state to rows of weighted key caps. Rendering
//! and hit-testing consume this description; nothing here touches widget
//! state or text.

use crate::input::{KeyAction, KeyboardMode};

pub const LETTER_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

pub const SHIFT_LABEL: &str = "⇧";
pub const DELETE_LABEL: &str = "⌫";
pub const SPACE_LABEL: &str = "space";
pub const ENTER_LABEL: &str = "return";

/// One key cap: label, emitted action, and width relative to a plain key
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub label: String,
    pub action: KeyAction,
    pub weight: f32,
    pub secondary: bool,
}

impl Key {
    fn character(c: char) -> Self {
        Self {
            label: c.to_string(),
            action: KeyAction::InsertChar(c),
            weight: 1.0,
            secondary: false,
        }
    }

    fn secondary(label: &str, action: KeyAction, weight: f32) -> Self {
        Self {
            label: label.to_string(),
            action,
            weight,
            secondary: true,
        }
    }

    fn wide(label: &str, action: KeyAction, weight: f32) -> Self {
        Self {
            label: label.to_string(),
            action,
            weight,
            secondary: false,
        }
    }
}

/// One row of keys with invisible padding on each side, in key-width units
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyRow {
    pub keys: Vec<Key>,
    pub side_pad: f32,
}

impl KeyRow {
    fn new(keys: Vec<Key>) -> Self {
        Self { keys, side_pad: 0.0 }
    }

    fn padded(keys: Vec<Key>, side_pad: f32) -> Self {
        Self { keys, side_pad }
    }

    /// Total width of the row including padding, in key-width units
    pub fn total_weight(&self) -> f32 {
        self.keys.iter().map(|k| k.weight).sum::<f32>() + 2.0 * self.side_pad
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyLayout {
    pub rows: Vec<KeyRow>,
}

/// QWERTY letter layout. Character keys carry their displayed (shifted)
/// character, so the widget emits exactly what it shows.
pub fn letters(shift: bool) -> KeyLayout {
    let case = |c: char| if shift { c.to_ascii_uppercase() } else { c };

    let mut rows = Vec::with_capacity(4);
    rows.push(KeyRow::new(
        LETTER_ROWS[0].chars().map(|c| Key::character(case(c))).collect(),
    ));
    rows.push(KeyRow::padded(
        LETTER_ROWS[1].chars().map(|c| Key::character(case(c))).collect(),
        0.5,
    ));

    let mut third: Vec<Key> = vec![Key::secondary(SHIFT_LABEL, KeyAction::ToggleShift, 1.3)];
    third.extend(LETTER_ROWS[2].chars().map(|c| Key::character(case(c))));
    third.push(Key::secondary(DELETE_LABEL, KeyAction::Delete, 1.3));
    rows.push(KeyRow::new(third));

    rows.push(KeyRow::new(vec![
        Key::secondary(
            KeyboardMode::Numbers.switch_label(),
            KeyAction::SwitchMode(KeyboardMode::Numbers),
            1.8,
        ),
        Key::wide(SPACE_LABEL, KeyAction::Space, 5.0),
        Key::secondary(ENTER_LABEL, KeyAction::Enter, 1.8),
    ]));

    KeyLayout { rows }
}

/// Number pad layout: the given digits in a 3x3 grid, then ABC / 0 / delete.
/// Shift has no effect here.
pub fn numbers(digits: [char; 9]) -> KeyLayout {
    let mut rows: Vec<KeyRow> = digits
        .chunks(3)
        .map(|chunk| KeyRow::new(chunk.iter().map(|&c| Key::character(c)).collect()))
        .collect();

    rows.push(KeyRow::new(vec![
        Key::secondary(
            KeyboardMode::Letters.switch_label(),
            KeyAction::SwitchMode(KeyboardMode::Letters),
            1.0,
        ),
        Key::character('0'),
        Key::secondary(DELETE_LABEL, KeyAction::Delete, 1.0),
    ]));

    KeyLayout { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_chars(row: &KeyRow) -> String {
        row.keys
            .iter()
            .filter_map(|k| match k.action {
                KeyAction::InsertChar(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_letter_rows() {
        let layout = letters(false);
        assert_eq!(layout.rows.len(), 4);
        assert_eq!(row_chars(&layout.rows[0]), "qwertyuiop");
        assert_eq!(row_chars(&layout.rows[1]), "asdfghjkl");
        assert_eq!(row_chars(&layout.rows[2]), "zxcvbnm");
    }

    #[test]
    fn test_shift_uppercases_labels_and_actions() {
        let layout = letters(true);
        assert_eq!(row_chars(&layout.rows[0]), "QWERTYUIOP");
        let q = &layout.rows[0].keys[0];
        assert_eq!(q.label, "Q");
        assert_eq!(q.action, KeyAction::InsertChar('Q'));
    }

    #[test]
    fn test_third_row_flanked_by_shift_and_delete() {
        let layout = letters(false);
        let row = &layout.rows[2];
        assert_eq!(row.keys.first().map(|k| k.action), Some(KeyAction::ToggleShift));
        assert_eq!(row.keys.last().map(|k| k.action), Some(KeyAction::Delete));
    }

    #[test]
    fn test_bottom_row_letters() {
        let layout = letters(false);
        let actions: Vec<KeyAction> = layout.rows[3].keys.iter().map(|k| k.action).collect();
        assert_eq!(
            actions,
            vec![
                KeyAction::SwitchMode(KeyboardMode::Numbers),
                KeyAction::Space,
                KeyAction::Enter,
            ]
        );
    }

    #[test]
    fn test_second_row_centered() {
        let layout = letters(false);
        assert_eq!(layout.rows[1].side_pad, 0.5);
        // 9 keys + two half-key pads line up with the 10-key top row
        assert_eq!(layout.rows[1].total_weight(), layout.rows[0].total_weight());
    }

    #[test]
    fn test_number_grid() {
        let digits = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];
        let layout = numbers(digits);
        assert_eq!(layout.rows.len(), 4);
        assert_eq!(row_chars(&layout.rows[0]), "123");
        assert_eq!(row_chars(&layout.rows[1]), "456");
        assert_eq!(row_chars(&layout.rows[2]), "789");
    }

    #[test]
    fn test_number_bottom_row() {
        let digits = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];
        let layout = numbers(digits);
        let actions: Vec<KeyAction> = layout.rows[3].keys.iter().map(|k| k.action).collect();
        assert_eq!(
            actions,
            vec![
                KeyAction::SwitchMode(KeyboardMode::Letters),
                KeyAction::InsertChar('0'),
                KeyAction::Delete,
            ]
        );
    }
}
