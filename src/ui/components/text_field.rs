//! Text field widget
//!
//! Renders the surface the keyboard edits: label, value (optionally
//! masked), selection highlight, and caret.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::input::{Selection, TextSurface};

pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    selection: Selection,
    focused: bool,
    masked: bool,
    style: Style,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, surface: &'a impl TextSurface) -> Self {
        Self {
            label,
            value: surface.content(),
            selection: surface.selection(),
            focused: surface.has_focus(),
            masked: false,
            style: Style::default(),
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }
        buf.set_string(area.x, area.y, self.label, Style::default().fg(Color::Cyan));

        let value_y = area.y + 1;
        render_field_background(buf, area.x, value_y, area.width);
        render_field_value(buf, area.x, value_y, self.value, self.masked, self.style);
        render_selection(buf, area.x, value_y, area.width, self.selection);
        if self.focused {
            render_caret(buf, area.x, value_y, area.width, self.selection.end);
        }
    }
}

fn render_field_background(buf: &mut Buffer, x: u16, y: u16, width: u16) {
    for px in x..x + width {
        if let Some(cell) = buf.cell_mut((px, y)) {
            cell.set_bg(Color::DarkGray);
        }
    }
}

fn render_field_value(buf: &mut Buffer, x: u16, y: u16, value: &str, masked: bool, style: Style) {
    let display: String = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    buf.set_string(x, y, &display, style);
}

fn render_selection(buf: &mut Buffer, x: u16, y: u16, width: u16, selection: Selection) {
    let (start, end) = selection.normalized();
    for pos in start..end {
        let px = x + pos as u16;
        if px >= x + width {
            break;
        }
        if let Some(cell) = buf.cell_mut((px, y)) {
            cell.set_style(Style::default().bg(Color::Blue).fg(Color::White));
        }
    }
}

fn render_caret(buf: &mut Buffer, x: u16, y: u16, width: u16, caret: usize) {
    let caret_x = x + caret as u16;
    if caret_x >= x + width {
        return;
    }
    if let Some(cell) = buf.cell_mut((caret_x, y)) {
        cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
    }
}
