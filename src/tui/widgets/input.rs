//! Text input widget
//!
//! A single-line text field with cursor support. The struct doubles as the
//! editing state and the renderable widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position (byte index; input is ASCII-oriented)
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = floor_char_boundary(&self.content, self.cursor - 1);
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = floor_char_boundary(&self.content, self.cursor - 1);
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            let mut next = self.cursor + 1;
            while next < self.content.len() && !self.content.is_char_boundary(next) {
                next += 1;
            }
            self.cursor = next;
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Get the cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

fn floor_char_boundary(s: &str, mut i: usize) -> usize {
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Renderable view of a text input, with optional focus highlight
pub struct TextInputView<'a> {
    input: &'a TextInput,
    focused: bool,
}

impl<'a> TextInputView<'a> {
    /// Create a view of the given input
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            focused: false,
        }
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        buf.set_string(area.x, area.y, self.input.value(), text_style);

        // Render cursor if focused
        if self.focused {
            let cursor_x = area.x + self.input.cursor() as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self
                    .input
                    .value()
                    .chars()
                    .nth(self.input.cursor())
                    .unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
