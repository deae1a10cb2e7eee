use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme;

/// Single-line text input with a char-indexed cursor and horizontal
/// scrolling.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    /// Cursor position in chars, `0..=char_count`.
    cursor: usize,
    placeholder: String,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Number of chars in the content.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when the content is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, leaving the box empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    /// First visible char so the cursor stays on screen.
    fn scroll_offset(&self, width: usize) -> usize {
        if width == 0 || self.cursor < width {
            0
        } else {
            self.cursor + 1 - width
        }
    }

    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str, focused: bool) {
        self.render_inner(area, buf, title, focused, &self.placeholder);
    }

    fn render_inner(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        focused: bool,
        placeholder: &str,
    ) {
        let border = if focused {
            theme::border_focused()
        } else {
            theme::border()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title.to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        if self.content.is_empty() && !focused {
            buf.set_stringn(
                inner.x,
                inner.y,
                placeholder,
                width,
                theme::muted().add_modifier(Modifier::ITALIC),
            );
            return;
        }

        let offset = self.scroll_offset(width);
        let visible: String = self.content.chars().skip(offset).take(width).collect();
        buf.set_stringn(inner.x, inner.y, &visible, width, theme::text());

        if focused {
            let cursor_x = (self.cursor - offset) as u16;
            if cursor_x < inner.width {
                let under = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    inner.x + cursor_x,
                    inner.y,
                    under.to_string(),
                    Style::default().fg(theme::COLOR_BACKGROUND).bg(theme::COLOR_ACCENT),
                );
            }
        }
    }
}

/// Renderable wrapper for [`InputBox`].
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
    placeholder: Option<&'a str>,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            focused,
            placeholder: None,
        }
    }

    /// Show `placeholder` instead of the box's own.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let placeholder = self.placeholder.unwrap_or(self.input_box.placeholder());
        self.input_box
            .render_inner(area, buf, self.title, self.focused, placeholder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = InputBox::new();
        input.insert_char('H');
        input.insert_char('i');
        assert_eq!(input.content(), "Hi");
        assert_eq!(input.cursor_position(), 2);

        input.backspace();
        assert_eq!(input.content(), "H");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputBox::new();
        input.set_content("héllo");
        assert_eq!(input.cursor_position(), 5);

        input.move_cursor_home();
        input.move_cursor_right();
        input.move_cursor_right();
        input.backspace();
        assert_eq!(input.content(), "hllo");

        input.insert_char('é');
        assert_eq!(input.content(), "héllo");
        input.delete_char();
        assert_eq!(input.content(), "hélo");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputBox::new();
        input.insert_char('X');
        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor_position(), 0);

        input.move_cursor_end();
        input.move_cursor_right();
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_take_clears() {
        let mut input = InputBox::new();
        input.set_content("What is SNAP?");
        assert_eq!(input.take(), "What is SNAP?");
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_blank() {
        let mut input = InputBox::new();
        assert!(input.is_blank());
        input.set_content("   ");
        assert!(input.is_blank());
        assert!(!input.is_empty());
    }

    #[test]
    fn test_renders_placeholder_when_unfocused() {
        let input = InputBox::with_placeholder("Ask a question");
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        input.render_with_title(area, &mut buf, "Chat", false);
        assert!(row(&buf, 1).contains("Ask a question"));
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let mut input = InputBox::new();
        input.set_content("abcdefghijklmnop");
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        input.render_with_title(area, &mut buf, "", true);
        let line = row(&buf, 1);
        assert!(line.contains("jklmnop"));
        assert!(!line.contains("abc"));
    }

    #[test]
    fn test_widget_placeholder_override() {
        let input = InputBox::with_placeholder("default");
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        InputBoxWidget::new(&input, "", false)
            .placeholder("Ask about \"Tax\"...")
            .render(area, &mut buf);
        let line = row(&buf, 1);
        assert!(line.contains("Ask about \"Tax\"..."));
        assert!(!line.contains("default"));
    }
}
