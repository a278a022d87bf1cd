use unicode_segmentation::UnicodeSegmentation;

/// Single-line edit buffer with a byte-offset cursor that always sits on a
/// grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        TextInput {
            buffer: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        // Single-line: newlines become spaces
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        let clean = s.replace(['\n', '\r'], " ");
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.buffer.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.buffer.replace_range(self.cursor..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Text before the cursor (for placing the terminal cursor)
    pub fn before_cursor(&self) -> &str {
        &self.buffer[..self.cursor]
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace() {
        let mut input = TextInput::new();
        for c in "milk".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text(), "milk");
        input.backspace();
        assert_eq!(input.text(), "mil");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut input = TextInput::with_text("e\u{301}x");
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "x");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = TextInput::with_text("bd");
        input.move_left();
        input.insert_char('c');
        input.move_home();
        input.insert_char('a');
        assert_eq!(input.text(), "abcd");
        input.move_end();
        assert_eq!(input.before_cursor(), "abcd");
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut input = TextInput::with_text("ab");
        input.delete();
        assert_eq!(input.text(), "ab");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "b");
    }

    #[test]
    fn pasted_newlines_become_spaces() {
        let mut input = TextInput::new();
        input.insert_str("one\ntwo");
        assert_eq!(input.text(), "one two");
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn movement_stops_at_edges() {
        let mut input = TextInput::with_text("é");
        input.move_right();
        assert_eq!(input.cursor(), "é".len());
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }
}
