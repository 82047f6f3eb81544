//! Single-line entry buffer with a grapheme-indexed cursor.

use unicode_segmentation::UnicodeSegmentation;

/// Text being typed into the entry field.
///
/// The cursor counts grapheme clusters, not bytes or chars, so moving over
/// an emoji or an accented letter takes one step.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String,
    cursor: usize,
}

impl EntryBuffer {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Take the text out, leaving the buffer empty.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Replace the text and place the cursor at the end.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = self.grapheme_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.text.insert(at, c);
        // An inserted combining mark joins the previous cluster.
        self.cursor = self.cursor_after_insert(at + c.len_utf8());
    }

    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = self.byte_index();
        self.text.insert_str(at, text);
        self.cursor = self.cursor_after_insert(at + text.len());
    }

    /// Delete the grapheme before the cursor.
    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index();
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete the grapheme under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_index();
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Delete trailing whitespace before the cursor, then the word before it.
    pub fn delete_word_back(&mut self) {
        let graphemes: Vec<&str> = self.text.graphemes(true).take(self.cursor).collect();
        let is_space = |g: &str| g.chars().all(char::is_whitespace);

        let spaces = graphemes.iter().rev().take_while(|g| is_space(g)).count();
        let word = graphemes
            .iter()
            .rev()
            .skip(spaces)
            .take_while(|g| !is_space(g))
            .count();

        let new_cursor = self.cursor - spaces - word;
        let start = self.byte_index_at(new_cursor);
        let end = self.byte_index();
        self.text.replace_range(start..end, "");
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Byte offset of the cursor within [`Self::text`].
    #[must_use]
    pub fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn cursor_after_insert(&self, end_byte: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .take_while(|(i, _)| *i < end_byte)
            .count()
    }
}
