//! 规则编辑槽

/// 一条规则的编辑缓冲区
///
/// 内容是自由文本，暂不解析。`cursor` 以字符（而非字节）计数。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSlot {
    text: String,
    cursor: usize,
}

impl RuleSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 光标所在的（行, 列），均以字符计
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before: String = self.text.chars().take(self.cursor).collect();
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map_or(0, |last| last.chars().count());
        (line, col)
    }

    /// 在光标处插入字符
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// 删除光标前的字符
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    /// 删除光标处的字符
    pub fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// 移到当前行首
    pub fn move_line_start(&mut self) {
        let (_, col) = self.cursor_line_col();
        self.cursor -= col;
    }

    /// 移到当前行尾
    pub fn move_line_end(&mut self) {
        let rest = self.text.chars().skip(self.cursor).take_while(|c| *c != '\n').count();
        self.cursor += rest;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut slot = RuleSlot::new();
        for ch in "abc".chars() {
            slot.insert_char(ch);
        }
        assert_eq!(slot.text(), "abc");
        slot.backspace();
        assert_eq!(slot.text(), "ab");
        assert_eq!(slot.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut slot = RuleSlot::new();
        slot.backspace();
        assert!(slot.is_empty());
        assert_eq!(slot.cursor(), 0);
    }

    #[test]
    fn test_insert_in_middle_multibyte() {
        let mut slot = RuleSlot::with_text("日本");
        slot.move_left();
        slot.insert_char('x');
        assert_eq!(slot.text(), "日x本");
        slot.delete();
        assert_eq!(slot.text(), "日x");
        slot.delete();
        assert_eq!(slot.text(), "日x");
    }

    #[test]
    fn test_line_navigation() {
        let mut slot = RuleSlot::with_text("first");
        slot.insert_newline();
        for ch in "second".chars() {
            slot.insert_char(ch);
        }
        assert_eq!(slot.cursor_line_col(), (1, 6));

        slot.move_line_start();
        assert_eq!(slot.cursor_line_col(), (1, 0));

        slot.move_left();
        assert_eq!(slot.cursor_line_col(), (0, 5));

        slot.move_line_start();
        slot.move_line_end();
        assert_eq!(slot.cursor_line_col(), (0, 5));
    }

    #[test]
    fn test_move_right_stops_at_end() {
        let mut slot = RuleSlot::with_text("ab");
        slot.move_right();
        assert_eq!(slot.cursor(), 2);
    }
}
