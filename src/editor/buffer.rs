use super::{EditorSurface, Position};

/// In-memory editor surface: a line vector plus cursor and selection state.
/// The line vector is never empty; an empty buffer holds one empty line.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Position,
    selection: Option<(Position, Position)>,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            cursor: Position::default(),
            selection: None,
        }
    }

    pub fn selection_range(&self) -> Option<(Position, Position)> {
        self.selection
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len().saturating_sub(1));
        let ch = pos.ch.min(self.lines[line].chars().count());
        Position { line, ch }
    }

    fn byte_at(line: &str, ch: usize) -> usize {
        line.char_indices()
            .nth(ch)
            .map(|(byte, _)| byte)
            .unwrap_or(line.len())
    }

    /// Splice `value` over `from..to` (exclusive end), collapsing any lines
    /// in between. `value` is a single-line literal.
    fn splice(&mut self, from: Position, to: Position, value: &str) {
        let head: String = {
            let line = &self.lines[from.line];
            line[..Self::byte_at(line, from.ch)].to_string()
        };
        let tail: String = {
            let line = &self.lines[to.line];
            line[Self::byte_at(line, to.ch)..].to_string()
        };

        self.lines
            .splice(from.line..=to.line, [format!("{head}{value}{tail}")]);
    }
}

impl EditorSurface for TextBuffer {
    fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp(pos);
        self.selection = None;
    }

    fn line(&self, index: usize) -> Option<String> {
        self.lines.get(index).cloned()
    }

    fn index_from_pos(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        let before: usize = self
            .lines
            .iter()
            .take(pos.line)
            .map(|line| line.chars().count() + 1)
            .sum();
        before + pos.ch
    }

    fn selection(&self) -> String {
        let Some((from, to)) = self.selection else {
            return String::new();
        };

        if from.line == to.line {
            let line = &self.lines[from.line];
            return line[Self::byte_at(line, from.ch)..Self::byte_at(line, to.ch)].to_string();
        }

        let mut parts = Vec::with_capacity(to.line - from.line + 1);
        let first = &self.lines[from.line];
        parts.push(first[Self::byte_at(first, from.ch)..].to_string());
        for line in &self.lines[from.line + 1..to.line] {
            parts.push(line.clone());
        }
        let last = &self.lines[to.line];
        parts.push(last[..Self::byte_at(last, to.ch)].to_string());
        parts.join("\n")
    }

    fn set_selection(&mut self, from: Position, to: Position) {
        let (from, to) = (self.clamp(from), self.clamp(to));
        let (from, to) = if to < from { (to, from) } else { (from, to) };
        self.selection = Some((from, to));
        self.cursor = to;
    }

    fn replace_selection(&mut self, value: &str) {
        let Some((from, to)) = self.selection.take() else {
            return;
        };
        self.splice(from, to, value);
        self.cursor = Position::new(from.line, from.ch + value.chars().count());
    }

    fn replace_range(&mut self, value: &str, at: Position) {
        let at = self.clamp(at);
        self.splice(at, at, value);
    }
}
