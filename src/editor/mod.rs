mod buffer;

pub use buffer::TextBuffer;

/// 0-based line / char-column position, the addressing scheme of the host
/// editor widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// The slice of the host editor widget this core consumes. Implemented by
/// [`TextBuffer`] for tests and headless use; an embedding wraps its real
/// widget in the same trait.
///
/// All columns and absolute offsets are char offsets. Inserted values are
/// single-line literals.
pub trait EditorSurface {
    /// Full buffer content, lines joined by `\n`.
    fn text(&self) -> String;

    fn cursor(&self) -> Position;

    /// Move the cursor, collapsing any selection.
    fn set_cursor(&mut self, pos: Position);

    fn line(&self, index: usize) -> Option<String>;

    /// Absolute char offset of `pos` within the full text.
    fn index_from_pos(&self, pos: Position) -> usize;

    /// Currently selected text, empty when there is no selection.
    fn selection(&self) -> String;

    fn set_selection(&mut self, from: Position, to: Position);

    /// Replace the selection with `value`, leaving the cursor after it.
    fn replace_selection(&mut self, value: &str);

    /// Insert `value` at `at` without moving the cursor.
    fn replace_range(&mut self, value: &str, at: Position);
}
