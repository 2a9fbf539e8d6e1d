use crate::editor::{EditorSurface, Position};

/// Write a chosen literal into the editor.
///
/// A non-empty selection is replaced in place (the router pre-selects the
/// placeholder span for exactly this). With no selection the value goes in
/// at the cursor and the cursor lands just after it. Values are single-line
/// literals.
pub fn apply_insertion(editor: &mut dyn EditorSurface, value: &str) {
    if !editor.selection().is_empty() {
        editor.replace_selection(value);
        return;
    }

    let cursor = editor.cursor();
    editor.replace_range(value, cursor);
    editor.set_cursor(Position::new(cursor.line, cursor.ch + value.chars().count()));
}
