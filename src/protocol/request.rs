use serde::{Deserialize, Serialize};

use crate::placeholder;

/// Wire payload for one autocompletion round.
///
/// `text` is the untouched buffer; `not_cursor_lines` and `cursor_line` are
/// the server's view of it, split into committed context and the token
/// under construction. `startpos`/`endpos` are absolute char offsets of the
/// active line's start and the cursor, computed against the original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub text: String,
    pub engine: String,
    pub line: usize,
    pub startpos: usize,
    pub endpos: usize,
    #[serde(rename = "notCursorLines")]
    pub not_cursor_lines: String,
    #[serde(rename = "cursorLine")]
    pub cursor_line: String,
}

/// Partition the buffer around the cursor and assemble the request.
///
/// The cursor line is rewritten before extraction: if the typed prefix
/// contains a placeholder, or the cursor sits inside one on the full line,
/// the server is asked to resolve the placeholder itself and the line goes
/// out empty. A non-blank line without a placeholder is truncated to the
/// typed prefix so text after the cursor never biases the suggestion. A
/// blank line is left as-is.
pub fn build_request(
    full_text: &str,
    cursor_line: usize,
    cursor_ch: usize,
    engine: &str,
) -> CompletionRequest {
    let mut lines: Vec<String> = full_text.split('\n').map(str::to_string).collect();

    let startpos: usize = lines
        .iter()
        .take(cursor_line)
        .map(|line| line.chars().count() + 1)
        .sum();
    let endpos = startpos + cursor_ch;

    if cursor_line < lines.len() {
        let line = lines[cursor_line].clone();
        let subline: String = line.chars().take(cursor_ch).collect();

        if placeholder::has_placeholder(&subline)
            || placeholder::find_enclosing_placeholder(&line, cursor_ch).is_some()
        {
            lines[cursor_line] = String::new();
        } else if !line.trim().is_empty() {
            lines[cursor_line] = subline;
        }
    }

    let active = if cursor_line < lines.len() {
        lines.remove(cursor_line)
    } else {
        String::new()
    };

    CompletionRequest {
        text: full_text.to_string(),
        engine: engine.to_string(),
        line: cursor_line,
        startpos,
        endpos,
        not_cursor_lines: lines.join("\n"),
        cursor_line: active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_text_line_is_truncated_to_typed_prefix() {
        let req = build_request("select co\nfrom t", 0, 9, "duckdb");
        assert_eq!(req.cursor_line, "select co");
        assert_eq!(req.not_cursor_lines, "from t");
        assert_eq!(req.startpos, 0);
        assert_eq!(req.endpos, 9);
        assert_eq!(req.text, "select co\nfrom t");
    }

    #[test]
    fn text_after_the_cursor_is_not_sent() {
        let req = build_request("select foo", 0, 7, "duckdb");
        assert_eq!(req.cursor_line, "select ");
        assert_eq!(req.not_cursor_lines, "");
    }

    #[test]
    fn cursor_inside_placeholder_sends_empty_line() {
        let req = build_request("select <x>\nfrom y", 0, 9, "duckdb");
        assert_eq!(req.cursor_line, "");
        assert_eq!(req.not_cursor_lines, "from y");
        assert_eq!(req.line, 0);
        assert_eq!(req.startpos, 0);
        assert_eq!(req.endpos, 9);
    }

    #[test]
    fn placeholder_in_typed_prefix_sends_empty_line() {
        // Cursor after a fully typed placeholder, not inside it.
        let req = build_request("where <cond> ", 0, 13, "duckdb");
        assert_eq!(req.cursor_line, "");
    }

    #[test]
    fn blank_line_is_left_as_is() {
        let req = build_request("a\n\nb", 1, 0, "duckdb");
        assert_eq!(req.cursor_line, "");
        assert_eq!(req.not_cursor_lines, "a\nb");
        assert_eq!(req.startpos, 2);
        assert_eq!(req.endpos, 2);
    }

    #[test]
    fn offsets_accumulate_over_earlier_lines() {
        let req = build_request("ab\ncdef\ngh", 2, 1, "duckdb");
        assert_eq!(req.startpos, 8);
        assert_eq!(req.endpos, 9);
        assert_eq!(req.not_cursor_lines, "ab\ncdef");
        assert_eq!(req.cursor_line, "g");
    }

    #[test]
    fn offsets_count_chars_not_bytes() {
        let req = build_request("héllo\nworld", 1, 2, "duckdb");
        assert_eq!(req.startpos, 6);
        assert_eq!(req.endpos, 8);
    }

    #[test]
    fn cursor_line_past_the_buffer_yields_empty_fragment() {
        let req = build_request("only", 3, 0, "duckdb");
        assert_eq!(req.cursor_line, "");
        assert_eq!(req.not_cursor_lines, "only");
    }

    #[test]
    fn wire_field_names_follow_the_endpoint_contract() {
        let req = build_request("select <x>", 0, 9, "duckdb");
        let encoded = serde_json::to_value(&req).unwrap();
        assert!(encoded.get("notCursorLines").is_some());
        assert!(encoded.get("cursorLine").is_some());
        assert!(encoded.get("startpos").is_some());
        assert!(encoded.get("endpos").is_some());
    }
}
