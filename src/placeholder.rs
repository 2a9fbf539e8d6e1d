use regex::Regex;
use std::sync::LazyLock;

/// Grammar placeholders look like `<column_name>`: letters and underscore
/// only between the angle brackets.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[A-Za-z_]+>").expect("placeholder pattern is valid"));

/// A placeholder span enclosing the cursor.
///
/// `start` and `end` are inclusive char offsets within the line and cover
/// the delimiters; `content` is the name between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch {
    pub content: String,
    pub start: usize,
    pub end: usize,
}

/// Whether `text` contains a placeholder anywhere.
pub fn has_placeholder(text: &str) -> bool {
    PLACEHOLDER.is_match(text)
}

/// Find the placeholder enclosing `cursor` (a char offset into `line`).
///
/// Occurrences are scanned left to right; one that does not contain the
/// cursor is blanked out with spaces of equal length so it cannot match
/// again, and the scan restarts. Blanking preserves every offset, so the
/// returned span is valid against the original line. A cursor sitting
/// exactly on `<` or `>` counts as inside.
pub fn find_enclosing_placeholder(line: &str, cursor: usize) -> Option<PlaceholderMatch> {
    let mut working = line.to_string();

    while let Some(found) = PLACEHOLDER.find(&working) {
        let start = working[..found.start()].chars().count();
        let len = found.as_str().len();
        let end = start + len - 1;

        if cursor >= start && cursor <= end {
            let name = &found.as_str()[1..len - 1];
            return Some(PlaceholderMatch {
                content: name.to_string(),
                start,
                end,
            });
        }

        working.replace_range(found.range(), &" ".repeat(len));
    }

    None
}
