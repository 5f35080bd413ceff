//! Selection model and the pre-extraction selection adjustment.
//!
//! Positions are zero-based line/column pairs; columns count characters,
//! not bytes, matching what editors report.

use serde::{Deserialize, Serialize};

use super::error::RefactorError;

/// Zero-based position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A selection between two positions. A collapsed selection (start == end)
/// means nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub(crate) fn line_at<'a>(lines: &'a [String], line: usize) -> Result<&'a str, RefactorError> {
    lines
        .get(line)
        .map(|l| l.as_str())
        .ok_or(RefactorError::LineOutOfRange {
            line,
            len: lines.len(),
        })
}

/// Byte offset of the `column`-th character, allowing `column == char count`
/// for end-of-line positions.
pub(crate) fn byte_index(line: &str, column: usize) -> Option<usize> {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .nth(column)
}

fn column_index(line: &str, line_no: usize, column: usize) -> Result<usize, RefactorError> {
    byte_index(line, column).ok_or(RefactorError::ColumnOutOfRange {
        line: line_no,
        column,
    })
}

/// Widen the selection one column to the left when it starts just after a
/// `#`, so selecting only the hex digits of a color still captures the
/// whole literal. The adjusted selection is what gets read and replaced.
pub fn adjust_selection(
    lines: &[String],
    mut selection: Selection,
) -> Result<Selection, RefactorError> {
    if selection.start.column > 0 {
        let line = line_at(lines, selection.start.line)?;
        let prev = line.chars().nth(selection.start.column - 1);
        if prev == Some('#') {
            selection.start.column -= 1;
        }
    }
    Ok(selection)
}

/// The text covered by a (possibly multi-line) selection.
pub fn selected_text(lines: &[String], selection: Selection) -> Result<String, RefactorError> {
    if selection.end < selection.start {
        return Err(RefactorError::InvertedSelection);
    }
    let (start, end) = (selection.start, selection.end);

    if start.line == end.line {
        let line = line_at(lines, start.line)?;
        let s = column_index(line, start.line, start.column)?;
        let e = column_index(line, end.line, end.column)?;
        return Ok(line[s..e].to_string());
    }

    let first = line_at(lines, start.line)?;
    let last = line_at(lines, end.line)?;
    let mut text = first[column_index(first, start.line, start.column)?..].to_string();
    for middle in &lines[start.line + 1..end.line] {
        text.push('\n');
        text.push_str(middle);
    }
    text.push('\n');
    text.push_str(&last[..column_index(last, end.line, end.column)?]);
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn adjust_pulls_in_hash_marker() {
        let lines = doc(&["    background-color: #f8f8f8;"]);
        let selection = Selection::new(Position::new(0, 23), Position::new(0, 29));
        let adjusted = adjust_selection(&lines, selection).unwrap();
        assert_eq!(adjusted.start.column, 22);
        assert_eq!(selected_text(&lines, adjusted).unwrap(), "#f8f8f8");
    }

    #[test]
    fn adjust_leaves_other_prefixes_alone() {
        let lines = doc(&["    color: red;"]);
        let selection = Selection::new(Position::new(0, 11), Position::new(0, 14));
        let adjusted = adjust_selection(&lines, selection).unwrap();
        assert_eq!(adjusted, selection);
        assert_eq!(selected_text(&lines, adjusted).unwrap(), "red");
    }

    #[test]
    fn adjust_at_column_zero_is_noop() {
        let lines = doc(&["#f8f8f8"]);
        let selection = Selection::new(Position::new(0, 0), Position::new(0, 7));
        assert_eq!(adjust_selection(&lines, selection).unwrap(), selection);
    }

    #[test]
    fn multi_line_selected_text() {
        let lines = doc(&["abc", "def", "ghi"]);
        let selection = Selection::new(Position::new(0, 1), Position::new(2, 2));
        assert_eq!(selected_text(&lines, selection).unwrap(), "bc\ndef\ngh");
    }

    #[test]
    fn out_of_range_selection_is_an_error() {
        let lines = doc(&["abc"]);
        let selection = Selection::new(Position::new(0, 1), Position::new(0, 9));
        assert!(matches!(
            selected_text(&lines, selection),
            Err(RefactorError::ColumnOutOfRange { .. })
        ));

        let selection = Selection::new(Position::new(5, 0), Position::new(5, 1));
        assert!(matches!(
            selected_text(&lines, selection),
            Err(RefactorError::LineOutOfRange { .. })
        ));
    }

    #[test]
    fn inverted_selection_is_an_error() {
        let lines = doc(&["abc"]);
        let selection = Selection::new(Position::new(0, 2), Position::new(0, 1));
        assert!(matches!(
            selected_text(&lines, selection),
            Err(RefactorError::InvertedSelection)
        ));
    }
}
