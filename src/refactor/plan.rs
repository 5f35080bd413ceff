//! Edit planning: where the new declaration goes and how the plan is
//! applied to a line buffer.
//!
//! Plans are only ever constructed after the read pass has finished, and
//! applying one is a pure `lines -> lines` function, so a host can preview
//! or commit it as a single transaction.

use super::error::RefactorError;
use super::selection::{byte_index, line_at, Selection};

/// Where a new variable declaration should be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPoint {
    /// Directly after the last variable declaration, no blank lines.
    AfterVariable(usize),
    /// After the last import, separated by one blank line.
    AfterImport(usize),
    /// Top of the file, followed by one blank line.
    TopOfFile,
}

/// Priority: last declaration, else last import, else top of file.
pub fn resolve_insertion_point(
    last_variable_line: Option<usize>,
    last_import_line: Option<usize>,
) -> InsertionPoint {
    if let Some(line) = last_variable_line {
        InsertionPoint::AfterVariable(line)
    } else if let Some(line) = last_import_line {
        InsertionPoint::AfterImport(line)
    } else {
        InsertionPoint::TopOfFile
    }
}

/// The two text mutations of one extraction: replace the adjusted selection
/// with the variable reference, and insert the declaration line(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPlan {
    /// Adjusted selection to replace.
    pub selection: Selection,
    /// Replacement for the selection (`$<name>`).
    pub replacement: String,
    /// Line index the insertion text goes in front of.
    pub insertion_line: usize,
    /// Line(s) to insert; `\n`-separated, no terminating newline.
    pub insertion_text: String,
    /// Blank lines inserted before the insertion text.
    pub leading_blank_lines: usize,
}

impl EditPlan {
    pub fn new(selection: Selection, name: &str, literal: &str, point: InsertionPoint) -> Self {
        let declaration = format!("${name}: {literal};");
        let (insertion_line, insertion_text, leading_blank_lines) = match point {
            InsertionPoint::AfterVariable(line) => (line + 1, declaration, 0),
            InsertionPoint::AfterImport(line) => (line + 1, declaration, 1),
            // trailing empty line separates the declaration from the
            // existing content
            InsertionPoint::TopOfFile => (0, format!("{declaration}\n"), 0),
        };
        Self {
            selection,
            replacement: format!("${name}"),
            insertion_line,
            insertion_text,
            leading_blank_lines,
        }
    }

    /// Number of lines the insertion adds in front of the selection.
    pub fn inserted_line_count(&self) -> usize {
        self.leading_blank_lines + self.insertion_text.split('\n').count()
    }
}

/// Apply a plan to a line buffer.
///
/// The replacement runs first; the insertion line never follows the
/// selection, so the insert cannot shift the indices the replacement uses.
pub fn apply_plan(lines: &[String], plan: &EditPlan) -> Result<Vec<String>, RefactorError> {
    let mut out = lines.to_vec();
    replace_selection(&mut out, plan.selection, &plan.replacement)?;

    let mut at = plan.insertion_line;
    for _ in 0..plan.leading_blank_lines {
        out.insert(at, String::new());
        at += 1;
    }
    for inserted in plan.insertion_text.split('\n') {
        out.insert(at, inserted.to_string());
        at += 1;
    }
    Ok(out)
}

fn replace_selection(
    lines: &mut Vec<String>,
    selection: Selection,
    replacement: &str,
) -> Result<(), RefactorError> {
    if selection.end < selection.start {
        return Err(RefactorError::InvertedSelection);
    }
    let (start, end) = (selection.start, selection.end);

    let start_text = line_at(lines, start.line)?;
    let s = byte_index(start_text, start.column).ok_or(RefactorError::ColumnOutOfRange {
        line: start.line,
        column: start.column,
    })?;
    let end_text = line_at(lines, end.line)?;
    let e = byte_index(end_text, end.column).ok_or(RefactorError::ColumnOutOfRange {
        line: end.line,
        column: end.column,
    })?;

    let merged = format!("{}{}{}", &lines[start.line][..s], replacement, &lines[end.line][e..]);
    lines[start.line] = merged;
    if end.line > start.line {
        lines.drain(start.line + 1..=end.line);
    }
    Ok(())
}
