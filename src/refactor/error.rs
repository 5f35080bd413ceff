use thiserror::Error;

/// Failures while building an extraction plan.
///
/// Empty selections and cancelled prompts are not errors; they surface as
/// no-op outcomes so hosts can stay silent about them.
#[derive(Debug, Error)]
pub enum RefactorError {
    #[error("line {line} is out of range (document has {len} lines)")]
    LineOutOfRange { line: usize, len: usize },

    #[error("column {column} is past the end of line {line}")]
    ColumnOutOfRange { line: usize, column: usize },

    #[error("selection end precedes selection start")]
    InvertedSelection,

    #[error("name prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}
