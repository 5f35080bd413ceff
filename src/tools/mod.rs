//! Tool layer: file-backed wrappers around the refactoring core.
//!
//! Tools own everything the core deliberately doesn't: reading the file,
//! line-ending and trailing-newline preservation, dry-run previews and the
//! transactional write.

pub mod extract_variable;
pub mod format_variables;

pub use extract_variable::ExtractVariableTool;
pub use format_variables::FormatVariablesTool;

use serde::Serialize;

/// Structured result a tool reports back to its host (the CLI prints it as
/// JSON).
#[derive(Debug, Clone, Serialize)]
pub struct RefactorResult {
    pub tool: String,
    /// False only when the operation failed; no-ops are still successes.
    pub success: bool,
    /// Whether the file was modified.
    pub applied: bool,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    pub dry_run: bool,
    pub message: String,
}

impl RefactorResult {
    pub(crate) fn noop(tool: &str, file: &str, message: impl Into<String>) -> Self {
        Self {
            tool: tool.to_string(),
            success: true,
            applied: false,
            file: file.to_string(),
            variable: None,
            dry_run: false,
            message: message.into(),
        }
    }
}

pub(crate) fn detect_line_ending(content: &str) -> &'static str {
    if content.contains("\r\n") { "\r\n" } else { "\n" }
}

pub(crate) fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

pub(crate) fn join_lines(lines: &[String], newline: &str, trailing_newline: bool) -> String {
    let mut content = lines.join(newline);
    if trailing_newline {
        content.push_str(newline);
    }
    content
}
