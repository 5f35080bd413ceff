//! The extract-variable pipeline.
//!
//! Strict read-then-write: `prepare_extraction` performs the whole read
//! pass (selection adjustment, context scan, name synthesis) and
//! `Extraction::plan` turns a chosen name into an [`EditPlan`]. The name
//! provider sits between the two as the single suspension point;
//! `extract_variable` sequences all three.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::error::RefactorError;
use super::name::synthesize_default_name;
use super::plan::{resolve_insertion_point, EditPlan};
use super::scanner::scan_context;
use super::selection::{adjust_selection, line_at, selected_text, Selection};
use crate::prompt::NameResolver;

static PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*([\w-]+):").unwrap());

/// Everything the read pass learned about one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionContext {
    pub selected_text: String,
    pub property: Option<String>,
    pub is_color_literal: bool,
    pub last_variable_line: Option<usize>,
    pub last_import_line: Option<usize>,
    pub default_name: String,
}

/// A completed read pass: the adjusted selection plus its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub selection: Selection,
    pub context: ExtractionContext,
}

impl Extraction {
    /// Build the edit plan for the final chosen name.
    pub fn plan(&self, name: &str) -> EditPlan {
        let point = resolve_insertion_point(
            self.context.last_variable_line,
            self.context.last_import_line,
        );
        EditPlan::new(self.selection, name, &self.context.selected_text, point)
    }
}

/// Outcome of a full extraction attempt. The no-op variants are silent by
/// contract: nothing was selected, or the user declined the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ExtractOutcome {
    EmptySelection,
    Cancelled,
    Edit { name: String, plan: EditPlan },
}

/// Read pass: adjust the selection, scan the enclosing context and
/// synthesize the default name. `None` means nothing is selected.
pub fn prepare_extraction(
    lines: &[String],
    selection: Selection,
) -> Result<Option<Extraction>, RefactorError> {
    if selection.is_empty() {
        return Ok(None);
    }

    let selection = adjust_selection(lines, selection)?;
    let selected = selected_text(lines, selection)?;

    let property = property_on_line(line_at(lines, selection.start.line)?);
    let is_color_literal = selected.starts_with('#');

    let scan = scan_context(lines, selection.start.line);
    let default_name =
        synthesize_default_name(&scan.fragments, property.as_deref(), is_color_literal);
    debug!(
        "extraction context: property={:?}, color={}, default name '{}'",
        property, is_color_literal, default_name
    );

    Ok(Some(Extraction {
        selection,
        context: ExtractionContext {
            selected_text: selected,
            property,
            is_color_literal,
            last_variable_line: scan.last_variable_line,
            last_import_line: scan.last_import_line,
            default_name,
        },
    }))
}

/// Full pipeline: read pass, name resolution, plan construction.
///
/// No document mutation happens here; the caller applies the returned plan
/// (if any) as one transaction.
pub fn extract_variable(
    lines: &[String],
    selection: Selection,
    resolver: &dyn NameResolver,
) -> Result<ExtractOutcome, RefactorError> {
    let Some(extraction) = prepare_extraction(lines, selection)? else {
        return Ok(ExtractOutcome::EmptySelection);
    };

    let Some(name) = resolver.resolve(
        &extraction.context.default_name,
        &extraction.context.selected_text,
    )?
    else {
        return Ok(ExtractOutcome::Cancelled);
    };

    let plan = extraction.plan(&name);
    Ok(ExtractOutcome::Edit { name, plan })
}

/// Property assignment on the selection's line, if any: `^\s*[\w-]+:`.
fn property_on_line(line: &str) -> Option<String> {
    PROPERTY_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refactor::selection::Position;

    #[test]
    fn property_matcher() {
        assert_eq!(
            property_on_line("    background-color: #f8f8f8;"),
            Some("background-color".to_string())
        );
        // leading whitespace is optional
        assert_eq!(property_on_line("color: red;"), Some("color".to_string()));
        assert_eq!(property_on_line(".foo {"), None);
        assert_eq!(property_on_line(""), None);
    }

    #[test]
    fn empty_selection_short_circuits() {
        let lines = vec![".foo {".to_string()];
        let selection = Selection::new(Position::new(0, 2), Position::new(0, 2));
        assert_eq!(prepare_extraction(&lines, selection).unwrap(), None);
    }
}
