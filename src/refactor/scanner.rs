//! Context scanner: a single top-down pass over the lines above the
//! selection that tracks which selector fragments still enclose it.
//!
//! This is deliberately not a CSS parser. Lines are classified with regex
//! token matchers and nesting is tracked by counting braces, which is enough
//! for conventionally formatted SCSS (one selector per line, `{` on the
//! selector's own line). Strings, comments and multi-line selectors are
//! outside its contract.

use regex::Regex;
use std::sync::LazyLock;

static ID_SELECTOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#([\w-]+)").unwrap());
static CLASS_SELECTOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\.([\w-]+)").unwrap());
static PARENT_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^&\.([\w-]+)").unwrap());
static BEM_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^&__([\w-]+)").unwrap());
static BEM_MODIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^&--([\w-]+)").unwrap());
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^a\b").unwrap());
static PSEUDO_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([\w-]+)").unwrap());

/// A name token extracted from a selector line, tagged with the brace depth
/// at which it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFragment {
    pub name: String,
    pub depth: i32,
}

/// Output of one scan: the fragments still enclosing the target position
/// (outermost first) plus the bookkeeping the insertion resolver needs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub fragments: Vec<NameFragment>,
    pub last_variable_line: Option<usize>,
    pub last_import_line: Option<usize>,
}

/// Walk `lines[..end_line]` in order, maintaining the fragment stack.
///
/// Per line: record fragments at the depth current *before* the line's own
/// braces are counted, then count braces, then pop fragments whose depth is
/// `>=` the updated depth. That ordering is what lets a selector survive the
/// block it opens on the same line while fragments of a closing line are
/// discarded; do not reorder it.
pub fn scan_context(lines: &[String], end_line: usize) -> ScanResult {
    let mut result = ScanResult::default();
    let mut stack: Vec<NameFragment> = Vec::new();
    let mut depth: i32 = 0;

    for (i, line) in lines.iter().enumerate().take(end_line) {
        if line.starts_with('$') {
            result.last_variable_line = Some(i);
            continue;
        }
        if line.starts_with("@import") {
            result.last_import_line = Some(i);
            continue;
        }

        for token in line.trim().split(' ') {
            for name in fragment_names(token) {
                stack.push(NameFragment { name, depth });
            }
        }

        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
        }

        while stack.last().is_some_and(|top| top.depth >= depth) {
            stack.pop();
        }
    }

    result.fragments = stack;
    result
}

/// Fragment names contributed by one whitespace-delimited token.
///
/// The selector matchers are mutually exclusive (first match wins); the
/// pseudo-class matcher is independent and fires in addition, so
/// `&.active:hover` yields both `active` and `hover`.
fn fragment_names(token: &str) -> Vec<String> {
    let mut names = Vec::new();

    if let Some(caps) = ID_SELECTOR_RE.captures(token) {
        names.push(caps[1].to_string());
    } else if let Some(caps) = CLASS_SELECTOR_RE.captures(token) {
        names.push(caps[1].to_string());
    } else if let Some(caps) = PARENT_CLASS_RE.captures(token) {
        names.push(caps[1].to_string());
    } else if let Some(caps) = BEM_ELEMENT_RE.captures(token) {
        names.push(caps[1].to_string());
    } else if let Some(caps) = BEM_MODIFIER_RE.captures(token) {
        names.push(caps[1].to_string());
    } else if ANCHOR_RE.is_match(token) {
        names.push("link".to_string());
    }

    for caps in PSEUDO_CLASS_RE.captures_iter(token) {
        names.push(caps[1].to_string());
    }

    names
}
