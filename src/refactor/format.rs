//! Alignment formatter: pads runs of variable declarations so their values
//! start at one uniform column.

use regex::Regex;
use std::sync::LazyLock;

static DECLARATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$([\w-]+):\s*(.*;)\s*$").unwrap());

/// Align every declaration run in the document.
pub fn align_variable_declarations(lines: &[String]) -> Vec<String> {
    align_region(lines, 0, lines.len())
}

/// Align declaration runs within `lines[start..end)`; lines outside the
/// region are untouched. Any non-declaration line (blank lines included)
/// terminates the current run, and runs are aligned independently.
pub fn align_region(lines: &[String], start: usize, end: usize) -> Vec<String> {
    let mut out = lines.to_vec();
    let end = end.min(lines.len());
    let start = start.min(end);

    let mut run: Vec<(usize, String, String)> = Vec::new();
    for i in start..end {
        if let Some(caps) = DECLARATION_RE.captures(&lines[i]) {
            run.push((i, caps[1].to_string(), caps[2].to_string()));
        } else {
            flush_run(&mut out, &mut run);
        }
    }
    flush_run(&mut out, &mut run);
    out
}

/// Rewrite one run: the longest name keeps a single space after its colon
/// and every other line is padded to match.
fn flush_run(out: &mut [String], run: &mut Vec<(usize, String, String)>) {
    let width = run
        .iter()
        .map(|(_, name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    for (i, name, value) in run.drain(..) {
        let pad = width - name.chars().count() + 1;
        out[i] = format!("${}:{}{}", name, " ".repeat(pad), value);
    }
}
