//! Default variable-name synthesis.
//!
//! Folds the scanner's fragment stack, the target property and the
//! color-literal flag into a hyphen-joined name like `menu-item-text-color`.

use super::scanner::NameFragment;

/// Synthesize the default name offered to the name provider.
///
/// Deterministic: the same fragments, property and flag always produce the
/// same name, and the result never contains two consecutive equal parts.
pub fn synthesize_default_name(
    fragments: &[NameFragment],
    property: Option<&str>,
    is_color_literal: bool,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    for fragment in fragments {
        append(&mut parts, &fragment.name);
    }

    if let Some(property) = property {
        if property == "color" {
            append(&mut parts, "text-color");
        } else {
            append(&mut parts, property);
        }
    }

    let property_names_color = property.is_some_and(|p| p.contains("color"));
    if !property_names_color && is_color_literal {
        append(&mut parts, "color");
    }

    parts.join("-")
}

/// Append one fragment: strip a leading `l-` layout prefix, split on `-`,
/// drop empty parts and adjacent duplicates, and canonicalize `background`
/// to `bg`.
fn append(parts: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.strip_prefix("l-").unwrap_or(fragment);
    for part in fragment.split('-') {
        if part.is_empty() {
            continue;
        }
        if parts.last().is_some_and(|last| last == part) {
            continue;
        }
        let part = if part == "background" { "bg" } else { part };
        parts.push(part.to_string());
    }
}
