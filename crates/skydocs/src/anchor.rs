//! Anchor IDs for same-page documentation links.
//!
//! An anchor ID is `{kind}-{name}` with both halves lower-cased, stripped of
//! punctuation and with whitespace turned into dashes. A missing or empty
//! half renders as the literal `undefined`.

use crate::model::{AnchorIds, DocEntry};

const STRIPPED: &[char] = &[
    '_', '~', '`', '@', '!', '#', '$', '%', '^', '&', '*', '(', ')', '[', ']', '{', '}', ';', ':',
    '\'', '/', '\\', '<', '>', ',', '.', '?', '=', '+', '|', '"',
];

const MISSING: &str = "undefined";

/// Derives the anchor ID for an entry of `kind` named `name`.
///
/// ```
/// use skydocs::anchor::derive_anchor_id;
///
/// assert_eq!(derive_anchor_id(Some("Class"), Some("FooType")), "class-footype");
/// assert_eq!(derive_anchor_id(Some("TypeAlias"), Some("")), "typealias-undefined");
/// ```
pub fn derive_anchor_id(kind: Option<&str>, name: Option<&str>) -> String {
    format!("{}-{}", url_fragment(kind), url_fragment(name))
}

fn url_fragment(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return MISSING.to_string();
    };

    let mut fragment = String::with_capacity(value.len());
    let mut in_whitespace = false;
    for c in value.to_lowercase().chars() {
        if STRIPPED.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            if !in_whitespace {
                fragment.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        fragment.push(c);
    }

    fragment.replace("--", "-")
}

/// Annotates every non-variable entry with its anchor ID and returns the
/// name-to-anchor table.
///
/// Duplicate names overwrite earlier mappings; every entry keeps its own
/// `anchorId` regardless.
pub fn assign_anchor_ids(entries: &mut [DocEntry]) -> AnchorIds {
    let mut anchor_ids = AnchorIds::new();

    for entry in entries.iter_mut().filter(|entry| !entry.is_variable()) {
        let anchor_id = derive_anchor_id(entry.kind.as_deref(), entry.name.as_deref());
        let key = entry.name.clone().unwrap_or_else(|| MISSING.to_string());
        entry.anchor_id = Some(anchor_id.clone());
        anchor_ids.insert(key, anchor_id);
    }

    anchor_ids
}
