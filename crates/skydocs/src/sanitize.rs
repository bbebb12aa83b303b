//! Removes members inherited from third-party types.
//!
//! Some public types extend types installed under `node_modules`, and the
//! extraction collaborator pulls every inherited member into the tree:
//!
//! ```text
//! export interface MyState extends Subject {}
//! ```
//!
//! Only the direct children of top-level entries are filtered. Top-level
//! entries are never removed.

use crate::model::{DocEntry, DocTree};

/// Drops children of top-level entries whose first source path contains
/// `dependency_marker`.
pub fn sanitize(mut tree: DocTree, dependency_marker: &str) -> DocTree {
    for entry in &mut tree.children {
        if let Some(children) = entry.children.as_mut() {
            children.retain(|child| !is_from_dependency(child, dependency_marker));
        }
    }
    tree
}

fn is_from_dependency(entry: &DocEntry, dependency_marker: &str) -> bool {
    entry
        .primary_source()
        .is_some_and(|file_name| file_name.contains(dependency_marker))
}
