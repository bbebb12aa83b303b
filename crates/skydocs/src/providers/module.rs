use std::path::Path;

use crate::error::{DocsError, Result};
use crate::scan::{find_word, find_word_at_depth_zero, matching_bracket, skip_whitespace};

use super::{ProviderKind, ProviderSources};

const DECORATOR: &str = "@NgModule";
const PROVIDERS: &str = "providers";

/// Registers the missing documentation providers in the shared module.
///
/// Returns `Ok(None)` when both provider tokens already appear in
/// `content`, so manual registrations are left alone. Otherwise the
/// decorator's `providers` list gains one entry per missing kind, placed
/// ahead of any existing entries, and the matching imports and inline
/// implementation classes are prepended to the file.
pub fn inject_module_providers(
    content: &str,
    resource_path: &Path,
    import_path: &str,
    sources: &dyn ProviderSources,
) -> Result<Option<String>> {
    let missing: Vec<ProviderKind> = ProviderKind::ALL
        .into_iter()
        .filter(|kind| !content.contains(kind.token()))
        .collect();

    if missing.is_empty() {
        tracing::debug!(
            "Providers already registered in {}",
            resource_path.display()
        );
        return Ok(None);
    }

    let entries = missing
        .iter()
        .map(|kind| {
            format!(
                "    {{\n      provide: {},\n      useClass: {}\n    }}",
                kind.token(),
                kind.impl_class()
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    let mut overrides = String::new();
    for kind in &missing {
        let fields = kind.render_fields(sources)?;
        overrides.push_str(&format!(
            "export class {} {{\n{fields}}}\n\n",
            kind.impl_class()
        ));
    }

    let modified = insert_entries(content, resource_path, &entries)?;
    let imports = missing
        .iter()
        .map(|kind| kind.token())
        .collect::<Vec<_>>()
        .join(",\n  ");

    tracing::debug!(
        "Registered {} provider(s) in {}",
        missing.len(),
        resource_path.display()
    );

    Ok(Some(format!(
        "\nimport {{\n  {imports}\n}} from '{import_path}';\n\n{overrides}{modified}\n"
    )))
}

/// Splices `entries` into the `providers` list of the file's only
/// `@NgModule` decorator, creating the list when needed.
fn insert_entries(content: &str, path: &Path, entries: &str) -> Result<String> {
    let decorators = find_word(content, 0, content.len(), DECORATOR);
    let decorator = match decorators.as_slice() {
        [single] => *single,
        [] => return Err(DocsError::transform(path, "no @NgModule decorator found")),
        _ => {
            return Err(DocsError::transform(
                path,
                format!("expected one @NgModule decorator, found {}", decorators.len()),
            ));
        }
    };

    let open_paren = skip_whitespace(content, decorator + DECORATOR.len());
    if content.as_bytes().get(open_paren) != Some(&b'(') {
        return Err(DocsError::transform(path, "@NgModule is not called"));
    }
    let close_paren = matching_bracket(content, open_paren)
        .ok_or_else(|| DocsError::transform(path, "unbalanced @NgModule arguments"))?;

    let object_start = skip_whitespace(content, open_paren + 1);
    if object_start == close_paren {
        let mut modified = String::with_capacity(content.len() + entries.len() + 32);
        modified.push_str(&content[..=open_paren]);
        modified.push_str(&format!("{{\n  {PROVIDERS}: [\n{entries}\n  ]\n}}"));
        modified.push_str(&content[close_paren..]);
        return Ok(modified);
    }
    if content.as_bytes()[object_start] != b'{' {
        return Err(DocsError::transform(
            path,
            "@NgModule argument is not an object literal",
        ));
    }
    let object_end = matching_bracket(content, object_start)
        .ok_or_else(|| DocsError::transform(path, "unbalanced @NgModule metadata"))?;

    let Some(key) = find_word_at_depth_zero(content, object_start + 1, object_end, PROVIDERS)
    else {
        let has_other_props = !content[object_start + 1..object_end].trim().is_empty();
        let separator = if has_other_props { "," } else { "\n" };
        return Ok(format!(
            "{}\n  {PROVIDERS}: [\n{entries}\n  ]{separator}{}",
            &content[..=object_start],
            &content[object_start + 1..]
        ));
    };

    let colon = skip_whitespace(content, key + PROVIDERS.len());
    let list_start = skip_whitespace(content, colon + 1);
    if content.as_bytes().get(colon) != Some(&b':')
        || content.as_bytes().get(list_start) != Some(&b'[')
    {
        return Err(DocsError::transform(
            path,
            "`providers` is not an array literal",
        ));
    }
    let list_end = matching_bracket(content, list_start)
        .ok_or_else(|| DocsError::transform(path, "unbalanced `providers` array"))?;

    let (head, tail) = if content[list_start + 1..list_end].trim().is_empty() {
        (
            &content[..=list_start],
            format!("\n{entries}\n  {}", &content[list_end..]),
        )
    } else {
        (
            &content[..=list_start],
            format!("\n{entries},{}", &content[list_start + 1..]),
        )
    };

    Ok(format!("{head}{tail}"))
}
