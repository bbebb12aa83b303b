use std::path::Path;

use crate::error::Result;
use crate::resources::parse_class_name;

use super::{ProviderKind, ProviderSources};

/// Replaces a placeholder provider file with an injectable class of the same
/// name that implements the `kind` interface.
///
/// `content` is only used to recover the placeholder's class name.
pub fn render_provider_file(
    kind: ProviderKind,
    content: &str,
    resource_path: &Path,
    import_path: &str,
    sources: &dyn ProviderSources,
) -> Result<String> {
    let class_name = parse_class_name(resource_path, content)?;
    let fields = kind.render_fields(sources)?;
    let token = kind.token();

    Ok(format!(
        "import {{
  Injectable
}} from '@angular/core';

import {{
  {token}
}} from '{import_path}';

@Injectable()
export class {class_name} implements {token} {{
{fields}}}
"
    ))
}
