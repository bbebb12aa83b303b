//! `skydocs preload`

use std::fs;
use std::io::Write;

use anyhow::Context;
use skydocs::HostCommand;

use crate::cli::{PreloadArgs, ProjectArgs};
use crate::commands::utils::{load_plugin, resolve_path};
use crate::error::{CliError, Result};

pub async fn execute(project: &ProjectArgs, args: PreloadArgs) -> Result<()> {
    let plugin = load_plugin(project)?;
    let command = HostCommand::parse(&args.command);

    let cwd = std::env::current_dir()?;
    let file = resolve_path(&args.file, &cwd);
    if !file.is_file() {
        return Err(CliError::FileNotFound(file));
    }

    let content = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let output = plugin.preload(&content, &file, &command)?;

    match args.out {
        Some(out) => {
            let out = resolve_path(&out, &cwd);
            fs::write(&out, output)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            tracing::debug!("Wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
