//! `skydocs run`

use std::sync::Arc;

use anyhow::Context;
use skydocs::{DocsToolsPlugin, HostCommand};
use tokio::process::Command;

use crate::cli::{ProjectArgs, RunArgs};
use crate::commands::utils::{load_plugin, run_interruptible};
use crate::error::{CliError, Result};

pub async fn execute(project: &ProjectArgs, args: RunArgs) -> Result<()> {
    let plugin = Arc::new(load_plugin(project)?);
    let command = HostCommand::parse(&args.command);

    let generating = Arc::clone(&plugin);
    let hook_command = command.clone();
    run_interruptible(plugin.config().output_path(), move || {
        generating.run_command(&hook_command)
    })
    .await??;

    let result = match args.host.split_first() {
        Some((program, host_args)) => run_host(&plugin, program, host_args).await,
        None if command == HostCommand::Serve && plugin.config().artifact_path().is_file() => {
            tracing::info!(
                "Serving documentation from {}. Press Ctrl+C to stop.",
                plugin.config().output_path().display()
            );
            wait_for_interrupt().await
        }
        None => Ok(()),
    };

    if args.keep && !matches!(result, Err(CliError::Interrupted)) {
        if let Some(output) = plugin.keep_output() {
            tracing::info!("Documentation kept at {}", output.display());
        }
    } else {
        plugin.cleanup_output()?;
    }

    result
}

async fn run_host(plugin: &DocsToolsPlugin, program: &str, args: &[String]) -> Result<()> {
    tracing::debug!("Spawning host: {} {}", program, args.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .current_dir(&plugin.config().root)
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("Failed to start host command '{program}'"))?;

    tokio::select! {
        status = child.wait() => {
            let status = status.with_context(|| format!("Failed to wait for '{program}'"))?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::HostFailed {
                    program: program.to_string(),
                    status: status.to_string(),
                })
            }
        }
        interrupt = tokio::signal::ctrl_c() => {
            interrupt?;
            tracing::info!("Interrupted, stopping {program}");
            child.kill().await?;
            Err(CliError::Interrupted)
        }
    }
}

async fn wait_for_interrupt() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Err(CliError::Interrupted)
}
