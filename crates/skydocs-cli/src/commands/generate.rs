//! `skydocs generate`

use skydocs::{DocumentationGenerator, TypedocCli};

use crate::cli::{GenerateArgs, ProjectArgs};
use crate::commands::utils::{load_config, run_interruptible};
use crate::error::Result;

pub async fn execute(project: &ProjectArgs, args: GenerateArgs) -> Result<()> {
    let config = load_config(project)?;

    let generated = run_interruptible(config.output_path(), move || {
        let extractor = TypedocCli::from_config(&config);
        DocumentationGenerator::new(&config, &extractor).generate()
    })
    .await??;

    tracing::info!(
        "Documented {} declaration(s), {} anchor ID(s)",
        generated.artifact.children.len(),
        generated.artifact.anchor_ids.len()
    );

    if args.keep {
        let output = generated.output.keep();
        tracing::info!("Documentation written to {}", output.display());
    }

    Ok(())
}
