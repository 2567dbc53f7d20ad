use crate::config::Config;
use crate::report::print_summary;
use anyhow::{Context, Result};
use clap::Args;
use screenkit_model::ResolverInputs;
use screenkit_resolver::ScreenResolver;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Snapshot of the resolver inputs (JSON)
    pub snapshot: PathBuf,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,

    /// Print a readable summary instead of JSON
    #[arg(long)]
    pub summary: bool,
}

pub fn resolve(args: ResolveArgs, config: &Config) -> Result<()> {
    let inputs = load_snapshot(&args.snapshot)?;
    let resolved = ScreenResolver::new(config.resolver.clone()).resolve(&inputs);

    if args.summary {
        print_summary(&resolved);
        return Ok(());
    }

    let output = if args.pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };
    println!("{}", output);

    Ok(())
}

pub(crate) fn load_snapshot(path: &Path) -> Result<ResolverInputs> {
    let inputs = ResolverInputs::from_path(path)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
    debug!(
        path = %path.display(),
        screens = inputs.app.screens.len(),
        in_builder = inputs.builder.in_builder,
        "Loaded snapshot"
    );
    Ok(inputs)
}
