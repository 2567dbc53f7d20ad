use crate::commands::resolve::load_snapshot;
use crate::config::Config;
use crate::report::print_ranked;
use anyhow::Result;
use clap::Args;
use screenkit_resolver::ScreenResolver;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RankArgs {
    /// Snapshot of the resolver inputs (JSON)
    pub snapshot: PathBuf,
}

pub fn rank(args: RankArgs, config: &Config) -> Result<()> {
    let inputs = load_snapshot(&args.snapshot)?;
    let resolved = ScreenResolver::new(config.resolver.clone()).resolve(&inputs);

    print_ranked(&resolved.screens, resolved.active_screen.as_ref());
    Ok(())
}
