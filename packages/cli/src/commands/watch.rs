use crate::commands::resolve::load_snapshot;
use crate::config::Config;
use crate::report::print_summary;
use crate::watcher::FileWatcher;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use colored::Colorize;
use screenkit_resolver::ScreenResolver;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Snapshot of the resolver inputs (JSON)
    pub snapshot: PathBuf,
}

pub fn watch(args: WatchArgs, config: &Config) -> Result<()> {
    let resolver = ScreenResolver::new(config.resolver.clone());
    let watcher = FileWatcher::new(&args.snapshot)?;
    let debounce = Duration::from_millis(config.watch_debounce_ms);

    println!(
        "{} {}",
        "👀 Watching".bright_blue().bold(),
        args.snapshot.display()
    );

    resolve_once(&resolver, &args.snapshot);

    while watcher.next_change().is_some() {
        // Let the save settle, then fold its remaining events into this pass
        thread::sleep(debounce);
        let skipped = watcher.drain();
        debug!(skipped, "Snapshot changed");

        resolve_once(&resolver, &args.snapshot);
    }

    Ok(())
}

fn resolve_once(resolver: &ScreenResolver, snapshot: &Path) {
    let timestamp = Local::now().format("%H:%M:%S");
    println!();

    match load_snapshot(snapshot) {
        Ok(inputs) => {
            println!("{} {}", format!("[{}]", timestamp).dimmed(), "Resolved".green());
            print_summary(&resolver.resolve(&inputs));
        }
        Err(e) => {
            warn!(error = %e, "Skipping unreadable snapshot");
            eprintln!("{} {} {:#}", format!("[{}]", timestamp).dimmed(), "✗".red(), e);
        }
    }
}
