mod commands;
mod config;
mod report;
mod watcher;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, rank, resolve, watch, InitArgs, RankArgs, ResolveArgs, WatchArgs};
use config::Config;
use std::path::PathBuf;

/// Screenkit CLI - resolve which screen an app shows, and how it's framed
#[derive(Parser, Debug)]
#[command(name = "screenkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./screenkit.config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default screenkit.config.json
    Init(InitArgs),

    /// Resolve a snapshot and print the result
    Resolve(ResolveArgs),

    /// Print the ranked screen list of a snapshot
    Rank(RankArgs),

    /// Re-resolve a snapshot every time it changes
    Watch(WatchArgs),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    let load_config = || Config::load(&cwd, cli.config.as_deref());

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Resolve(args) => resolve(args, &load_config()?),
        Command::Rank(args) => rank(args, &load_config()?),
        Command::Watch(args) => watch(args, &load_config()?),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
