//! pkgbump - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pkgbump::manifest::DEFAULT_MANIFEST;
use pkgbump::{BumpConfig, BumpOutcome, BumpType, run_bump};

/// Bump the semantic version stored in a JSON manifest.
#[derive(Parser, Debug)]
#[command(name = "pkgbump")]
#[command(about = "Bump the semantic version stored in a JSON manifest")]
#[command(version)]
struct Cli {
    /// Patch bump: 1.2.3 -> 1.2.4 (the default)
    #[arg(long)]
    patch: bool,

    /// Minor bump: 1.2.3 -> 1.3.0
    #[arg(long)]
    minor: bool,

    /// Major bump: 1.2.3 -> 2.0.0 (takes precedence over --minor)
    #[arg(long)]
    major: bool,

    /// Path to the manifest file
    #[arg(short = 'm', long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Dry run - print the new version without writing
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn into_config(self) -> BumpConfig {
        if self.patch && (self.major || self.minor) {
            tracing::debug!("--patch overridden by a higher bump flag");
        }

        BumpConfig {
            manifest: self.manifest,
            bump: BumpType::from_flags(self.major, self.minor),
            dry_run: self.dry_run,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) => {
            if outcome.written {
                println!("✓ {}", outcome.summary());
            } else {
                println!("{}", outcome.summary());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<BumpOutcome> {
    let config = cli.into_config();
    tracing::debug!(?config, "starting bump");

    run_bump(&config).with_context(|| format!("{} bump failed", config.bump))
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
