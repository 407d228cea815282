//! Confproc CLI
//!
//! Applies rule-driven transformations to a tree of YAML configuration
//! files, as described by a settings file.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use confproc::{BatchRunner, LogReporter, Settings, discovery};

#[derive(Parser, Debug)]
#[command(name = "confproc")]
#[command(author, version, about = "Rule-driven batch processor for YAML configuration files")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Apply the rules to every document under the source directory
    Apply {
        /// Path to the settings file (defaults to confproc.settings.yml)
        settings: Option<PathBuf>,
    },

    /// Validate a settings file
    Check {
        /// Path to the settings file to validate
        settings: Option<PathBuf>,
    },

    /// List rules in evaluation order
    List {
        /// Path to the settings file
        settings: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("CONFPROC_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Apply { settings } => {
            let settings = Settings::load(&settings_path(settings))?;
            let documents = discovery::discover_documents(&settings.source_dir)?;

            let reporter = LogReporter;
            let runner = BatchRunner::new(&settings, &reporter);
            let report = runner.run(&documents);

            if report.has_errors() {
                info!("Process done with errors");
            } else {
                info!("Process done");
            }
        }
        Commands::Check { settings } => {
            let path = settings_path(settings);
            match Settings::load(&path) {
                Ok(settings) => {
                    println!("✓ Settings are valid");
                    println!("  source dir: {}", settings.source_dir.display());
                    println!("  {} rules", settings.rules.len());
                }
                Err(e) => {
                    eprintln!("✗ Settings error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::List { settings } => {
            let settings = Settings::load(&settings_path(settings))?;
            println!("Rules:");
            for (i, rule) in settings.rules.iter().enumerate() {
                let matches = match &rule.matches {
                    Some(patterns) => format!("{} patterns", patterns.len()),
                    None => "always".to_string(),
                };
                println!("  [{}] {} ({matches})", i + 1, rule.description);
            }
        }
    }

    Ok(())
}

fn settings_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(Settings::default_path)
}
