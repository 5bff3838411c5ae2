//! Trieviz CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "trieviz")]
#[command(about = "Visualize dot-delimited entries as a trie graph", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the trie and write both output artifacts
    Render {
        /// Input file, one dot-delimited entry per line
        #[arg(short, long, default_value = trieviz_core::DEFAULT_INPUT)]
        input: PathBuf,

        /// Path for the serialized trie (JSON)
        #[arg(long, default_value = trieviz_core::DEFAULT_JSON_OUTPUT)]
        json: PathBuf,

        /// Path for the rendered graph document (Graphviz DOT)
        #[arg(long, default_value = trieviz_core::DEFAULT_DOT_OUTPUT)]
        dot: PathBuf,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "trieviz={log_level},trieviz_core={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Render { input, json, dot } => commands::render(input, json, dot),
        Commands::Version => {
            println!("trieviz v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
