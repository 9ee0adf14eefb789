//! Gesso CLI - build configuration toolchain for utility-class generation.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod watcher;

#[derive(Parser)]
#[command(name = "gesso")]
#[command(about = "Build configuration toolchain for utility-class generation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a tailwind.toml in the current project
    Init {
        /// Skip interactive prompts, use defaults
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate config files and report every issue
    Check {
        /// Config files to check
        #[arg(default_value = "tailwind.toml")]
        paths: Vec<PathBuf>,

        /// Project root to resolve content globs against
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Re-run the check whenever a config file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Merge config layers into a single config, lowest precedence first
    Merge {
        /// Config layers, base first
        #[arg(num_args = 2.., required = true)]
        paths: Vec<PathBuf>,

        /// Write the merged config here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rewrite config files in canonical form
    Fmt {
        /// Config files to format
        #[arg(default_value = "tailwind.toml")]
        paths: Vec<PathBuf>,

        /// Exit non-zero instead of rewriting when a file is not canonical
        #[arg(long)]
        check: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so merged configs on stdout stay pipeable
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Check { paths, root, watch } => {
            commands::check::run(paths, root, watch).await?;
        }
        Commands::Merge { paths, output } => {
            commands::merge::run(paths, output).await?;
        }
        Commands::Fmt { paths, check } => {
            commands::fmt::run(paths, check).await?;
        }
    }

    Ok(())
}
