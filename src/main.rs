//! CLI entry point for jcgen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jcgen")]
#[command(version)]
#[command(about = "A minimal static site generator for Markdown blogs", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Build the site into the output directory
    #[command(alias = "b")]
    Build,

    /// Delete the output directory
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "jcgen=debug,info"
    } else {
        "jcgen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            jcgen::commands::init::run(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Build => {
            let site = jcgen::Site::new(&base_dir);
            tracing::info!("Building site...");
            site.build()?;
            println!("Site built in {:?}", site.output_dir);
        }

        Commands::Clean => {
            let site = jcgen::Site::new(&base_dir);
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("jcgen version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
