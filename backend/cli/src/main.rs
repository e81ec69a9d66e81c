mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use plugdash_config::{config_dir, config_file_path, load_and_prepare};
use plugdash_logging::init_logger;

#[derive(Parser)]
#[command(name = "plugdash")]
#[command(about = "Inspect dashboard plugin lists and their default plugin")]
#[command(version)]
struct Cli {
    /// Config file (defaults to `$PLUGDASH_CONFIG_DIR/config.yaml`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the plugin list offered to the dashboard
    List {
        /// Plugin catalog JSON file
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Print the value of the default plugin
    Default {
        /// Plugin catalog JSON file
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(|| config_file_path(&config_dir()));
    let config = load_and_prepare(&config_path).await?;

    // The subscriber depends on the loaded config, so events emitted while
    // loading it are not recorded.
    init_logger(config.log_level(), config.log_dir().map(PathBuf::as_path))
        .context("Failed to initialize logging")?;

    let output = match cli.command {
        Commands::List { catalog } => {
            commands::list_plugins(&commands::resolve_catalog(catalog, &config)?)?
        }
        Commands::Default { catalog } => {
            commands::default_plugin(&commands::resolve_catalog(catalog, &config)?)?
        }
    };
    println!("{output}");
    Ok(())
}
