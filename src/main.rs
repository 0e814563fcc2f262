use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod locale;
mod models;
mod share;
mod store;

use commands::{
    ConfigCommand, CustomCommand, FormCommand, ItemCommand, NoteCommand, ShareCommand,
};
use config::Config;
use store::DocumentStore;

#[derive(Parser)]
#[command(name = "stocklist")]
#[command(version)]
#[command(about = "Daily restaurant inventory form", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and list catalog item counts
    Item(ItemCommand),

    /// Manage custom (off-catalog) rows
    Custom(CustomCommand),

    /// Manage category and general notes
    Note(NoteCommand),

    /// Export the form as text or a WhatsApp link
    Share(ShareCommand),

    /// Form lifecycle: show, date, language, clear, reset
    Form(FormCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    let store = DocumentStore::new(config.data_path.clone());

    match cli.command {
        Some(Commands::Item(cmd)) => cmd.run(&store)?,
        Some(Commands::Custom(cmd)) => cmd.run(&store)?,
        Some(Commands::Note(cmd)) => cmd.run(&store)?,
        Some(Commands::Share(cmd)) => cmd.run(&store, &config)?,
        Some(Commands::Form(cmd)) => cmd.run(&store)?,
        Some(Commands::Config(cmd)) => cmd.run(&config)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
