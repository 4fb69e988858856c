use anyhow::Result;
use clap::{Parser, Subcommand};

use savemore::assets::IconSet;
use savemore::config::{paths::SaveMorePaths, settings::Settings};
use savemore::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "savemore",
    author = "Andrew Nguyen",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "SaveMore is a terminal-based application to help people save \
                  and manage their money. It provides income entry with \
                  validation and an expense breakdown chart, with budgeting \
                  and settings screens coming soon."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SaveMorePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let icons = IconSet::discover(&paths);

    match cli.command {
        Some(Commands::Config) => {
            println!("SaveMore Configuration");
            println!("======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Assets directory: {}", paths.assets_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Show icons:      {}", settings.show_icons);
            println!("  Confirm exit:    {}", settings.confirm_exit);
            println!();
            match icons.require_complete() {
                Ok(()) => println!("Icon assets: all found"),
                Err(e) => println!("Icon assets: {}", e),
            }
        }
        Some(Commands::Tui) | None => {
            run_tui(settings, icons)?;
        }
    }

    Ok(())
}
