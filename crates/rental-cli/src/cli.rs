use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use rental_core::VERSION;

/// Rental - An interactive car rental desk backed by an in-memory ledger
#[derive(Parser)]
#[command(name = "rental")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file (catalog and UI settings)
    #[arg(short, long, global = true, env = "RENTAL_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `menu` command
#[derive(Args, Default)]
pub struct MenuArgs {
    /// Fail instead of prompting when stdin is a terminal
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `cars` command
#[derive(Args)]
pub struct CarsArgs {
    /// Include cars that are currently rented
    #[arg(long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive rental menu (default)
    Menu(MenuArgs),

    /// List the configured catalog
    Cars(CarsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
