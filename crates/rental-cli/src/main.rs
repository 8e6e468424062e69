//! Rental CLI - An interactive car rental desk
//!
//! This is the command-line interface for Rental. It seeds an in-memory
//! ledger from the configured catalog and drives it through a text menu.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, MenuArgs};
use crate::commands::{cars, menu, misc};
use crate::errors::classify;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let (code, hint) = classify(&e);
        tracing::debug!(error = ?e, code, "command failed");
        print_error(&ui_ctx, &e.to_string(), hint.as_deref());
        std::process::exit(code);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Menu(args)) => {
            menu::handle_menu(ctx, args)?;
        }
        Some(Commands::Cars(args)) => {
            cars::handle_cars(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            menu::handle_menu(ctx, &MenuArgs::default())?;
        }
    }

    Ok(())
}
