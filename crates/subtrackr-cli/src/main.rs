//! SubTrackr CLI - Keep track of recurring subscription payments
//!
//! This is the command-line interface for SubTrackr. It provides a
//! user-friendly interface to the core ledger.

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
use subtrackr_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{backup, init, misc, reports, subscriptions};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let (code, hint) = errors::classify(&e);
        tracing::debug!(error = ?e, code, "command failed");
        print_error(&ui_ctx, &e.to_string(), hint.as_deref());
        std::process::exit(code);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Add(args)) => subscriptions::handle_add(ctx, args),
        Some(Commands::Delete(args)) => subscriptions::handle_delete(ctx, args),
        Some(Commands::List(args)) => subscriptions::handle_list(ctx, args),
        Some(Commands::Totals(args)) => reports::handle_totals(ctx, args),
        Some(Commands::Upcoming(args)) => reports::handle_upcoming(ctx, args),
        Some(Commands::Export(args)) => backup::handle_export(ctx, args),
        Some(Commands::Import(args)) => backup::handle_import(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None => {
            println!("SubTrackr v{}", VERSION);
            println!("\nRun `subtrackr --help` for usage information.");
            Ok(())
        }
    }
}
