//! res-switch - Command-line interface for display-mode presets.
//!
//! Keeps a catalog of width/height/refresh-rate presets in `resolutions.json`
//! and switches the active display mode by running a QRes-compatible tool.

mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use env_logger::Env;
use log::debug;

use cli::{Cli, Commands};
use error::{exit_codes, CliError, During, Operation};
use res_switch_core::Controller;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let store = cli.store_config();
    let apply = cli.apply_config();
    let show_tool_output = !apply.quiet;
    debug!("Using preset file {}", store.path.display());

    let mut controller = Controller::open(store, apply)
        .await
        .during(Operation::Load)?;

    match cli.command {
        Commands::List => commands::run_list(&controller, cli.json),
        Commands::Show(args) => commands::run_show(&controller, args, cli.json),
        Commands::Add(args) => commands::run_add(&mut controller, args, cli.json).await,
        Commands::Edit(args) => commands::run_edit(&mut controller, args, cli.json).await,
        Commands::Remove(args) => commands::run_remove(&mut controller, args, cli.json).await,
        Commands::Apply(args) => {
            commands::run_apply(&controller, args, cli.json, show_tool_output).await
        }
    }
}
