//! Apply command implementation.

use std::time::Duration;

use indicatif::ProgressBar;

use res_switch_core::Controller;

use crate::cli::ApplyArgs;
use crate::error::{CliError, During, Operation};
use crate::output::get_formatter;

/// Run the apply command
///
/// The spinner only runs while the tool's output is discarded, so the two
/// never share the terminal.
pub async fn run_apply(
    controller: &Controller,
    args: ApplyArgs,
    json: bool,
    show_tool_output: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    let index = controller.resolve(args.index).during(Operation::Apply)?;

    if args.dry_run {
        let command = controller.preview(args.index).during(Operation::Apply)?;
        println!("{}", formatter.format_preview(index, &command));
        return Ok(());
    }

    let preset = controller.show(args.index).during(Operation::Apply)?;
    let message = format!("Applying {}...", preset);

    let spinner = if json || show_tool_output {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    if show_tool_output {
        eprintln!("{}", message);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = controller.apply(args.index).await;
    spinner.finish_and_clear();

    let outcome = result.during(Operation::Apply)?;
    println!("{}", formatter.format_applied(index, &outcome));
    Ok(())
}
