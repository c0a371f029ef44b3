//! Catalog commands: list, show, add, edit, remove.

use std::io::{self, Write};

use res_switch_core::{AlwaysConfirm, Confirm, Controller, RemoveOutcome};

use crate::cli::{AddArgs, EditArgs, RemoveArgs, ShowArgs};
use crate::error::{CliError, During, Operation};
use crate::output::{get_formatter, Change};

/// Asks on the terminal. Anything but y/yes is a no.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn run_list(controller: &Controller, json: bool) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    println!(
        "{}",
        formatter.format_presets(controller.list(), controller.store_path())
    );
    Ok(())
}

pub fn run_show(controller: &Controller, args: ShowArgs, json: bool) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    let index = controller.resolve(args.index).during(Operation::Show)?;
    let preset = controller.show(args.index).during(Operation::Show)?;

    println!("{}", formatter.format_preset(index, &preset));
    Ok(())
}

pub async fn run_add(
    controller: &mut Controller,
    args: AddArgs,
    json: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    let index = controller.add(&args.input()).await.during(Operation::Add)?;
    let preset = controller.list()[index];

    println!("{}", formatter.format_change(Change::Added, index, &preset));
    Ok(())
}

pub async fn run_edit(
    controller: &mut Controller,
    args: EditArgs,
    json: bool,
) -> Result<(), CliError> {
    let edit = args.edit();
    if edit.is_empty() {
        return Err(CliError::InvalidArgument(
            "Nothing to change: pass --width, --height or --refresh".to_string(),
        ));
    }

    let formatter = get_formatter(json);
    let index = controller.resolve(args.index).during(Operation::Edit)?;
    let updated = controller
        .edit(args.index, &edit)
        .await
        .during(Operation::Edit)?;

    println!("{}", formatter.format_change(Change::Updated, index, &updated));
    Ok(())
}

pub async fn run_remove(
    controller: &mut Controller,
    args: RemoveArgs,
    json: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    let confirm: &dyn Confirm = if args.force {
        &AlwaysConfirm
    } else {
        &StdinConfirm
    };

    match controller
        .remove(args.index, confirm)
        .await
        .during(Operation::Remove)?
    {
        RemoveOutcome::Removed { index, preset } => {
            println!("{}", formatter.format_change(Change::Removed, index, &preset));
        }
        RemoveOutcome::Cancelled => {
            println!("{}", formatter.format_message("Removal cancelled"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
