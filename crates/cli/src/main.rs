use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::debug;
use mccmd_cli::cli_args::{Args, Commands};
use mccmd_cli::run_create;
use mccmd_cli::terminal::TerminalPrompter;
use mccmd_core::error::Result;
use mccmd_core::execution::{SystemClipboard, SystemNotifier};

fn execute() -> Result<()> {
    let args = Args::parse();

    let Some(Commands::Create(create_args)) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let mut prompter = TerminalPrompter::stdio();
    let report = run_create(
        &create_args,
        &mut prompter,
        &mut SystemClipboard,
        &mut SystemNotifier,
    )?;
    debug!("Delivery finished: {:?}", report);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
