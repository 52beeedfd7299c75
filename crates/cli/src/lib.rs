//! mccmd CLI Library
//!
//! This crate provides the command-line interface for mccmd, an interactive
//! Minecraft command generator. It parses the command line, renders the
//! prompts in the terminal, and hands the generated command to the clipboard
//! and the desktop notifier.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`terminal`]: Terminal implementation of the core `Prompter`
//!
//! # Examples
//!
//! ```bash
//! # Generate a command, copy it and send a notification
//! mccmd create
//!
//! # Only print the command
//! mccmd create --copy=false --silent
//!
//! # Check block names against a custom catalog
//! mccmd create --blocks-path ~/blocks.yml
//! ```

pub mod cli_args;
pub mod terminal;

use log::info;
use mccmd_core::assembler::Session;
use mccmd_core::catalog::BlockCatalog;
use mccmd_core::config;
use mccmd_core::delivery::{deliver, ClipboardWriter, DeliveryReport, Notifier};
use mccmd_core::error::Result;
use mccmd_core::prompt::Prompter;

use crate::cli_args::CreateArgs;

/// Runs the `create` subcommand against the given collaborators.
///
/// # Errors
///
/// Returns an error if the session cannot be completed, e.g. because input
/// was closed or an unsupported command type was selected.
pub fn run_create(
    args: &CreateArgs,
    prompter: &mut dyn Prompter,
    clipboard: &mut dyn ClipboardWriter,
    notifier: &mut dyn Notifier,
) -> Result<DeliveryReport> {
    let source = config::resolve_catalog_source(&args.blocks_path);
    info!("Loading block catalog from {}", source.describe());
    let catalog = BlockCatalog::load(source.as_ref());

    let command = Session::new(&mut *prompter, &catalog).run()?;

    deliver(
        &command,
        &args.delivery_options(),
        prompter,
        clipboard,
        notifier,
    )
}
