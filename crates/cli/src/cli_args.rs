//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Running `mccmd` without a subcommand prints the help text.

use clap::{Args as ClapArgs, Parser, Subcommand};
use mccmd_core::delivery::DeliveryOptions;

/// Command-line arguments for the mccmd CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use mccmd_cli::cli_args::{Args, Commands};
///
/// let args = Args::parse_from(["mccmd", "create", "--silent"]);
/// assert!(matches!(args.command, Some(Commands::Create(_))));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "mccmd", version, about = "Generate Minecraft commands interactively")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate Minecraft commands
    Create(CreateArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct CreateArgs {
    /// Copy the generated command to the clipboard.
    ///
    /// Copying is on unless `--copy=false` is given.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub copy: Option<bool>,

    /// Do not send a desktop notification.
    #[arg(long, short = 's', action)]
    pub silent: bool,

    /// Path to a block catalog YAML file.
    ///
    /// If not provided, `~/.mccmd/blocks.yml` is used when it exists, and the
    /// bundled catalog otherwise.
    #[arg(long, short = 'b')]
    pub blocks_path: Option<String>,
}

impl CreateArgs {
    #[must_use]
    pub fn should_copy(&self) -> bool {
        self.copy.unwrap_or(true)
    }

    #[must_use]
    pub fn delivery_options(&self) -> DeliveryOptions {
        DeliveryOptions {
            copy: self.should_copy(),
            silent: self.silent,
        }
    }
}
