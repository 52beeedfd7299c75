//! mccmd Core Library
//!
//! This crate provides the core functionality for mccmd, an interactive
//! generator for Minecraft Java Edition commands. It walks the user through a
//! series of prompts, validates every answer, and serializes the result into
//! the command's textual grammar.
//!
//! # Key Features
//!
//! - **Command Assembly**: `give`, `teleport`, `setblock`, `fill`, `say` and `execute`
//! - **Clause Builders**: target selector refinements and item components
//! - **Block Catalog**: block reference checks with "did you mean" suggestions
//! - **Delivery**: clipboard and desktop notification hand-off
//! - **Error Handling**: one error type for every failure mode
//!
//! # Examples
//!
//! Generating a command from canned answers:
//!
//! ```
//! use mccmd_core::assembler::Session;
//! use mccmd_core::catalog::BlockCatalog;
//! use mccmd_core::prompt::ScriptedPrompter;
//!
//! let catalog = BlockCatalog::from_blocks(["diamond_block"]);
//! let mut prompter = ScriptedPrompter::new(["setblock", "0 64 0", "diamond_block"]);
//!
//! let command = Session::new(&mut prompter, &catalog).run()?;
//! assert_eq!(command, "/setblock 0 64 0 minecraft:diamond_block");
//! # Ok::<(), mccmd_core::error::Error>(())
//! ```

pub mod assembler;
pub mod builder;
pub mod catalog;
pub mod clause;
pub mod command_definitions;
pub mod config;
pub mod delivery;
pub mod error;
pub mod execution;
pub mod fuzzy;
pub mod interpolation;
pub mod prompt;
pub mod validation;
