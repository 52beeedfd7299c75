//! Top-level composition: pick a command kind, run its flow, serialize.

use itertools::Itertools;
use log::{debug, info};

use crate::builder::{build_clauses, COMPONENTS, SELECTORS};
use crate::catalog::{normalize_block_id, BlockCatalog, BlockCheck};
use crate::command_definitions::{CommandDraft, CommandKind, TargetSelector};
use crate::config::{DEFAULT_SUGGESTION_LIMIT, NAMESPACE_PREFIX};
use crate::error::Result;
use crate::prompt::{ask_required, ask_validated, ask_yes_no, Choice, Prompter, Tone};
use crate::validation::{is_non_empty, is_non_negative_integer, is_position, normalize_non_negative};

const DEFAULT_AMOUNT: &str = "1";

/// Collapses the whitespace between the tokens of a valid position.
fn normalize_position(input: &str) -> String {
    input.split_whitespace().join(" ")
}

fn parse_amount(input: &str) -> std::result::Result<String, String> {
    if input.is_empty() {
        Ok(DEFAULT_AMOUNT.to_string())
    } else if is_non_negative_integer(input) {
        Ok(normalize_non_negative(input))
    } else {
        Err(
            "Please enter a valid amount (non-negative integer), or leave it empty for 1."
                .to_string(),
        )
    }
}

fn parse_destination(input: &str) -> std::result::Result<String, String> {
    if input.len() > 1 && input.starts_with('@') {
        Ok(input.to_string())
    } else if is_position(input) {
        Ok(normalize_position(input))
    } else {
        Err("Please enter a target selector (e.g., @p) or coordinates (e.g., 0 64 0).".to_string())
    }
}

fn unknown_block_message(block_id: &str, suggestions: &[&str], completions: &[&str]) -> String {
    let mut message = format!("Unknown block \"{block_id}\".");

    if !suggestions.is_empty() {
        message.push_str(&format!(" Did you mean: {}?", suggestions.iter().join(", ")));
    }

    if !completions.is_empty() {
        message.push_str(&format!(
            " Blocks matching \"{block_id}\": {}",
            completions.iter().join(", ")
        ));
    }

    message
}

/// One command-generation session.
pub struct Session<'a> {
    prompter: &'a mut dyn Prompter,
    catalog: &'a BlockCatalog,
    catalog_warned: bool,
}

impl<'a> Session<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, catalog: &'a BlockCatalog) -> Self {
        Self {
            prompter,
            catalog,
            catalog_warned: false,
        }
    }

    /// Walks the user through one command and returns it serialized.
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed before a required field was
    /// answered, or if the selected kind is not supported.
    pub fn run(&mut self) -> Result<String> {
        let kind = self.select_kind()?;
        let draft = self.compose(kind)?;
        draft.serialize()
    }

    /// # Errors
    ///
    /// Returns [`crate::error::Error::UnsupportedKind`] if the picked value
    /// is not a known kind.
    pub fn select_kind(&mut self) -> Result<CommandKind> {
        let choices: Vec<Choice> = CommandKind::ALL
            .iter()
            .map(|kind| Choice::plain(kind.as_str()))
            .collect();

        let picked = self.prompter.select_one("Select a command type:", &choices)?;
        let kind = picked.parse::<CommandKind>()?;

        info!("Generating a `{}` command", kind);
        self.prompter.echo("Generate target", kind.as_str());
        Ok(kind)
    }

    /// Collects every field `kind` needs.
    ///
    /// # Errors
    ///
    /// Returns an error if input is closed before a required field was answered.
    pub fn compose(&mut self, kind: CommandKind) -> Result<CommandDraft> {
        let mut draft = CommandDraft::new(kind);

        match kind {
            CommandKind::Give => self.compose_give(&mut draft)?,
            CommandKind::Teleport => {
                let destination = ask_required(
                    &mut *self.prompter,
                    "Destination player/entity or coordinates (e.g., @p or 0 64 0)",
                    parse_destination,
                )?;
                self.prompter.echo("Destination", &destination);
                draft.set_field("destination", destination);
            }
            CommandKind::Setblock => {
                let position = self.ask_position("Position", "Position (e.g., 0 64 0)")?;
                let block = self.ask_block("Block (e.g., diamond_block)")?;
                draft.set_field("position", position);
                draft.set_field("block", block);
            }
            CommandKind::Fill => {
                let from = self.ask_position("From position", "From position (e.g., 0 64 0)")?;
                let to = self.ask_position("To position", "To position (e.g., 10 64 10)")?;
                let block = self.ask_block("Block (e.g., stone)")?;
                draft.set_field("from", from);
                draft.set_field("to", to);
                draft.set_field("block", block);
            }
            CommandKind::Say => {
                let message = self.ask_text_field("Message", "Message", "Please enter a message.")?;
                draft.set_field("message", message);
            }
            CommandKind::Execute => {
                let target = self.ask_text_field(
                    "Target",
                    "Target selector (e.g., @a)",
                    "Please enter a target.",
                )?;
                let command = self.ask_text_field(
                    "Command",
                    "Command to execute",
                    "Please enter a command.",
                )?;
                draft.set_field("target", target);
                draft.set_field("command", command);
            }
        }

        Ok(draft)
    }

    fn compose_give(&mut self, draft: &mut CommandDraft) -> Result<()> {
        let choices: Vec<Choice> = TargetSelector::ALL
            .iter()
            .map(|target| Choice::described(target.token(), target.description()))
            .collect();
        let picked = self
            .prompter
            .select_one("Select a target selector type:", &choices)?;
        let target = picked.parse::<TargetSelector>()?;
        self.prompter.echo("Target", target.token());
        draft.target = Some(target);

        if ask_yes_no(
            &mut *self.prompter,
            "Want to further refine your target selector?",
            false,
        )? {
            draft.clauses = Some(build_clauses(&mut *self.prompter, &SELECTORS)?);
        }

        let item = self.ask_text_field(
            "Item name",
            "Item name (e.g., diamond)",
            "Please enter an item name.",
        )?;
        draft.set_field("item", item);

        if ask_yes_no(&mut *self.prompter, "Want to add item components?", false)? {
            draft.components = Some(build_clauses(&mut *self.prompter, &COMPONENTS)?);
        }

        let amount = ask_required(
            &mut *self.prompter,
            "Item amount (How many? If empty, it'll set 1.)",
            parse_amount,
        )?;
        self.prompter.echo("Item amount", &amount);
        draft.set_field("amount", amount);

        Ok(())
    }

    fn ask_text_field(&mut self, label: &str, message: &str, error: &str) -> Result<String> {
        let value = ask_validated(&mut *self.prompter, message, is_non_empty, error)?;
        self.prompter.echo(label, &value);
        Ok(value)
    }

    fn ask_position(&mut self, label: &str, message: &str) -> Result<String> {
        let position = ask_required(&mut *self.prompter, message, |input| {
            if is_position(input) {
                Ok(normalize_position(input))
            } else {
                Err(
                    "Please enter a position as three coordinates (e.g., 0 64 0 or ~ ~1 ~)."
                        .to_string(),
                )
            }
        })?;
        self.prompter.echo(label, &position);
        Ok(position)
    }

    /// Asks for a block until the catalog knows it, returning it with the namespace prefix.
    fn ask_block(&mut self, message: &str) -> Result<String> {
        if !self.catalog.is_available() && !self.catalog_warned {
            let reason = self.catalog.unavailable_reason().unwrap_or("no blocks loaded");
            self.prompter.show(
                Tone::Warning,
                &format!("Block catalog unavailable ({reason}). Block names will not be checked."),
            );
            self.catalog_warned = true;
        }

        let catalog = self.catalog;
        let block = ask_required(&mut *self.prompter, message, |input| {
            let block_id = normalize_block_id(input);
            if !is_non_empty(block_id) {
                return Err("Please enter a block.".to_string());
            }

            match catalog.check(block_id, DEFAULT_SUGGESTION_LIMIT) {
                BlockCheck::Known | BlockCheck::Unchecked => Ok(block_id.to_string()),
                BlockCheck::Unknown {
                    suggestions,
                    completions,
                } => {
                    debug!("Rejected unknown block `{}`", block_id);
                    Err(unknown_block_message(block_id, &suggestions, &completions))
                }
            }
        })?;

        let reference = format!("{NAMESPACE_PREFIX}{block}");
        self.prompter.echo("Block", &reference);
        Ok(reference)
    }
}
