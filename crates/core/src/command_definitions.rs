use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::clause::ClauseSet;
use crate::error::{Error, Result};
use crate::interpolation::interpolate_command;

/// The commands that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Give,
    Teleport,
    Setblock,
    Fill,
    Say,
    Execute,
}

impl CommandKind {
    /// Every kind, in menu order.
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Give,
        CommandKind::Teleport,
        CommandKind::Setblock,
        CommandKind::Fill,
        CommandKind::Say,
        CommandKind::Execute,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Give => "give",
            CommandKind::Teleport => "teleport",
            CommandKind::Setblock => "setblock",
            CommandKind::Fill => "fill",
            CommandKind::Say => "say",
            CommandKind::Execute => "execute",
        }
    }

    /// The command grammar, with one `{field}` per value the draft supplies.
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            CommandKind::Give => "/give {selector} {item} {amount}",
            CommandKind::Teleport => "/teleport {destination}",
            CommandKind::Setblock => "/setblock {position} {block}",
            CommandKind::Fill => "/fill {from} {to} {block}",
            CommandKind::Say => "/say {message}",
            CommandKind::Execute => "/execute as {target} at @s run {command}",
        }
    }
}

impl FromStr for CommandKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| Error::UnsupportedKind(value.to_string()))
    }
}

impl Display for CommandKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Target selector variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelector {
    NearestPlayer,
    AllPlayers,
    Executor,
    RandomPlayer,
    NearestEntity,
}

impl TargetSelector {
    pub const ALL: [TargetSelector; 5] = [
        TargetSelector::NearestPlayer,
        TargetSelector::AllPlayers,
        TargetSelector::Executor,
        TargetSelector::RandomPlayer,
        TargetSelector::NearestEntity,
    ];

    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            TargetSelector::NearestPlayer => "@p",
            TargetSelector::AllPlayers => "@a",
            TargetSelector::Executor => "@s",
            TargetSelector::RandomPlayer => "@r",
            TargetSelector::NearestEntity => "@n",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            TargetSelector::NearestPlayer => "Near Player",
            TargetSelector::AllPlayers => "All Player",
            TargetSelector::Executor => "Myself",
            TargetSelector::RandomPlayer => "Random Player",
            TargetSelector::NearestEntity => {
                "A Nearest Player (1.21+, same '@p[sort=nearest, limit=1]')"
            }
        }
    }
}

impl FromStr for TargetSelector {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        TargetSelector::ALL
            .into_iter()
            .find(|selector| selector.token() == value)
            .ok_or_else(|| Error::UnknownChoice(value.to_string()))
    }
}

impl Display for TargetSelector {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.token())
    }
}

/// A command under construction.
///
/// Positional values live in `fields`, keyed by the names used in
/// [`CommandKind::template`]. For `give`, the selector and item tokens are
/// built from `target`/`clauses` and the `item` field/`components` at
/// serialization time.
#[derive(Debug, Clone)]
pub struct CommandDraft {
    pub kind: CommandKind,
    pub target: Option<TargetSelector>,
    pub clauses: Option<ClauseSet>,
    pub components: Option<ClauseSet>,
    pub fields: HashMap<String, String>,
}

impl CommandDraft {
    #[must_use]
    pub fn new(kind: CommandKind) -> Self {
        Self {
            kind,
            target: None,
            clauses: None,
            components: None,
            fields: HashMap::new(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let _ = self.fields.insert(name.to_string(), value.into());
    }

    /// Values for every placeholder of the kind's template.
    #[must_use]
    pub fn template_context(&self) -> HashMap<String, String> {
        let mut context = self.fields.clone();

        if let Some(target) = self.target {
            let selector = match &self.clauses {
                Some(clauses) => clauses.attach_to(target.token()),
                None => target.token().to_string(),
            };
            let _ = context.insert("selector".to_string(), selector);
        }

        if let (Some(item), Some(components)) = (self.fields.get("item"), &self.components) {
            let _ = context.insert("item".to_string(), components.attach_to(item));
        }

        context
    }

    /// Renders the finished command. No field is validated here.
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder of the kind's template has no value.
    pub fn serialize(&self) -> Result<String> {
        let command = interpolate_command(self.kind.template(), &self.template_context())?;
        debug!("Serialized {} command: {}", self.kind, command);
        Ok(command)
    }
}
