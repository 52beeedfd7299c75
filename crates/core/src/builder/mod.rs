//! The "pick a key, collect its value, repeat until OK" engine.
//!
//! Selector refinements and item components are built by the same loop; they
//! only differ in their [`ClauseSchema`]. Each key describes its value with a
//! [`ValueKind`], which decides how the value is asked for, validated and
//! formatted.

pub mod components;
pub mod selectors;
pub mod values;

use std::ops::RangeInclusive;

use log::debug;

use crate::clause::{Clause, ClauseSet};
use crate::config::OK_CHOICE;
use crate::error::{Error, Result};
use crate::prompt::{ask_until_valid, select_or_back, Answer, Choice, Prompter, Tone};
use crate::validation::{
    is_bounded_integer, is_non_empty, is_non_negative_integer, normalize_non_negative,
    parse_boolean,
};

pub use components::COMPONENTS;
pub use selectors::SELECTORS;

/// How the value of a key is collected and rendered.
#[derive(Debug)]
pub enum ValueKind {
    /// Non-empty free text, used as typed.
    Text {
        prompt: &'static str,
        error: &'static str,
    },
    /// Non-empty free text, rendered as a quoted string.
    Quoted {
        prompt: &'static str,
        error: &'static str,
    },
    /// A non-negative integer, optionally limited to `range`.
    Integer {
        prompt: &'static str,
        error: &'static str,
        range: Option<RangeInclusive<u32>>,
    },
    /// `true` or `false`.
    Boolean { prompt: &'static str },
    /// One of a fixed set of `(value, description)` pairs.
    Choice {
        prompt: &'static str,
        options: &'static [(&'static str, &'static str)],
    },
    /// Text split into lines on `<br>`, rendered as a JSON array.
    Lines { prompt: &'static str },
    /// Repeated name/level pairs.
    Enchantments,
    /// A `nutrition,saturation,can_always_eat` triple.
    Food { prompt: &'static str },
}

/// One selectable key of a schema.
#[derive(Debug)]
pub struct KeySpec {
    pub key: &'static str,
    pub description: &'static str,
    pub value: ValueKind,
}

/// Everything the engine needs to run one kind of builder session.
#[derive(Debug)]
pub struct ClauseSchema {
    /// What a key is called in messages, e.g. "selector".
    pub noun: &'static str,
    pub keys: &'static [KeySpec],
}

impl ClauseSchema {
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&KeySpec> {
        self.keys.iter().find(|spec| spec.key == key)
    }

    /// Menu for the next round: keys not yet collected, then `OK`.
    #[must_use]
    pub fn menu(&self, collected: &ClauseSet) -> Vec<Choice> {
        let mut menu: Vec<Choice> = self
            .keys
            .iter()
            .filter(|spec| !collected.contains_key(spec.key))
            .map(|spec| Choice::described(spec.key, spec.description))
            .collect();

        menu.push(Choice::plain(OK_CHOICE));
        menu
    }
}

/// Runs one builder session and returns the collected clauses (possibly none).
///
/// # Errors
///
/// Returns an error if the prompter fails or hands back a key that was not offered.
pub fn build_clauses(prompter: &mut dyn Prompter, schema: &ClauseSchema) -> Result<ClauseSet> {
    let mut collected = ClauseSet::new();

    loop {
        let menu = schema.menu(&collected);
        let picked = prompter.select_one(&format!("Additional {}s:", schema.noun), &menu)?;

        if picked == OK_CHOICE {
            break;
        }

        let spec = schema
            .find(&picked)
            .filter(|spec| !collected.contains_key(spec.key))
            .ok_or_else(|| Error::UnknownChoice(picked.clone()))?;

        prompter.echo(&format!("Additional {}", schema.noun), spec.key);

        match collect_value(prompter, spec, schema.noun)? {
            Answer::Value(value) => {
                prompter.echo(spec.key, &value);
                debug!("Adding {} clause {}={}", schema.noun, spec.key, value);
                collected.insert(Clause::new(spec.key, value));
            }
            Answer::Back => {
                prompter.show(
                    Tone::Warning,
                    &format!("Cancelled. Back to {} selection.", schema.noun),
                );
            }
        }
    }

    let summary = if collected.is_empty() {
        "(none)".to_string()
    } else {
        collected.to_string()
    };
    prompter.echo(&format!("All {}s", schema.noun), &summary);

    Ok(collected)
}

fn collect_value(
    prompter: &mut dyn Prompter,
    spec: &KeySpec,
    noun: &str,
) -> Result<Answer<String>> {
    match &spec.value {
        ValueKind::Text { prompt, error } => ask_until_valid(prompter, prompt, |input| {
            if is_non_empty(input) {
                Ok(input.to_string())
            } else {
                Err(error.to_string())
            }
        }),
        ValueKind::Quoted { prompt, error } => ask_until_valid(prompter, prompt, |input| {
            if is_non_empty(input) {
                values::quote(input).map_err(|e| e.to_string())
            } else {
                Err(error.to_string())
            }
        }),
        ValueKind::Integer {
            prompt,
            error,
            range,
        } => ask_until_valid(prompter, prompt, |input| {
            let valid = match range {
                Some(range) => is_bounded_integer(input, range),
                None => is_non_negative_integer(input),
            };

            if valid {
                Ok(normalize_non_negative(input))
            } else {
                Err(error.to_string())
            }
        }),
        ValueKind::Boolean { prompt } => ask_until_valid(prompter, prompt, |input| {
            parse_boolean(input)
                .map(|value| value.to_string())
                .ok_or_else(|| "Please enter a boolean (true or false).".to_string())
        }),
        ValueKind::Choice { prompt, options } => {
            let choices: Vec<Choice> = options
                .iter()
                .map(|(value, description)| {
                    if description.is_empty() {
                        Choice::plain(*value)
                    } else {
                        Choice::described(*value, description)
                    }
                })
                .collect();

            select_or_back(prompter, prompt, &choices, noun)
        }
        ValueKind::Lines { prompt } => values::collect_lore(prompter, prompt),
        ValueKind::Enchantments => values::collect_enchantments(prompter),
        ValueKind::Food { prompt } => values::collect_food(prompter, prompt),
    }
}
