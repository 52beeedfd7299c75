//! The conversation seam between the composition engine and whatever renders it.
//!
//! The engine only ever talks to a [`Prompter`]: it asks one question at a
//! time and blocks until the answer comes back. The retry loops every field
//! needs are written once here, as [`ask_until_valid`] and [`ask_required`].

pub mod scripted;

use std::fmt::{Display, Formatter};

use crate::config::ESCAPE_TOKEN;
use crate::error::Result;
use crate::validation::parse_yes_no;

pub use scripted::ScriptedPrompter;

/// One entry of a selection menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    /// A choice whose label is just its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }

    /// A choice labelled `value - description`.
    pub fn described(value: impl Into<String>, description: &str) -> Self {
        let value = value.into();
        Self {
            label: format!("{value} - {description}"),
            value,
        }
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// How a message shown to the user should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

/// Something that can hold a conversation with the user.
pub trait Prompter {
    /// Presents `choices` and returns the `value` of the one picked.
    ///
    /// Implementations deal with malformed picks themselves (re-rendering the
    /// menu); only a value from `choices` is ever returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is closed or cannot be read.
    fn select_one(&mut self, message: &str, choices: &[Choice]) -> Result<String>;

    /// Asks for a line of free text, returned as typed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is closed or cannot be read.
    fn ask_text(&mut self, message: &str) -> Result<String>;

    /// Shows a message to the user.
    fn show(&mut self, tone: Tone, message: &str);

    /// Echoes an accepted value back to the user.
    fn echo(&mut self, label: &str, value: &str) {
        self.show(Tone::Info, &format!("{label}: {value}"));
    }
}

/// Result of a question the user may back out of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    Back,
}

/// Asks `message` until `parse` accepts the (trimmed) answer.
///
/// Typing the escape token returns [`Answer::Back`] instead. Every rejected
/// answer is reported with the message `parse` produced, then the question is
/// asked again.
///
/// # Errors
///
/// Returns an error if the prompter fails, e.g. because input was closed.
pub fn ask_until_valid<T, F>(
    prompter: &mut dyn Prompter,
    message: &str,
    mut parse: F,
) -> Result<Answer<T>>
where
    F: FnMut(&str) -> std::result::Result<T, String>,
{
    let question = format!("{message}. Type \"{ESCAPE_TOKEN}\" to go back: ");

    loop {
        if let Some(answer) = ask_once(prompter, &question, true, &mut parse)? {
            return Ok(answer);
        }
    }
}

/// Asks `message` until `parse` accepts the (trimmed) answer. There is no way back.
///
/// # Errors
///
/// Returns an error if the prompter fails, e.g. because input was closed.
pub fn ask_required<T, F>(prompter: &mut dyn Prompter, message: &str, mut parse: F) -> Result<T>
where
    F: FnMut(&str) -> std::result::Result<T, String>,
{
    let question = format!("{message}: ");

    loop {
        if let Some(Answer::Value(value)) = ask_once(prompter, &question, false, &mut parse)? {
            return Ok(value);
        }
    }
}

/// [`ask_required`] for fields a plain predicate can check.
///
/// # Errors
///
/// Returns an error if the prompter fails, e.g. because input was closed.
pub fn ask_validated(
    prompter: &mut dyn Prompter,
    message: &str,
    validator: fn(&str) -> bool,
    error: &str,
) -> Result<String> {
    ask_required(prompter, message, |input| {
        if validator(input) {
            Ok(input.to_string())
        } else {
            Err(error.to_string())
        }
    })
}

/// Asks a `(y/N)` style question, where an empty answer picks `default`.
///
/// # Errors
///
/// Returns an error if the prompter fails, e.g. because input was closed.
pub fn ask_yes_no(prompter: &mut dyn Prompter, message: &str, default: bool) -> Result<bool> {
    let hint = if default { "(Y/n)" } else { "(y/N)" };

    ask_required(prompter, &format!("{message} {hint}"), |input| {
        parse_yes_no(input, default).ok_or_else(|| "Please answer y or n.".to_string())
    })
}

/// Presents `choices` followed by a `back` entry.
///
/// # Errors
///
/// Returns an error if the prompter fails, e.g. because input was closed.
pub fn select_or_back(
    prompter: &mut dyn Prompter,
    message: &str,
    choices: &[Choice],
    back_to: &str,
) -> Result<Answer<String>> {
    let mut menu = choices.to_vec();
    menu.push(Choice::described(
        ESCAPE_TOKEN,
        &format!("Go back to {back_to} selection"),
    ));

    let picked = prompter.select_one(message, &menu)?;
    if picked == ESCAPE_TOKEN {
        Ok(Answer::Back)
    } else {
        Ok(Answer::Value(picked))
    }
}

fn ask_once<T, F>(
    prompter: &mut dyn Prompter,
    question: &str,
    escapable: bool,
    parse: &mut F,
) -> Result<Option<Answer<T>>>
where
    F: FnMut(&str) -> std::result::Result<T, String>,
{
    let raw = prompter.ask_text(question)?;
    let input = raw.trim();

    if escapable && input.eq_ignore_ascii_case(ESCAPE_TOKEN) {
        return Ok(Some(Answer::Back));
    }

    match parse(input) {
        Ok(value) => Ok(Some(Answer::Value(value))),
        Err(message) => {
            prompter.show(Tone::Error, &message);
            Ok(None)
        }
    }
}
