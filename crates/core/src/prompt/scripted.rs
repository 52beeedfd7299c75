use std::collections::VecDeque;

use log::debug;

use super::{Choice, Prompter, Tone};
use crate::error::{Error, Result};

/// A [`Prompter`] that replays canned answers and records the conversation.
///
/// Menu answers must be the `value` of one of the offered choices. Running out
/// of answers behaves like closed input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    questions: Vec<String>,
    menus: Vec<Vec<String>>,
    transcript: Vec<(Tone, String)>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    fn next_answer(&mut self) -> Result<String> {
        self.answers.pop_front().ok_or(Error::InputClosed)
    }

    /// Every free-text question asked so far.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// The choice values of every menu presented so far.
    pub fn menus(&self) -> &[Vec<String>] {
        &self.menus
    }

    /// Messages shown with the given tone.
    pub fn messages(&self, tone: Tone) -> Vec<&str> {
        self.transcript
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    /// Answers that have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn select_one(&mut self, message: &str, choices: &[Choice]) -> Result<String> {
        if choices.is_empty() {
            return Err(Error::EmptyMenu(message.to_string()));
        }

        self.menus
            .push(choices.iter().map(|choice| choice.value.clone()).collect());

        let answer = self.next_answer()?;
        debug!("Scripted selection for `{}`: {}", message, answer);

        choices
            .iter()
            .find(|choice| choice.value == answer)
            .map(|choice| choice.value.clone())
            .ok_or(Error::UnknownChoice(answer))
    }

    fn ask_text(&mut self, message: &str) -> Result<String> {
        self.questions.push(message.to_string());
        self.next_answer()
    }

    fn show(&mut self, tone: Tone, message: &str) {
        self.transcript.push((tone, message.to_string()));
    }
}
