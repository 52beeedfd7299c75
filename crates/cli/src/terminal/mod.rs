//! Line-based terminal rendering of the prompts.
//!
//! Menus are printed as numbered lists and answered by number; anything else
//! re-renders the menu. Free text is read a line at a time.

pub mod colors;
pub mod input;

use std::io::{stdin, stdout, BufRead, StdinLock, Stdout, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use log::{debug, warn};
use mccmd_core::error::{Error, Result};
use mccmd_core::prompt::{Choice, Prompter, Tone};

use colors::{AsTermColor, QUESTION_COLOR, VALUE_COLOR};
use input::{parse_selection, read_line};

/// A [`Prompter`] reading answers from `input` and rendering to `output`.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything rendered so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn print_question(&mut self, message: &str) -> Result<()> {
        queue!(
            self.output,
            SetForegroundColor(QUESTION_COLOR),
            SetAttribute(Attribute::Bold),
            Print(message),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn print_line(&mut self, color: Color, message: &str) -> Result<()> {
        queue!(
            self.output,
            SetForegroundColor(color),
            Print(message),
            ResetColor,
            Print("\n")
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self, message: &str, choices: &[Choice]) -> Result<()> {
        self.print_question(message)?;
        queue!(self.output, Print("\n"))?;

        for (index, choice) in choices.iter().enumerate() {
            queue!(self.output, Print(format!("  {}) {}\n", index + 1, choice)))?;
        }

        self.print_question("Choose: ")
    }

    fn print_echo(&mut self, label: &str, value: &str) -> Result<()> {
        queue!(
            self.output,
            SetForegroundColor(Tone::Info.as_crossterm_color()),
            Print(format!("{label}: ")),
            SetForegroundColor(VALUE_COLOR),
            SetAttribute(Attribute::Bold),
            Print(value),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n")
        )?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select_one(&mut self, message: &str, choices: &[Choice]) -> Result<String> {
        if choices.is_empty() {
            return Err(Error::EmptyMenu(message.to_string()));
        }

        loop {
            self.print_menu(message, choices)?;
            let answer = read_line(&mut self.input)?;

            if let Some(index) = parse_selection(&answer, choices.len()) {
                debug!("Selected `{}` for `{}`", choices[index].value, message);
                return Ok(choices[index].value.clone());
            }

            self.print_line(
                Tone::Error.as_crossterm_color(),
                &format!("Invalid selection. Please choose 1-{}", choices.len()),
            )?;
        }
    }

    fn ask_text(&mut self, message: &str) -> Result<String> {
        self.print_question(message)?;
        read_line(&mut self.input)
    }

    fn show(&mut self, tone: Tone, message: &str) {
        if let Err(e) = self.print_line(tone.as_crossterm_color(), message) {
            warn!("Could not write to the terminal: {}", e);
        }
    }

    fn echo(&mut self, label: &str, value: &str) {
        if let Err(e) = self.print_echo(label, value) {
            warn!("Could not write to the terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<String>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn rendered(prompter: &TerminalPrompter<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8_lossy(prompter.output()).into_owned()
    }

    #[test]
    fn test_select_one_by_number() {
        let mut prompter = prompter("2\n");
        let choices = [Choice::plain("give"), Choice::described("say", "Broadcast")];

        assert_eq!(prompter.select_one("Select a command type:", &choices).unwrap(), "say");

        let output = rendered(&prompter);
        assert!(output.contains("Select a command type:"));
        assert!(output.contains("  1) give\n"));
        assert!(output.contains("  2) say - Broadcast\n"));
        assert!(output.contains("Choose: "));
    }

    #[test]
    fn test_select_one_rerenders_on_invalid_answer() {
        let mut prompter = prompter("0\nsay\n3\n1\n");
        let choices = [Choice::plain("give"), Choice::plain("say")];

        assert_eq!(prompter.select_one("Pick", &choices).unwrap(), "give");

        let output = rendered(&prompter);
        assert_eq!(output.matches("Invalid selection. Please choose 1-2").count(), 3);
        assert_eq!(output.matches("  1) give").count(), 4);
    }

    #[test]
    fn test_select_one_closed_input() {
        let mut prompter = prompter("9\n");
        let choices = [Choice::plain("give")];
        assert!(matches!(prompter.select_one("Pick", &choices), Err(Error::InputClosed)));
    }

    #[test]
    fn test_select_one_empty_menu() {
        let mut prompter = prompter("1\n");
        assert!(matches!(prompter.select_one("Pick", &[]), Err(Error::EmptyMenu(_))));
    }

    #[test]
    fn test_ask_text_returns_line_as_typed() {
        let mut prompter = prompter("  Hello <br> world \n");
        assert_eq!(prompter.ask_text("Message: ").unwrap(), "  Hello <br> world ");
        assert!(rendered(&prompter).contains("Message: "));
    }

    #[test]
    fn test_show_and_echo() {
        let mut prompter = prompter("");
        prompter.show(Tone::Warning, "Cancelled. Back to selector selection.");
        prompter.echo("Target", "@p");

        let output = rendered(&prompter);
        assert!(output.contains("Cancelled. Back to selector selection."));
        assert!(output.contains("Target: "));
        assert!(output.contains("@p"));
    }
}
