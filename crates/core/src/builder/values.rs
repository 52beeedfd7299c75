//! Collectors and formatters for the values that need more than one prompt
//! or a structured rendering.

use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::error::Result;
use crate::prompt::{ask_required, ask_until_valid, Answer, Choice, Prompter};
use crate::validation::{is_bounded_integer, is_non_empty, normalize_non_negative};

/// Marker that starts a new lore line.
pub const LINE_BREAK: &str = "<br>";

pub const ENCHANTMENT_LEVELS: RangeInclusive<u32> = 1..=255;

/// Renders `text` as a quoted, escaped string literal.
///
/// # Errors
///
/// Returns an error if the text cannot be encoded.
pub fn quote(text: &str) -> Result<String> {
    Ok(serde_json::to_string(text)?)
}

/// Splits lore text on `<br>`, trimming lines and dropping empty ones.
#[must_use]
pub fn split_lore(input: &str) -> Vec<String> {
    input
        .split(LINE_BREAK)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn collect_lore(prompter: &mut dyn Prompter, prompt: &str) -> Result<Answer<String>> {
    ask_until_valid(prompter, prompt, |input| {
        let lines = split_lore(input);
        if lines.is_empty() {
            return Err("Please enter a lore.".to_string());
        }
        serde_json::to_string(&lines).map_err(|e| e.to_string())
    })
}

/// Parses `nutrition,saturation,can_always_eat` into its rendered form.
///
/// Only the presence of all three parts is checked.
pub fn parse_food(input: &str) -> std::result::Result<String, String> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();

    match parts.as_slice() {
        [nutrition, saturation, can_always_eat]
            if parts.iter().all(|part| !part.is_empty()) =>
        {
            Ok(format!(
                "{{nutrition:{nutrition}, saturation:{saturation}, can_always_eat:{can_always_eat}}}"
            ))
        }
        _ => Err(
            "Please enter food as <nutrition>,<saturation>,<can_always_eat> (e.g., 4,2.4,false)."
                .to_string(),
        ),
    }
}

pub fn collect_food(prompter: &mut dyn Prompter, prompt: &str) -> Result<Answer<String>> {
    ask_until_valid(prompter, prompt, parse_food)
}

#[must_use]
pub fn format_enchantments(enchantments: &[String]) -> String {
    format!("{{{}}}", enchantments.iter().join(", "))
}

/// Collects one or more `name:level` pairs.
///
/// Backing out while entering a name drops every pair collected so far.
pub fn collect_enchantments(prompter: &mut dyn Prompter) -> Result<Answer<String>> {
    let mut enchantments: Vec<String> = Vec::new();
    let continue_choices = [
        Choice::described("y", "Add another enchantment"),
        Choice::described("N", "Finish"),
    ];

    loop {
        let name = match ask_until_valid(
            prompter,
            "Enchantment name (e.g., sharpness, unbreaking)",
            |input| {
                if is_non_empty(input) {
                    Ok(input.to_string())
                } else {
                    Err("Please enter an enchantment name.".to_string())
                }
            },
        )? {
            Answer::Value(name) => name,
            Answer::Back => return Ok(Answer::Back),
        };

        let level = ask_required(prompter, "Enchantment level (1~255)", |input| {
            if is_bounded_integer(input, &ENCHANTMENT_LEVELS) {
                Ok(normalize_non_negative(input))
            } else {
                Err("Please enter a valid level (1~255).".to_string())
            }
        })?;

        let enchantment = format!("{name}:{level}");
        prompter.echo("Enchantment", &enchantment);
        enchantments.push(enchantment);

        let more = prompter.select_one("Add another enchantment? (y/N)", &continue_choices)?;
        if !more.eq_ignore_ascii_case("y") {
            break;
        }
    }

    Ok(Answer::Value(format_enchantments(&enchantments)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{ScriptedPrompter, Tone};

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("Excalibur").unwrap(), "\"Excalibur\"");
        assert_eq!(quote("say \"hi\"").unwrap(), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_split_lore() {
        assert_eq!(split_lore("First <br>  second<br><br>"), vec!["First", "second"]);
        assert!(split_lore(" <br> ").is_empty());
    }

    #[test]
    fn test_collect_lore() {
        let mut prompter = ScriptedPrompter::new(["<br>", "Forged in fire<br>Cooled in ice"]);
        let answer = collect_lore(&mut prompter, "lore").unwrap();
        assert_eq!(
            answer,
            Answer::Value("[\"Forged in fire\",\"Cooled in ice\"]".to_string())
        );
        assert_eq!(prompter.messages(Tone::Error), vec!["Please enter a lore."]);
    }

    #[test]
    fn test_parse_food() {
        assert_eq!(
            parse_food("4, 2.4,true").unwrap(),
            "{nutrition:4, saturation:2.4, can_always_eat:true}"
        );
        assert!(parse_food("4,2.4").is_err());
        assert!(parse_food("4,,true").is_err());
        assert!(parse_food("4,2,true,extra").is_err());
    }

    #[test]
    fn test_collect_food_back() {
        let mut prompter = ScriptedPrompter::new(["Back"]);
        assert_eq!(collect_food(&mut prompter, "food").unwrap(), Answer::Back);
    }

    #[test]
    fn test_format_enchantments() {
        let pairs = ["sharpness:5".to_string(), "looting:3".to_string()];
        assert_eq!(format_enchantments(&pairs), "{sharpness:5, looting:3}");
        assert_eq!(format_enchantments(&pairs[..1]), "{sharpness:5}");
    }

    #[test]
    fn test_collect_enchantments() {
        let mut prompter = ScriptedPrompter::new([
            "sharpness", "0", "256", "5", "y", "unbreaking", "3", "N",
        ]);
        let answer = collect_enchantments(&mut prompter).unwrap();
        assert_eq!(
            answer,
            Answer::Value("{sharpness:5, unbreaking:3}".to_string())
        );
        assert_eq!(prompter.messages(Tone::Error).len(), 2);
    }

    #[test]
    fn test_collect_enchantments_back_discards_pairs() {
        let mut prompter = ScriptedPrompter::new(["sharpness", "5", "y", "back"]);
        assert_eq!(collect_enchantments(&mut prompter).unwrap(), Answer::Back);
    }
}
