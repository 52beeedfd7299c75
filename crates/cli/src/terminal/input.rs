use std::io::BufRead;

use mccmd_core::error::{Error, Result};

/// Reads one line without its line ending. End of input is [`Error::InputClosed`].
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Turns a 1-based menu answer into an index, if it names one of `count` entries.
#[must_use]
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(selection) if (1..=count).contains(&selection) => Some(selection - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut input = Cursor::new("first\r\nsecond\nlast");
        assert_eq!(read_line(&mut input).unwrap(), "first");
        assert_eq!(read_line(&mut input).unwrap(), "second");
        assert_eq!(read_line(&mut input).unwrap(), "last");
        assert!(matches!(read_line(&mut input), Err(Error::InputClosed)));
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut input = Cursor::new("  say hi  \n");
        assert_eq!(read_line(&mut input).unwrap(), "  say hi  ");
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection(" 3 ", 3), Some(2));
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("-1", 3), None);
        assert_eq!(parse_selection("give", 3), None);
        assert_eq!(parse_selection("", 3), None);
    }
}
