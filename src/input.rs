use alloc::collections::VecDeque;
use alloc::string::{String, ToString};

use crate::common::InputError;

/// Source of raw input lines for the game loop.
pub trait InputSource {
    /// Next line, or `None` at end of input. No interpretation is done here.
    fn read_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Input served from a fixed list of lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Parse a raw line as a column id.
///
/// One trailing line terminator (`\n`, `\r\n` or `\r`) is dropped;
/// everything else must be ASCII digits. Empty lines, signs and whitespace
/// are rejected rather than read as 0.
pub fn parse_column(line: &str) -> Result<usize, InputError> {
    let text = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line);
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(text.to_string()));
    }
    // all digits but wider than usize
    text.parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_column("2"), Ok(2));
        assert_eq!(parse_column("2\n"), Ok(2));
        assert_eq!(parse_column("2\r\n"), Ok(2));
        assert_eq!(parse_column("2\r"), Ok(2));
        assert_eq!(parse_column("007"), Ok(7));
        assert_eq!(parse_column("100"), Ok(100));
    }

    #[test]
    fn rejects_non_digits() {
        for line in ["", "\n", "-5", "wow", "5star", " 2", "2 ", "+3", "1.0", "2\n\n", "\r"] {
            assert!(
                matches!(parse_column(line), Err(InputError::NotANumber(_))),
                "{:?} should be rejected",
                line
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_column("99999999999999999999999999").is_err());
    }

    #[test]
    fn scripted_input_drains_in_order() {
        let mut input = ScriptedInput::new(["a", "b"]);
        assert_eq!(input.remaining(), 2);
        assert_eq!(input.read_line().unwrap().as_deref(), Some("a"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("b"));
        assert_eq!(input.read_line().unwrap(), None);
    }
}
