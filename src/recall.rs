// recall.rs

use crate::error::ShellResult;
use crate::history::History;

/// History recall forms accepted at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recall {
    /// `!!`
    Last,
    /// `! N`
    Number(u64),
}

impl Recall {
    /// Recognises `!!` and `! N`. For `! N` the character after the space
    /// must be a digit; the number is the first run of digits after `"! "`.
    pub fn parse(line: &str) -> Option<Recall> {
        let text = line.strip_suffix('\n').unwrap_or(line);
        if text == "!!" {
            return Some(Recall::Last);
        }
        let rest = text.strip_prefix("! ")?;
        if !rest.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        // A number too large for u64 cannot name a stored entry.
        Some(Recall::Number(digits.parse().unwrap_or(u64::MAX)))
    }

    /// Text of the history entry this recall refers to. The store is not
    /// modified; a recalled command is replayed, never re-recorded.
    pub fn resolve<'h>(&self, history: &'h History) -> ShellResult<&'h str> {
        let entry = match *self {
            Recall::Last => history.get_last()?,
            Recall::Number(n) => history.get_by_sequence(n)?,
        };
        Ok(entry.text.as_str())
    }
}
