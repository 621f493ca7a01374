// parser.rs

use crate::error::{ShellError, ShellResult};

/// A command line split into its argument vector plus the `&` flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    pub args: Vec<String>,
    pub background: bool,
}

impl Command {
    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// Splits `line` on spaces and tabs. Every `&` turns on background mode
/// and acts as a separator wherever it appears. Scanning stops at the
/// first newline.
pub fn tokenize(line: &str, max_args: usize) -> ShellResult<Command> {
    let mut command = Command::default();
    let mut cur = String::new();
    let mut chars = line.chars();
    loop {
        match chars.next() {
            Some(' ') | Some('\t') => close_word(&mut cur, &mut command.args, max_args)?,
            Some('&') => {
                command.background = true;
                close_word(&mut cur, &mut command.args, max_args)?;
            }
            Some('\n') | None => {
                close_word(&mut cur, &mut command.args, max_args)?;
                break;
            }
            Some(ch) => cur.push(ch),
        }
    }
    Ok(command)
}

fn close_word(cur: &mut String, args: &mut Vec<String>, max_args: usize) -> ShellResult<()> {
    if cur.is_empty() {
        return Ok(());
    }
    if args.len() == max_args {
        return Err(ShellError::TooManyArguments { max: max_args });
    }
    args.push(std::mem::take(cur));
    Ok(())
}
