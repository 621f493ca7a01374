// error.rs

use thiserror::Error;

/// Every failure the interpreter can report. The display text is what
/// the user sees.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("ERROR: No argument was issued.")]
    EmptyInput,
    #[error("ERROR: No commands in history.")]
    HistoryEmpty,
    #[error("ERROR: No command found in history.")]
    HistoryNotFound(u64),
    #[error("ERROR: Too many arguments (at most {max}).")]
    TooManyArguments { max: usize },
    #[error("ERROR: Command line too long (at most {max} characters).")]
    LineTooLong { max: usize },
    #[error("ERROR: Invalid command! ({0})")]
    InvalidCommand(String),
    #[error("ERROR: Did not fork! ({0})")]
    ForkFailure(#[source] nix::Error),
}

impl ShellError {
    /// Fatal errors end the interpreter; everything else is reported and
    /// the prompt loop carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::ForkFailure(_))
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
