// repl.rs

use anyhow::{Context, Result};
use log::debug;
use nix::unistd::getpid;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::ShellConfig;
use crate::dispatch::{Dispatch, Dispatcher};
use crate::launcher::{launch, Launched, Reaper};
use crate::util::{write_listing, writeln_ignore_broken_pipe};

pub fn prompt() -> String {
    format!("{} \x1b[0;32mosh>\x1b[0m ", getpid())
}

/// Runs the prompt loop until `exit`, end of input, or a fatal error.
pub fn start_repl(config: ShellConfig) -> Result<()> {
    let mut rl = DefaultEditor::new().context("failed to create line editor")?;
    let mut dispatcher = Dispatcher::new(config);
    let mut reaper = Reaper::new();
    let prompt = prompt();
    loop {
        reaper.reap();
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err).context("failed to read command line"),
        };
        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }
        match dispatcher.dispatch(&line) {
            Ok(Dispatch::Exit) => return Ok(()),
            Ok(Dispatch::ShowHistory(lines)) => {
                let _ = write_listing(std::io::stdout(), &lines);
            }
            Ok(Dispatch::Launch(command)) => match launch(&command, &mut reaper) {
                Ok(Launched::Exited(status)) => debug!("foreground status {}", status),
                Ok(Launched::Background(pid)) => debug!("background pid {}", pid),
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    let _ = writeln_ignore_broken_pipe(std::io::stdout(), e.to_string());
                }
            },
            Err(e) => {
                let _ = writeln_ignore_broken_pipe(std::io::stdout(), e.to_string());
            }
        }
    }
}
