// dispatch.rs

use itertools::Itertools;
use log::debug;

use crate::config::ShellConfig;
use crate::error::{ShellError, ShellResult};
use crate::history::History;
use crate::parser::{tokenize, Command};
use crate::recall::Recall;

/// What the prompt loop should do with a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    Exit,
    ShowHistory(Vec<String>),
    Launch(Command),
}

/// Classifies raw lines and owns the history store.
pub struct Dispatcher {
    config: ShellConfig,
    history: History,
}

impl Dispatcher {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            history: History::new(config.history_capacity),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Turns one raw line (with or without its trailing newline) into an
    /// action. Ordinary commands are recorded before tokenizing; built-ins
    /// and recall forms never are.
    pub fn dispatch(&mut self, line: &str) -> ShellResult<Dispatch> {
        let text = line.strip_suffix('\n').unwrap_or(line);
        // One byte of the buffer is taken by the terminator.
        if text.len() >= self.config.max_line {
            return Err(ShellError::LineTooLong { max: self.config.max_line - 1 });
        }
        match text {
            "" => return Err(ShellError::EmptyInput),
            "exit" => return Ok(Dispatch::Exit),
            "history" => return self.history.list().map(Dispatch::ShowHistory),
            _ => {}
        }

        let command = match Recall::parse(text) {
            Some(recall) => {
                let resolved = recall.resolve(&self.history)?;
                debug!("{:?} resolved to {:?}", recall, resolved);
                tokenize(resolved, self.config.max_args())?
            }
            None => {
                let seq = self.history.record(text);
                debug!("recorded #{}: {:?}", seq, text);
                tokenize(text, self.config.max_args())?
            }
        };

        if command.is_empty() {
            return Err(ShellError::EmptyInput);
        }
        debug!(
            "args=[{}] background={}",
            command.args.iter().join(", "),
            command.background
        );
        Ok(Dispatch::Launch(command))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(dispatch: ShellResult<Dispatch>) -> Command {
        match dispatch {
            Ok(Dispatch::Launch(cmd)) => cmd,
            other => panic!("expected a launch, got {:?}", other),
        }
    }

    #[test]
    fn bare_newline_is_empty_input_and_not_recorded() {
        let mut d = Dispatcher::default();
        assert!(matches!(d.dispatch("\n"), Err(ShellError::EmptyInput)));
        assert!(d.history().is_empty());
    }

    #[test]
    fn whitespace_only_is_recorded_but_not_launched() {
        let mut d = Dispatcher::default();
        assert!(matches!(d.dispatch("   \n"), Err(ShellError::EmptyInput)));
        assert_eq!(d.history().count(), 1);
        assert!(matches!(d.dispatch("&\n"), Err(ShellError::EmptyInput)));
        assert_eq!(d.history().count(), 2);
    }

    #[test]
    fn builtins_are_not_recorded() {
        let mut d = Dispatcher::default();
        assert_eq!(d.dispatch("exit\n").unwrap(), Dispatch::Exit);
        assert!(matches!(d.dispatch("history\n"), Err(ShellError::HistoryEmpty)));
        launch(d.dispatch("ls -l\n"));
        assert_eq!(
            d.dispatch("history\n").unwrap(),
            Dispatch::ShowHistory(vec!["1 ls -l".to_string()])
        );
        assert_eq!(d.history().count(), 1);
    }

    #[test]
    fn builtins_must_match_exactly() {
        let mut d = Dispatcher::default();
        let cmd = launch(d.dispatch("exit 3\n"));
        assert_eq!(cmd.args, ["exit", "3"]);
        let cmd = launch(d.dispatch(" history\n"));
        assert_eq!(cmd.args, ["history"]);
    }

    #[test]
    fn ordinary_command_is_recorded_verbatim() {
        let mut d = Dispatcher::default();
        let cmd = launch(d.dispatch("sleep 5 &\n"));
        assert_eq!(cmd.args, ["sleep", "5"]);
        assert!(cmd.background);
        assert_eq!(d.history().get_last().unwrap().text, "sleep 5 &");
    }

    #[test]
    fn repeat_last_matches_direct_tokenization_and_keeps_history() {
        let mut d = Dispatcher::default();
        let direct = launch(d.dispatch("ls -l -a &\n"));
        let before: Vec<_> = d.history().iter().cloned().collect();
        let replayed = launch(d.dispatch("!!\n"));
        assert_eq!(replayed, direct);
        let after: Vec<_> = d.history().iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn repeat_last_with_no_history() {
        let mut d = Dispatcher::default();
        assert!(matches!(d.dispatch("!!\n"), Err(ShellError::HistoryEmpty)));
        assert!(d.history().is_empty());
    }

    #[test]
    fn numbered_recall_is_replayed_not_re_recorded() {
        let mut d = Dispatcher::default();
        for c in ["a", "b", "c", "d", "e"] {
            launch(d.dispatch(&format!("{}\n", c)));
        }
        let cmd = launch(d.dispatch("! 3\n"));
        assert_eq!(cmd.args, ["c"]);
        assert_eq!(d.history().count(), 5);
        assert_eq!(d.history().get_last().unwrap().text, "e");
    }

    #[test]
    fn numbered_recall_of_evicted_entry_fails() {
        let mut d = Dispatcher::default();
        for c in ["a", "b", "c", "d", "e", "f", "g"] {
            launch(d.dispatch(&format!("{}\n", c)));
        }
        assert!(matches!(d.dispatch("! 1\n"), Err(ShellError::HistoryNotFound(1))));
        assert!(matches!(d.dispatch("! 0\n"), Err(ShellError::HistoryNotFound(0))));
        assert_eq!(d.history().count(), 7);
    }

    #[test]
    fn overlong_line_is_rejected_before_recording() {
        let mut d = Dispatcher::default();
        let line = format!("{}\n", "x".repeat(80));
        assert!(matches!(d.dispatch(&line), Err(ShellError::LineTooLong { max: 79 })));
        assert!(d.history().is_empty());
        let line = format!("{}\n", "x".repeat(79));
        launch(d.dispatch(&line));
    }
}
