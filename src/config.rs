// config.rs

/// Maximum length of a command line, terminator included.
pub const MAX_LINE: usize = 80;
/// Number of commands kept for recall.
pub const HIST_SIZE: usize = 5;

/// Fixed limits the interpreter runs under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub history_capacity: usize,
    pub max_line: usize,
}

impl ShellConfig {
    /// Argument slots available to a single command. One slot of the
    /// `max_line / 2 + 1` array is reserved for the terminating sentinel.
    pub fn max_args(&self) -> usize {
        self.max_line / 2
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_capacity: HIST_SIZE,
            max_line: MAX_LINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let config = ShellConfig::default();
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.max_line, 80);
        assert_eq!(config.max_args(), 40);
    }
}
