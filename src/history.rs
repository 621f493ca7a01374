// history.rs

use std::collections::VecDeque;
use crate::error::{ShellError, ShellResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub seq: u64,
    pub text: String,
}

/// The most recent ordinary commands, newest first. Sequence numbers keep
/// counting after old entries fall off the end.
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    count: u64,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            count: 0,
        }
    }

    /// Stores `line` as the newest entry, dropping the oldest one when full.
    pub fn record(&mut self, line: &str) -> u64 {
        let text = line.strip_suffix('\n').unwrap_or(line);
        self.count += 1;
        self.entries.push_front(HistoryEntry {
            seq: self.count,
            text: text.to_string(),
        });
        self.entries.truncate(self.capacity);
        self.count
    }

    /// One `"<seq> <text>"` line per stored entry, newest first.
    pub fn list(&self) -> ShellResult<Vec<String>> {
        if self.entries.is_empty() {
            return Err(ShellError::HistoryEmpty);
        }
        Ok(self
            .entries
            .iter()
            .map(|e| format!("{} {}", e.seq, e.text))
            .collect())
    }

    pub fn get_last(&self) -> ShellResult<&HistoryEntry> {
        self.entries.front().ok_or(ShellError::HistoryEmpty)
    }

    /// Only entries still held can be found; `0` never matches.
    pub fn get_by_sequence(&self, seq: u64) -> ShellResult<&HistoryEntry> {
        if seq == 0 {
            return Err(ShellError::HistoryNotFound(seq));
        }
        self.entries
            .iter()
            .find(|e| e.seq == seq)
            .ok_or(ShellError::HistoryNotFound(seq))
    }

    /// Total number of commands ever recorded.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
