// launcher.rs

use std::ffi::CString;
use std::io::Write;

use log::{debug, info, warn};
use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{execvp, fork, write, ForkResult, Pid};

use crate::error::{ShellError, ShellResult};
use crate::parser::Command;

/// Exit status of a child whose program could not be executed.
pub const INVALID_COMMAND_STATUS: i32 = 127;

/// Result of a successful launch.
#[derive(Debug, PartialEq, Eq)]
pub enum Launched {
    /// Foreground child finished with this status.
    Exited(i32),
    /// Background child still running under this pid.
    Background(Pid),
}

/// Forks one child running `command`. Foreground children are waited for;
/// background children are handed to `reaper`.
pub fn launch(command: &Command, reaper: &mut Reaper) -> ShellResult<Launched> {
    let program = command.program().ok_or(ShellError::EmptyInput)?;
    let args = command
        .args
        .iter()
        .map(|a| CString::new(a.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ShellError::InvalidCommand(program.to_string()))?;
    // Built before forking so the child only execs, writes and exits.
    let invalid = format!("{}\n", ShellError::InvalidCommand(program.to_string()));

    std::io::stdout().flush().ok();
    match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            let _ = execvp(&args[0], &args);
            let _ = write(libc::STDERR_FILENO, invalid.as_bytes());
            unsafe { libc::_exit(INVALID_COMMAND_STATUS) };
        }
        Ok(ForkResult::Parent { child }) => {
            if command.background {
                debug!("{} running in background as {}", program, child);
                reaper.track(child);
                Ok(Launched::Background(child))
            } else {
                debug!("waiting for {} ({})", program, child);
                let status = wait_for(child)?;
                debug!("{} ({}) exited with {}", program, child, status);
                Ok(Launched::Exited(status))
            }
        }
        Err(e) => Err(ShellError::ForkFailure(e)),
    }
}

fn wait_for(child: Pid) -> ShellResult<i32> {
    loop {
        match waitpid(child, None) {
            Ok(status) => {
                if let Some(code) = exit_code(status) {
                    return Ok(code);
                }
            }
            Err(Errno::EINTR) => continue,
            Err(e) => {
                warn!("waitpid({}) failed: {}", child, e);
                return Ok(-1);
            }
        }
    }
}

fn exit_code(status: WaitStatus) -> Option<i32> {
    match status {
        WaitStatus::Exited(_, code) => Some(code),
        WaitStatus::Signaled(_, sig, _) => Some(128 + sig as i32),
        _ => None,
    }
}

/// Background children that have not been waited for yet.
#[derive(Default)]
pub struct Reaper {
    pending: Vec<Pid>,
}

impl Reaper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, child: Pid) {
        self.pending.push(child);
    }

    /// Collects every tracked child that has finished, without blocking.
    /// Returns the pids and statuses reaped.
    pub fn reap(&mut self) -> Vec<(Pid, i32)> {
        let mut reaped = Vec::new();
        self.pending.retain(|&pid| match waitpid(pid, Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => true,
            Ok(status) => match exit_code(status) {
                Some(code) => {
                    info!("background process {} exited with {}", pid, code);
                    reaped.push((pid, code));
                    false
                }
                None => true,
            },
            Err(Errno::EINTR) => true,
            Err(e) => {
                warn!("dropping background process {}: {}", pid, e);
                false
            }
        });
        reaped
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
