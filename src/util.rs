// util.rs

use std::io::{self, Write};

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Writes a history listing followed by a blank line.
pub fn write_listing<W: Write>(mut w: W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln_ignore_broken_pipe(&mut w, line)?;
    }
    writeln_ignore_broken_pipe(&mut w, "")?;
    w.flush()
}
