//! Auto-scroll: writes a rendered song one line at a time with a fixed
//! delay between lines, so a terminal scrolls through it at reading pace.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::error::Result;

/// Write `text` line by line, sleeping `delay` after each line.
///
/// Returns the number of lines written. Output is flushed per line so the
/// pacing is visible on a terminal.
pub fn scroll<W: Write>(text: &str, delay: Duration, out: &mut W) -> Result<usize> {
    let mut written = 0;
    for line in text.split('\n') {
        writeln!(out, "{}", line)?;
        out.flush()?;
        written += 1;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_writes_every_line() {
        let mut out = Vec::new();
        let lines = scroll("[Verse]\nG D\nla", Duration::ZERO, &mut out).unwrap();
        assert_eq!(lines, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "[Verse]\nG D\nla\n");
    }

    #[test]
    fn test_waits_between_lines() {
        let mut out = Vec::new();
        let started = Instant::now();
        scroll("a\nb\nc", Duration::from_millis(5), &mut out).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}
