//! Timed printing
//!
//! Each line is written and flushed before the pause begins, so the reader
//! sees it immediately. Pauses go through [`Sleeper`] so they can be
//! recorded instead of slept in tests.

use std::io::{self, Write};
use std::time::Duration;
use thiserror::Error;

/// Invalid delay values
#[derive(Error, Debug, PartialEq)]
pub enum DelayError {
    #[error("{name} delay must not be negative (got {value})")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} delay must be a finite number (got {value})")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} delay is too large (got {value})")]
    TooLarge { name: &'static str, value: f64 },
}

/// The pair of pauses used for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    /// Pause after an ordinary line
    pub line: Duration,
    /// Pause after a stanza break
    pub stanza: Duration,
}

impl Delays {
    /// Build from seconds, rejecting negative and non-finite values
    pub fn from_secs(line: f64, stanza: f64) -> Result<Self, DelayError> {
        Ok(Self {
            line: seconds("line", line)?,
            stanza: seconds("stanza", stanza)?,
        })
    }

    /// Pause to apply after printing `line`
    pub fn for_line(&self, line: &str) -> Duration {
        if is_stanza_break(line) {
            self.stanza
        } else {
            self.line
        }
    }
}

fn seconds(name: &'static str, value: f64) -> Result<Duration, DelayError> {
    if !value.is_finite() {
        return Err(DelayError::NotFinite { name, value });
    }
    if value < 0.0 {
        return Err(DelayError::Negative { name, value });
    }
    Duration::try_from_secs_f64(value).map_err(|_| DelayError::TooLarge { name, value })
}

/// True for empty or whitespace-only lines
pub fn is_stanza_break(line: &str) -> bool {
    line.trim().is_empty()
}

/// Something that can suspend the current thread
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocking sleep on the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Writes lines to `W`, pausing through `S` after each
pub struct TimedPrinter<W, S> {
    out: W,
    sleeper: S,
    delays: Delays,
}

impl<W: Write, S: Sleeper> TimedPrinter<W, S> {
    pub fn new(out: W, sleeper: S, delays: Delays) -> Self {
        Self {
            out,
            sleeper,
            delays,
        }
    }

    /// Print every line in order. Returns the number of lines written.
    ///
    /// Consecutive stanza breaks each get their own pause. Write errors
    /// abort the run immediately.
    pub fn print_all<I, L>(&mut self, lines: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut written = 0;
        for line in lines {
            let line = line.as_ref();
            writeln!(self.out, "{}", line)?;
            self.out.flush()?;
            written += 1;

            self.sleeper.sleep(self.delays.for_line(line));
        }
        Ok(written)
    }

    /// Give back the writer and sleeper
    pub fn into_parts(self) -> (W, S) {
        (self.out, self.sleeper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records requested pauses instead of sleeping
    #[derive(Default)]
    struct RecordingSleeper {
        calls: Vec<Duration>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&mut self, duration: Duration) {
            self.calls.push(duration);
        }
    }

    fn run(lines: &[&str], line: f64, stanza: f64) -> (String, Vec<Duration>) {
        let delays = Delays::from_secs(line, stanza).unwrap();
        let mut printer = TimedPrinter::new(Vec::new(), RecordingSleeper::default(), delays);
        let written = printer.print_all(lines).unwrap();
        assert_eq!(written, lines.len());

        let (out, sleeper) = printer.into_parts();
        (String::from_utf8(out).unwrap(), sleeper.calls)
    }

    #[test]
    fn test_stanza_scenario() {
        let (out, calls) = run(&["x", "", "y"], 3.0, 1.5);

        assert_eq!(out, "x\n\ny\n");
        assert_eq!(
            calls,
            vec![
                Duration::from_secs_f64(3.0),
                Duration::from_secs_f64(1.5),
                Duration::from_secs_f64(3.0),
            ]
        );
    }

    #[test]
    fn test_empty_sequence_does_nothing() {
        let (out, calls) = run(&[], 3.0, 1.5);
        assert!(out.is_empty());
        assert!(calls.is_empty());
    }

    #[test]
    fn test_consecutive_breaks_not_coalesced() {
        let (out, calls) = run(&["a", "", "  ", "b"], 1.0, 2.0);

        assert_eq!(out, "a\n\n  \nb\n");
        assert_eq!(
            calls,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(2),
                Duration::from_secs(1),
            ]
        );
    }

    #[test]
    fn test_output_preserves_order_and_text() {
        let lines = ["first", "second line", "\tthird"];
        let (out, _) = run(&lines, 0.0, 0.0);
        let printed: Vec<&str> = out.lines().collect();
        assert_eq!(printed, lines);
    }

    #[test]
    fn test_is_stanza_break() {
        assert!(is_stanza_break(""));
        assert!(is_stanza_break("   "));
        assert!(is_stanza_break("\t\r"));
        assert!(!is_stanza_break(" x "));
    }

    #[test]
    fn test_from_secs_rejects_bad_values() {
        assert_eq!(
            Delays::from_secs(-1.0, 1.5),
            Err(DelayError::Negative {
                name: "line",
                value: -1.0
            })
        );
        assert!(matches!(
            Delays::from_secs(1.0, f64::NAN),
            Err(DelayError::NotFinite { name: "stanza", .. })
        ));
        assert!(matches!(
            Delays::from_secs(1e30, 1.0),
            Err(DelayError::TooLarge { name: "line", .. })
        ));
        assert!(Delays::from_secs(0.0, 0.0).is_ok());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_stops_before_sleeping() {
        let delays = Delays::from_secs(1.0, 1.0).unwrap();
        let mut printer = TimedPrinter::new(BrokenPipe, RecordingSleeper::default(), delays);

        let err = printer.print_all(["x", "y"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let (_, sleeper) = printer.into_parts();
        assert!(sleeper.calls.is_empty());
    }
}
