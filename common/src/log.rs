//! On-screen event log.
//!
//! A small ring buffer of short text lines shown on the log page: mode
//! switches, sensor registration, rejected readings. Nothing is written to
//! stdout; the screen is the only log sink.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("Sensor registered");
//! log.push_fmt(format_args!("Rejected {:.1} hPa", pressure));
//!
//! for line in log.iter() {
//!     // draw line
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

/// Maximum number of lines kept.
pub const LOG_CAPACITY: usize = 6;

/// Maximum characters per line (longer messages are truncated).
pub const LOG_LINE_LENGTH: usize = 48;

/// Fixed-capacity ring of log lines. The oldest line is dropped when full.
pub struct EventLog {
    lines: Deque<String<LOG_LINE_LENGTH>, LOG_CAPACITY>,
    /// Bumped on every change, lets the screen skip redraws.
    revision: u32,
}

/// `fmt::Write` adapter that silently stops at the line capacity.
struct Truncating<'a>(&'a mut String<LOG_LINE_LENGTH>);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

impl EventLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            lines: Deque::new(),
            revision: 0,
        }
    }

    /// Append a message, truncated to [`LOG_LINE_LENGTH`].
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        self.push_fmt(format_args!("{msg}"));
    }

    /// Append a formatted message, truncated to [`LOG_LINE_LENGTH`].
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        Truncating(&mut line).write_fmt(args).ok();

        if self.lines.is_full() {
            self.lines.pop_front();
        }
        self.lines.push_back(line).ok();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    /// Change counter, increases on every push.
    #[inline]
    pub const fn revision(&self) -> u32 { self.revision }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut log = EventLog::new();
        assert_eq!(log.iter().count(), 0);

        log.push("Started");
        log.push("Mode: SIM");
        assert!(log.iter().eq(["Started", "Mode: SIM"]));
        assert_eq!(log.revision(), 2);
    }

    #[test]
    fn test_ring_drops_oldest() {
        let mut log = EventLog::new();
        for i in 0..LOG_CAPACITY {
            log.push_fmt(format_args!("line {i}"));
        }
        log.push("newest");

        assert_eq!(log.iter().count(), LOG_CAPACITY);
        assert_eq!(log.iter().next(), Some("line 1"));
        assert_eq!(log.iter().last(), Some("newest"));
    }

    #[test]
    fn test_long_messages_truncated() {
        let mut log = EventLog::new();
        log.push("This message is far longer than a single line on the log page can hold");
        let stored = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
        assert!(stored.starts_with("This message"));
    }

    #[test]
    fn test_push_fmt_formats_floats() {
        let mut log = EventLog::new();
        log.push_fmt(format_args!("Rejected {:.2} hPa", -5.0_f32));
        assert_eq!(log.iter().last(), Some("Rejected -5.00 hPa"));
    }

    #[test]
    fn test_revision_advances_when_full() {
        let mut log = EventLog::new();
        for i in 0..LOG_CAPACITY {
            log.push_fmt(format_args!("line {i}"));
        }
        let rev = log.revision();
        log.push("overflow");
        assert_ne!(log.revision(), rev);
    }
}
