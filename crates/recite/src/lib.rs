//! recite - Timed line printer for Bootkit
//!
//! Prints a sequence of lines one at a time, pausing after each. A blank
//! line marks a stanza break and gets its own, separately configured pause.

pub mod lyrics;
pub mod printer;

pub use printer::{is_stanza_break, DelayError, Delays, Sleeper, ThreadSleeper, TimedPrinter};
