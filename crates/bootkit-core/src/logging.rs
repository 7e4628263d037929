//! Logging setup shared by the Bootkit binaries
//!
//! Every event is rendered as a single line:
//!
//! ```text
//! 2024-05-01 12:00:00,123 - INFO - Created directory: src
//! ```

use chrono::{DateTime, Local};
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Timestamp layout: date, time, and milliseconds after a comma
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event formatter producing `<timestamp> - <LEVEL> - <message>`
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

/// Render the `<timestamp> - <LEVEL> - ` prefix of a log line
pub fn prefix(timestamp: &DateTime<Local>, level: &Level) -> String {
    format!("{} - {} - ", timestamp.format(TIMESTAMP_FORMAT), level)
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}", prefix(&Local::now(), event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"info"`)
/// decides what is shown.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(LineFormat)
        .init();
}
