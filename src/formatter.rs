//! Custom tracing formatter with turn counter integration

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Global counter of processed input turns
static TURN_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Maximum value for turn counter display (16-bit hex)
const TURN_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// A formatter printing `time turn level target: fields` on one line.
///
/// The turn is the number of input turns processed so far, shown in hexadecimal, which makes
/// it easy to line log output up with the moves that caused it.
pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let now = OffsetDateTime::now_utc();
        let formatted_time = now.format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        write_dimmed(&mut writer, formatted_time)?;
        writer.write_char(' ')?;

        let turn = get_turn_count() & TURN_DISPLAY_MASK;
        write_dimmed(&mut writer, format_args!("0x{:04X}", turn))?;
        writer.write_char(' ')?;

        write_colored_level(&mut writer, meta.level())?;
        writer.write_char(' ')?;

        write_dimmed(&mut writer, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Write the verbosity level, colored when ANSI is enabled and right-aligned to 5 columns.
fn write_colored_level(writer: &mut Writer<'_>, level: &Level) -> fmt::Result {
    let text = match *level {
        Level::TRACE => "TRACE",
        Level::DEBUG => "DEBUG",
        Level::INFO => "INFO",
        Level::WARN => "WARN",
        Level::ERROR => "ERROR",
    };

    if writer.has_ansi_escapes() {
        let color = match *level {
            Level::TRACE => "\x1b[35m", // purple
            Level::DEBUG => "\x1b[34m", // blue
            Level::INFO => "\x1b[32m",  // green
            Level::WARN => "\x1b[33m",  // yellow
            Level::ERROR => "\x1b[31m", // red
        };
        write!(writer, "{}{:>5}\x1b[0m", color, text)
    } else {
        write!(writer, "{:>5}", text)
    }
}

fn write_dimmed(writer: &mut Writer<'_>, s: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[2m{}\x1b[0m", s)
    } else {
        write!(writer, "{}", s)
    }
}

/// Increment the global turn counter by 1
///
/// Called once per processed input line by the front end.
pub fn increment_turn() {
    TURN_COUNTER.fetch_add(1, Ordering::Relaxed);
}

/// Get the current turn count
pub fn get_turn_count() -> u64 {
    TURN_COUNTER.load(Ordering::Relaxed)
}
