//! crates/logging/src/timestamp.rs
//! Local wall-clock timestamps in the fixed `yyyy-MM-dd HH:mm ` layout.

use std::sync::OnceLock;

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

/// Timestamp layout printed at the start of every record, trailing space included.
pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero] "
);

/// Printed when a timestamp cannot be formatted.
pub const FALLBACK_TIMESTAMP: &str = "1970-01-01 00:00 ";

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Returns the process's local UTC offset, resolved on first use.
///
/// Some platforms refuse to report the offset once the process has spawned
/// threads; UTC is used in that case.
pub fn local_offset() -> UtcOffset {
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

/// Formats `moment` with [`TIMESTAMP_FORMAT`].
///
/// # Examples
///
/// ```
/// use logging::format_timestamp;
/// use time::macros::datetime;
///
/// assert_eq!(format_timestamp(datetime!(2024-01-15 09:30:59 UTC)), "2024-01-15 09:30 ");
/// ```
#[must_use]
pub fn format_timestamp(moment: OffsetDateTime) -> String {
    moment
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_owned())
}

/// Returns the current local time formatted with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn now() -> String {
    format_timestamp(OffsetDateTime::now_utc().to_offset(local_offset()))
}
