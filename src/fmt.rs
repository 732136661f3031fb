use std::fmt::{Debug, Display, Formatter};

use chrono::{DateTime, Local};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// RFC 3339 timestamp displayed in the local time zone.
///
/// Anything that fails to parse is displayed verbatim.
pub struct LocalTimestamp<'a>(pub &'a str);

impl Debug for LocalTimestamp<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for LocalTimestamp<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match DateTime::parse_from_rfc3339(self.0) {
            Ok(timestamp) => {
                write!(f, "{}", timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT))
            }
            Err(_) => f.write_str(self.0),
        }
    }
}
