//! Release name and body composition.
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `YYYY-MM-DD.HHMM`, 24 hour clock.
pub const RELEASE_NAME_FORMAT: &str = "%Y-%m-%d.%H%M";

/// Release name (also used as the tag) for the given instant.
pub fn release_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(RELEASE_NAME_FORMAT).to_string()
}

/// Join release lines into the body. No lines gives an empty body.
pub fn compose_body(lines: &[String]) -> String {
    lines.join("\n")
}
