//! Date field parser (`{date}` keyword)

use std::fmt::Display;

use chrono::TimeZone;

use super::{HG_DATE_REGEX, Parser};
use crate::hg::constants::DATE_FORMAT;

impl Parser {
    /// Convert hg's `{date}` field into `YYYY-MM-DD HH:MM:SS` in `tz`
    ///
    /// Only the unix-seconds part is used; the fraction and the tz offset
    /// hg appends are ignored. Returns `None` for anything else.
    pub fn parse_hg_date<Tz>(field: &str, tz: &Tz) -> Option<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let caps = HG_DATE_REGEX.captures(field.trim())?;
        let secs: i64 = caps.get(1)?.as_str().parse().ok()?;
        let datetime = tz.timestamp_opt(secs, 0).single()?;
        Some(datetime.format(DATE_FORMAT).to_string())
    }
}
