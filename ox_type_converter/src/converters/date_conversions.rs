//! Date and date-time conversion functions
//!
//! Both families produce `DateTime<Local>`. Date values sit at local
//! midnight. Local times skipped by a DST transition are rejected;
//! ambiguous ones resolve to the earlier instant.
//!
//! Fields a layout leaves out take their zero value: month and day
//! default to 1, hour, minute and second to 0. A `%Y-%m-%d` date-time
//! layout therefore yields local midnight.

use std::fmt::Write;

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::converter::ParseConfig;

fn localize(naive: NaiveDateTime) -> Result<DateTime<Local>, String> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("{} does not exist in the local time zone", naive))
}

fn parse_fields(value: &str, layout: &str) -> Result<Parsed, format::ParseError> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, value, StrftimeItems::new(layout))?;
    if parsed.timestamp().is_some() {
        return Ok(parsed);
    }

    let week_based =
        parsed.isoweek().is_some() || parsed.week_from_sun().is_some() || parsed.week_from_mon().is_some();
    if !week_based && parsed.ordinal().is_none() {
        if parsed.month().is_none() && parsed.quarter().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }
    if parsed.hour_div_12().is_none() && parsed.hour_mod_12().is_none() {
        parsed.set_hour(0)?;
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0)?;
    }
    Ok(parsed)
}

/// Convert string to a local date using the configured date layout
pub fn string_to_date(value: &str, config: &ParseConfig) -> Result<DateTime<Local>, String> {
    let date = parse_fields(value, &config.date_layout)
        .and_then(|parsed| parsed.to_naive_date())
        .map_err(|e| format!("'{}' does not match date layout '{}': {}", value, config.date_layout, e))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| format!("no midnight for date {}", date))?;
    localize(midnight)
}

/// Convert string to a local date-time using the configured date-time layout
pub fn string_to_datetime(value: &str, config: &ParseConfig) -> Result<DateTime<Local>, String> {
    let naive = parse_fields(value, &config.datetime_layout)
        .and_then(|parsed| parsed.to_naive_datetime_with_offset(0))
        .map_err(|e| {
            format!(
                "'{}' does not match date-time layout '{}': {}",
                value, config.datetime_layout, e
            )
        })?;
    localize(naive)
}

/// Format a date or date-time with a layout
pub fn datetime_to_string(value: &DateTime<Local>, layout: &str) -> Result<String, String> {
    let mut out = String::new();
    write!(out, "{}", value.format(layout)).map_err(|_| format!("invalid layout '{}'", layout))?;
    Ok(out)
}
