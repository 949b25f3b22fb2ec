use chrono::prelude::*;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar date in the `YYYY-MM-DD` format. Years outside of
/// 1970..=2100 are considered invalid.
pub fn parse_date(datestr: &str) -> anyhow::Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(datestr.trim(), DATE_FORMAT)
        .map_err(|_| anyhow::Error::msg(datestr.to_string()))?;
    if !(1970..=2100).contains(&date.year()) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    Ok(date)
}

/// Parses a local time-of-day, either `HH:MM` or `HH:MM:SS`
pub fn parse_time(timestr: &str) -> anyhow::Result<NaiveTime> {
    let timestr = timestr.trim();
    NaiveTime::parse_from_str(timestr, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(timestr, "%H:%M:%S"))
        .map_err(|_| anyhow::Error::msg(timestr.to_string()))
}

/// Parses the start time of a slot. Slots start on whole minutes, so a
/// time with non-zero seconds is invalid.
pub fn parse_slot_time(timestr: &str) -> anyhow::Result<NaiveTime> {
    let time = parse_time(timestr)?;
    if time.second() != 0 {
        return Err(anyhow::Error::msg(timestr.trim().to_string()));
    }
    Ok(time)
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
