use chrono::{TimeZone, Utc};
use std::fmt::Display;

const FILE_SIZE_UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];

fn left_pad_two(value: u64) -> String {
    format!("{value:02}")
}

/// `HH:MM:SS`; hours keep growing past two digits.
pub fn format_playback_time(seconds: f64) -> String {
    let total_seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let total_minutes = total_seconds / 60;

    format!(
        "{}:{}:{}",
        left_pad_two(total_minutes / 60),
        left_pad_two(total_minutes % 60),
        left_pad_two(total_seconds % 60)
    )
}

/// Decimal units, capped at GB.
pub fn format_file_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit_index = 0;
    while size > 1000.0 && unit_index < FILE_SIZE_UNITS.len() - 1 {
        size /= 1000.0;
        unit_index += 1;
    }

    format!("{size:.1} {}", FILE_SIZE_UNITS[unit_index])
}

/// Splits a unix timestamp in milliseconds into a date and a time string in
/// the given time zone.
pub fn format_birthtime<Tz>(birthtime_millis: i64, time_zone: &Tz) -> Option<(String, String)>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let utc_time = Utc.timestamp_millis_opt(birthtime_millis).single()?;
    let local_time = utc_time.with_timezone(time_zone);

    Some((
        local_time.format("%Y-%m-%d").to_string(),
        local_time.format("%H:%M:%S").to_string(),
    ))
}

pub fn tick_to_seconds(tick: u32, interval_per_tick: f64) -> f64 {
    f64::from(tick) * interval_per_tick
}

pub fn format_tick_clock(tick: u32, interval_per_tick: f64) -> String {
    format_playback_time(tick_to_seconds(tick, interval_per_tick))
}
