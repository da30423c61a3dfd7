use chrono::{DateTime, Local, TimeZone, Utc};

/// `HH:MM DD/MM/YYYY` in local time.
pub fn format_short(date: &DateTime<Utc>) -> String {
    format_short_in(date, &Local)
}

pub fn format_short_in<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.with_timezone(tz).format("%H:%M %d/%m/%Y").to_string()
}

/// Whole percentages print without decimals, others with one.
pub fn format_percentage(pct: f64) -> String {
    let rounded = (pct * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}
