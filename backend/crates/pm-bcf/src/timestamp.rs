use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// Date-time pattern used throughout BCF documents.
pub const BCF_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render a timestamp in UTC as `YYYY-MM-DDTHH:MM:SSZ`, whatever its source offset.
pub fn format_date_time<Tz: TimeZone>(date_time: &DateTime<Tz>) -> String {
    date_time
        .with_timezone(&Utc)
        .format(BCF_DATE_TIME_FORMAT)
        .to_string()
}

/// RFC 3339 with a `Z` suffix, used by the JSON representers.
pub fn format_rfc3339(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
