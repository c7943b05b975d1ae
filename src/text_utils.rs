use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use spdlog::warn;

/// The two-character sequence the cached data uses for line breaks.
const ESCAPED_NEWLINE: &str = "\\n";

pub fn parse_timestamp(buf: &str) -> Result<DateTime<Utc>, String> {
    let buf = buf.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(buf) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Timestamps without an offset are taken as UTC
    if let Ok(dt) = NaiveDateTime::parse_from_str(buf, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(buf, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }
    if let Some(dt) = NaiveDate::parse_from_str(buf, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)) {
        return Ok(dt.and_utc());
    }

    Err(format!("Unable to parse date time {}", buf))
}

/// "January 1, 2026"
pub fn format_long_date(date_time: &DateTime<Utc>) -> String {
    date_time.format("%B %-d, %Y").to_string()
}

/// Long-form date for display. Timestamps that can't be parsed are shown as
/// they are.
pub fn display_date(created_at: &str) -> String {
    match parse_timestamp(created_at) {
        Ok(dt) => format_long_date(&dt),
        Err(e) => {
            warn!("{}. Showing it verbatim", e);
            created_at.to_string()
        }
    }
}

pub fn convert_line_breaks(text: &str) -> String {
    text.replace(ESCAPED_NEWLINE, "<br/>")
}

pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "&quot;")
}

/// Cuts `content` at `max_chars` characters (not words), turns escaped line
/// breaks into spaces and appends an ellipsis.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let cut: String = content.chars().take(max_chars).collect();
    format!("{}...", cut.replace(ESCAPED_NEWLINE, " "))
}

pub fn pluralize(count: u64, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let dt = parse_timestamp("2026-01-01T00:00:00Z").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2026, 1, 1));

        let dt = parse_timestamp("2026-01-31T18:22:05.123456+00:00").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (18, 22, 5));

        // Converted to UTC
        let dt = parse_timestamp("2026-03-01T01:30:00+02:00").unwrap();
        assert_eq!((dt.month(), dt.day(), dt.hour()), (2, 28, 23));

        let dt = parse_timestamp("2017-09-10T10:42:32.123").unwrap();
        assert_eq!((dt.year(), dt.hour()), (2017, 10));

        let dt = parse_timestamp("2017-09-10 10:42:32").unwrap();
        assert_eq!(dt.minute(), 42);

        let dt = parse_timestamp("2024-04-22").unwrap();
        assert_eq!(dt.day(), 22);

        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_format_long_date() {
        let dt = parse_timestamp("2026-01-01T00:00:00Z").unwrap();
        assert_eq!(format_long_date(&dt), "January 1, 2026");
        let dt = parse_timestamp("2025-12-25T23:59:59Z").unwrap();
        assert_eq!(format_long_date(&dt), "December 25, 2025");
    }

    #[test]
    fn test_display_date_fallback() {
        assert_eq!(display_date("2026-02-02T23:59:59Z"), "February 2, 2026");
        assert_eq!(display_date("not a date"), "not a date");
    }

    #[test]
    fn test_convert_line_breaks() {
        assert_eq!(convert_line_breaks("Line1\\nLine2"), "Line1<br/>Line2");
        assert_eq!(convert_line_breaks("a\\n\\nb"), "a<br/><br/>b");
        // Real newlines are left alone
        assert_eq!(convert_line_breaks("a\nb"), "a\nb");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_quotes("no quotes"), "no quotes");
    }

    #[test]
    fn test_excerpt_short() {
        assert_eq!(excerpt("Line1\\nLine2", 200), "Line1 Line2...");
        assert_eq!(excerpt("", 200), "...");
    }

    #[test]
    fn test_excerpt_hard_cut() {
        let content = "word ".repeat(100);
        let res = excerpt(&content, 200);
        let body = res.strip_suffix("...").unwrap();
        assert_eq!(body.chars().count(), 200);

        let content = "abcdefghij".repeat(30);
        let res = excerpt(&content, 200);
        assert_eq!(res, format!("{}...", "abcdefghij".repeat(20)));
    }

    #[test]
    fn test_excerpt_counts_chars() {
        let content = "é".repeat(250);
        let res = excerpt(&content, 200);
        assert_eq!(res.strip_suffix("...").unwrap().chars().count(), 200);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "comment"), "0 comments");
        assert_eq!(pluralize(1, "comment"), "1 comment");
        assert_eq!(pluralize(2, "comment"), "2 comments");
    }
}
