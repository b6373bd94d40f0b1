use chrono::{DateTime, FixedOffset, NaiveDateTime};

pub const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = strip_trailing_comment(raw.trim());
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed);
    }

    NAIVE_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(trimmed, format)
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

pub fn display_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|parsed| parsed.format(DISPLAY_FORMAT).to_string())
}

fn strip_trailing_comment(raw: &str) -> &str {
    if !raw.ends_with(')') {
        return raw;
    }

    match raw.rfind('(') {
        Some(start) => raw[..start].trim_end(),
        None => raw,
    }
}
