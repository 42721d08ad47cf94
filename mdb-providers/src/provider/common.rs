//! Field normalization shared by the adapters.
use chrono::NaiveDate;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}").unwrap());

static LINE_BREAK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>|</p\s*>").unwrap());

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

static HTML_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap());

static EXTRA_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d %b %Y", "%b %d, %Y", "%d %b, %Y", "%B %d, %Y"];

/// Returns the first run of four digits in `s` as a year.
///
/// `"2011–2019"` yields 2011, `"N/A"` yields nothing.
pub fn extract_year(s: &str) -> Option<u32> {
    YEAR.find(s).and_then(|m| m.as_str().parse().ok())
}

/// Parses the date formats providers are known to send.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date);
    }

    // RFC 3339 timestamps
    let date = s
        .get(..10)
        .filter(|_| s.as_bytes().get(10) == Some(&b'T'))
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok());

    if date.is_none() {
        debug!("Unrecognized date: {s}");
    }
    date
}

/// Removes HTML markup and decodes entities.
pub fn strip_html(s: &str) -> String {
    let with_breaks = LINE_BREAK_TAG.replace_all(s, "\n");
    let no_tags = HTML_TAG.replace_all(&with_breaks, "");
    let decoded = HTML_ENTITY.replace_all(&no_tags, |caps: &Captures| decode_entity(caps));
    let normalized = decoded.replace("\r\n", "\n");

    EXTRA_NEWLINES
        .replace_all(normalized.trim(), "\n\n")
        .into_owned()
}

fn decode_entity(caps: &Captures) -> String {
    let entity = &caps[1];

    let decoded = if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" | "rsquo" | "lsquo" => Some('\''),
            "rdquo" | "ldquo" => Some('"'),
            "nbsp" => Some(' '),
            "mdash" => Some('\u{2014}'),
            "ndash" => Some('\u{2013}'),
            "hellip" => Some('\u{2026}'),
            _ => None,
        }
    };

    decoded.map_or_else(|| caps[0].to_string(), String::from)
}

/// Splits a comma separated list, dropping blanks and `N/A`.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .filter_map(non_empty)
        .collect()
}

/// `None` for blank strings and the `N/A` placeholder.
pub fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("N/A") {
        None
    } else {
        Some(s.to_string())
    }
}

/// Percent-encodes a query component.
#[inline]
pub fn encode(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s.trim())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn years() {
        assert_eq!(extract_year("2010"), Some(2010));
        assert_eq!(extract_year("2011\u{2013}2019"), Some(2011));
        assert_eq!(extract_year("Released 16 Jul 2010"), Some(2010));
        assert_eq!(extract_year("N/A"), None);
        assert_eq!(extract_year("201"), None);
    }

    #[test]
    fn dates() {
        let inception = NaiveDate::from_ymd_opt(2010, 7, 16);

        assert_eq!(parse_date("2010-07-16"), inception);
        assert_eq!(parse_date("2010-07-16T00:00:00+00:00"), inception);
        assert_eq!(parse_date("16 Jul 2010"), inception);
        assert_eq!(parse_date("Jul 16, 2010"), inception);
        assert_eq!(parse_date("16 Jul, 2010"), inception);
        assert_eq!(parse_date("July 16, 2010"), inception);
        assert_eq!(parse_date("N/A"), None);
        assert_eq!(parse_date("Coming soon"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn html_is_stripped() {
        let raw = "<p>Tom &amp; Jerry</p><p>Line&#10;two<br/>three &quot;x&quot; &#x27;y&#x27;</p>";
        assert_eq!(strip_html(raw), "Tom & Jerry\nLine\ntwo\nthree \"x\" 'y'");

        assert_eq!(strip_html("  plain  "), "plain");
        assert_eq!(strip_html("a &unknown; b"), "a &unknown; b");
        assert_eq!(strip_html("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn lists_and_placeholders() {
        assert_eq!(
            split_list("Action, Sci-Fi ,  , N/A"),
            vec!["Action".to_string(), "Sci-Fi".to_string()]
        );
        assert!(split_list("N/A").is_empty());
        assert_eq!(non_empty(" 148 min "), Some("148 min".to_string()));
        assert_eq!(non_empty("n/a"), None);
        assert_eq!(encode("The Lord of the Rings"), "The%20Lord%20of%20the%20Rings");
    }
}
