//! Presentation helpers for the listing UI

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Characters of a message shown in a listing row
pub const PREVIEW_CHARS: usize = 40;

/// Listing row timestamp, e.g. `2024/05/01 18:30`.
pub fn list_timestamp(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%Y/%m/%d %H:%M").to_string()
}

/// Detail view timestamp, e.g. `2024年05月01日 18:30`.
pub fn detail_timestamp(at: DateTime<Utc>, tz: Tz) -> String {
    at.with_timezone(&tz).format("%Y年%m月%d日 %H:%M").to_string()
}

/// First `max_chars` characters of `text` on a single line, with an
/// ellipsis when anything was cut.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    let single_line = !text.contains(['\n', '\r']);
    if single_line && text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }

    let flat: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return Cow::Owned(flat);
    }

    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.push('…');
    Cow::Owned(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_in_display_timezone() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(list_timestamp(at, chrono_tz::Asia::Tokyo), "2024/05/01 18:30");
        assert_eq!(
            detail_timestamp(at, chrono_tz::Asia::Tokyo),
            "2024年05月01日 18:30"
        );
        assert_eq!(list_timestamp(at, chrono_tz::UTC), "2024/05/01 09:30");
    }

    #[test]
    fn short_text_is_borrowed() {
        assert!(matches!(preview("hello", 40), Cow::Borrowed("hello")));
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let text = "あ".repeat(50);
        let out = preview(&text, 40);
        assert_eq!(out.chars().count(), 41);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn newlines_are_flattened() {
        assert_eq!(preview("line one\nline two", 40), "line one line two");
    }
}
