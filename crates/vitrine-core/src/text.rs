//! Pure text utilities: date formatting, HTML escaping, read-time
//! estimation, slug generation, and truncation.

use chrono::{Datelike, NaiveDate};

/// Default reading speed for [`read_time`].
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Locale for long-form date output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// Ukrainian genitive month names ("15 січня 2025 р.").
    #[default]
    Ukrainian,
    /// English month names ("January 15, 2025").
    English,
}

const UK_MONTHS: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a date with a long month name in the given locale.
pub fn format_date(date: NaiveDate, locale: DateLocale) -> String {
    let month = date.month0() as usize;
    match locale {
        DateLocale::Ukrainian => {
            // uk-UA long dates carry the "р." (рік) suffix.
            format!("{} {} {} р.", date.day(), UK_MONTHS[month], date.year())
        }
        DateLocale::English => {
            format!("{} {}, {}", EN_MONTHS[month], date.day(), date.year())
        }
    }
}

/// Escape text for safe interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Estimated reading time in minutes at the default rate.
pub fn read_time(text: &str) -> u32 {
    read_time_with_rate(text, DEFAULT_WORDS_PER_MINUTE)
}

/// Estimated reading time: ceiling of word count over words per minute.
pub fn read_time_with_rate(text: &str, words_per_minute: u32) -> u32 {
    if words_per_minute == 0 {
        return 0;
    }
    let words = text.split_whitespace().count() as u32;
    words.div_ceil(words_per_minute)
}

/// Generate a URL slug: lowercase, keep Latin/Cyrillic letters and digits,
/// collapse everything else into single hyphens, trim edge hyphens.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        let keep = c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || matches!(c, 'а'..='я' | 'і' | 'ї' | 'є' | 'ґ');
        if keep {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Truncate to `max` characters, appending `...` when anything was cut.
///
/// Counts characters rather than bytes so multi-byte text never splits
/// mid-character.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_ukrainian() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date");
        assert_eq!(format_date(date, DateLocale::Ukrainian), "15 січня 2025 р.");
    }

    #[test]
    fn test_format_date_english() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 2).expect("valid date");
        assert_eq!(format_date(date, DateLocale::English), "November 2, 2024");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'quote'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;quote&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_read_time_default_rate() {
        let text = vec!["word"; 400].join(" ");
        assert_eq!(read_time(&text), 2);
    }

    #[test]
    fn test_read_time_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        assert_eq!(read_time(&text), 2);
        assert_eq!(read_time_with_rate("one two three", 10), 1);
    }

    #[test]
    fn test_read_time_empty() {
        assert_eq!(read_time(""), 0);
        assert_eq!(read_time("   "), 0);
    }

    #[test]
    fn test_slugify_latin() {
        assert_eq!(slugify("Hello,  World! 42"), "hello-world-42");
    }

    #[test]
    fn test_slugify_cyrillic() {
        assert_eq!(slugify("Енергетика: панелі"), "енергетика-панелі");
        assert_eq!(slugify("Ґанок і їжак"), "ґанок-і-їжак");
    }

    #[test]
    fn test_slugify_trims_edge_hyphens() {
        assert_eq!(slugify("  --Hello--  "), "hello");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_long_text() {
        let out = truncate("abcdefghij", 4);
        assert_eq!(out, "abcd...");
        assert_eq!(out.chars().count(), 7);
    }

    #[test]
    fn test_truncate_multibyte() {
        let out = truncate("привіт світ", 6);
        assert_eq!(out, "привіт...");
    }
}
