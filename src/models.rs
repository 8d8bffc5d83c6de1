// src/models.rs

use chrono::{DateTime, Local};

/// Timestamp prefix of every stored line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum accepted note length, in characters.
pub const MAX_NOTE_LEN: usize = 140;

#[derive(Debug)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub text: String,
}

impl LogEntry {
    /// Stamps `text` with the current local time.
    pub fn new(text: &str) -> Self {
        LogEntry {
            timestamp: Local::now(),
            text: text.to_string(),
        }
    }

    /// Renders the entry as the single line stored in the file,
    /// trailing newline included.
    pub fn to_line(&self) -> String {
        format!("{}: {}\n", self.timestamp.format(TIMESTAMP_FORMAT), self.text)
    }
}

/// Truncates a note to `MAX_NOTE_LEN` characters, never splitting a
/// multi-byte character.
pub fn clip(text: &str) -> &str {
    match text.char_indices().nth(MAX_NOTE_LEN) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn line_ends_in_single_newline_with_verbatim_text() {
        let entry = LogEntry::new("hello");
        let line = entry.to_line();
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with(": hello\n"));
    }

    #[test]
    fn line_starts_with_parseable_timestamp() {
        let entry = LogEntry::new("x");
        let line = entry.to_line();
        let stamp = &line[..19];
        assert!(NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(&line[19..21], ": ");
    }

    #[test]
    fn clip_leaves_short_input_untouched() {
        assert_eq!(clip("hola"), "hola");
        let exactly = "a".repeat(MAX_NOTE_LEN);
        assert_eq!(clip(&exactly), exactly);
    }

    #[test]
    fn clip_cuts_at_char_boundary() {
        let long = "ñ".repeat(MAX_NOTE_LEN + 60);
        let clipped = clip(&long);
        assert_eq!(clipped.chars().count(), MAX_NOTE_LEN);
        assert!(long.starts_with(clipped));
    }
}
