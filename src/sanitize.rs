//! Display sanitization for text received from the analysis service.
//!
//! egui lays text out literally, but control characters and Unicode
//! format characters (bidi overrides, zero-width joiners) still change how a
//! string looks. A link such as `http://evil.com/\u{202e}moc.lapyap` must not
//! be shown as if it pointed elsewhere, so those characters are replaced with
//! a visible `\u{..}` escape.

use std::borrow::Cow;
use std::fmt::Write;

fn is_disguising(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2066}'..='\u{2069}'
                | '\u{feff}'
        )
}

pub fn display_text(raw: &str) -> Cow<'_, str> {
    escape_where(raw, is_disguising)
}

/// Like [`display_text`], but keeps line breaks for prose such as error
/// messages.
pub fn display_message(raw: &str) -> Cow<'_, str> {
    escape_where(raw, |c| c != '\n' && is_disguising(c))
}

fn escape_where(raw: &str, escape: impl Fn(char) -> bool) -> Cow<'_, str> {
    if !raw.chars().any(&escape) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        if escape(c) {
            let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(
            display_text("http://example.com/<b>"),
            Cow::Borrowed("http://example.com/<b>")
        ));
    }

    #[test]
    fn bidi_override_is_made_visible() {
        assert_eq!(
            display_text("http://evil.com/\u{202e}moc"),
            "http://evil.com/\\u{202e}moc"
        );
    }

    #[test]
    fn newlines_and_nulls_are_escaped() {
        assert_eq!(display_text("a\nb\0"), "a\\u{a}b\\u{0}");
    }

    #[test]
    fn messages_keep_line_breaks_only() {
        assert_eq!(
            display_message("model unavailable\nretry later\u{202e}"),
            "model unavailable\nretry later\\u{202e}"
        );
        assert_eq!(display_message("a\r\nb"), "a\\u{d}\nb");
    }
}
