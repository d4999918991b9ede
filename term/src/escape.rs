// this module is transparently re-exported by its parent `term`
//
// Escaping of literal values in the N-Quads syntax.

use std::borrow::Cow;
use std::fmt;

fn needs_escape(chr: char) -> bool {
    chr <= '\\' && (chr == '\n' || chr == '\r' || chr == '\t' || chr == '\\' || chr == '"')
}

/// Escape `txt` so that it can be written between double quotes.
///
/// Backslashes, double quotes, line feeds, carriage returns and tabs are escaped;
/// every other character is kept as is.
pub fn escape(txt: &str) -> Cow<'_, str> {
    if !txt.contains(needs_escape) {
        return Cow::Borrowed(txt);
    }
    let mut ret = String::with_capacity(txt.len() + 8);
    // writing to a String never fails
    let _ = write_escaped(&mut ret, txt);
    Cow::Owned(ret)
}

/// Reverse [`escape`].
///
/// Two-character escape codes are recognized in a single left-to-right pass,
/// so an escaped backslash followed by `n` stays a backslash followed by `n`.
/// Unknown escape codes are kept verbatim.
pub fn unescape(txt: &str) -> Cow<'_, str> {
    if !txt.contains('\\') {
        return Cow::Borrowed(txt);
    }
    let mut ret = String::with_capacity(txt.len());
    let mut chars = txt.chars();
    while let Some(chr) = chars.next() {
        if chr != '\\' {
            ret.push(chr);
            continue;
        }
        match chars.next() {
            Some('\\') => ret.push('\\'),
            Some('"') => ret.push('"'),
            Some('n') => ret.push('\n'),
            Some('r') => ret.push('\r'),
            Some('t') => ret.push('\t'),
            Some(other) => {
                ret.push('\\');
                ret.push(other);
            }
            None => ret.push('\\'),
        }
    }
    Cow::Owned(ret)
}

/// Write `txt` escaped (see [`escape`]) to the `fmt::Write`,
/// without the surrounding quotes.
pub fn write_escaped<W: fmt::Write>(w: &mut W, txt: &str) -> fmt::Result {
    let mut start = 0;
    for (pos, chr) in txt.char_indices() {
        if !needs_escape(chr) {
            continue;
        }
        w.write_str(&txt[start..pos])?;
        w.write_str(match chr {
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '"' => "\\\"",
            '\\' => "\\\\",
            _ => unreachable!(),
        })?;
        start = pos + 1;
    }
    w.write_str(&txt[start..])
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("hello world", "hello world" ; "nothing to escape")]
    #[test_case("a\"b", r#"a\"b"# ; "quote")]
    #[test_case("a\\b", r"a\\b" ; "backslash")]
    #[test_case("a\nb\rc\td", r"a\nb\rc\td" ; "control characters")]
    #[test_case("é \u{10000}", "é \u{10000}" ; "non ascii")]
    fn escaping(raw: &str, escaped: &str) {
        assert_eq!(escape(raw), escaped);
        assert_eq!(unescape(escaped), raw);
    }

    #[test]
    fn escape_borrows_when_possible() {
        assert!(matches!(escape("foo"), Cow::Borrowed(_)));
        assert!(matches!(unescape("foo"), Cow::Borrowed(_)));
    }

    #[test]
    fn unescape_is_single_pass() {
        // an escaped backslash followed by 'n' must not become a newline
        assert_eq!(unescape(r"\\n"), "\\n");
        assert_eq!(escape("\\n"), r"\\n");
    }

    #[test]
    fn unescape_keeps_unknown_escapes() {
        assert_eq!(unescape(r"\u00e9"), r"\u00e9");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn round_trip() {
        for txt in ["", "\\", "\"\"", "\\n\n", "tab\there", " \r\n \\ \" "] {
            assert_eq!(unescape(&escape(txt)), txt);
        }
    }
}
