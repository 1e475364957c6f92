//! ANSI escape sequences and the nested-style resequencer.
//!
//! Every formatter in this crate is a call to [`wrap`] with a different
//! `(open, close, replace)` triple. This module knows nothing about whether
//! color is enabled; that decision is made by the caller.

/// Resets every attribute (SGR 0).
pub const RESET: &str = "\x1B[0m";

/// Resets bold and dim. Terminals keep both in one intensity attribute, so
/// there is no way to close one without the other.
pub const RESET_INTENSITY: &str = "\x1B[22m";

/// Resets the foreground color to the terminal default.
pub const RESET_FG: &str = "\x1B[39m";

/// Resets the background color to the terminal default.
pub const RESET_BG: &str = "\x1B[49m";

/// Wraps `text` in `open` and `close`.
///
/// If `close` already occurs inside `text`, typically because a value
/// styled with the same closing sequence was nested inside it, each
/// occurrence is rewritten to `replace`. Otherwise the inner close would end
/// the outer style early.
///
/// The search for the first occurrence starts at byte offset `open.len()`
/// of `text`, not at zero. An occurrence that starts before that offset is
/// left as is. Once a first occurrence is found, it and every later one is
/// replaced, including back to back occurrences.
///
/// ```
/// use minicolor::ansi::wrap;
///
/// let inner = wrap("world", "\x1B[34m", "\x1B[39m", "\x1B[34m");
/// let outer = wrap(
///     &format!("hello {inner}!"),
///     "\x1B[31m",
///     "\x1B[39m",
///     "\x1B[31m",
/// );
/// assert_eq!(
///     outer,
///     "\x1B[31mhello \x1B[34mworld\x1B[31m!\x1B[39m",
/// );
/// ```
pub fn wrap(text: &str, open: &str, close: &str, replace: &str) -> String {
    match find_from(text, close, open.len()) {
        None => {
            let mut out =
                String::with_capacity(open.len() + text.len() + close.len());
            out.push_str(open);
            out.push_str(text);
            out.push_str(close);
            out
        }
        Some(first) => {
            let mut out = String::with_capacity(
                open.len() + text.len() + replace.len() + close.len(),
            );
            out.push_str(open);
            replace_close(&mut out, text, close, replace, first);
            out.push_str(close);
            out
        }
    }
}

/// Appends `text` to `out`, with every occurrence of `close` at or after
/// `index` replaced by `replace`. `index` must be the position of an
/// occurrence.
fn replace_close(
    out: &mut String,
    text: &str,
    close: &str,
    replace: &str,
    mut index: usize,
) {
    let mut cursor = 0;
    loop {
        out.push_str(&text[cursor..index]);
        out.push_str(replace);
        cursor = index + close.len();
        match find_from(text, close, cursor) {
            Some(next) => index = next,
            None => break,
        }
    }
    out.push_str(&text[cursor..]);
}

/// Returns the byte position of the first occurrence of `needle` in
/// `haystack` that starts at or after `from`.
///
/// Every needle used by this crate starts with an ASCII escape byte, which
/// can't occur inside a multi-byte character, so rounding `from` up to the
/// next character boundary never skips a match.
fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let mut start = from;
    while start < haystack.len() && !haystack.is_char_boundary(start) {
        start += 1;
    }
    haystack.get(start..)?.find(needle).map(|i| i + start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RED: &str = "\x1B[31m";

    #[test]
    fn simple() {
        assert_eq!(wrap("x", RED, RESET_FG, RED), "\x1B[31mx\x1B[39m");
    }

    #[test]
    fn empty_text() {
        assert_eq!(wrap("", RED, RESET_FG, RED), "\x1B[31m\x1B[39m");
    }

    #[test]
    fn nested_close_is_replaced() {
        let text = "ab\x1B[34mcd\x1B[39mef";
        assert_eq!(
            wrap(text, RED, RESET_FG, RED),
            "\x1B[31mab\x1B[34mcd\x1B[31mef\x1B[39m"
        );
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let text = "hello\x1B[39ma\x1B[39mb\x1B[39m";
        assert_eq!(
            wrap(text, RED, RESET_FG, RED),
            "\x1B[31mhello\x1B[31ma\x1B[31mb\x1B[31m\x1B[39m"
        );
    }

    #[test]
    fn consecutive_occurrences() {
        let text = "hello\x1B[39m\x1B[39mworld";
        assert_eq!(
            wrap(text, RED, RESET_FG, RED),
            "\x1B[31mhello\x1B[31m\x1B[31mworld\x1B[39m"
        );
    }

    #[test]
    fn occurrence_before_offset_is_kept() {
        // The search starts at `RED.len()`, so a close sequence at the very
        // start of the text isn't found on its own.
        let text = "\x1B[39mabc";
        assert_eq!(wrap(text, RED, RESET_FG, RED), "\x1B[31m\x1B[39mabc\x1B[39m");

        // Once a later occurrence is found, the earlier one is still left
        // untouched.
        let text = "\x1B[39m\x1B[39mabc";
        assert_eq!(
            wrap(text, RED, RESET_FG, RED),
            "\x1B[31m\x1B[39m\x1B[31mabc\x1B[39m"
        );
    }

    #[test]
    fn nested_empty_value_under_longer_open() {
        // The inner close sits at byte 5, before the 6 byte outer open
        // length, so it isn't rewritten.
        let inner = wrap("", "\x1B[41m", RESET_BG, "\x1B[41m");
        assert_eq!(
            wrap(&inner, "\x1B[101m", RESET_BG, "\x1B[101m"),
            "\x1B[101m\x1B[41m\x1B[49m\x1B[49m"
        );

        // One more byte of content moves it onto the offset.
        let inner = wrap("x", "\x1B[41m", RESET_BG, "\x1B[41m");
        assert_eq!(
            wrap(&inner, "\x1B[101m", RESET_BG, "\x1B[101m"),
            "\x1B[101m\x1B[41mx\x1B[101m\x1B[49m"
        );
    }

    #[test]
    fn text_shorter_than_offset() {
        assert_eq!(wrap("ab", RED, RESET_FG, RED), "\x1B[31mab\x1B[39m");
    }

    #[test]
    fn replacement_may_contain_close() {
        let bold_replace = "\x1B[22m\x1B[1m";
        let text = "\x1B[2mx\x1B[22m";
        assert_eq!(
            wrap(text, "\x1B[1m", RESET_INTENSITY, bold_replace),
            "\x1B[1m\x1B[2mx\x1B[22m\x1B[1m\x1B[22m"
        );
    }

    #[test]
    fn multibyte_text() {
        // The offset lands inside the third 'é'.
        let text = "ééé\x1B[39mü";
        assert_eq!(
            wrap(text, RED, RESET_FG, RED),
            "\x1B[31mééé\x1B[31mü\x1B[39m"
        );
        assert_eq!(find_from("ééé", RESET_FG, 5), None);
        assert_eq!(find_from("é\x1B[39m", RESET_FG, 1), Some(2));
    }

    #[test]
    fn find_from_past_end() {
        assert_eq!(find_from("abc", "c", 10), None);
        assert_eq!(find_from("abc", "c", 3), None);
        assert_eq!(find_from("abc", "c", 2), Some(2));
        assert_eq!(find_from("abc", "", 0), None);
    }
}
