//! Removing SGR sequences from text.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

static SGR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is a valid regex"));

/// Removes every SGR sequence (`ESC[` + digits/semicolons + `m`) from `text`.
///
/// Nothing else is touched: other escape sequences, and look-alikes
/// without the ESC byte such as a literal `[31m`, are kept.
///
/// Removing one sequence can splice its neighbours into a new one
/// (`"\x1b\x1b[0m[0m"`); those are removed too, so stripping is idempotent.
///
/// ```rust
/// use standout_sgr::strip_ansi;
///
/// assert_eq!(strip_ansi("\x1b[31;1mhello\x1b[0m"), "hello");
/// assert_eq!(strip_ansi("[31mliteral"), "[31mliteral");
/// ```
pub fn strip_ansi(text: &str) -> String {
    let mut out = SGR_PATTERN.replace_all(text, "").into_owned();
    while SGR_PATTERN.is_match(&out) {
        out = SGR_PATTERN.replace_all(&out, "").into_owned();
    }
    out
}

/// Terminal column width of `text` once SGR sequences are removed.
///
/// Wide characters (CJK, most emoji) count as two columns.
///
/// ```rust
/// use standout_sgr::{visible_width, Styler};
///
/// let styler = Styler::new();
/// assert_eq!(visible_width(&styler.red("abc")), 3);
/// assert_eq!(visible_width("日本"), 4);
/// ```
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).width()
}
