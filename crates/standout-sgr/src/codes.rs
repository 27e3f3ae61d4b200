//! Escape sequence construction.

use std::fmt::Write;

use crate::attribute::Attribute;

/// Control Sequence Introducer: the ESC byte (0x1B) followed by `[`.
///
/// Every sequence this crate emits starts with it.
pub const CSI: &str = "\x1b[";

/// The SGR sequence that clears all styling.
pub const RESET: &str = "\x1b[0m";

/// Returns the reset sequence.
///
/// Styled output already ends with it; this is for callers assembling
/// sequences by hand.
pub fn reset_sequence() -> &'static str {
    RESET
}

/// Builds an SGR prefix such as `"\x1b[31;1m"` from a list of attributes.
///
/// Order is preserved and duplicates are kept. An empty list yields an empty
/// string. This does not consult the enabled flag.
///
/// ```rust
/// use standout_sgr::{compose_codes, Attribute};
///
/// assert_eq!(compose_codes(&[]), "");
/// assert_eq!(compose_codes(&[Attribute::FG_RED, Attribute::BOLD]), "\x1b[31;1m");
/// ```
pub fn compose_codes(attrs: &[Attribute]) -> String {
    if attrs.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(CSI.len() + attrs.len() * 4);
    out.push_str(CSI);
    for (i, attr) in attrs.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", attr.code());
    }
    out.push('m');
    out
}

/// Wraps `text` between an already-built prefix and the reset sequence.
pub(crate) fn wrap(prefix: &str, text: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + text.len() + RESET.len());
    out.push_str(prefix);
    out.push_str(text);
    out.push_str(RESET);
    out
}
