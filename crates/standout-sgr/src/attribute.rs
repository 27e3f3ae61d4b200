//! SGR attribute codes.
//!
//! An [`Attribute`] is a single numeric SGR parameter: a text style such as
//! bold, or a color selector from the 16-color table. The named constants
//! cover the standard set:
//!
//! | Range     | Meaning                      |
//! |-----------|------------------------------|
//! | `0`–`9`   | reset and text styles        |
//! | `30`–`37` | foreground colors            |
//! | `40`–`47` | background colors            |
//! | `90`–`97` | bright foreground colors     |
//! | `100`–`107` | bright background colors   |
//!
//! Any other integer can be used through [`Attribute::new`], including
//! negative or out-of-table codes. Codes are never validated: whatever the
//! terminal makes of them is up to the terminal.
//!
//! # Parsing
//!
//! Attributes parse from their snake_case name or from a decimal code:
//!
//! ```rust
//! use standout_sgr::Attribute;
//!
//! assert_eq!("bright_red".parse(), Ok(Attribute::FG_BRIGHT_RED));
//! assert_eq!("Bg-Blue".parse(), Ok(Attribute::BG_BLUE));
//! assert_eq!("38".parse(), Ok(Attribute::new(38)));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseAttributeError;

/// A single SGR parameter (style or color selector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "AttributeRepr", into = "i32")]
pub struct Attribute(i32);

impl Attribute {
    /// Wraps a raw SGR code.
    pub const fn new(code: i32) -> Self {
        Attribute(code)
    }

    /// The numeric SGR code.
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Canonical name of a named attribute, `None` for raw codes.
    pub fn name(self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(_, attr)| *attr == self)
            .map(|(name, _)| *name)
    }

    /// Looks up a named attribute by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, attr)| *attr)
    }

    /// All named attributes, in code order within each group.
    pub fn named() -> impl Iterator<Item = (&'static str, Attribute)> {
        NAMED.iter().copied()
    }
}

macro_rules! named_attributes {
    ($($(#[$doc:meta])* $konst:ident = $code:literal => $name:literal;)*) => {
        impl Attribute {
            $(
                $(#[$doc])*
                pub const $konst: Attribute = Attribute($code);
            )*
        }

        const NAMED: &[(&str, Attribute)] = &[$(($name, Attribute::$konst)),*];
    };
}

named_attributes! {
    /// Clears all styling.
    RESET = 0 => "reset";
    /// Bold or increased intensity.
    BOLD = 1 => "bold";
    /// Faint or decreased intensity.
    DIM = 2 => "dim";
    /// Italic. Not every terminal renders it.
    ITALIC = 3 => "italic";
    UNDERLINE = 4 => "underline";
    /// Slow blink. Most terminals ignore it.
    BLINK = 5 => "blink";
    /// Swap foreground and background.
    INVERSE = 7 => "inverse";
    /// Concealed text.
    HIDDEN = 8 => "hidden";
    /// Crossed-out text.
    STRIKE = 9 => "strike";

    FG_BLACK = 30 => "black";
    FG_RED = 31 => "red";
    FG_GREEN = 32 => "green";
    FG_YELLOW = 33 => "yellow";
    FG_BLUE = 34 => "blue";
    FG_MAGENTA = 35 => "magenta";
    FG_CYAN = 36 => "cyan";
    FG_WHITE = 37 => "white";

    FG_BRIGHT_BLACK = 90 => "bright_black";
    FG_BRIGHT_RED = 91 => "bright_red";
    FG_BRIGHT_GREEN = 92 => "bright_green";
    FG_BRIGHT_YELLOW = 93 => "bright_yellow";
    FG_BRIGHT_BLUE = 94 => "bright_blue";
    FG_BRIGHT_MAGENTA = 95 => "bright_magenta";
    FG_BRIGHT_CYAN = 96 => "bright_cyan";
    FG_BRIGHT_WHITE = 97 => "bright_white";

    BG_BLACK = 40 => "bg_black";
    BG_RED = 41 => "bg_red";
    BG_GREEN = 42 => "bg_green";
    BG_YELLOW = 43 => "bg_yellow";
    BG_BLUE = 44 => "bg_blue";
    BG_MAGENTA = 45 => "bg_magenta";
    BG_CYAN = 46 => "bg_cyan";
    BG_WHITE = 47 => "bg_white";

    BG_BRIGHT_BLACK = 100 => "bg_bright_black";
    BG_BRIGHT_RED = 101 => "bg_bright_red";
    BG_BRIGHT_GREEN = 102 => "bg_bright_green";
    BG_BRIGHT_YELLOW = 103 => "bg_bright_yellow";
    BG_BRIGHT_BLUE = 104 => "bg_bright_blue";
    BG_BRIGHT_MAGENTA = 105 => "bg_bright_magenta";
    BG_BRIGHT_CYAN = 106 => "bg_bright_cyan";
    BG_BRIGHT_WHITE = 107 => "bg_bright_white";
}

impl From<i32> for Attribute {
    fn from(code: i32) -> Self {
        Attribute(code)
    }
}

impl From<Attribute> for i32 {
    fn from(attr: Attribute) -> Self {
        attr.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Attribute {
    type Err = ParseAttributeError;

    /// Parses a canonical name (case-insensitive, `-` or `_` separated) or
    /// a signed decimal code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseAttributeError::Empty);
        }

        let digits = s.trim_start_matches(['-', '+']);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<i32>()
                .map(Attribute)
                .map_err(|_| ParseAttributeError::InvalidCode(s.to_string()));
        }

        let key = s.to_ascii_lowercase().replace('-', "_");
        Attribute::from_name(&key).ok_or_else(|| ParseAttributeError::UnknownName(s.to_string()))
    }
}

/// Parses a whitespace- or comma-separated list of attributes.
///
/// Fails on the first entry that does not parse.
///
/// ```rust
/// use standout_sgr::{parse_attributes, Attribute};
///
/// let attrs = parse_attributes("bold, red bg_white").unwrap();
/// assert_eq!(attrs, vec![Attribute::BOLD, Attribute::FG_RED, Attribute::BG_WHITE]);
/// ```
pub fn parse_attributes(s: &str) -> Result<Vec<Attribute>, ParseAttributeError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Serialized form accepted on input: a code or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<AttributeRepr> for Attribute {
    type Error = ParseAttributeError;

    fn try_from(repr: AttributeRepr) -> Result<Self, Self::Error> {
        match repr {
            AttributeRepr::Code(code) => i32::try_from(code)
                .map(Attribute)
                .map_err(|_| ParseAttributeError::InvalidCode(code.to_string())),
            AttributeRepr::Name(name) => name.parse(),
        }
    }
}
