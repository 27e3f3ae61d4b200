//! Crate-level functions backed by the process-wide [`Styler`].
//!
//! Every function here is a thin call into [`global()`]; see [`Styler`] for
//! the behavior. The named color and style helpers are generated from a
//! single table, which also produces the matching `Styler` methods.
//!
//! ```rust
//! use standout_sgr::{bold, red, mix, Attribute};
//!
//! println!("{} {}", red("error"), bold("done"));
//! println!("{}", mix("warn", &[Attribute::FG_YELLOW, Attribute::BOLD]));
//! ```

use crate::attribute::Attribute;
use crate::styler::{global, Styler};

/// Turns styling on for the process-wide styler.
pub fn enable() {
    global().enable();
}

/// Turns styling off for the process-wide styler.
///
/// Every formatting function then returns its input unchanged.
pub fn disable() {
    global().disable();
}

/// Whether the process-wide styler is on.
pub fn is_enabled() -> bool {
    global().is_enabled()
}

/// Wraps `text` in the given attributes and a trailing reset.
///
/// ```rust
/// use standout_sgr::{style, Attribute};
///
/// # standout_sgr::enable();
/// assert_eq!(style("hello", &[Attribute::FG_RED]), "\x1b[31mhello\x1b[0m");
/// assert_eq!(style("hello", &[]), "hello");
/// assert_eq!(style("", &[Attribute::FG_RED]), "");
/// ```
pub fn style(text: &str, attrs: &[Attribute]) -> String {
    global().style(text, attrs)
}

/// Applies an arbitrary combination of attributes. Same as [`style`].
pub fn mix(text: &str, attrs: &[Attribute]) -> String {
    global().mix(text, attrs)
}

/// 256-color foreground. `index` is clamped into `0..=255`.
pub fn index_color(index: i32, text: &str) -> String {
    global().index_color(index, text)
}

/// 256-color background. `index` is clamped into `0..=255`.
pub fn bg_index_color(index: i32, text: &str) -> String {
    global().bg_index_color(index, text)
}

/// True-color foreground. Channels are clamped into `0..=255`.
///
/// ```rust
/// # standout_sgr::enable();
/// assert_eq!(
///     standout_sgr::rgb_color(300, -10, 128, "x"),
///     "\x1b[38;2;255;0;128mx\x1b[0m",
/// );
/// ```
pub fn rgb_color(r: i32, g: i32, b: i32, text: &str) -> String {
    global().rgb_color(r, g, b, text)
}

/// True-color background. Channels are clamped into `0..=255`.
pub fn bg_rgb_color(r: i32, g: i32, b: i32, text: &str) -> String {
    global().bg_rgb_color(r, g, b, text)
}

macro_rules! catalog {
    ($($name:ident => $attr:ident,)*) => {
        /// Names of the generated helpers, paired with the attribute each applies.
        pub const CATALOG: &[(&str, Attribute)] = &[$((stringify!($name), Attribute::$attr)),*];

        impl Styler {
            $(
                #[doc = concat!("Styles `text` with [`Attribute::", stringify!($attr), "`].")]
                pub fn $name(&self, text: &str) -> String {
                    self.style(text, &[Attribute::$attr])
                }
            )*
        }

        $(
            #[doc = concat!("Styles `text` with [`Attribute::", stringify!($attr), "`].")]
            pub fn $name(text: &str) -> String {
                global().$name(text)
            }
        )*
    };
}

catalog! {
    black => FG_BLACK,
    red => FG_RED,
    green => FG_GREEN,
    yellow => FG_YELLOW,
    blue => FG_BLUE,
    magenta => FG_MAGENTA,
    cyan => FG_CYAN,
    white => FG_WHITE,
    bright_black => FG_BRIGHT_BLACK,
    bright_red => FG_BRIGHT_RED,
    bright_green => FG_BRIGHT_GREEN,
    bright_yellow => FG_BRIGHT_YELLOW,
    bright_blue => FG_BRIGHT_BLUE,
    bright_magenta => FG_BRIGHT_MAGENTA,
    bright_cyan => FG_BRIGHT_CYAN,
    bright_white => FG_BRIGHT_WHITE,

    bg_black => BG_BLACK,
    bg_red => BG_RED,
    bg_green => BG_GREEN,
    bg_yellow => BG_YELLOW,
    bg_blue => BG_BLUE,
    bg_magenta => BG_MAGENTA,
    bg_cyan => BG_CYAN,
    bg_white => BG_WHITE,
    bg_bright_black => BG_BRIGHT_BLACK,
    bg_bright_red => BG_BRIGHT_RED,
    bg_bright_green => BG_BRIGHT_GREEN,
    bg_bright_yellow => BG_BRIGHT_YELLOW,
    bg_bright_blue => BG_BRIGHT_BLUE,
    bg_bright_magenta => BG_BRIGHT_MAGENTA,
    bg_bright_cyan => BG_BRIGHT_CYAN,
    bg_bright_white => BG_BRIGHT_WHITE,

    bold => BOLD,
    dim => DIM,
    italic => ITALIC,
    underline => UNDERLINE,
    blink => BLINK,
    inverse => INVERSE,
    hidden => HIDDEN,
    strike => STRIKE,
}
