//! # Standout SGR - ANSI Escape Sequences for Styled Text
//!
//! `standout-sgr` builds the ANSI "Select Graphic Rendition" sequences that
//! terminals use to color and style text, and strips them back out.
//!
//! ## Core Concepts
//!
//! - [`Attribute`]: One SGR parameter (a style or a 16-color selector)
//! - [`compose_codes`]: Join attributes into an escape prefix
//! - [`style`]: Wrap text in a prefix and a trailing reset
//! - [`index_color`] / [`rgb_color`]: 256-color and true-color formatters
//! - [`Styler`]: A styling context with its own enable switch
//! - [`strip_ansi`]: Remove SGR sequences from text
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_sgr::{bold, mix, red, rgb_color, strip_ansi, Attribute};
//!
//! let line = format!("{} {}", red("error:"), bold("disk full"));
//! assert_eq!(strip_ansi(&line), "error: disk full");
//!
//! let warn = mix("warn", &[Attribute::FG_YELLOW, Attribute::BOLD]);
//! assert_eq!(warn, "\x1b[33;1mwarn\x1b[0m");
//!
//! let pink = rgb_color(255, 0, 128, "pink");
//! assert_eq!(pink, "\x1b[38;2;255;0;128mpink\x1b[0m");
//! ```
//!
//! ## Guarantees
//!
//! - Styled output always ends with the reset sequence, so styling never
//!   leaks into whatever is printed next.
//! - Empty text is never wrapped.
//! - With styling disabled ([`disable`]), every formatter returns its input
//!   unchanged.
//! - No operation fails. Out-of-range palette indices and RGB channels are
//!   clamped into `0..=255`.
//!
//! ## Isolated Stylers
//!
//! The free functions share one process-wide switch. For per-stream control,
//! or tests that should not race each other, build a [`Styler`]:
//!
//! ```rust
//! use standout_sgr::{ColorDepth, Styler};
//!
//! let styler = Styler::new().with_depth(ColorDepth::Ansi256);
//! assert_eq!(styler.rgb_color(255, 0, 0, "x"), "\x1b[38;5;196mx\x1b[0m");
//!
//! let plain = Styler::disabled();
//! assert_eq!(plain.green("ok"), "ok");
//! ```

mod attribute;
mod codes;
mod color;
mod error;
mod functions;
mod strip;
mod styler;

pub use attribute::{parse_attributes, Attribute};
pub use codes::{compose_codes, reset_sequence, CSI, RESET};
pub use color::{rgb_to_ansi256, ColorDepth};
pub use error::ParseAttributeError;
pub use strip::{strip_ansi, visible_width};
pub use styler::{global, Styler};

pub use functions::{
    bg_index_color, bg_rgb_color, disable, enable, index_color, is_enabled, mix, rgb_color,
    style, CATALOG,
};

// Named helpers generated from the catalog table.
pub use functions::{
    bg_black, bg_blue, bg_bright_black, bg_bright_blue, bg_bright_cyan, bg_bright_green,
    bg_bright_magenta, bg_bright_red, bg_bright_white, bg_bright_yellow, bg_cyan, bg_green,
    bg_magenta, bg_red, bg_white, bg_yellow, black, blink, blue, bold, bright_black, bright_blue,
    bright_cyan, bright_green, bright_magenta, bright_red, bright_white, bright_yellow, cyan, dim,
    green, hidden, inverse, italic, magenta, red, strike, underline, white, yellow,
};
