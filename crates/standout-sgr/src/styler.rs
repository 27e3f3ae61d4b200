//! The styling context and its enable/disable gate.
//!
//! A [`Styler`] owns the enabled flag that every formatting operation
//! consults. The crate-level free functions all go through one process-wide
//! instance, returned by [`global`]. Code that needs its own switch (one per
//! output stream, or an isolated one in tests) builds its own `Styler`.
//!
//! ```rust
//! use standout_sgr::{Attribute, Styler};
//!
//! let styler = Styler::new();
//! assert_eq!(styler.style("hi", &[Attribute::BOLD]), "\x1b[1mhi\x1b[0m");
//!
//! styler.disable();
//! assert_eq!(styler.style("hi", &[Attribute::BOLD]), "hi");
//! ```
//!
//! # Concurrency
//!
//! The flag is an atomic, so toggling and formatting may happen from any
//! number of threads. Each formatting call reads the flag exactly once, at
//! its start. A toggle is only guaranteed to affect calls that begin after
//! the toggle returns.

use std::sync::atomic::{AtomicBool, Ordering};

use console::Term;

use crate::attribute::Attribute;
use crate::codes::{compose_codes, wrap};
use crate::color::{clamp_channel, index_prefix, rgb_prefix, rgb_to_ansi256, ColorDepth, Plane};

/// A styling context: an enabled flag plus the encoding for RGB colors.
#[derive(Debug)]
pub struct Styler {
    enabled: AtomicBool,
    depth: ColorDepth,
}

static GLOBAL: Styler = Styler::new();

/// The process-wide styler used by the crate-level functions.
pub fn global() -> &'static Styler {
    &GLOBAL
}

impl Styler {
    /// An enabled styler emitting true-color sequences.
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            depth: ColorDepth::TrueColor,
        }
    }

    /// A styler that starts out disabled.
    pub const fn disabled() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            depth: ColorDepth::TrueColor,
        }
    }

    /// Sets how RGB colors are encoded.
    pub fn with_depth(self, depth: ColorDepth) -> Self {
        Self { depth, ..self }
    }

    /// A styler enabled only if `term` reports color support.
    ///
    /// Nothing in this crate calls this implicitly; the process-wide styler
    /// always starts enabled.
    pub fn for_term(term: &Term) -> Self {
        let enabled = term.features().colors_supported();
        Self {
            enabled: AtomicBool::new(enabled),
            depth: ColorDepth::TrueColor,
        }
    }

    /// The configured RGB encoding.
    pub fn depth(&self) -> ColorDepth {
        self.depth
    }

    /// Turns styling on.
    pub fn enable(&self) {
        self.set_enabled(true);
    }

    /// Turns styling off. Every formatting call returns its text unchanged.
    pub fn disable(&self) {
        self.set_enabled(false);
    }

    /// Whether styling is currently on.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::AcqRel);
        if previous != enabled {
            tracing::debug!(enabled, "sgr styling toggled");
        }
    }

    /// Whether `text` should be wrapped at all.
    fn applies_to(&self, text: &str) -> bool {
        !text.is_empty() && self.is_enabled()
    }

    /// Wraps `text` in the SGR prefix for `attrs` and a trailing reset.
    ///
    /// Returns `text` unchanged when styling is disabled, when `attrs` is
    /// empty, or when `text` is empty.
    pub fn style(&self, text: &str, attrs: &[Attribute]) -> String {
        if attrs.is_empty() || !self.applies_to(text) {
            return text.to_string();
        }
        wrap(&compose_codes(attrs), text)
    }

    /// Applies an arbitrary combination of attributes.
    ///
    /// Same as [`Styler::style`]; reads better at call sites that combine a
    /// color with text styles.
    pub fn mix(&self, text: &str, attrs: &[Attribute]) -> String {
        self.style(text, attrs)
    }

    /// Foreground color from the 256-color palette.
    ///
    /// `index` is clamped into `0..=255`.
    pub fn index_color(&self, index: i32, text: &str) -> String {
        self.indexed(Plane::Foreground, index, text)
    }

    /// Background color from the 256-color palette.
    ///
    /// `index` is clamped into `0..=255`.
    pub fn bg_index_color(&self, index: i32, text: &str) -> String {
        self.indexed(Plane::Background, index, text)
    }

    /// 24-bit foreground color. Each channel is clamped into `0..=255`.
    pub fn rgb_color(&self, r: i32, g: i32, b: i32, text: &str) -> String {
        self.rgb(Plane::Foreground, (r, g, b), text)
    }

    /// 24-bit background color. Each channel is clamped into `0..=255`.
    pub fn bg_rgb_color(&self, r: i32, g: i32, b: i32, text: &str) -> String {
        self.rgb(Plane::Background, (r, g, b), text)
    }

    fn indexed(&self, plane: Plane, index: i32, text: &str) -> String {
        if !self.applies_to(text) {
            return text.to_string();
        }
        wrap(&index_prefix(plane, clamp_channel(index)), text)
    }

    fn rgb(&self, plane: Plane, (r, g, b): (i32, i32, i32), text: &str) -> String {
        if !self.applies_to(text) {
            return text.to_string();
        }
        let rgb = (clamp_channel(r), clamp_channel(g), clamp_channel(b));
        let prefix = match self.depth {
            ColorDepth::TrueColor => rgb_prefix(plane, rgb),
            ColorDepth::Ansi256 => index_prefix(plane, rgb_to_ansi256(rgb)),
        };
        wrap(&prefix, text)
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_enabled() {
        assert!(Styler::new().is_enabled());
        assert!(Styler::default().is_enabled());
        assert!(!Styler::disabled().is_enabled());
    }

    #[test]
    fn test_toggle() {
        let styler = Styler::new();
        styler.disable();
        assert!(!styler.is_enabled());
        styler.disable();
        assert!(!styler.is_enabled());
        styler.enable();
        assert!(styler.is_enabled());
    }

    #[test]
    fn test_style_wraps_with_reset() {
        let styler = Styler::new();
        assert_eq!(
            styler.style("hello", &[Attribute::FG_RED]),
            "\x1b[31mhello\x1b[0m"
        );
        assert_eq!(
            styler.style("warn", &[Attribute::FG_YELLOW, Attribute::BOLD]),
            "\x1b[33;1mwarn\x1b[0m"
        );
    }

    #[test]
    fn test_style_passthrough_cases() {
        let styler = Styler::new();
        assert_eq!(styler.style("plain", &[]), "plain");
        assert_eq!(styler.style("", &[Attribute::BOLD]), "");

        styler.disable();
        assert_eq!(styler.style("plain", &[Attribute::BOLD]), "plain");
        assert_eq!(styler.style("", &[Attribute::BOLD]), "");
    }

    #[test]
    fn test_mix_matches_style() {
        let styler = Styler::new();
        let attrs = [Attribute::FG_BLACK, Attribute::BOLD, Attribute::UNDERLINE];
        assert_eq!(styler.mix("x", &attrs), styler.style("x", &attrs));
        assert_eq!(styler.mix("x", &attrs), "\x1b[30;1;4mx\x1b[0m");
    }

    #[test]
    fn test_index_color() {
        let styler = Styler::new();
        assert_eq!(styler.index_color(202, "x"), "\x1b[38;5;202mx\x1b[0m");
        assert_eq!(styler.bg_index_color(27, "x"), "\x1b[48;5;27mx\x1b[0m");
    }

    #[test]
    fn test_index_color_clamps() {
        let styler = Styler::new();
        assert_eq!(styler.index_color(-5, "x"), styler.index_color(0, "x"));
        assert_eq!(styler.index_color(999, "x"), styler.index_color(255, "x"));
        assert_eq!(styler.bg_index_color(-1, "x"), "\x1b[48;5;0mx\x1b[0m");
        assert_eq!(styler.bg_index_color(256, "x"), "\x1b[48;5;255mx\x1b[0m");
    }

    #[test]
    fn test_rgb_color_clamps_each_channel() {
        let styler = Styler::new();
        assert_eq!(
            styler.rgb_color(300, -10, 128, "x"),
            "\x1b[38;2;255;0;128mx\x1b[0m"
        );
        assert_eq!(
            styler.bg_rgb_color(-1, 256, 7, "x"),
            "\x1b[48;2;0;255;7mx\x1b[0m"
        );
    }

    #[test]
    fn test_extended_colors_passthrough() {
        let styler = Styler::new();
        assert_eq!(styler.index_color(1, ""), "");
        assert_eq!(styler.rgb_color(1, 2, 3, ""), "");

        styler.disable();
        assert_eq!(styler.index_color(1, "x"), "x");
        assert_eq!(styler.bg_index_color(1, "x"), "x");
        assert_eq!(styler.rgb_color(1, 2, 3, "x"), "x");
        assert_eq!(styler.bg_rgb_color(1, 2, 3, "x"), "x");
    }

    #[test]
    fn test_ansi256_depth_downsamples_rgb() {
        let styler = Styler::new().with_depth(ColorDepth::Ansi256);
        assert_eq!(styler.depth(), ColorDepth::Ansi256);
        assert_eq!(styler.rgb_color(255, 0, 0, "x"), "\x1b[38;5;196mx\x1b[0m");
        assert_eq!(styler.bg_rgb_color(0, 0, 999, "x"), "\x1b[48;5;21mx\x1b[0m");
        // Indexed colors are unaffected.
        assert_eq!(styler.index_color(202, "x"), "\x1b[38;5;202mx\x1b[0m");
    }

    #[test]
    fn test_with_depth_keeps_flag() {
        let styler = Styler::disabled().with_depth(ColorDepth::Ansi256);
        assert!(!styler.is_enabled());
    }

    #[test]
    fn test_for_term_follows_color_support() {
        let term = Term::stdout();
        let expected = term.features().colors_supported();
        assert_eq!(Styler::for_term(&term).is_enabled(), expected);
    }

    #[test]
    fn test_styler_is_shareable_across_threads() {
        let styler = std::sync::Arc::new(Styler::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let styler = styler.clone();
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        styler.disable();
                    } else {
                        styler.enable();
                    }
                    let out = styler.style("t", &[Attribute::BOLD]);
                    assert!(out == "t" || out == "\x1b[1mt\x1b[0m");
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        styler.enable();
        assert_eq!(styler.style("t", &[Attribute::BOLD]), "\x1b[1mt\x1b[0m");
    }
}
