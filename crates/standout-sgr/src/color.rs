//! Extended (8-bit and 24-bit) color support.
//!
//! Extended colors use the SGR selectors `38` (foreground) and `48`
//! (background) followed by sub-parameters:
//!
//! - `38;5;{index}` selects from the 256-color palette
//! - `38;2;{r};{g};{b}` selects a true color
//!
//! Out-of-range inputs are clamped into `0..=255`, never rejected.

use crate::codes::CSI;

/// How RGB colors are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorDepth {
    /// Emit 24-bit `2;r;g;b` sequences.
    #[default]
    TrueColor,
    /// Downsample RGB colors to the nearest 256-color palette index.
    Ansi256,
}

/// Which side of the cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Plane {
    Foreground,
    Background,
}

impl Plane {
    fn selector(self) -> u8 {
        match self {
            Plane::Foreground => 38,
            Plane::Background => 48,
        }
    }
}

/// Clamps an integer into a color channel.
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Prefix for a 256-color palette entry, e.g. `"\x1b[38;5;202m"`.
pub(crate) fn index_prefix(plane: Plane, index: u8) -> String {
    format!("{}{};5;{}m", CSI, plane.selector(), index)
}

/// Prefix for a true color, e.g. `"\x1b[48;2;255;0;128m"`.
pub(crate) fn rgb_prefix(plane: Plane, (r, g, b): (u8, u8, u8)) -> String {
    format!("{}{};2;{};{};{}m", CSI, plane.selector(), r, g, b)
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays map onto the 24-step grayscale ramp (232–255), with the extremes
/// snapping to the cube's black (16) and white (231). Everything else maps
/// onto the 6×6×6 color cube (16–231).
///
/// ```rust
/// use standout_sgr::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-10), 0);
        assert_eq!(clamp_channel(0), 0);
        assert_eq!(clamp_channel(128), 128);
        assert_eq!(clamp_channel(255), 255);
        assert_eq!(clamp_channel(300), 255);
        assert_eq!(clamp_channel(i32::MIN), 0);
        assert_eq!(clamp_channel(i32::MAX), 255);
    }

    #[test]
    fn test_prefixes_start_with_csi() {
        assert!(index_prefix(Plane::Foreground, 0).starts_with(CSI));
        assert!(rgb_prefix(Plane::Background, (0, 0, 0)).starts_with(CSI));
    }

    #[test]
    fn test_index_prefix() {
        assert_eq!(index_prefix(Plane::Foreground, 202), "\x1b[38;5;202m");
        assert_eq!(index_prefix(Plane::Background, 27), "\x1b[48;5;27m");
    }

    #[test]
    fn test_rgb_prefix() {
        assert_eq!(
            rgb_prefix(Plane::Foreground, (255, 0, 128)),
            "\x1b[38;2;255;0;128m"
        );
        assert_eq!(
            rgb_prefix(Plane::Background, (1, 2, 3)),
            "\x1b[48;2;1;2;3m"
        );
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }

    #[test]
    fn test_default_depth_is_true_color() {
        assert_eq!(ColorDepth::default(), ColorDepth::TrueColor);
    }
}
