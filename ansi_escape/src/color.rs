// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use strum_macros::{EnumCount, EnumIter};

use crate::constants::{SGR_BG_BLACK, SGR_BG_BRIGHT_BLACK, SGR_BG_EXTENDED,
                       SGR_FG_BLACK, SGR_FG_BRIGHT_BLACK, SGR_FG_EXTENDED,
                       SGR_UNDERLINE_COLOR_EXTENDED};

/// The 8 standard and 8 bright colors of the 4-bit palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Offset of this color inside its group of 8 (standard or bright).
    #[rustfmt::skip]
    const fn offset(self) -> u16 {
        match self {
            AnsiColor::Black   | AnsiColor::BrightBlack   => 0,
            AnsiColor::Red     | AnsiColor::BrightRed     => 1,
            AnsiColor::Green   | AnsiColor::BrightGreen   => 2,
            AnsiColor::Yellow  | AnsiColor::BrightYellow  => 3,
            AnsiColor::Blue    | AnsiColor::BrightBlue    => 4,
            AnsiColor::Magenta | AnsiColor::BrightMagenta => 5,
            AnsiColor::Cyan    | AnsiColor::BrightCyan    => 6,
            AnsiColor::White   | AnsiColor::BrightWhite   => 7,
        }
    }

    #[must_use]
    pub const fn is_bright(self) -> bool {
        matches!(
            self,
            AnsiColor::BrightBlack
                | AnsiColor::BrightRed
                | AnsiColor::BrightGreen
                | AnsiColor::BrightYellow
                | AnsiColor::BrightBlue
                | AnsiColor::BrightMagenta
                | AnsiColor::BrightCyan
                | AnsiColor::BrightWhite
        )
    }

    /// SGR parameter that selects this color as foreground: `30..=37` or `90..=97`.
    #[must_use]
    pub const fn foreground_code(self) -> u16 {
        let base = if self.is_bright() { SGR_FG_BRIGHT_BLACK } else { SGR_FG_BLACK };
        base + self.offset()
    }

    /// SGR parameter that selects this color as background: `40..=47` or `100..=107`.
    #[must_use]
    pub const fn background_code(self) -> u16 {
        let base = if self.is_bright() { SGR_BG_BRIGHT_BLACK } else { SGR_BG_BLACK };
        base + self.offset()
    }
}

/// A color given either as an index into the 256 color palette, or as an RGB triple.
///
/// Use [`ColorSpec::from_index`] and [`ColorSpec::from_rgb`] to build one from raw
/// integers. Values outside `0..=255` produce [`ColorSpec::Unset`], which renders as
/// nothing at all. This is not an error: callers that pass invalid values simply get no
/// styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpec {
    /// 8-bit palette color.
    Indexed(u8),
    /// 24-bit color.
    TrueColor(u8, u8, u8),
    /// No valid color was provided.
    #[default]
    Unset,
}

impl ColorSpec {
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        match u8::try_from(index) {
            Ok(index) => ColorSpec::Indexed(index),
            Err(_) => ColorSpec::Unset,
        }
    }

    /// All three channels have to be in range at the same time, otherwise the result is
    /// [`ColorSpec::Unset`].
    #[must_use]
    pub fn from_rgb(red: i32, green: i32, blue: i32) -> Self {
        match (u8::try_from(red), u8::try_from(green), u8::try_from(blue)) {
            (Ok(r), Ok(g), Ok(b)) => ColorSpec::TrueColor(r, g, b),
            _ => ColorSpec::Unset,
        }
    }

    #[must_use]
    pub const fn is_set(&self) -> bool { !matches!(self, ColorSpec::Unset) }
}

impl From<u8> for ColorSpec {
    fn from(index: u8) -> Self { ColorSpec::Indexed(index) }
}

impl From<(u8, u8, u8)> for ColorSpec {
    fn from((r, g, b): (u8, u8, u8)) -> Self { ColorSpec::TrueColor(r, g, b) }
}

/// Which part of the text a [`ColorSpec`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ColorTarget {
    Foreground,
    Background,
    Underline,
}

impl ColorTarget {
    /// The extended color SGR parameter: `38`, `48` or `58`.
    #[must_use]
    pub const fn extended_code(self) -> u16 {
        match self {
            ColorTarget::Foreground => SGR_FG_EXTENDED,
            ColorTarget::Background => SGR_BG_EXTENDED,
            ColorTarget::Underline => SGR_UNDERLINE_COLOR_EXTENDED,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;

    #[test]
    fn sixteen_named_colors() {
        assert_eq!(AnsiColor::COUNT, 16);
        assert_eq!(AnsiColor::iter().filter(|it| it.is_bright()).count(), 8);
    }

    #[test_case(AnsiColor::Black, 30, 40)]
    #[test_case(AnsiColor::Red, 31, 41)]
    #[test_case(AnsiColor::White, 37, 47)]
    #[test_case(AnsiColor::BrightBlack, 90, 100)]
    #[test_case(AnsiColor::BrightCyan, 96, 106)]
    #[test_case(AnsiColor::BrightWhite, 97, 107)]
    fn named_color_codes(color: AnsiColor, fg: u16, bg: u16) {
        assert_eq!(color.foreground_code(), fg);
        assert_eq!(color.background_code(), bg);
    }

    #[test]
    fn background_is_foreground_plus_ten() {
        for color in AnsiColor::iter() {
            assert_eq!(color.background_code(), color.foreground_code() + 10);
        }
    }

    #[test_case(0, ColorSpec::Indexed(0))]
    #[test_case(255, ColorSpec::Indexed(255))]
    #[test_case(256, ColorSpec::Unset)]
    #[test_case(300, ColorSpec::Unset)]
    #[test_case(-1, ColorSpec::Unset)]
    fn from_index(index: i32, expected: ColorSpec) {
        assert_eq!(ColorSpec::from_index(index), expected);
    }

    #[test_case(0, 0, 0, ColorSpec::TrueColor(0, 0, 0))]
    #[test_case(255, 128, 1, ColorSpec::TrueColor(255, 128, 1))]
    #[test_case(256, 0, 0, ColorSpec::Unset)]
    #[test_case(0, -1, 0, ColorSpec::Unset)]
    #[test_case(0, 0, 1000, ColorSpec::Unset)]
    fn from_rgb(r: i32, g: i32, b: i32, expected: ColorSpec) {
        assert_eq!(ColorSpec::from_rgb(r, g, b), expected);
    }

    #[test]
    fn zero_is_not_unset() {
        assert!(ColorSpec::from_index(0).is_set());
        assert!(ColorSpec::from_rgb(0, 0, 0).is_set());
        assert!(!ColorSpec::default().is_set());
    }
}
