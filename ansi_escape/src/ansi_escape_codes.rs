// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) codes: text attributes, named colors, fonts, and
//! 8-bit / 24-bit colors.
//!
//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Result, Write};

use crate::{AnsiColor, BufTextStorage, ColorSpec, ColorTarget, WriteToBuf,
            constants::{CSI_PARAM_SEPARATOR, CSI_START, SGR_BG_DEFAULT, SGR_BOLD,
                        SGR_COLOR_MODE_INDEXED, SGR_COLOR_MODE_RGB, SGR_CONCEAL,
                        SGR_ENCIRCLED, SGR_FAINT, SGR_FG_DEFAULT, SGR_FONT_FIRST,
                        SGR_FONT_LAST, SGR_FRAMED, SGR_INVERT, SGR_ITALIC,
                        SGR_NORMAL_INTENSITY, SGR_NOT_BLINKING, SGR_NOT_CONCEALED,
                        SGR_NOT_FRAMED_OR_ENCIRCLED, SGR_NOT_INVERTED, SGR_NOT_ITALIC,
                        SGR_NOT_OVERLINED, SGR_NOT_PROPORTIONAL_SPACING,
                        SGR_NOT_STRIKETHROUGH, SGR_NOT_SUPERSCRIPT_OR_SUBSCRIPT,
                        SGR_NOT_UNDERLINED, SGR_OVERLINED, SGR_PROPORTIONAL_SPACING,
                        SGR_RAPID_BLINK, SGR_RESET, SGR_SET_GRAPHICS, SGR_SLOW_BLINK,
                        SGR_STRIKETHROUGH, SGR_SUBSCRIPT, SGR_SUPERSCRIPT,
                        SGR_UNDERLINE, SGR_UNDERLINE_COLOR_DEFAULT},
            impl_display_for_write_to_buf};

/// Each variant renders as `ESC [ <params> m`.
///
/// Most variants map to a fixed literal. The exceptions render nothing at all when
/// their parameters are out of range:
/// - [`SgrCode::Font`] only for fonts `10..=20`.
/// - [`SgrCode::Foreground`], [`SgrCode::Background`] and [`SgrCode::UnderlineColor`]
///   when their [`ColorSpec`] is [`ColorSpec::Unset`].
///
/// ```rust
/// use ansi_escape::{AnsiColor, SgrCode};
///
/// let line = format!(
///     "{}{}Blue on yellow{}",
///     SgrCode::BackgroundNamed(AnsiColor::Yellow),
///     SgrCode::ForegroundNamed(AnsiColor::Blue),
///     SgrCode::Reset,
/// );
/// assert_eq!(line, "\x1b[43m\x1b[34mBlue on yellow\x1b[0m");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SgrCode {
    Reset,
    Bold,
    /// Faint, decreased intensity, or dim.
    Faint,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Invert,
    Conceal,
    Strikethrough,
    /// Alternative font `n`, only rendered for `10..=20`.
    Font(u16),
    /// Neither bold nor faint.
    NormalIntensity,
    NotItalic,
    NotUnderlined,
    NotBlinking,
    ProportionalSpacing,
    NotInverted,
    NotConcealed,
    NotStrikethrough,
    ForegroundNamed(AnsiColor),
    ForegroundDefault,
    BackgroundNamed(AnsiColor),
    BackgroundDefault,
    NotProportionalSpacing,
    Framed,
    Encircled,
    Overlined,
    NotFramedOrEncircled,
    NotOverlined,
    UnderlineColorDefault,
    Superscript,
    Subscript,
    NotSuperscriptOrSubscript,
    /// 8-bit or 24-bit foreground (`38;5;n` / `38;2;r;g;b`).
    Foreground(ColorSpec),
    /// 8-bit or 24-bit background (`48;5;n` / `48;2;r;g;b`).
    Background(ColorSpec),
    /// 8-bit or 24-bit underline color (`58;5;n` / `58;2;r;g;b`).
    UnderlineColor(ColorSpec),
}

impl SgrCode {
    #[must_use]
    pub fn fg_index(index: i32) -> Self { SgrCode::Foreground(ColorSpec::from_index(index)) }

    #[must_use]
    pub fn fg_rgb(red: i32, green: i32, blue: i32) -> Self {
        SgrCode::Foreground(ColorSpec::from_rgb(red, green, blue))
    }

    #[must_use]
    pub fn bg_index(index: i32) -> Self { SgrCode::Background(ColorSpec::from_index(index)) }

    #[must_use]
    pub fn bg_rgb(red: i32, green: i32, blue: i32) -> Self {
        SgrCode::Background(ColorSpec::from_rgb(red, green, blue))
    }

    #[must_use]
    pub fn underline_index(index: i32) -> Self {
        SgrCode::UnderlineColor(ColorSpec::from_index(index))
    }

    #[must_use]
    pub fn underline_rgb(red: i32, green: i32, blue: i32) -> Self {
        SgrCode::UnderlineColor(ColorSpec::from_rgb(red, green, blue))
    }

    /// The single SGR parameter for variants that have one. Colors given as a
    /// [`ColorSpec`] and fonts outside `10..=20` return [`None`].
    #[must_use]
    #[rustfmt::skip]
    pub fn param(&self) -> Option<u16> {
        let it = match *self {
            SgrCode::Reset                     => SGR_RESET,
            SgrCode::Bold                      => SGR_BOLD,
            SgrCode::Faint                     => SGR_FAINT,
            SgrCode::Italic                    => SGR_ITALIC,
            SgrCode::Underline                 => SGR_UNDERLINE,
            SgrCode::SlowBlink                 => SGR_SLOW_BLINK,
            SgrCode::RapidBlink                => SGR_RAPID_BLINK,
            SgrCode::Invert                    => SGR_INVERT,
            SgrCode::Conceal                   => SGR_CONCEAL,
            SgrCode::Strikethrough             => SGR_STRIKETHROUGH,
            SgrCode::Font(n)                   => {
                if !(SGR_FONT_FIRST..=SGR_FONT_LAST).contains(&n) {
                    return None;
                }
                n
            }
            SgrCode::NormalIntensity           => SGR_NORMAL_INTENSITY,
            SgrCode::NotItalic                 => SGR_NOT_ITALIC,
            SgrCode::NotUnderlined             => SGR_NOT_UNDERLINED,
            SgrCode::NotBlinking               => SGR_NOT_BLINKING,
            SgrCode::ProportionalSpacing       => SGR_PROPORTIONAL_SPACING,
            SgrCode::NotInverted               => SGR_NOT_INVERTED,
            SgrCode::NotConcealed              => SGR_NOT_CONCEALED,
            SgrCode::NotStrikethrough          => SGR_NOT_STRIKETHROUGH,
            SgrCode::ForegroundNamed(color)    => color.foreground_code(),
            SgrCode::ForegroundDefault         => SGR_FG_DEFAULT,
            SgrCode::BackgroundNamed(color)    => color.background_code(),
            SgrCode::BackgroundDefault         => SGR_BG_DEFAULT,
            SgrCode::NotProportionalSpacing    => SGR_NOT_PROPORTIONAL_SPACING,
            SgrCode::Framed                    => SGR_FRAMED,
            SgrCode::Encircled                 => SGR_ENCIRCLED,
            SgrCode::Overlined                 => SGR_OVERLINED,
            SgrCode::NotFramedOrEncircled      => SGR_NOT_FRAMED_OR_ENCIRCLED,
            SgrCode::NotOverlined              => SGR_NOT_OVERLINED,
            SgrCode::UnderlineColorDefault     => SGR_UNDERLINE_COLOR_DEFAULT,
            SgrCode::Superscript               => SGR_SUPERSCRIPT,
            SgrCode::Subscript                 => SGR_SUBSCRIPT,
            SgrCode::NotSuperscriptOrSubscript => SGR_NOT_SUPERSCRIPT_OR_SUBSCRIPT,
            SgrCode::Foreground(_)
            | SgrCode::Background(_)
            | SgrCode::UnderlineColor(_)       => return None,
        };
        Some(it)
    }
}

/// Write the extended color form for `target`. [`ColorSpec::Unset`] writes nothing.
fn write_color(target: ColorTarget, spec: ColorSpec, acc: &mut BufTextStorage) -> Result {
    match spec {
        ColorSpec::TrueColor(r, g, b) => {
            acc.push_str(CSI_START);
            write!(acc, "{}", target.extended_code())?;
            acc.push(CSI_PARAM_SEPARATOR);
            write!(acc, "{SGR_COLOR_MODE_RGB};{r};{g};{b}")?;
            acc.push(SGR_SET_GRAPHICS);
        }
        ColorSpec::Indexed(index) => {
            acc.push_str(CSI_START);
            write!(acc, "{}", target.extended_code())?;
            acc.push(CSI_PARAM_SEPARATOR);
            write!(acc, "{SGR_COLOR_MODE_INDEXED};{index}")?;
            acc.push(SGR_SET_GRAPHICS);
        }
        ColorSpec::Unset => {}
    }
    Ok(())
}

impl WriteToBuf for SgrCode {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        match *self {
            SgrCode::Foreground(spec) => write_color(ColorTarget::Foreground, spec, acc),
            SgrCode::Background(spec) => write_color(ColorTarget::Background, spec, acc),
            SgrCode::UnderlineColor(spec) => {
                write_color(ColorTarget::Underline, spec, acc)
            }
            _ => match self.param() {
                Some(param) => {
                    acc.push_str(CSI_START);
                    write!(acc, "{param}")?;
                    acc.push(SGR_SET_GRAPHICS);
                    Ok(())
                }
                None => Ok(()),
            },
        }
    }
}

impl_display_for_write_to_buf!(SgrCode);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::RESET_SEQUENCE;

    #[test]
    fn reset() {
        assert_eq!(SgrCode::Reset.to_string(), "\x1b[0m");
        assert_eq!(SgrCode::Reset.to_string(), RESET_SEQUENCE);
    }

    #[test_case(SgrCode::Bold, "\x1b[1m")]
    #[test_case(SgrCode::Faint, "\x1b[2m")]
    #[test_case(SgrCode::Italic, "\x1b[3m")]
    #[test_case(SgrCode::Underline, "\x1b[4m")]
    #[test_case(SgrCode::SlowBlink, "\x1b[5m")]
    #[test_case(SgrCode::RapidBlink, "\x1b[6m")]
    #[test_case(SgrCode::Invert, "\x1b[7m")]
    #[test_case(SgrCode::Conceal, "\x1b[8m")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m")]
    #[test_case(SgrCode::NormalIntensity, "\x1b[22m")]
    #[test_case(SgrCode::NotItalic, "\x1b[23m")]
    #[test_case(SgrCode::NotUnderlined, "\x1b[24m")]
    #[test_case(SgrCode::NotBlinking, "\x1b[25m")]
    #[test_case(SgrCode::ProportionalSpacing, "\x1b[26m")]
    #[test_case(SgrCode::NotInverted, "\x1b[27m")]
    #[test_case(SgrCode::NotConcealed, "\x1b[28m")]
    #[test_case(SgrCode::NotStrikethrough, "\x1b[29m")]
    #[test_case(SgrCode::ForegroundDefault, "\x1b[39m")]
    #[test_case(SgrCode::BackgroundDefault, "\x1b[49m")]
    #[test_case(SgrCode::NotProportionalSpacing, "\x1b[50m")]
    #[test_case(SgrCode::Framed, "\x1b[51m")]
    #[test_case(SgrCode::Encircled, "\x1b[52m")]
    #[test_case(SgrCode::Overlined, "\x1b[53m")]
    #[test_case(SgrCode::NotFramedOrEncircled, "\x1b[54m")]
    #[test_case(SgrCode::NotOverlined, "\x1b[55m")]
    #[test_case(SgrCode::UnderlineColorDefault, "\x1b[59m")]
    #[test_case(SgrCode::Superscript, "\x1b[73m")]
    #[test_case(SgrCode::Subscript, "\x1b[74m")]
    #[test_case(SgrCode::NotSuperscriptOrSubscript, "\x1b[75m")]
    fn named_attributes(sgr_code: SgrCode, expected: &str) {
        assert_eq!(sgr_code.to_string(), expected);
    }

    #[test_case(AnsiColor::Black, "\x1b[30m", "\x1b[40m")]
    #[test_case(AnsiColor::Green, "\x1b[32m", "\x1b[42m")]
    #[test_case(AnsiColor::Yellow, "\x1b[33m", "\x1b[43m")]
    #[test_case(AnsiColor::BrightRed, "\x1b[91m", "\x1b[101m")]
    #[test_case(AnsiColor::BrightWhite, "\x1b[97m", "\x1b[107m")]
    fn named_colors(color: AnsiColor, fg: &str, bg: &str) {
        assert_eq!(SgrCode::ForegroundNamed(color).to_string(), fg);
        assert_eq!(SgrCode::BackgroundNamed(color).to_string(), bg);
    }

    #[test]
    fn every_named_color_renders() {
        for color in AnsiColor::iter() {
            assert_eq!(
                SgrCode::ForegroundNamed(color).to_string(),
                format!("\x1b[{}m", color.foreground_code())
            );
        }
    }

    #[test_case(10, "\x1b[10m")]
    #[test_case(15, "\x1b[15m")]
    #[test_case(20, "\x1b[20m")]
    #[test_case(9, "")]
    #[test_case(21, "")]
    #[test_case(25, "")]
    #[test_case(0, "")]
    fn font(n: u16, expected: &str) {
        assert_eq!(SgrCode::Font(n).to_string(), expected);
    }

    #[test]
    fn fg_color_ansi256() {
        assert_eq!(SgrCode::fg_index(150).to_string(), "\x1b[38;5;150m");
    }

    #[test]
    fn bg_color_ansi256() {
        assert_eq!(SgrCode::bg_index(150).to_string(), "\x1b[48;5;150m");
    }

    #[test]
    fn underline_color_ansi256() {
        assert_eq!(SgrCode::underline_index(150).to_string(), "\x1b[58;5;150m");
    }

    #[test]
    fn fg_color_rgb() {
        assert_eq!(SgrCode::fg_rgb(175, 215, 135).to_string(), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn bg_color_rgb() {
        assert_eq!(SgrCode::bg_rgb(175, 215, 135).to_string(), "\x1b[48;2;175;215;135m");
    }

    #[test]
    fn underline_color_rgb() {
        assert_eq!(
            SgrCode::underline_rgb(175, 215, 135).to_string(),
            "\x1b[58;2;175;215;135m"
        );
    }

    #[test]
    fn all_palette_indices() {
        for n in 0..=255 {
            assert_eq!(SgrCode::fg_index(n).to_string(), format!("\x1b[38;5;{n}m"));
            assert_eq!(SgrCode::bg_index(n).to_string(), format!("\x1b[48;5;{n}m"));
        }
    }

    #[test]
    fn zero_is_a_valid_color() {
        assert_eq!(SgrCode::fg_index(0).to_string(), "\x1b[38;5;0m");
        assert_eq!(SgrCode::bg_rgb(0, 0, 0).to_string(), "\x1b[48;2;0;0;0m");
    }

    #[test_case(SgrCode::fg_index(300))]
    #[test_case(SgrCode::fg_index(-1))]
    #[test_case(SgrCode::bg_index(256))]
    #[test_case(SgrCode::underline_index(1000))]
    #[test_case(SgrCode::fg_rgb(256, 0, 0))]
    #[test_case(SgrCode::bg_rgb(0, -5, 0))]
    #[test_case(SgrCode::underline_rgb(0, 0, 999))]
    #[test_case(SgrCode::Foreground(ColorSpec::Unset))]
    fn invalid_colors_render_nothing(sgr_code: SgrCode) {
        assert_eq!(sgr_code.to_string(), "");
    }

    #[test]
    fn to_small_str() {
        let it = SgrCode::fg_rgb(255, 255, 255).to_small_str().unwrap();
        assert_eq!(it.as_str(), "\x1b[38;2;255;255;255m");
        assert!(!it.spilled());
    }
}
