// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rainbow text: every non-whitespace character gets its own truecolor foreground,
//! taken from three phase shifted sine waves (one per RGB channel).
//!
//! For text of `N` characters, the `i`-th non-whitespace character is colored with:
//!
//! ```text
//! r = sin(2π·i/N + 0)    * 127 + 128
//! g = sin(2π·i/N + 2π/3) * 127 + 128
//! b = sin(2π·i/N + 4π/3) * 127 + 128
//! ```
//!
//! Each channel is truncated toward zero. Whitespace is passed through without a color
//! sequence and does not advance `i`, but it does count towards `N`. The output always
//! ends with [`crate::RESET_SEQUENCE`].
//!
//! - [`ColorCycleParams`] holds the wave parameters.
//! - [`ColorCycle`] is the lazy iterator that pairs each character with its color.
//! - [`Colorize`] renders the whole thing via [`crate::WriteToBuf`] and
//!   [`std::fmt::Display`].

use std::{f64::consts::TAU, fmt::Result, str::Chars};

use crate::{BufTextStorage, ColorSpec, RESET_SEQUENCE, SgrCode, WriteToBuf,
            impl_display_for_write_to_buf};

pub const DEFAULT_AMPLITUDE: f64 = 127.0;
pub const DEFAULT_CENTER: f64 = 128.0;
pub const DEFAULT_PHASES: [f64; 3] = [0.0, TAU / 3.0, 2.0 * TAU / 3.0];

/// Parameters of the three sine waves (red, green, blue).
///
/// [`ColorCycleParams::for_len`] builds the standard rainbow, where one full period is
/// spread across the whole text. The `with_*` methods adjust it in place:
///
/// ```rust
/// use ansi_escape::ColorCycleParams;
///
/// let params = ColorCycleParams::for_len(10)
///     .with_amplitude(60.0)
///     .with_center(190.0);
/// assert_eq!(params.color_at(0), (190, 241, 138));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCycleParams {
    pub frequencies: [f64; 3],
    pub phases: [f64; 3],
    pub amplitude: f64,
    pub center: f64,
}

impl ColorCycleParams {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        // With no characters there is nothing to color, so the frequency is never used.
        let frequency = if len == 0 { 0.0 } else { TAU / len as f64 };
        Self {
            frequencies: [frequency; 3],
            phases: DEFAULT_PHASES,
            amplitude: DEFAULT_AMPLITUDE,
            center: DEFAULT_CENTER,
        }
    }

    #[must_use]
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    #[must_use]
    pub fn with_center(mut self, center: f64) -> Self {
        self.center = center;
        self
    }

    #[must_use]
    pub fn with_phases(mut self, phases: [f64; 3]) -> Self {
        self.phases = phases;
        self
    }

    /// Color for the `index`-th colored character. Channels that fall outside `0..=255`
    /// (only possible with a custom amplitude / center) saturate.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn color_at(&self, index: usize) -> (u8, u8, u8) {
        let step = index as f64;
        let channel = |it: usize| -> u8 {
            let value = (self.frequencies[it] * step + self.phases[it]).sin()
                * self.amplitude
                + self.center;
            value.trunc() as u8
        };
        (channel(0), channel(1), channel(2))
    }
}

/// One character of the input, with the color it should be printed in. `color` is
/// [`None`] for whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycledChar {
    pub ch: char,
    pub color: Option<(u8, u8, u8)>,
}

/// Single pass iterator over the characters of a string slice. Create a new one to start
/// over.
#[derive(Debug, Clone)]
pub struct ColorCycle<'a> {
    chars: Chars<'a>,
    params: ColorCycleParams,
    colored_count: usize,
}

impl<'a> ColorCycle<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self::with_params(text, ColorCycleParams::for_len(text.chars().count()))
    }

    #[must_use]
    pub fn with_params(text: &'a str, params: ColorCycleParams) -> Self {
        Self {
            chars: text.chars(),
            params,
            colored_count: 0,
        }
    }
}

impl Iterator for ColorCycle<'_> {
    type Item = CycledChar;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;
        if ch.is_whitespace() {
            return Some(CycledChar { ch, color: None });
        }
        let color = self.params.color_at(self.colored_count);
        self.colored_count += 1;
        Some(CycledChar {
            ch,
            color: Some(color),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.chars.size_hint() }
}

/// Rainbow colored text, see the [module docs](self) for the color formula.
///
/// ```rust
/// use ansi_escape::Colorize;
///
/// let it = Colorize::new("hi");
/// assert_eq!(
///     it.to_string(),
///     "\x1b[38;2;128;237;18mh\x1b[38;2;128;18;237mi\x1b[0m"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colorize<'a> {
    pub text: &'a str,
    pub params: ColorCycleParams,
}

impl<'a> Colorize<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            params: ColorCycleParams::for_len(text.chars().count()),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: ColorCycleParams) -> Self {
        self.params = params;
        self
    }

    /// Fresh iterator over the characters of [`Self::text`].
    #[must_use]
    pub fn cycle(&self) -> ColorCycle<'a> { ColorCycle::with_params(self.text, self.params) }
}

/// Shorthand for [`Colorize::new`].
#[must_use]
pub fn colorize(text: &str) -> Colorize<'_> { Colorize::new(text) }

impl WriteToBuf for Colorize<'_> {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        for CycledChar { ch, color } in self.cycle() {
            if let Some((r, g, b)) = color {
                SgrCode::Foreground(ColorSpec::TrueColor(r, g, b)).write_to_buf(acc)?;
            }
            acc.push(ch);
        }
        acc.push_str(RESET_SEQUENCE);
        Ok(())
    }
}

impl_display_for_write_to_buf!(Colorize<'_>);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn rainbow_skips_whitespace() {
        assert_eq!(
            colorize("ab cd").to_string(),
            "\x1b[38;2;128;237;18ma\
             \x1b[38;2;248;101;33mb \
             \x1b[38;2;202;1;179mc\
             \x1b[38;2;53;76;254md\
             \x1b[0m"
        );
    }

    #[test]
    fn cycle_yields_every_char() {
        let it = ColorCycle::new("ab cd").collect::<Vec<_>>();
        assert_eq!(it.len(), 5);
        assert_eq!(it[0].color, Some((128, 237, 18)));
        assert_eq!(it[1].color, Some((248, 101, 33)));
        assert_eq!(it[2], CycledChar { ch: ' ', color: None });
        assert_eq!(it[3].color, Some((202, 1, 179)));
        assert_eq!(it[4].color, Some((53, 76, 254)));
    }

    #[test_case("", "\x1b[0m")]
    #[test_case("   ", "   \x1b[0m")]
    #[test_case("\t\n", "\t\n\x1b[0m")]
    fn nothing_to_color(input: &str, expected: &str) {
        assert_eq!(colorize(input).to_string(), expected);
    }

    #[test]
    fn multibyte_chars_count_once() {
        let it = ColorCycle::new("éa").collect::<Vec<_>>();
        assert_eq!(it.len(), 2);
        assert_eq!(it[0].color, Some((128, 237, 18)));
        // N = 2, so i = 1 is half a period: sin(π) ≈ 0.
        assert_eq!(it[1].color, Some((128, 18, 237)));
    }

    #[test]
    fn every_render_starts_over() {
        let it = colorize("rust");
        assert_eq!(it.to_string(), it.to_string());
    }

    #[test]
    fn custom_params() {
        let params = ColorCycleParams::for_len(4)
            .with_phases([0.0; 3])
            .with_amplitude(0.0)
            .with_center(42.0);
        assert_eq!(
            Colorize::new("xy").with_params(params).to_string(),
            "\x1b[38;2;42;42;42mx\x1b[38;2;42;42;42my\x1b[0m"
        );
    }

    #[test]
    fn out_of_range_channels_saturate() {
        let params = ColorCycleParams::for_len(1).with_center(400.0);
        let (r, _, _) = params.color_at(0);
        assert_eq!(r, 255);
    }
}
