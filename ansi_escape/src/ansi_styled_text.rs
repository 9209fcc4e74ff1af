// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Result;

use smallvec::{SmallVec, smallvec};

use crate::{BufTextStorage, ColorSpec, RESET_SEQUENCE, SgrCode, WriteToBuf,
            impl_display_for_write_to_buf};

/// Text plus the list of [`SgrCode`]s to apply to it. It has two fields:
/// - `text` - the text to print.
/// - `style` - the codes, owned in a stack allocated buffer (which can spill to the heap
///   if it gets larger than [`sizing::MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE`]).
///
/// It renders as every code in order, then the text, then [`RESET_SEQUENCE`]. Codes that
/// render empty (an unset color, an out of range font) are simply skipped.
///
/// Once created, either directly or using constructor functions like [`bold()`], you can
/// chain builder methods like [`Self::fg()`] and [`Self::bg()`] to add more codes.
///
/// # Example usage:
///
/// ```rust
/// use ansi_escape::*;
///
/// let warning = bold("careful").fg(AnsiColor::Yellow).bg(ColorSpec::from_index(236));
/// assert_eq!(
///     warning.to_string(),
///     "\x1b[1m\x1b[33m\x1b[48;5;236mcareful\x1b[0m"
/// );
///
/// // Verbose struct construction.
/// AnsiStyledText {
///     text: "Print a formatted (bold, italic, underline) string w/ ANSI color codes.",
///     style: smallvec::smallvec![
///         SgrCode::Bold,
///         SgrCode::Italic,
///         SgrCode::Underline,
///         SgrCode::fg_rgb(50, 50, 50),
///         SgrCode::bg_rgb(100, 200, 1),
///     ],
/// }
/// .println();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyledText<'a> {
    pub text: &'a str,
    pub style: sizing::InlineVecSgrCodes,
}

pub mod sizing {
    use super::{SgrCode, SmallVec};

    /// Attributes are: colors, bold, faint, italic, underline, etc. which are in
    /// [`crate::SgrCode`].
    pub const MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE: usize = 8;
    pub type InlineVecSgrCodes = SmallVec<[SgrCode; MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE]>;
}

/// Either a named 16 color palette entry or a [`ColorSpec`]. Lets the builder methods
/// accept [`crate::AnsiColor`], [`ColorSpec`], a palette index or an RGB tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Named(crate::AnsiColor),
    Spec(ColorSpec),
}

impl From<crate::AnsiColor> for TextColor {
    fn from(color: crate::AnsiColor) -> Self { TextColor::Named(color) }
}

impl From<ColorSpec> for TextColor {
    fn from(spec: ColorSpec) -> Self { TextColor::Spec(spec) }
}

impl From<u8> for TextColor {
    fn from(index: u8) -> Self { TextColor::Spec(ColorSpec::Indexed(index)) }
}

impl From<(u8, u8, u8)> for TextColor {
    fn from(rgb: (u8, u8, u8)) -> Self { TextColor::Spec(rgb.into()) }
}

impl TextColor {
    fn into_fg(self) -> SgrCode {
        match self {
            TextColor::Named(it) => SgrCode::ForegroundNamed(it),
            TextColor::Spec(it) => SgrCode::Foreground(it),
        }
    }

    fn into_bg(self) -> SgrCode {
        match self {
            TextColor::Named(it) => SgrCode::BackgroundNamed(it),
            TextColor::Spec(it) => SgrCode::Background(it),
        }
    }
}

mod ansi_styled_text_impl {
    use super::AnsiStyledText;

    impl AnsiStyledText<'_> {
        pub fn println(&self) {
            println!("{self}");
        }

        pub fn print(&self) {
            print!("{self}");
        }
    }
}

#[must_use]
pub fn bold(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(SgrCode::Bold),
    }
}

#[must_use]
pub fn faint(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(SgrCode::Faint),
    }
}

#[must_use]
pub fn italic(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(SgrCode::Italic),
    }
}

#[must_use]
pub fn underline(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(SgrCode::Underline),
    }
}

#[must_use]
pub fn strike(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(SgrCode::Strikethrough),
    }
}

#[must_use]
pub fn fg(color: impl Into<TextColor>, text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(color.into().into_fg()),
    }
}

#[must_use]
pub fn bg(color: impl Into<TextColor>, text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(color.into().into_bg()),
    }
}

impl AnsiStyledText<'_> {
    #[must_use]
    pub fn with(mut self, code: SgrCode) -> Self {
        self.style.push(code);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self { self.with(SgrCode::Bold) }

    #[must_use]
    pub fn faint(self) -> Self { self.with(SgrCode::Faint) }

    #[must_use]
    pub fn italic(self) -> Self { self.with(SgrCode::Italic) }

    #[must_use]
    pub fn underline(self) -> Self { self.with(SgrCode::Underline) }

    #[must_use]
    pub fn strike(self) -> Self { self.with(SgrCode::Strikethrough) }

    #[must_use]
    pub fn fg(self, color: impl Into<TextColor>) -> Self {
        let code = color.into().into_fg();
        self.with(code)
    }

    #[must_use]
    pub fn bg(self, color: impl Into<TextColor>) -> Self {
        let code = color.into().into_bg();
        self.with(code)
    }

    #[must_use]
    pub fn underline_color(self, color: impl Into<ColorSpec>) -> Self {
        self.with(SgrCode::UnderlineColor(color.into()))
    }
}

impl WriteToBuf for AnsiStyledText<'_> {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        for code in &self.style {
            code.write_to_buf(acc)?;
        }
        acc.push_str(self.text);
        acc.push_str(RESET_SEQUENCE);
        Ok(())
    }
}

impl_display_for_write_to_buf!(AnsiStyledText<'_>);
