// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Trait for building escape sequences into a single buffer. See [`WriteToBuf`] and
//! [`BufTextStorage`] for details.

use std::fmt::{Formatter, Result};

use smallstr::SmallString;

/// Buffer that every sequence type renders into.
///
/// The buffer is created fresh in each [`std::fmt::Display::fmt`] call and dropped right
/// after, so a plain [`String`] is used. Callers that hold on to a single sequence can
/// use [`WriteToBuf::to_small_str()`] to keep it on the stack instead.
pub type BufTextStorage = String;

pub mod sizing {
    /// The longest sequence this crate emits for a single code is
    /// `ESC [ 3 8 ; 2 ; 2 5 5 ; 2 5 5 ; 2 5 5 m` (19 bytes), so this inline size never
    /// spills for one code.
    pub const DEFAULT_SEQUENCE_STORAGE_SIZE: usize = 24;

    pub type InlineSequence = smallstr::SmallString<[u8; DEFAULT_SEQUENCE_STORAGE_SIZE]>;
}

/// Write an escape sequence (or styled text) into a [`BufTextStorage`].
///
/// Implementors build their output with [`String::push_str`] / [`String::push`] and
/// only reach for [`write!`] when a number needs formatting. The [`std::fmt::Display`]
/// implementation is generated by [`crate::impl_display_for_write_to_buf!`], which makes
/// a single [`Formatter::write_str`] call with the finished buffer.
///
/// This is the counterpart of stream insertion: any value implementing this trait can be
/// placed in a [`format!`] string, and composition is plain string concatenation.
///
/// ```rust
/// use ansi_escape::{CsiSequence, SgrCode, WriteToBuf};
///
/// let mut acc = String::new();
/// CsiSequence::CursorPosition { row: 5, col: 10 }.write_to_buf(&mut acc).unwrap();
/// SgrCode::Bold.write_to_buf(&mut acc).unwrap();
/// acc.push_str("hello");
/// SgrCode::Reset.write_to_buf(&mut acc).unwrap();
///
/// assert_eq!(acc, "\x1b[5;10H\x1b[1mhello\x1b[0m");
/// ```
pub trait WriteToBuf {
    /// Append the formatted representation to `acc`.
    ///
    /// # Errors
    ///
    /// Returns an error if a formatting operation fails.
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result;

    /// Use [`Formatter::write_str`] to write the finished `acc` buffer when implementing
    /// [`std::fmt::Display`].
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the formatter fails.
    fn write_buf_to_fmt(&self, acc: &BufTextStorage, f: &mut Formatter<'_>) -> Result {
        f.write_str(acc)
    }

    /// Render into a stack allocated buffer (which spills to the heap if it gets larger
    /// than [`sizing::DEFAULT_SEQUENCE_STORAGE_SIZE`]).
    ///
    /// # Errors
    ///
    /// Returns an error if a formatting operation fails.
    fn to_small_str(&self) -> std::result::Result<sizing::InlineSequence, std::fmt::Error> {
        let mut acc = BufTextStorage::new();
        self.write_to_buf(&mut acc)?;
        Ok(SmallString::from_str(&acc))
    }
}

/// Generate a [`std::fmt::Display`] implementation that delegates to
/// [`WriteToBuf::write_to_buf`]. For types with a lifetime parameter pass it as `'_`,
/// eg: `impl_display_for_write_to_buf!(Colorize<'_>)`.
#[macro_export]
macro_rules! impl_display_for_write_to_buf {
    ($type:ident $(<$lt:lifetime>)?) => {
        impl ::std::fmt::Display for $type $(<$lt>)? {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut acc = $crate::BufTextStorage::new();
                $crate::WriteToBuf::write_to_buf(self, &mut acc)?;
                $crate::WriteToBuf::write_buf_to_fmt(self, &acc, f)
            }
        }
    };
}
