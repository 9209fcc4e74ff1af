// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI sequence builder for cursor movement, erasing, and scrolling.
//!
//! This module provides the [`CsiSequence`] enum which represents the non-SGR CSI
//! control sequences and serializes them into ANSI escape codes.
//!
//! Parameters are written verbatim. Nothing is clamped or validated: a cursor move to
//! row `0` or an erase with mode `7` produces a well formed sequence, and the terminal
//! decides what it means.

use std::fmt::{Result, Write};

use crate::{BufTextStorage, WriteToBuf,
            constants::{CHA_CURSOR_COLUMN, CNL_CURSOR_NEXT_LINE, CPL_CURSOR_PREV_LINE,
                        CSI_PARAM_SEPARATOR, CSI_PRIVATE_MODE_PREFIX, CSI_START,
                        CUB_CURSOR_BACKWARD, CUD_CURSOR_DOWN, CUF_CURSOR_FORWARD,
                        CUP_CURSOR_POSITION, CUU_CURSOR_UP, DECTCEM_SHOW_CURSOR,
                        DEFAULT_COUNT, DEFAULT_ERASE_MODE, ED_ERASE_DISPLAY,
                        EL_ERASE_LINE, RCP_RESTORE_CURSOR, RM_RESET_PRIVATE_MODE,
                        SCP_SAVE_CURSOR, SD_SCROLL_DOWN, SM_SET_PRIVATE_MODE,
                        SU_SCROLL_UP, VPA_VERTICAL_POSITION},
            impl_display_for_write_to_buf};

/// Builder for CSI (Control Sequence Introducer) sequences.
/// Similar to [`crate::SgrCode`] but for cursor movement and other CSI commands.
///
/// The constructor functions ([`CsiSequence::cursor_up`], [`CsiSequence::clear_screen`],
/// etc.) take `impl Into<Option<u16>>` so that the parameter can be left out by passing
/// [`None`], in which case the terminal's own default is written out explicitly.
///
/// ```rust
/// use ansi_escape::CsiSequence;
///
/// assert_eq!(CsiSequence::cursor_up(None).to_string(), "\x1b[1A");
/// assert_eq!(CsiSequence::cursor_up(3).to_string(), "\x1b[3A");
/// assert_eq!(CsiSequence::clear_screen(None).to_string(), "\x1b[0J");
/// assert_eq!(CsiSequence::CursorPosition { row: 5, col: 10 }.to_string(), "\x1b[5;10H");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsiSequence {
    /// Cursor Up (CUU) - ESC [ n A
    CursorUp(u16),
    /// Cursor Down (CUD) - ESC [ n B
    CursorDown(u16),
    /// Cursor Forward (CUF) - ESC [ n C
    CursorForward(u16),
    /// Cursor Backward (CUB) - ESC [ n D
    CursorBackward(u16),
    /// Cursor Next Line (CNL) - ESC [ n E
    CursorNextLine(u16),
    /// Cursor Previous Line (CPL) - ESC [ n F
    CursorPrevLine(u16),
    /// Cursor Horizontal Absolute (CHA) - ESC [ n G
    CursorHorizontalAbsolute(u16),
    /// Vertical Position Absolute (VPA) - ESC [ n d
    VerticalPositionAbsolute(u16),
    /// Cursor Position (CUP) - ESC [ row ; col H
    CursorPosition { row: u16, col: u16 },
    /// Erase Display (ED) - ESC [ n J
    ///
    /// - `0`: cursor to end of screen.
    /// - `1`: cursor to beginning of screen.
    /// - `2`: entire screen.
    /// - `3`: entire screen and scrollback buffer (xterm).
    EraseDisplay(u16),
    /// Erase Line (EL) - ESC [ n K
    ///
    /// - `0`: cursor to end of line.
    /// - `1`: cursor to beginning of line.
    /// - `2`: entire line.
    EraseLine(u16),
    /// Scroll Up (SU) - ESC [ n S
    ScrollUp(u16),
    /// Scroll Down (SD) - ESC [ n T
    ScrollDown(u16),
    /// Save Cursor (SCP) - ESC [ s
    SaveCursor,
    /// Restore Cursor (RCP) - ESC [ u
    RestoreCursor,
    /// Show Cursor (DECTCEM) - ESC [ ? 25 h
    ShowCursor,
    /// Hide Cursor (DECTCEM) - ESC [ ? 25 l
    HideCursor,
}

fn count_or_default(arg: impl Into<Option<u16>>) -> u16 {
    arg.into().unwrap_or(DEFAULT_COUNT)
}

fn mode_or_default(arg: impl Into<Option<u16>>) -> u16 {
    arg.into().unwrap_or(DEFAULT_ERASE_MODE)
}

impl CsiSequence {
    #[must_use]
    pub fn cursor_up(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::CursorUp(count_or_default(n))
    }

    #[must_use]
    pub fn cursor_down(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::CursorDown(count_or_default(n))
    }

    #[must_use]
    pub fn cursor_forward(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::CursorForward(count_or_default(n))
    }

    #[must_use]
    pub fn cursor_backward(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::CursorBackward(count_or_default(n))
    }

    #[must_use]
    pub fn cursor_next_line(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::CursorNextLine(count_or_default(n))
    }

    #[must_use]
    pub fn cursor_prev_line(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::CursorPrevLine(count_or_default(n))
    }

    /// Move to column `n` of the current line.
    #[must_use]
    pub fn cursor_horizontal(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::CursorHorizontalAbsolute(count_or_default(n))
    }

    /// Move to row `n` of the current column.
    #[must_use]
    pub fn cursor_vertical(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::VerticalPositionAbsolute(count_or_default(n))
    }

    /// Both `row` and `col` are 1-based.
    #[must_use]
    pub const fn cursor_to(row: u16, col: u16) -> Self {
        CsiSequence::CursorPosition { row, col }
    }

    #[must_use]
    pub fn clear_screen(mode: impl Into<Option<u16>>) -> Self {
        CsiSequence::EraseDisplay(mode_or_default(mode))
    }

    #[must_use]
    pub fn clear_line(mode: impl Into<Option<u16>>) -> Self {
        CsiSequence::EraseLine(mode_or_default(mode))
    }

    #[must_use]
    pub fn scroll_up(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::ScrollUp(count_or_default(n))
    }

    #[must_use]
    pub fn scroll_down(n: impl Into<Option<u16>>) -> Self {
        CsiSequence::ScrollDown(count_or_default(n))
    }
}

impl WriteToBuf for CsiSequence {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        acc.push_str(CSI_START);
        let (param, final_byte) = match *self {
            CsiSequence::CursorUp(n) => (n, CUU_CURSOR_UP),
            CsiSequence::CursorDown(n) => (n, CUD_CURSOR_DOWN),
            CsiSequence::CursorForward(n) => (n, CUF_CURSOR_FORWARD),
            CsiSequence::CursorBackward(n) => (n, CUB_CURSOR_BACKWARD),
            CsiSequence::CursorNextLine(n) => (n, CNL_CURSOR_NEXT_LINE),
            CsiSequence::CursorPrevLine(n) => (n, CPL_CURSOR_PREV_LINE),
            CsiSequence::CursorHorizontalAbsolute(n) => (n, CHA_CURSOR_COLUMN),
            CsiSequence::VerticalPositionAbsolute(n) => (n, VPA_VERTICAL_POSITION),
            CsiSequence::EraseDisplay(n) => (n, ED_ERASE_DISPLAY),
            CsiSequence::EraseLine(n) => (n, EL_ERASE_LINE),
            CsiSequence::ScrollUp(n) => (n, SU_SCROLL_UP),
            CsiSequence::ScrollDown(n) => (n, SD_SCROLL_DOWN),
            CsiSequence::CursorPosition { row, col } => {
                write!(acc, "{row}")?;
                acc.push(CSI_PARAM_SEPARATOR);
                write!(acc, "{col}")?;
                acc.push(CUP_CURSOR_POSITION);
                return Ok(());
            }
            CsiSequence::SaveCursor => {
                acc.push(SCP_SAVE_CURSOR);
                return Ok(());
            }
            CsiSequence::RestoreCursor => {
                acc.push(RCP_RESTORE_CURSOR);
                return Ok(());
            }
            CsiSequence::ShowCursor => (DECTCEM_SHOW_CURSOR, SM_SET_PRIVATE_MODE),
            CsiSequence::HideCursor => (DECTCEM_SHOW_CURSOR, RM_RESET_PRIVATE_MODE),
        };
        if matches!(self, CsiSequence::ShowCursor | CsiSequence::HideCursor) {
            acc.push(CSI_PRIVATE_MODE_PREFIX);
        }
        write!(acc, "{param}")?;
        acc.push(final_byte);
        Ok(())
    }
}

impl_display_for_write_to_buf!(CsiSequence);
