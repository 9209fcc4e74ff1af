// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Constant values used to build CSI (Control Sequence Introducer) sequences,
//! organized by functional category.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#CSI_(Control_Sequence_Introducer)_sequences>
//! - <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html>

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

use const_format::concatcp;

// CSI sequence components.

/// CSI sequence start: ESC [
pub const CSI_START: &str = "\x1b[";

/// Private mode prefix for CSI sequences
pub const CSI_PRIVATE_MODE_PREFIX: char = '?';

/// Parameter separator in CSI sequences (semicolon)
///
/// - `ESC[1;5H` - Cursor position (row 1, column 5)
/// - `ESC[38;2;255;0;0m` - Truecolor red foreground
pub const CSI_PARAM_SEPARATOR: char = ';';

/// Final byte of every SGR (Select Graphic Rendition) sequence.
pub const SGR_SET_GRAPHICS: char = 'm';

// Cursor Movement.

/// CSI A: Cursor Up (CUU)
pub const CUU_CURSOR_UP: char = 'A';

/// CSI B: Cursor Down (CUD)
pub const CUD_CURSOR_DOWN: char = 'B';

/// CSI C: Cursor Forward/Right (CUF)
pub const CUF_CURSOR_FORWARD: char = 'C';

/// CSI D: Cursor Backward/Left (CUB)
pub const CUB_CURSOR_BACKWARD: char = 'D';

/// CSI E: Cursor Next Line (CNL)
/// Moves cursor to beginning of line n lines down
pub const CNL_CURSOR_NEXT_LINE: char = 'E';

/// CSI F: Cursor Previous Line (CPL)
/// Moves cursor to beginning of line n lines up
pub const CPL_CURSOR_PREV_LINE: char = 'F';

/// CSI G: Cursor Horizontal Absolute (CHA)
pub const CHA_CURSOR_COLUMN: char = 'G';

/// CSI d: Vertical Position Absolute (VPA)
pub const VPA_VERTICAL_POSITION: char = 'd';

/// CSI H: Cursor Position (CUP)
pub const CUP_CURSOR_POSITION: char = 'H';

/// CSI s: Save Cursor Position (SCP)
pub const SCP_SAVE_CURSOR: char = 's';

/// CSI u: Restore Cursor Position (RCP)
pub const RCP_RESTORE_CURSOR: char = 'u';

/// CSI ? n h: Set private mode
pub const SM_SET_PRIVATE_MODE: char = 'h';

/// CSI ? n l: Reset private mode
pub const RM_RESET_PRIVATE_MODE: char = 'l';

/// DECTCEM: text cursor enable mode, the private mode behind show / hide cursor.
pub const DECTCEM_SHOW_CURSOR: u16 = 25;

// Erasing.

/// CSI J: Erase in Display (ED)
pub const ED_ERASE_DISPLAY: char = 'J';

/// CSI K: Erase in Line (EL)
pub const EL_ERASE_LINE: char = 'K';

/// Erase from cursor to end of screen (default for ED)
pub const ED_ERASE_TO_END: u16 = 0;

/// Erase from start of screen to cursor
pub const ED_ERASE_FROM_START: u16 = 1;

/// Erase entire screen
pub const ED_ERASE_ALL: u16 = 2;

/// Erase entire screen and scrollback (xterm extension)
pub const ED_ERASE_ALL_AND_SCROLLBACK: u16 = 3;

/// Erase from cursor to end of line (default for EL)
pub const EL_ERASE_TO_END: u16 = 0;

/// Erase from start of line to cursor
pub const EL_ERASE_FROM_START: u16 = 1;

/// Erase entire line
pub const EL_ERASE_ALL: u16 = 2;

// Scrolling.

/// CSI S: Scroll Up (SU)
/// New lines are added at the bottom
pub const SU_SCROLL_UP: char = 'S';

/// CSI T: Scroll Down (SD)
/// New lines are added at the top
pub const SD_SCROLL_DOWN: char = 'T';

// Parameter defaults.

/// Count used by cursor movement and scroll sequences when none is given.
pub const DEFAULT_COUNT: u16 = 1;

/// Mode used by erase sequences when none is given.
pub const DEFAULT_ERASE_MODE: u16 = 0;

// SGR parameter values.

pub const SGR_RESET: u16                        = 0;
pub const SGR_BOLD: u16                         = 1;
pub const SGR_FAINT: u16                        = 2;
pub const SGR_ITALIC: u16                       = 3;
pub const SGR_UNDERLINE: u16                    = 4;
pub const SGR_SLOW_BLINK: u16                   = 5;
pub const SGR_RAPID_BLINK: u16                  = 6;
pub const SGR_INVERT: u16                       = 7;
pub const SGR_CONCEAL: u16                      = 8;
pub const SGR_STRIKETHROUGH: u16                = 9;
pub const SGR_NORMAL_INTENSITY: u16             = 22;
pub const SGR_NOT_ITALIC: u16                   = 23;
pub const SGR_NOT_UNDERLINED: u16               = 24;
pub const SGR_NOT_BLINKING: u16                 = 25;
pub const SGR_PROPORTIONAL_SPACING: u16         = 26;
pub const SGR_NOT_INVERTED: u16                 = 27;
pub const SGR_NOT_CONCEALED: u16                = 28;
pub const SGR_NOT_STRIKETHROUGH: u16            = 29;
pub const SGR_FG_BLACK: u16                     = 30;
pub const SGR_FG_EXTENDED: u16                  = 38;
pub const SGR_FG_DEFAULT: u16                   = 39;
pub const SGR_BG_BLACK: u16                     = 40;
pub const SGR_BG_EXTENDED: u16                  = 48;
pub const SGR_BG_DEFAULT: u16                   = 49;
pub const SGR_NOT_PROPORTIONAL_SPACING: u16     = 50;
pub const SGR_FRAMED: u16                       = 51;
pub const SGR_ENCIRCLED: u16                    = 52;
pub const SGR_OVERLINED: u16                    = 53;
pub const SGR_NOT_FRAMED_OR_ENCIRCLED: u16      = 54;
pub const SGR_NOT_OVERLINED: u16                = 55;
pub const SGR_UNDERLINE_COLOR_EXTENDED: u16     = 58;
pub const SGR_UNDERLINE_COLOR_DEFAULT: u16      = 59;
pub const SGR_SUPERSCRIPT: u16                  = 73;
pub const SGR_SUBSCRIPT: u16                    = 74;
pub const SGR_NOT_SUPERSCRIPT_OR_SUBSCRIPT: u16 = 75;
pub const SGR_FG_BRIGHT_BLACK: u16              = 90;
pub const SGR_BG_BRIGHT_BLACK: u16              = 100;

/// Extended color mode selector for 8-bit (palette index) colors: `38;5;n`.
pub const SGR_COLOR_MODE_INDEXED: u16 = 5;

/// Extended color mode selector for 24-bit (truecolor) colors: `38;2;r;g;b`.
pub const SGR_COLOR_MODE_RGB: u16 = 2;

/// Lowest alternative font number (`10` is the primary font).
pub const SGR_FONT_FIRST: u16 = 10;

/// Highest alternative font number (`20` is the Fraktur / Gothic font).
pub const SGR_FONT_LAST: u16 = 20;

// Fixed sequences.

/// `ESC [ 0 m`: return all attributes and colors to the terminal default.
pub const RESET_SEQUENCE: &str = concatcp!(CSI_START, SGR_RESET, SGR_SET_GRAPHICS);

/// `ESC [ ? 25 h`: show the cursor (VT220).
pub const SHOW_CURSOR_SEQUENCE: &str =
    concatcp!(CSI_START, CSI_PRIVATE_MODE_PREFIX, DECTCEM_SHOW_CURSOR, SM_SET_PRIVATE_MODE);

/// `ESC [ ? 25 l`: hide the cursor.
pub const HIDE_CURSOR_SEQUENCE: &str =
    concatcp!(CSI_START, CSI_PRIVATE_MODE_PREFIX, DECTCEM_SHOW_CURSOR, RM_RESET_PRIVATE_MODE);

/// `ESC [ s`: save the current cursor position.
pub const SAVE_CURSOR_SEQUENCE: &str = concatcp!(CSI_START, SCP_SAVE_CURSOR);

/// `ESC [ u`: restore the saved cursor position.
pub const RESTORE_CURSOR_SEQUENCE: &str = concatcp!(CSI_START, RCP_RESTORE_CURSOR);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fixed_sequences() {
        assert_eq!(RESET_SEQUENCE, "\x1b[0m");
        assert_eq!(SHOW_CURSOR_SEQUENCE, "\x1b[?25h");
        assert_eq!(HIDE_CURSOR_SEQUENCE, "\x1b[?25l");
        assert_eq!(SAVE_CURSOR_SEQUENCE, "\x1b[s");
        assert_eq!(RESTORE_CURSOR_SEQUENCE, "\x1b[u");
    }
}
