// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

//! # ansi_escape
//!
//! Generate ANSI / VT100 escape sequences as plain strings. Nothing is written to the
//! terminal by this crate (except by the `print` helpers on [`AnsiStyledText`]), you get
//! a value that implements [`std::fmt::Display`] and put it wherever you like.
//!
//! - [`CsiSequence`]: cursor movement and positioning, save / restore cursor, show / hide
//!   cursor, erase display / line, scroll up / down.
//! - [`SgrCode`]: text attributes (bold, italic, underline, blink, ...), alternative
//!   fonts, the 16 named colors, and 8-bit / 24-bit colors for foreground, background and
//!   underline.
//! - [`AnsiStyledText`]: a piece of text with a list of [`SgrCode`]s, that resets all
//!   attributes after itself.
//! - [`Colorize`]: rainbow colored text.
//! - [`initialize_terminal()`] and [`global_init_status`]: one time setup so that Windows
//!   consoles interpret the sequences.
//!
//! Invalid input never fails. Colors outside `0..=255` and fonts outside `10..=20`
//! render as the empty string, and counts / modes are passed to the terminal as is.
//!
//! # Example usage
//!
//! ```rust
//! use ansi_escape::*;
//!
//! // Composition is just string concatenation.
//! let line = format!(
//!     "{}{}{}Blue on yellow{}",
//!     CsiSequence::cursor_to(1, 1),
//!     SgrCode::BackgroundNamed(AnsiColor::Yellow),
//!     SgrCode::ForegroundNamed(AnsiColor::Blue),
//!     SgrCode::Reset,
//! );
//! assert_eq!(line, "\x1b[1;1H\x1b[43m\x1b[34mBlue on yellow\x1b[0m");
//!
//! // 8-bit and 24-bit colors.
//! assert_eq!(SgrCode::fg_index(157).to_string(), "\x1b[38;5;157m");
//! assert_eq!(SgrCode::bg_rgb(255, 0, 10).to_string(), "\x1b[48;2;255;0;10m");
//!
//! // Out of range values produce nothing.
//! assert_eq!(SgrCode::fg_index(300).to_string(), "");
//! assert_eq!(SgrCode::Font(25).to_string(), "");
//!
//! // Styled text.
//! let it = underline("styled").fg(AnsiColor::BrightRed);
//! assert_eq!(it.to_string(), "\x1b[4m\x1b[91mstyled\x1b[0m");
//! ```

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod ansi_escape_codes;
pub mod ansi_styled_text;
pub mod color;
pub mod color_cycle;
pub mod constants;
pub mod csi_sequence;
pub mod terminal_init;
pub mod write_to_buf;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_styled_text::*;
pub use color::*;
pub use color_cycle::*;
pub use constants::*;
pub use csi_sequence::*;
pub use terminal_init::*;
pub use write_to_buf::{BufTextStorage, WriteToBuf};
