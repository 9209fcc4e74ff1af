// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Build whole screens of output from the public API only, the way a downstream crate
//! would.

use ansi_escape::{AnsiColor, BufTextStorage, ColorSpec, CsiSequence, RESET_SEQUENCE,
                  SgrCode, WriteToBuf, bold, colorize, fg, global_init_status};
use pretty_assertions::assert_eq;
use serial_test::serial;

#[test]
fn status_line_with_format() {
    let line = format!(
        "{}{}{}{}Ready{}{}",
        CsiSequence::SaveCursor,
        CsiSequence::cursor_to(24, 1),
        CsiSequence::clear_line(2),
        SgrCode::BackgroundNamed(AnsiColor::Blue),
        SgrCode::Reset,
        CsiSequence::RestoreCursor,
    );
    assert_eq!(line, "\x1b[s\x1b[24;1H\x1b[2K\x1b[44mReady\x1b[0m\x1b[u");
}

#[test]
fn write_into_one_buffer() {
    let mut acc = BufTextStorage::new();
    CsiSequence::HideCursor.write_to_buf(&mut acc).unwrap();
    CsiSequence::clear_screen(None).write_to_buf(&mut acc).unwrap();
    SgrCode::fg_rgb(255, 255, 0).write_to_buf(&mut acc).unwrap();
    SgrCode::underline_rgb(255, 0, 0).write_to_buf(&mut acc).unwrap();
    acc.push_str("warning");
    SgrCode::Reset.write_to_buf(&mut acc).unwrap();
    CsiSequence::ShowCursor.write_to_buf(&mut acc).unwrap();

    assert_eq!(
        acc,
        "\x1b[?25l\x1b[0J\x1b[38;2;255;255;0m\x1b[58;2;255;0;0mwarning\x1b[0m\x1b[?25h"
    );
}

#[test]
fn invalid_values_vanish_from_the_output() {
    let line = format!(
        "{}{}{}{}text",
        SgrCode::fg_index(300),
        SgrCode::bg_rgb(-1, 0, 0),
        SgrCode::underline_index(256),
        SgrCode::Font(21),
    );
    assert_eq!(line, "text");
}

#[test]
fn styled_text_and_rainbow_side_by_side() {
    let label = bold("status:").fg(AnsiColor::Green);
    let value = fg(ColorSpec::Indexed(208), "ok");
    let rainbow = colorize("!");

    let line = format!("{label} {value} {rainbow}");
    assert_eq!(
        line,
        "\x1b[1m\x1b[32mstatus:\x1b[0m \x1b[38;5;208mok\x1b[0m \x1b[38;2;128;237;18m!\x1b[0m"
    );
    assert!(line.ends_with(RESET_SEQUENCE));
}

#[test]
fn small_str_holds_a_single_sequence() {
    let it = SgrCode::bg_rgb(255, 255, 255).to_small_str().unwrap();
    assert_eq!(it.as_str(), "\x1b[48;2;255;255;255m");
    assert!(!it.spilled());
}

#[test]
#[serial]
fn global_init_status_is_stable() {
    assert_eq!(global_init_status::get(), global_init_status::get());
}
