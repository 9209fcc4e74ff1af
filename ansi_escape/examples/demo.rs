// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example demo`. Terminal init is logged to stderr.

use ansi_escape::{AnsiColor, AnsiStyledText, ColorSpec, Colorize, CsiSequence, SgrCode,
                  bold, colorize, global_init_status, initialize_terminal, italic};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    // Windows consoles need this before they interpret escape sequences. Failure is not
    // fatal, the sequences are just printed literally.
    if let Err(error) = initialize_terminal() {
        eprintln!("{:?}", miette::Report::new(error));
    }
    println!("global init status: {}", global_init_status::get());

    // Named 4-bit colors.
    {
        print!(
            "{}{}Blue on yellow{}",
            SgrCode::BackgroundNamed(AnsiColor::Yellow),
            SgrCode::ForegroundNamed(AnsiColor::Blue),
            SgrCode::Reset,
        );
        println!();
    }

    // 8-bit palette colors.
    {
        print!(
            "{}{}8 bit color{}",
            SgrCode::bg_index(157),
            SgrCode::fg_index(100),
            SgrCode::Reset,
        );
        println!();
    }

    // 24-bit colors.
    {
        print!(
            "{}{}24 bit color{}",
            SgrCode::bg_rgb(0, 255, 0),
            SgrCode::fg_rgb(0, 0, 255),
            SgrCode::Reset,
        );
        println!();
    }

    // Invalid values render nothing, so this line is unstyled.
    {
        print!(
            "{}{}Out of range color and font{}",
            SgrCode::fg_index(300),
            SgrCode::Font(25),
            SgrCode::Reset,
        );
        println!();
    }

    // Styled text.
    {
        AnsiStyledText {
            text: "Print a formatted (bold, italic, underline) string w/ ANSI color codes.",
            style: smallvec::smallvec![
                SgrCode::Bold,
                SgrCode::Italic,
                SgrCode::Underline,
                SgrCode::fg_rgb(50, 50, 50),
                SgrCode::bg_rgb(100, 200, 1),
            ],
        }
        .println();

        bold("Faint, overline and strikethrough line.")
            .with(SgrCode::Faint)
            .with(SgrCode::Overlined)
            .strike()
            .fg((200_u8, 50, 50))
            .bg(ColorSpec::from_rgb(200, 200, 1))
            .println();

        italic("Underline in palette color 196")
            .underline()
            .underline_color(ColorSpec::from_index(196))
            .println();
    }

    // Rainbow.
    {
        println!("{}", colorize("Taste the rainbow, one character at a time!"));
        println!("{}", Colorize::new("H e l l o   w o r l d"));
    }

    // Cursor movement: write a marker one line up, then come back.
    {
        print!("{}", CsiSequence::SaveCursor);
        print!("{}", CsiSequence::cursor_up(None));
        print!("{}", CsiSequence::cursor_horizontal(60));
        print!("{}", bold("<- moved here").fg(AnsiColor::BrightMagenta));
        print!("{}", CsiSequence::RestoreCursor);
        println!("{}", CsiSequence::clear_line(None));
    }
}
