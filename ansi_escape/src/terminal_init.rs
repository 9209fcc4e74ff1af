// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One time terminal setup, so that the escape sequences produced by this crate are
//! interpreted rather than printed literally.
//!
//! - On Windows the console of the standard output handle has to have
//!   `ENABLE_VIRTUAL_TERMINAL_PROCESSING` turned on.
//! - On every other platform there is nothing to do.
//!
//! Call [`initialize_terminal()`] directly if you want to handle the error, or use
//! [`global_init_status::get()`] which runs it exactly once per process and remembers
//! the outcome. Either way, a failure is never retried and nothing else in this crate
//! changes its behavior because of it.

/// Returned by [`initialize_terminal()`] when the console could not be switched to
/// virtual terminal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum TerminalInitError {
    /// `code` is the OS last error code (`GetLastError()`).
    #[error("Could not enable virtual terminal processing for stdout (OS error {code})")]
    #[diagnostic(
        code(ansi_escape::terminal_init::console_mode),
        help(
            "Stdout may not be attached to a console (eg: it is redirected to a file \
             or pipe), or the console is too old to support ANSI escape sequences"
        )
    )]
    ConsoleMode { code: u32 },
}

impl TerminalInitError {
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            TerminalInitError::ConsoleMode { code } => *code,
        }
    }
}

/// Enable interpretation of ANSI escape sequences on the terminal attached to stdout.
///
/// This is a no-op that always succeeds on non Windows platforms.
///
/// # Errors
///
/// On Windows, returns [`TerminalInitError::ConsoleMode`] if the stdout handle is
/// invalid, or if the console mode can't be read or written.
pub fn initialize_terminal() -> Result<(), TerminalInitError> {
    match platform::enable_virtual_terminal_processing() {
        Ok(()) => {
            tracing::debug!(message = "Terminal initialized for ANSI escape sequences");
            Ok(())
        }
        Err(error) => {
            tracing::warn!(
                message = "Terminal initialization failed",
                code = error.code(),
                error = %error
            );
            Err(error)
        }
    }
}

#[cfg(windows)]
mod platform {
    use windows_sys::Win32::{Foundation::{GetLastError, INVALID_HANDLE_VALUE},
                             System::Console::{ENABLE_VIRTUAL_TERMINAL_PROCESSING,
                                               GetConsoleMode, GetStdHandle,
                                               STD_OUTPUT_HANDLE, SetConsoleMode}};

    use super::TerminalInitError;

    pub fn enable_virtual_terminal_processing() -> Result<(), TerminalInitError> {
        // SAFETY: These console calls only read / write the mode of the process' own
        // stdout handle, and `mode` outlives the call that writes to it.
        unsafe {
            let handle = GetStdHandle(STD_OUTPUT_HANDLE);
            if handle != INVALID_HANDLE_VALUE {
                let mut mode = 0;
                if GetConsoleMode(handle, &raw mut mode) != 0
                    && SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING)
                        != 0
                {
                    return Ok(());
                }
            }
            Err(TerminalInitError::ConsoleMode {
                code: GetLastError(),
            })
        }
    }
}

#[cfg(not(windows))]
mod platform {
    use super::TerminalInitError;

    #[allow(clippy::unnecessary_wraps)]
    pub fn enable_virtual_terminal_processing() -> Result<(), TerminalInitError> { Ok(()) }
}

/// Process wide, read only result of [`initialize_terminal()`].
///
/// The first call to [`get()`](global_init_status::get) runs the platform setup, every
/// call after that (from any thread) returns the remembered status.
///
/// # Testing support
///
/// Tests that observe this value should be annotated with `#[serial]` from the
/// [serial_test](https://crates.io/crates/serial_test) crate.
pub mod global_init_status {
    use once_cell::sync::OnceCell;

    use super::initialize_terminal;

    /// Status value for a successful initialization.
    pub const SUCCESS: u32 = 0;

    static INIT_STATUS: OnceCell<u32> = OnceCell::new();

    /// `0` on success, otherwise the OS error code from the failed initialization.
    #[must_use]
    pub fn get() -> u32 {
        *INIT_STATUS.get_or_init(|| match initialize_terminal() {
            Ok(()) => SUCCESS,
            Err(error) => error.code(),
        })
    }

    /// Whether [`get()`] has already run the initialization.
    #[must_use]
    pub fn is_initialized() -> bool { INIT_STATUS.get().is_some() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    fn error_exposes_code() {
        let error = TerminalInitError::ConsoleMode { code: 6 };
        assert_eq!(error.code(), 6);
        assert_eq!(
            error.to_string(),
            "Could not enable virtual terminal processing for stdout (OS error 6)"
        );
    }

    #[test]
    fn error_is_a_diagnostic() {
        use miette::Diagnostic;

        let error = TerminalInitError::ConsoleMode { code: 0 };
        let code = Diagnostic::code(&error).map(|it| it.to_string());
        assert_eq!(
            code.as_deref(),
            Some("ansi_escape::terminal_init::console_mode")
        );
        assert!(error.help().is_some());
    }

    #[cfg(not(windows))]
    #[test]
    fn initialize_is_a_no_op() {
        assert_eq!(initialize_terminal(), Ok(()));
        assert_eq!(initialize_terminal(), Ok(()));
    }

    #[cfg(not(windows))]
    #[test]
    #[serial]
    fn global_status_is_success() {
        assert_eq!(global_init_status::get(), global_init_status::SUCCESS);
        assert!(global_init_status::is_initialized());
    }

    #[test]
    #[serial]
    fn global_status_is_memoized() {
        let first = global_init_status::get();
        let second = global_init_status::get();
        assert_eq!(first, second);
        assert!(global_init_status::is_initialized());
    }

    #[test]
    #[serial]
    fn global_status_is_shared_across_threads() {
        let expected = global_init_status::get();
        let handles = (0..4)
            .map(|_| std::thread::spawn(global_init_status::get))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
