//! Terminal detection for the rental desk.
//!
//! `UiContext` answers two questions for a command: how output should look,
//! and where the menu should read its answers from.

use std::io::IsTerminal;

use super::mode::OutputMode;
use crate::errors::CliError;

const FALLBACK_WIDTH: usize = 80;

/// Terminal and environment facts a command renders against.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// stdout is a terminal
    pub is_tty: bool,
    /// stdin is a terminal
    pub stdin_tty: bool,
    pub color: bool,
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
}

/// Where the menu reads its answers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource {
    /// dialoguer widgets on a live terminal
    Terminal,
    /// One answer per line from stdin (pipes, here-docs, scripts)
    Lines,
}

impl UiContext {
    /// Probe stdin/stdout and the environment, then apply the global flags.
    pub fn from_env(json: bool, format: Option<&str>, no_color: bool, ascii: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").is_ok_and(|term| term == "dumb");
        let color =
            is_tty && !no_color && !term_is_dumb && std::env::var_os("NO_COLOR").is_none();

        Self {
            is_tty,
            stdin_tty: std::io::stdin().is_terminal(),
            color,
            unicode: !ascii,
            width: terminal_width().unwrap_or(FALLBACK_WIDTH),
            mode: OutputMode::resolve(json, format, is_tty, term_is_dumb),
        }
    }

    /// Pick the menu's answer source.
    ///
    /// Widgets need a terminal on both ends; otherwise answers are read one
    /// per line. `--no-input` fails when stdin is a terminal.
    pub fn prompt_source(&self, no_input: bool) -> Result<PromptSource, CliError> {
        if self.stdin_tty && no_input {
            return Err(CliError::invalid_input_with_hint(
                "--no-input requires menu answers on stdin",
                "Pipe one answer per line, e.g. `printf '3\\n' | rental menu --no-input`.",
            ));
        }
        if self.stdin_tty && self.is_tty {
            Ok(PromptSource::Terminal)
        } else {
            Ok(PromptSource::Lines)
        }
    }
}

/// Columns available for tables: `COLUMNS`, then the stdout window size.
fn terminal_width() -> Option<usize> {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|&cols| cols > 0);
    if from_env.is_some() {
        return from_env;
    }

    #[cfg(unix)]
    {
        let mut ws = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        // SAFETY: TIOCGWINSZ writes a winsize into the buffer we own.
        let rc = unsafe {
            libc::ioctl(
                libc::STDOUT_FILENO,
                libc::TIOCGWINSZ,
                &mut ws as *mut libc::winsize,
            )
        };
        if rc == 0 && ws.ws_col > 0 {
            return Some(usize::from(ws.ws_col));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    fn desk(is_tty: bool, stdin_tty: bool) -> UiContext {
        UiContext {
            is_tty,
            stdin_tty,
            color: false,
            unicode: true,
            width: FALLBACK_WIDTH,
            mode: OutputMode::Plain,
        }
    }

    #[test]
    fn test_terminal_on_both_ends_uses_widgets() {
        assert_eq!(
            desk(true, true).prompt_source(false).unwrap(),
            PromptSource::Terminal
        );
    }

    #[test]
    fn test_piped_stdin_reads_lines() {
        assert_eq!(desk(true, false).prompt_source(false).unwrap(), PromptSource::Lines);
        assert_eq!(desk(false, false).prompt_source(true).unwrap(), PromptSource::Lines);
    }

    #[test]
    fn test_redirected_stdout_reads_lines_from_terminal() {
        assert_eq!(desk(false, true).prompt_source(false).unwrap(), PromptSource::Lines);
    }

    #[test]
    fn test_no_input_rejects_terminal_stdin() {
        let err = desk(true, true).prompt_source(true).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert!(err.hint().unwrap().contains("--no-input"));
    }

    #[test]
    fn test_flags_shape_output() {
        let ctx = UiContext::from_env(true, None, true, true);
        assert_eq!(ctx.mode, OutputMode::Json);
        assert!(!ctx.color);
        assert!(!ctx.unicode);
        assert!(ctx.width > 0);
    }
}
