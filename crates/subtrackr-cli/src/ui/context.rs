//! What the terminal we are writing to can do.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Output capabilities for one command invocation.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// stdout is a terminal
    pub is_tty: bool,
    /// ANSI colors allowed
    pub color: bool,
    /// Unicode symbols and category icons allowed
    pub unicode: bool,
    /// Columns available for tables
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Detect capabilities from the environment and the global flags.
    ///
    /// Color is off under `NO_COLOR`, `--no-color`, `TERM=dumb`, or when
    /// stdout is not a terminal.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());

        Self {
            is_tty,
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb),
        }
    }

    /// Prompts need both ends of the terminal.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Table width: `COLUMNS` when set, else the terminal's own width.
fn terminal_width() -> Option<usize> {
    columns_from_env().or_else(stdout_columns)
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()?
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|width| *width > 0)
}

#[cfg(unix)]
fn stdout_columns() -> Option<usize> {
    let mut size = std::mem::MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ only writes into the winsize buffer we pass
    let status = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
    if status != 0 {
        return None;
    }
    // SAFETY: ioctl returned success, so the buffer was filled in
    let size = unsafe { size.assume_init() };
    (size.ws_col > 0).then(|| usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn stdout_columns() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_sets_mode() {
        let ctx = UiContext::from_env(true, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_env(false, None, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_no_color_flag_disables_color() {
        let ctx = UiContext::from_env(false, None, true, false);
        assert!(!ctx.color);
    }

    #[test]
    fn test_plain_format_flag() {
        let ctx = UiContext::from_env(false, Some("plain"), false, false);
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(ctx.width > 0);
        assert!(!ctx.is_interactive() || ctx.is_tty);
    }
}
