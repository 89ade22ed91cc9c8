//! Output mode routing logic.

use crate::errors::CliError;

/// Reject `--format` values other than `table`, `plain` and `json`.
pub fn check_format(value: Option<&str>) -> anyhow::Result<()> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("table") | Some("plain") | Some("json") => Ok(()),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table, plain or json)",
            other
        ))
        .into()),
    }
}

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain `key=value` text, stable for logs and scripts
    #[default]
    Plain,
    /// Tables and colors for a human at a terminal
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins outright. After that `--format plain` or `TERM=dumb`
    /// force plain, and pretty is only used when stdout is a TTY.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        match format_flag.map(str::trim) {
            Some(fmt) if fmt.eq_ignore_ascii_case("json") => Self::Json,
            Some(fmt) if fmt.eq_ignore_ascii_case("plain") => Self::Plain,
            _ if term_is_dumb || !is_tty => Self::Plain,
            _ => Self::Pretty,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
