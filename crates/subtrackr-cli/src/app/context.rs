//! Application context for the SubTrackr CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use once_cell::unsync::OnceCell;

use subtrackr_core::dates::{start_of_today, start_of_today_in};
use subtrackr_core::storage::SqliteStore;
use subtrackr_core::LedgerStore;

use crate::cli::Cli;
use crate::config::{parse_timezone, read_config, SubtrackrConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_ledger_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<SubtrackrConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing config file means defaults.
    pub fn config(&self) -> anyhow::Result<&SubtrackrConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                read_config(&path)
            } else {
                Ok(SubtrackrConfig::default())
            }
        })
    }

    /// Build the UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Path of the ledger database.
    pub fn ledger_path(&self) -> anyhow::Result<PathBuf> {
        resolve_ledger_path(self.cli, self.config()?)
    }

    /// Open the ledger, creating the database on first use.
    pub fn open_ledger(&self) -> anyhow::Result<LedgerStore<SqliteStore>> {
        self.open_ledger_at(&self.ledger_path()?)
    }

    /// Open the ledger stored at `path`.
    pub fn open_ledger_at(&self, path: &Path) -> anyhow::Result<LedgerStore<SqliteStore>> {
        let store = SqliteStore::open(path).map_err(|e| {
            anyhow::anyhow!("Failed to open ledger at {}: {}", path.display(), e)
        })?;
        Ok(LedgerStore::open(store))
    }

    /// Today's date in the configured timezone, or local time.
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        match self.config()?.ui.timezone.as_deref() {
            Some(name) => Ok(start_of_today_in(&parse_timezone(name)?)),
            None => Ok(start_of_today()),
        }
    }

    /// Days ahead that count as upcoming: the flag, then config.
    pub fn horizon_days(&self, flag: Option<u32>) -> anyhow::Result<u32> {
        match flag {
            Some(days) => Ok(days),
            None => Ok(self.config()?.renewals.horizon_days),
        }
    }
}
