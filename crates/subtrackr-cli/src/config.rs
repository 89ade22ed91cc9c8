use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use subtrackr_core::renewals::DEFAULT_HORIZON_DAYS;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SubtrackrConfig {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub renewals: RenewalsSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LedgerSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenewalsSection {
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
}

impl Default for RenewalsSection {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UiSection {
    pub timezone: Option<String>,
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

impl SubtrackrConfig {
    pub fn new(ledger_path: PathBuf, horizon_days: u32, timezone: Option<String>) -> Self {
        Self {
            ledger: LedgerSection {
                path: Some(ledger_path.to_string_lossy().to_string()),
            },
            renewals: RenewalsSection { horizon_days },
            ui: UiSection { timezone },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_ledger_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("subtrackr.db"))
}

pub fn read_config(path: &Path) -> anyhow::Result<SubtrackrConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &SubtrackrConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

/// Parse an IANA timezone name such as `Europe/Berlin`.
pub fn parse_timezone(name: &str) -> anyhow::Result<chrono_tz::Tz> {
    name.trim()
        .parse::<chrono_tz::Tz>()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: {}", name))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("subtrackr"));
        }
    }
    Ok(home_dir()?.join(".config").join("subtrackr"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("subtrackr"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("subtrackr"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: SubtrackrConfig = toml::from_str("").unwrap();
        assert!(config.ledger.path.is_none());
        assert_eq!(config.renewals.horizon_days, 10);
        assert!(config.ui.timezone.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config: SubtrackrConfig =
            toml::from_str("[renewals]\nhorizon_days = 30\n\n[ui]\ntimezone = \"Asia/Tokyo\"\n")
                .unwrap();
        assert_eq!(config.renewals.horizon_days, 30);
        assert_eq!(config.ui.timezone.as_deref(), Some("Asia/Tokyo"));
    }

    #[test]
    fn test_config_round_trip() {
        let config = SubtrackrConfig::new(PathBuf::from("/tmp/s.db"), 14, None);
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: SubtrackrConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.ledger.path.as_deref(), Some("/tmp/s.db"));
        assert_eq!(parsed.renewals.horizon_days, 14);
    }

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("America/New_York").is_ok());
        assert!(parse_timezone("Mars/Olympus").is_err());
    }
}
