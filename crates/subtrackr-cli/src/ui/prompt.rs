//! Interactive prompts for filling in missing `add` fields.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use subtrackr_core::dates::parse_local_date;

/// Ask for a required line of text.
pub fn required_text(label: &str) -> anyhow::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .validate_with(|value: &String| -> Result<(), &str> {
            if value.trim().is_empty() {
                Err("This field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))
}

/// Ask for a non-negative amount.
pub fn cost(label: &str) -> anyhow::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .validate_with(|value: &String| -> Result<(), &str> {
            match value.trim().parse::<f64>() {
                Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(()),
                _ => Err("Enter an amount such as 9.99"),
            }
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))
}

/// Ask for a `YYYY-MM-DD` date.
pub fn date(label: &str, default: &str) -> anyhow::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .default(default.to_string())
        .validate_with(|value: &String| -> Result<(), &str> {
            if parse_local_date(value.trim()).is_some() {
                Ok(())
            } else {
                Err("Use YYYY-MM-DD")
            }
        })
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))
}

/// Pick one of `items`; returns its index.
pub fn choose(label: &str, items: &[String], default: usize) -> anyhow::Result<usize> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", label, e))
}
