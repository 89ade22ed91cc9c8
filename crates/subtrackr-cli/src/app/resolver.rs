//! Path and id resolution.

use std::path::PathBuf;

use subtrackr_core::{Subscription, SubscriptionId};

use crate::cli::Cli;
use crate::config::{default_config_path, default_ledger_path, SubtrackrConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking SUBTRACKR_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the ledger database path: `--db` (or SUBTRACKR_DB), then the
/// config file, then the default data directory.
pub fn resolve_ledger_path(cli: &Cli, config: &SubtrackrConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.ledger.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_ledger_path()
}

/// Find the subscription a user-typed id refers to.
///
/// An exact match wins; otherwise the input must be a prefix of exactly one
/// id.
pub fn resolve_subscription_id(
    subscriptions: &[Subscription],
    input: &str,
) -> anyhow::Result<SubscriptionId> {
    let needle = input.trim();
    if needle.is_empty() {
        return Err(CliError::invalid_input("Subscription ID cannot be empty").into());
    }
    if let Some(exact) = subscriptions.iter().find(|sub| sub.id.to_string() == needle) {
        return Ok(exact.id.clone());
    }

    // Records sharing an id count once.
    let mut matches: Vec<&SubscriptionId> = Vec::new();
    for sub in subscriptions.iter().filter(|sub| sub.id.starts_with(needle)) {
        if !matches.contains(&&sub.id) {
            matches.push(&sub.id);
        }
    }
    match matches.as_slice() {
        [only] => Ok((*only).clone()),
        [] => Err(CliError::not_found(
            format!("Subscription not found: {}", needle),
            "Run `subtrackr list` to see subscription IDs.",
        )
        .into()),
        many => Err(CliError::invalid_input_with_hint(
            format!("ID prefix {} matches {} subscriptions", needle, many.len()),
            "Type more characters of the ID.",
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtrackr_core::SubscriptionInput;

    fn subs(ids: &[&str]) -> Vec<Subscription> {
        ids.iter()
            .map(|id| {
                SubscriptionInput::new("x", "1", "2025-01-01")
                    .into_subscription(SubscriptionId::from(*id))
            })
            .collect()
    }

    #[test]
    fn test_exact_match_wins_over_prefix() {
        let list = subs(&["abc", "abcdef"]);
        let id = resolve_subscription_id(&list, "abc").unwrap();
        assert_eq!(id, SubscriptionId::from("abc"));
    }

    #[test]
    fn test_unique_prefix() {
        let list = subs(&["0190a1b2-aaaa", "0190ffff-bbbb"]);
        let id = resolve_subscription_id(&list, "0190a").unwrap();
        assert_eq!(id, SubscriptionId::from("0190a1b2-aaaa"));
    }

    #[test]
    fn test_ambiguous_prefix() {
        let list = subs(&["0190a1b2-aaaa", "0190ffff-bbbb"]);
        let err = resolve_subscription_id(&list, "0190").unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 4);
    }

    #[test]
    fn test_prefix_of_repeated_id_is_unique() {
        let list = subs(&["0190a1b2-aaaa", "0190a1b2-aaaa", "0190ffff-bbbb"]);
        let id = resolve_subscription_id(&list, "0190a").unwrap();
        assert_eq!(id, SubscriptionId::from("0190a1b2-aaaa"));
    }

    #[test]
    fn test_missing_id() {
        let list = subs(&["abc"]);
        let err = resolve_subscription_id(&list, "zzz").unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 3);
    }

    #[test]
    fn test_numeric_legacy_id() {
        let list = vec![SubscriptionInput::new("x", "1", "2025-01-01")
            .into_subscription(SubscriptionId::from(1718000000000_i64))];
        let id = resolve_subscription_id(&list, "1718000000000").unwrap();
        assert_eq!(id, SubscriptionId::from(1718000000000_i64));
    }
}
