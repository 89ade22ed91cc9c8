use subtrackr_core::renewals::DEFAULT_HORIZON_DAYS;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_ledger_path, parse_timezone, write_config, SubtrackrConfig};
use crate::errors::CliError;
use crate::ui::{blank_line, hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Pass --force to overwrite it.",
        )
        .into());
    }

    let timezone = match args.timezone.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => {
            parse_timezone(name).map_err(|e| CliError::invalid_input(e.to_string()))?;
            Some(name.to_string())
        }
        _ => None,
    };
    let horizon_days = args.horizon_days.unwrap_or(DEFAULT_HORIZON_DAYS);

    let ledger_path = match ctx.cli().db.as_deref().filter(|p| !p.trim().is_empty()) {
        Some(path) => std::path::PathBuf::from(path),
        None => default_ledger_path()?,
    };

    let config = SubtrackrConfig::new(ledger_path.clone(), horizon_days, timezone.clone());
    write_config(&config_path, &config)?;
    tracing::info!(path = %config_path.display(), "wrote config");

    // Creates the database file so later commands find it.
    let ledger = ctx.open_ledger_at(&ledger_path)?;

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let config_display = config_path.display().to_string();
    let ledger_display = ledger_path.display().to_string();
    let horizon_display = format!("{} days", horizon_days);
    let count_display = ledger.len().to_string();
    let timezone_display = timezone.unwrap_or_else(|| "local".to_string());
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Initialized SubTrackr",
            &[
                ("Config", config_display.as_str()),
                ("Ledger", ledger_display.as_str()),
                ("Subscriptions", count_display.as_str()),
                ("Horizon", horizon_display.as_str()),
                ("Timezone", timezone_display.as_str()),
            ],
        ),
    );
    blank_line(&ui_ctx);
    print(
        &ui_ctx,
        &hint(
            &ui_ctx,
            "subtrackr add --name Netflix --cost 15.49 --next-billing YYYY-MM-DD",
        ),
    );
    Ok(())
}
