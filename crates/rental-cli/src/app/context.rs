//! Application context for the Rental CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use once_cell::unsync::OnceCell;

use rental_core::RentalLedger;

use crate::cli::Cli;
use crate::config::{load_config, RentalConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, ConfigSource};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<RentalConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Build a UI context honoring the global `--no-color` and `--ascii` flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&RentalConfig> {
        self.config.get_or_try_init(|| {
            let source = resolve_config_path(self.cli)?;
            if let ConfigSource::Explicit(path) = &source {
                if !path.exists() {
                    return Err(CliError::not_found(
                        format!("Config file not found: {}", path.display()),
                        "Check --config / RENTAL_CONFIG, or unset it to use the default catalog.",
                    )
                    .into());
                }
            }
            load_config(source.path())
        })
    }

    /// Currency symbol used when printing prices.
    pub fn currency_symbol(&self) -> anyhow::Result<&str> {
        Ok(self.config()?.currency_symbol())
    }

    /// A fresh ledger seeded with the configured catalog.
    pub fn build_ledger(&self) -> anyhow::Result<RentalLedger> {
        let catalog = self.config()?.catalog();
        let ledger = RentalLedger::with_catalog(catalog).map_err(CliError::from)?;
        tracing::debug!(cars = ledger.cars().len(), "seeded ledger");
        Ok(ledger)
    }
}
