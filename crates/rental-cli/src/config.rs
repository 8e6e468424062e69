use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rental_core::{default_catalog, Car};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RentalConfig {
    #[serde(default)]
    pub cars: Vec<CarSection>,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarSection {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub rate: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UiSection {
    pub currency_symbol: Option<String>,
}

impl RentalConfig {
    /// Cars to seed the ledger with; the built-in catalog when none are configured.
    pub fn catalog(&self) -> Vec<Car> {
        if self.cars.is_empty() {
            return default_catalog();
        }
        self.cars
            .iter()
            .map(|car| Car::new(&car.id, &car.brand, &car.model, car.rate))
            .collect()
    }

    pub fn currency_symbol(&self) -> &str {
        self.ui
            .currency_symbol
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<RentalConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<RentalConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(RentalConfig::default());
    }
    read_config(path)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("rental"));
        }
    }
    Ok(home_dir()?.join(".config").join("rental"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
